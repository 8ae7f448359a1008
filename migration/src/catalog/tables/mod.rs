//! 幼儿园业务实体的表描述

mod attendance;
mod audit;
mod content;
mod enrollment;
mod identity;
mod people;
mod workflow;

use super::TableSchema;

pub(super) fn all() -> Vec<TableSchema> {
    let mut tables = Vec::new();
    tables.extend(identity::tables());
    tables.extend(people::tables());
    tables.extend(attendance::tables());
    tables.extend(enrollment::tables());
    tables.extend(workflow::tables());
    tables.extend(audit::tables());
    tables.extend(content::tables());
    tables.into_iter().map(TableSchema::finish).collect()
}
