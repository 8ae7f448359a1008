//! SeaORM 实体定义
//!
//! 每张目录表对应一个实体模块，列与 `migration::catalog` 中的表描述一一对应。
//! 实体之间的关联不写在 `Relation` 中，统一由 [`crate::registry::Registry`] 管理。

pub mod prelude;

pub mod ai_query_histories;
pub mod ai_user_relations;
pub mod attendance_change_logs;
pub mod attendances;
pub mod class_teachers;
pub mod classes;
pub mod enrollment_application_materials;
pub mod enrollment_applications;
pub mod enrollment_consultation_followups;
pub mod enrollment_consultations;
pub mod enrollment_plan_assignees;
pub mod enrollment_plan_classes;
pub mod enrollment_plans;
pub mod inspection_plans;
pub mod inspection_tasks;
pub mod inspection_types;
pub mod kindergartens;
pub mod operation_logs;
pub mod parent_student_relations;
pub mod parents;
pub mod permissions;
pub mod poster_categories;
pub mod poster_elements;
pub mod poster_templates;
pub mod role_permissions;
pub mod roles;
pub mod security_configs;
pub mod security_scan_logs;
pub mod students;
pub mod task_attachments;
pub mod tasks;
pub mod teachers;
pub mod todos;
pub mod user_roles;
pub mod users;

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait};

/// 目录中登记的实体
///
/// 通用仓储按物理列名读写 ActiveModel，因此只需要知道实体对应的 ActiveModel 类型。
pub trait CatalogEntity: EntityTrait + Default {
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + Sync + 'static;

    /// 物理表名，与模块名一致
    const TABLE: &'static str;
}

macro_rules! impl_catalog_entity {
    ($($module:ident),+ $(,)?) => {
        $(
            impl CatalogEntity for $module::Entity {
                type Active = $module::ActiveModel;
                const TABLE: &'static str = stringify!($module);
            }
        )+
    };
}

impl_catalog_entity!(
    users,
    roles,
    permissions,
    user_roles,
    role_permissions,
    kindergartens,
    classes,
    teachers,
    students,
    parents,
    parent_student_relations,
    class_teachers,
    attendances,
    attendance_change_logs,
    enrollment_plans,
    enrollment_plan_classes,
    enrollment_plan_assignees,
    enrollment_applications,
    enrollment_application_materials,
    enrollment_consultations,
    enrollment_consultation_followups,
    todos,
    tasks,
    task_attachments,
    inspection_types,
    inspection_plans,
    inspection_tasks,
    operation_logs,
    security_configs,
    security_scan_logs,
    ai_query_histories,
    ai_user_relations,
    poster_categories,
    poster_templates,
    poster_elements,
);

/// 按物理表名分派到具体实体类型
///
/// `for_table!(table, |E| expr)` 在 `table` 命中的分支里把 `E` 绑定为对应实体，
/// 返回 `Some(expr)`；没有实体使用该表名时返回 `None`。
macro_rules! for_table {
    ($table:expr, |$alias:ident| $body:expr) => {
        $crate::entity::for_table!(@each $table, $alias, $body;
            users,
            roles,
            permissions,
            user_roles,
            role_permissions,
            kindergartens,
            classes,
            teachers,
            students,
            parents,
            parent_student_relations,
            class_teachers,
            attendances,
            attendance_change_logs,
            enrollment_plans,
            enrollment_plan_classes,
            enrollment_plan_assignees,
            enrollment_applications,
            enrollment_application_materials,
            enrollment_consultations,
            enrollment_consultation_followups,
            todos,
            tasks,
            task_attachments,
            inspection_types,
            inspection_plans,
            inspection_tasks,
            operation_logs,
            security_configs,
            security_scan_logs,
            ai_query_histories,
            ai_user_relations,
            poster_categories,
            poster_templates,
            poster_elements
        )
    };
    (@each $table:expr, $alias:ident, $body:expr; $($module:ident),+) => {{
        let table: &str = $table;
        $(
            if table == <$crate::entity::$module::Entity as $crate::entity::CatalogEntity>::TABLE {
                type $alias = $crate::entity::$module::Entity;
                Some($body)
            } else
        )+
        {
            None
        }
    }};
}

pub(crate) use for_table;

/// 全部实体的物理表名
pub fn table_names() -> Vec<&'static str> {
    let mut names = Vec::new();
    macro_rules! collect {
        ($($module:ident),+) => {
            $(names.push(<$module::Entity as CatalogEntity>::TABLE);)+
        };
    }
    collect!(
        users,
        roles,
        permissions,
        user_roles,
        role_permissions,
        kindergartens,
        classes,
        teachers,
        students,
        parents,
        parent_student_relations,
        class_teachers,
        attendances,
        attendance_change_logs,
        enrollment_plans,
        enrollment_plan_classes,
        enrollment_plan_assignees,
        enrollment_applications,
        enrollment_application_materials,
        enrollment_consultations,
        enrollment_consultation_followups,
        todos,
        tasks,
        task_attachments,
        inspection_types,
        inspection_plans,
        inspection_tasks,
        operation_logs,
        security_configs,
        security_scan_logs,
        ai_query_histories,
        ai_user_relations,
        poster_categories,
        poster_templates,
        poster_elements
    );
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::catalog;

    #[test]
    fn test_every_catalog_table_has_entity() {
        let names = table_names();
        for table in catalog::catalog() {
            assert!(names.contains(&table.table), "缺少实体: {}", table.table);
        }
        assert_eq!(names.len(), catalog::catalog().len());
    }

    #[test]
    fn test_dispatch_by_table_name() {
        let hit = for_table!("security_configs", |E| E::TABLE);
        assert_eq!(hit, Some("security_configs"));
        let miss = for_table!("lesson_plans", |E| E::TABLE);
        assert_eq!(miss, None);
    }

    #[test]
    fn test_module_name_matches_entity_table() {
        for table in table_names() {
            let entity_table = for_table!(table, |E| {
                sea_orm::EntityName::table_name(&E::default()).to_string()
            });
            assert_eq!(entity_table.as_deref(), Some(table));
        }
    }
}
