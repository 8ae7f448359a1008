//! AI 用户设置与海报

use crate::catalog::ColumnType::*;
use crate::catalog::DefaultValue::*;
use crate::catalog::{Check, IndexSchema, TableSchema, col, enums, id};

pub(super) fn tables() -> Vec<TableSchema> {
    vec![
        ai_user_relations(),
        poster_categories(),
        poster_templates(),
        poster_elements(),
    ]
}

fn ai_user_relations() -> TableSchema {
    TableSchema::define("AIUserRelation", "ai_user_relations")
        .underscored()
        .comment("AI 用户关系表")
        .with_column(id())
        .with_column(col("userId", Integer).not_null().unique())
        .with_column(col("aiSettings", Text).comment("JSON AI 偏好设置"))
        .with_column(col("lastInteraction", DateTime))
        .with_column(
            col("status", Enum(enums::AI_RELATION_STATUS))
                .not_null()
                .default(Str("active")),
        )
}

fn poster_categories() -> TableSchema {
    TableSchema::define("PosterCategory", "poster_categories")
        .underscored()
        .sort_by("sortOrder")
        .comment("海报分类表")
        .with_column(id())
        .with_column(col("name", String(50)).not_null())
        .with_column(col("code", String(50)).not_null().unique())
        .with_column(col("description", String(255)))
        .with_column(col("icon", String(100)))
        .with_column(col("parentId", Integer))
        .with_column(col("sortOrder", Integer).not_null().default(Int(0)))
        .with_column(
            col("status", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(1)),
        )
}

fn poster_templates() -> TableSchema {
    TableSchema::define("PosterTemplate", "poster_templates")
        .underscored()
        .paranoid()
        .comment("海报模板表")
        .with_column(id())
        .with_column(col("categoryId", Integer).not_null())
        .with_column(col("name", String(100)).not_null())
        .with_column(col("description", Text))
        .with_column(
            col("width", Integer)
                .not_null()
                .default(Int(750))
                .check(Check::Min(1.0)),
        )
        .with_column(
            col("height", Integer)
                .not_null()
                .default(Int(1334))
                .check(Check::Min(1.0)),
        )
        .with_column(col("backgroundColor", String(20)))
        .with_column(col("backgroundImage", String(500)))
        .with_column(col("thumbnail", String(500)))
        .with_column(
            col("status", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(1)),
        )
        .with_column(
            col("usageCount", Integer)
                .not_null()
                .default(Int(0))
                .check(Check::Min(0.0)),
        )
        .with_column(col("creatorId", Integer))
        .with_column(col("kindergartenId", Integer))
        .index(IndexSchema::on(&["categoryId"]))
}

fn poster_elements() -> TableSchema {
    TableSchema::define("PosterElement", "poster_elements")
        .underscored()
        .sort_by("zIndex")
        .comment("海报元素表")
        .with_column(id())
        .with_column(col("templateId", Integer).not_null())
        .with_column(col("type", Enum(enums::POSTER_ELEMENT_TYPE)).not_null())
        .with_column(col("name", String(100)))
        .with_column(col("content", Text).comment("JSON 元素内容"))
        .with_column(col("style", Text).comment("JSON 元素样式"))
        .with_column(col("position", Text).comment("JSON 元素位置"))
        .with_column(col("zIndex", Integer).not_null().default(Int(0)))
        .with_column(col("locked", Boolean).not_null().default(Bool(false)))
        .index(IndexSchema::on(&["templateId"]))
}
