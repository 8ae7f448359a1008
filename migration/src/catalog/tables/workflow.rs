//! 待办、任务与督导检查

use crate::catalog::ColumnType::*;
use crate::catalog::DefaultValue::*;
use crate::catalog::{Check, IndexSchema, TableSchema, col, enums, id};

pub(super) fn tables() -> Vec<TableSchema> {
    vec![
        todos(),
        tasks(),
        task_attachments(),
        inspection_types(),
        inspection_plans(),
        inspection_tasks(),
    ]
}

fn todos() -> TableSchema {
    TableSchema::define("Todo", "todos")
        .underscored()
        .paranoid()
        .comment("待办事项表")
        .with_column(id())
        .with_column(col("title", String(200)).not_null())
        .with_column(col("description", Text))
        .with_column(
            col("priority", IntEnum(enums::TODO_PRIORITY))
                .not_null()
                .default(Int(3)),
        )
        .with_column(
            col("status", Enum(enums::TASK_STATUS))
                .not_null()
                .default(Str("pending")),
        )
        .with_column(col("dueDate", DateTime))
        .with_column(col("completedAt", DateTime))
        .with_column(col("userId", Integer).not_null())
        .with_column(col("assignedTo", Integer))
        .with_column(col("tags", Text).comment("JSON 标签列表"))
        .with_column(col("relatedId", Integer))
        .with_column(col("relatedType", String(50)))
        .with_column(col("notify", Boolean).not_null().default(Bool(false)))
        .index(IndexSchema::on(&["userId", "status"]))
}

fn tasks() -> TableSchema {
    TableSchema::define("Task", "tasks")
        .underscored()
        .comment("任务表")
        .with_column(id())
        .with_column(col("title", String(200)).not_null())
        .with_column(col("description", Text))
        .with_column(
            col("priority", Enum(enums::PRIORITY))
                .not_null()
                .default(Str("medium")),
        )
        .with_column(
            col("status", Enum(enums::TASK_STATUS))
                .not_null()
                .default(Str("pending")),
        )
        .with_column(
            col("type", Enum(enums::TASK_TYPE))
                .not_null()
                .default(Str("daily")),
        )
        .with_column(col("creatorId", Integer).not_null())
        .with_column(col("assigneeId", Integer))
        .with_column(col("startDate", DateTime))
        .with_column(col("dueDate", DateTime))
        .with_column(col("completedAt", DateTime))
        .with_column(
            col("progress", Integer)
                .not_null()
                .default(Int(0))
                .percent(),
        )
        .index(IndexSchema::on(&["creatorId"]))
        .index(IndexSchema::on(&["assigneeId"]))
        .index(IndexSchema::on(&["status"]))
}

fn task_attachments() -> TableSchema {
    TableSchema::define("TaskAttachment", "task_attachments")
        .underscored()
        .comment("待办附件表")
        .with_column(id())
        .with_column(col("todoId", Integer).not_null())
        .with_column(col("fileName", String(255)).not_null())
        .with_column(col("fileUrl", String(500)).not_null())
        .with_column(col("fileSize", Integer).check(Check::Min(0.0)))
        .with_column(col("fileType", String(100)))
        .with_column(col("uploaderId", Integer))
        .index(IndexSchema::on(&["todoId"]))
}

fn inspection_types() -> TableSchema {
    TableSchema::define("InspectionType", "inspection_types")
        .underscored()
        .paranoid()
        .sort_by("sortOrder")
        .comment("检查类型表")
        .with_column(id())
        .with_column(col("name", String(100)).not_null())
        .with_column(col("code", String(50)).not_null().unique())
        .with_column(
            col("category", Enum(enums::INSPECTION_CATEGORY))
                .not_null()
                .default(Str("routine")),
        )
        .with_column(col("description", Text))
        .with_column(col("frequency", String(50)))
        .with_column(col("department", String(100)))
        .with_column(col("sortOrder", Integer).not_null().default(Int(0)))
        .with_column(col("isActive", Boolean).not_null().default(Bool(true)))
}

fn inspection_plans() -> TableSchema {
    TableSchema::define("InspectionPlan", "inspection_plans")
        .underscored()
        .paranoid()
        .comment("检查计划表")
        .with_column(id())
        .with_column(col("inspectionTypeId", Integer).not_null())
        .with_column(col("kindergartenId", Integer).not_null())
        .with_column(col("planName", String(200)).not_null())
        .with_column(col("planDate", Date).not_null())
        .with_column(col("responsibleUserId", Integer))
        .with_column(
            col("status", Enum(enums::INSPECTION_PLAN_STATUS))
                .not_null()
                .default(Str("pending")),
        )
        .with_column(
            col("progress", Integer)
                .not_null()
                .default(Int(0))
                .percent(),
        )
        .with_column(col("result", Text))
        .with_column(col("score", Decimal(5, 2)).percent())
        .with_column(col("notes", Text))
        .with_column(col("creatorId", Integer))
        .index(IndexSchema::on(&["inspectionTypeId"]))
        .index(IndexSchema::on(&["kindergartenId", "planDate"]))
}

fn inspection_tasks() -> TableSchema {
    TableSchema::define("InspectionTask", "inspection_tasks")
        .underscored()
        .paranoid()
        .sort_by("sortOrder")
        .comment("检查任务表")
        .with_column(id())
        .with_column(col("inspectionPlanId", Integer).not_null())
        .with_column(col("parentTaskId", Integer).comment("父任务"))
        .with_column(col("title", String(200)).not_null())
        .with_column(col("description", Text))
        .with_column(
            col("taskType", Enum(enums::INSPECTION_TASK_TYPE))
                .not_null()
                .default(Str("other")),
        )
        .with_column(
            col("status", Enum(enums::INSPECTION_TASK_STATUS))
                .not_null()
                .default(Str("pending")),
        )
        .with_column(
            col("priority", Enum(enums::INSPECTION_TASK_PRIORITY))
                .not_null()
                .default(Str("medium")),
        )
        .with_column(col("assignedTo", Integer))
        .with_column(col("dueDate", DateTime))
        .with_column(col("completedAt", DateTime))
        .with_column(
            col("progress", Integer)
                .not_null()
                .default(Int(0))
                .percent(),
        )
        .with_column(col("sortOrder", Integer).not_null().default(Int(0)))
        .index(IndexSchema::on(&["inspectionPlanId"]))
        .index(IndexSchema::on(&["parentTaskId"]))
}
