//! 操作日志、安全配置与扫描记录、AI 查询历史

use crate::catalog::ColumnType::*;
use crate::catalog::DefaultValue::*;
use crate::catalog::{Check, IndexSchema, TableSchema, col, enums, id};

pub(super) fn tables() -> Vec<TableSchema> {
    vec![
        operation_logs(),
        security_configs(),
        security_scan_logs(),
        ai_query_histories(),
    ]
}

fn operation_logs() -> TableSchema {
    TableSchema::define("OperationLog", "operation_logs")
        .underscored()
        .comment("操作日志表")
        .with_column(id())
        .with_column(col("userId", Integer))
        .with_column(col("module", String(50)).not_null())
        .with_column(col("action", String(50)).not_null())
        .with_column(col("targetType", String(50)))
        .with_column(col("targetId", Integer))
        .with_column(col("content", Text))
        .with_column(col("requestMethod", String(10)))
        .with_column(col("requestUrl", String(255)))
        .with_column(col("requestParams", Text))
        .with_column(col("requestIp", String(50)))
        .with_column(col("userAgent", String(255)))
        .with_column(
            col("operationResult", Enum(enums::OPERATION_RESULT))
                .not_null()
                .default(Str("success")),
        )
        .with_column(col("resultMessage", Text))
        .with_column(col("executionTime", Integer).check(Check::Min(0.0)))
        .index(IndexSchema::on(&["userId"]))
        .index(IndexSchema::on(&["module", "action"]))
}

fn security_configs() -> TableSchema {
    TableSchema::define("SecurityConfig", "security_configs")
        .comment("安全配置表")
        .with_column(id())
        .with_column(
            col("configKey", String(100))
                .not_null()
                .unique()
                .comment("配置键"),
        )
        .with_column(col("configValue", Text).not_null().comment("配置值(JSON格式)"))
        .with_column(col("description", String(255)))
        .with_column(
            col("category", String(50))
                .not_null()
                .default(Str("general")),
        )
        .with_column(col("isActive", Boolean).not_null().default(Bool(true)))
        .with_column(col("updatedBy", Integer))
        .index(IndexSchema::on(&["configKey"]).unique())
        .index(IndexSchema::on(&["category"]))
        .index(IndexSchema::on(&["isActive"]))
}

fn security_scan_logs() -> TableSchema {
    TableSchema::define("SecurityScanLog", "security_scan_logs")
        .comment("安全扫描日志表")
        .with_column(id())
        .with_column(col("scanType", String(50)).not_null())
        .with_column(col("targets", Text))
        .with_column(
            col("status", Enum(enums::SCAN_STATUS))
                .not_null()
                .default(Str("pending")),
        )
        .with_column(col("startedBy", Integer))
        .with_column(col("startedAt", DateTime).not_null())
        .with_column(col("completedAt", DateTime))
        .with_column(col("duration", Integer).check(Check::Min(0.0)).comment("秒"))
        .with_column(col("threatsFound", Integer).not_null().default(Int(0)))
        .with_column(
            col("vulnerabilitiesFound", Integer)
                .not_null()
                .default(Int(0)),
        )
        .with_column(col("riskScore", Decimal(5, 2)).percent())
        .with_column(col("results", Text))
        .with_column(col("errorMessage", Text))
        .with_column(col("metadata", Text))
        .index(IndexSchema::on(&["status"]))
        .index(IndexSchema::on(&["scanType"]))
        .index(IndexSchema::on(&["startedBy"]))
        .index(IndexSchema::on(&["startedAt"]))
}

fn ai_query_histories() -> TableSchema {
    TableSchema::define("AIQueryHistory", "ai_query_histories")
        .underscored()
        .comment("AI 查询历史表")
        .with_column(id())
        .with_column(col("userId", Integer).not_null())
        .with_column(col("queryText", Text).not_null())
        .with_column(col("queryHash", String(64)).not_null())
        .with_column(
            col("queryType", Enum(enums::AI_QUERY_TYPE))
                .not_null()
                .default(Str("data_query")),
        )
        .with_column(col("responseData", Text))
        .with_column(col("responseText", Text))
        .with_column(col("modelUsed", String(100)))
        .with_column(col("executionTime", Integer).check(Check::Min(0.0)))
        .with_column(col("sessionId", String(100)))
        .index(IndexSchema::on(&["userId"]))
        .index(IndexSchema::on(&["queryHash"]))
}
