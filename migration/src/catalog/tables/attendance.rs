//! 幼儿考勤与考勤变更记录

use crate::catalog::ColumnType::*;
use crate::catalog::DefaultValue::*;
use crate::catalog::{IndexSchema, TableSchema, col, enums, id};

pub(super) fn tables() -> Vec<TableSchema> {
    vec![attendances(), attendance_change_logs()]
}

fn attendances() -> TableSchema {
    TableSchema::define("Attendance", "attendances")
        .underscored()
        .paranoid()
        .comment("幼儿考勤表")
        .with_column(id())
        .with_column(col("studentId", Integer).not_null())
        .with_column(col("classId", Integer).not_null())
        .with_column(col("kindergartenId", Integer).not_null())
        .with_column(col("attendanceDate", Date).not_null())
        .with_column(
            col("status", Enum(enums::ATTENDANCE_STATUS))
                .not_null()
                .default(Str("present")),
        )
        .with_column(col("checkInTime", String(8)).comment("HH:MM:SS"))
        .with_column(col("checkOutTime", String(8)).comment("HH:MM:SS"))
        .with_column(col("temperature", Decimal(4, 1)).comment("摄氏度"))
        .with_column(col("healthStatus", String(50)))
        .with_column(col("notes", Text))
        .with_column(col("leaveReason", String(255)))
        .with_column(col("recordedBy", Integer))
        .index(IndexSchema::on(&["studentId", "attendanceDate"]).unique())
        .index(IndexSchema::on(&["kindergartenId", "attendanceDate"]))
        .index(IndexSchema::on(&["classId"]))
}

fn attendance_change_logs() -> TableSchema {
    TableSchema::define("AttendanceChangeLog", "attendance_change_logs")
        .underscored()
        .comment("考勤变更记录表")
        .with_column(id())
        .with_column(col("attendanceId", Integer).not_null())
        .with_column(col("changeType", Enum(enums::ATTENDANCE_CHANGE_TYPE)).not_null())
        .with_column(col("oldStatus", Enum(enums::ATTENDANCE_STATUS)))
        .with_column(col("newStatus", Enum(enums::ATTENDANCE_STATUS)))
        .with_column(col("oldData", Text).comment("JSON 变更前快照"))
        .with_column(col("newData", Text).comment("JSON 变更后快照"))
        .with_column(col("changeReason", String(500)))
        .with_column(col("changedBy", Integer).not_null())
        .index(IndexSchema::on(&["attendanceId"]))
        .index(IndexSchema::on(&["changedBy"]))
}
