//! 招生计划、报名申请与咨询

use crate::catalog::ColumnType::*;
use crate::catalog::DefaultValue::*;
use crate::catalog::{Check, IndexSchema, TableSchema, col, enums, id};

pub(super) fn tables() -> Vec<TableSchema> {
    vec![
        enrollment_plans(),
        enrollment_plan_classes(),
        enrollment_plan_assignees(),
        enrollment_applications(),
        enrollment_application_materials(),
        enrollment_consultations(),
        enrollment_consultation_followups(),
    ]
}

fn enrollment_plans() -> TableSchema {
    TableSchema::define("EnrollmentPlan", "enrollment_plans")
        .underscored()
        .paranoid()
        .comment("招生计划表")
        .with_column(id())
        .with_column(col("kindergartenId", Integer).not_null())
        .with_column(col("title", String(100)).not_null())
        .with_column(col("year", Integer).not_null())
        .with_column(
            col("semester", IntEnum(enums::SEMESTER))
                .not_null()
                .default(Int(1)),
        )
        .with_column(col("startDate", Date).not_null())
        .with_column(col("endDate", Date).not_null())
        .with_column(
            col("targetCount", Integer)
                .not_null()
                .default(Int(0))
                .check(Check::Min(0.0)),
        )
        .with_column(
            col("actualCount", Integer)
                .not_null()
                .default(Int(0))
                .check(Check::Min(0.0)),
        )
        .with_column(
            col("status", Enum(enums::ENROLLMENT_PLAN_STATUS))
                .not_null()
                .default(Str("draft")),
        )
        .with_column(
            col("stage", Enum(enums::ENROLLMENT_PLAN_STAGE))
                .not_null()
                .default(Str("pre_registration")),
        )
        .with_column(
            col("progress", Decimal(5, 2))
                .not_null()
                .default(Float(0.0))
                .percent(),
        )
        .with_column(col("description", Text))
        .with_column(col("creatorId", Integer))
        .with_column(col("updaterId", Integer))
        .index(IndexSchema::on(&["kindergartenId", "year"]))
        .index(IndexSchema::on(&["status"]))
}

fn enrollment_plan_classes() -> TableSchema {
    TableSchema::define("EnrollmentPlanClass", "enrollment_plan_classes")
        .underscored()
        .comment("招生计划班级关联表")
        .with_column(id())
        .with_column(col("planId", Integer).not_null())
        .with_column(col("classId", Integer).not_null())
        .with_column(
            col("quota", Integer)
                .not_null()
                .default(Int(0))
                .check(Check::Min(0.0)),
        )
        .index(IndexSchema::on(&["planId", "classId"]).unique())
        .index(IndexSchema::on(&["classId"]))
}

fn enrollment_plan_assignees() -> TableSchema {
    TableSchema::define("EnrollmentPlanAssignee", "enrollment_plan_assignees")
        .underscored()
        .comment("招生计划负责人表")
        .with_column(id())
        .with_column(col("planId", Integer).not_null())
        .with_column(col("assigneeId", Integer).not_null())
        .with_column(
            col("role", Enum(enums::PLAN_ASSIGNEE_ROLE))
                .not_null()
                .default(Str("staff")),
        )
        .with_column(
            col("targetCount", Integer)
                .not_null()
                .default(Int(0))
                .check(Check::Min(0.0)),
        )
        .index(IndexSchema::on(&["planId", "assigneeId"]).unique())
}

fn enrollment_applications() -> TableSchema {
    TableSchema::define("EnrollmentApplication", "enrollment_applications")
        .paranoid()
        .comment("入园申请表")
        .with_column(id())
        .with_column(
            col("applicationNumber", String(20))
                .not_null()
                .unique()
                .check(Check::Length { min: 10, max: 20 }),
        )
        .with_column(col("studentId", Integer).not_null())
        .with_column(col("parentId", Integer).not_null())
        .with_column(col("kindergartenId", Integer).not_null())
        .with_column(col("enrollmentPlanId", Integer))
        .with_column(
            col("applicationType", Enum(enums::APPLICATION_TYPE))
                .not_null()
                .default(Str("new_enrollment")),
        )
        .with_column(
            col("status", Enum(enums::APPLICATION_STATUS))
                .not_null()
                .default(Str("draft")),
        )
        .with_column(
            col("priority", Enum(enums::PRIORITY))
                .not_null()
                .default(Str("medium")),
        )
        .with_column(col("preferredStartDate", Date).not_null())
        .with_column(col("preferredClass", String(50)).check(Check::Length { min: 1, max: 50 }))
        .with_column(col("specialNeeds", Text))
        .with_column(col("medicalInfo", Json))
        .with_column(col("emergencyContacts", Json).not_null())
        .with_column(col("documents", Json))
        .with_column(col("notes", Text))
        .with_column(col("reviewNotes", Text))
        .with_column(col("submittedAt", DateTime))
        .with_column(col("reviewedAt", DateTime))
        .with_column(col("reviewedBy", Integer))
        .with_column(col("approvedAt", DateTime))
        .with_column(col("enrolledAt", DateTime))
        .with_column(col("rejectionReason", Text))
        .with_column(col("waitlistPosition", Integer).check(Check::Min(1.0)))
        .with_column(col("score", Decimal(5, 2)).percent())
        .index(IndexSchema::on(&["applicationNumber"]).unique())
        .index(IndexSchema::on(&["studentId"]))
        .index(IndexSchema::on(&["parentId"]))
        .index(IndexSchema::on(&["kindergartenId"]))
        .index(IndexSchema::on(&["enrollmentPlanId"]))
        .index(IndexSchema::on(&["status"]))
        .index(IndexSchema::on(&["applicationType"]))
        .index(IndexSchema::on(&["priority"]))
        .index(IndexSchema::on(&["preferredStartDate"]))
        .index(IndexSchema::on(&["submittedAt"]))
}

fn enrollment_application_materials() -> TableSchema {
    TableSchema::define("EnrollmentApplicationMaterial", "enrollment_application_materials")
        .underscored()
        .comment("入园申请材料表")
        .with_column(id())
        .with_column(col("applicationId", Integer).not_null())
        .with_column(col("materialType", Enum(enums::MATERIAL_TYPE)).not_null())
        .with_column(col("fileName", String(255)).not_null())
        .with_column(col("fileUrl", String(500)).not_null())
        .with_column(col("fileSize", Integer).check(Check::Min(0.0)))
        .with_column(
            col("status", IntEnum(enums::REVIEW_STATE))
                .not_null()
                .default(Int(0)),
        )
        .with_column(col("uploadedBy", Integer))
        .with_column(col("reviewedBy", Integer))
        .with_column(col("reviewedAt", DateTime))
        .with_column(col("remark", Text))
        .index(IndexSchema::on(&["applicationId"]))
}

fn enrollment_consultations() -> TableSchema {
    TableSchema::define("EnrollmentConsultation", "enrollment_consultations")
        .underscored()
        .paranoid()
        .comment("招生咨询表")
        .with_column(id())
        .with_column(col("kindergartenId", Integer).not_null())
        .with_column(col("consultantId", Integer).not_null())
        .with_column(col("parentName", String(50)).not_null())
        .with_column(col("childName", String(50)).not_null())
        .with_column(
            col("childAge", Integer)
                .check(Check::Min(0.0))
                .comment("月龄"),
        )
        .with_column(col("contactPhone", String(20)).not_null())
        .with_column(
            col("source", IntEnum(enums::CONSULTATION_SOURCE))
                .not_null()
                .default(Int(1)),
        )
        .with_column(col("consultContent", Text).not_null())
        .with_column(
            col("followupStatus", IntEnum(enums::FOLLOWUP_STATUS))
                .not_null()
                .default(Int(1)),
        )
        .with_column(
            col("intentionLevel", IntEnum(enums::INTENTION_LEVEL))
                .not_null()
                .default(Int(3)),
        )
        .with_column(col("nextFollowupDate", DateTime))
        .with_column(col("remark", Text))
        .index(IndexSchema::on(&["kindergartenId"]))
        .index(IndexSchema::on(&["consultantId"]))
}

fn enrollment_consultation_followups() -> TableSchema {
    TableSchema::define(
        "EnrollmentConsultationFollowup",
        "enrollment_consultation_followups",
    )
    .underscored()
    .paranoid()
    .comment("招生咨询跟进记录表")
    .with_column(id())
    .with_column(col("consultationId", Integer).not_null())
    .with_column(
        col("followupMethod", IntEnum(enums::FOLLOWUP_METHOD))
            .not_null()
            .default(Int(1)),
    )
    .with_column(col("followupContent", Text).not_null())
    .with_column(col("followupResult", IntEnum(enums::FOLLOWUP_RESULT)))
    .with_column(col("followupDetail", Text).comment("JSON 跟进详情"))
    .with_column(col("nextFollowupDate", DateTime))
    .with_column(col("followupUserId", Integer).not_null())
    .with_column(col("remark", Text))
    .index(IndexSchema::on(&["consultationId"]))
}
