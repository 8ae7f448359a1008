//! 枚举列的合法取值集合

pub const USER_ROLE: &[&str] = &["admin", "principal", "teacher", "parent", "staff"];
pub const USER_STATUS: &[&str] = &["active", "inactive", "locked"];
pub const PERMISSION_TYPE: &[&str] = &["menu", "button", "api"];

pub const PARENT_RELATIONSHIP: &[&str] = &["father", "mother", "grandfather", "grandmother", "other"];
pub const CLASS_TEACHER_ROLE: &[&str] = &["head_teacher", "assistant_teacher", "nursery_teacher"];

pub const ATTENDANCE_STATUS: &[&str] = &[
    "present",
    "absent",
    "late",
    "early_leave",
    "sick_leave",
    "personal_leave",
];
pub const ATTENDANCE_CHANGE_TYPE: &[&str] = &["create", "update", "delete", "reset"];

pub const ENROLLMENT_PLAN_STATUS: &[&str] = &["draft", "active", "closed", "suspended"];
pub const ENROLLMENT_PLAN_STAGE: &[&str] = &[
    "pre_registration",
    "registration",
    "review",
    "admission",
    "completed",
];
pub const PLAN_ASSIGNEE_ROLE: &[&str] = &["manager", "staff"];
pub const APPLICATION_TYPE: &[&str] = &["new_enrollment", "transfer", "re_enrollment"];
pub const APPLICATION_STATUS: &[&str] = &[
    "draft",
    "submitted",
    "under_review",
    "approved",
    "rejected",
    "waitlisted",
    "enrolled",
    "cancelled",
];
pub const PRIORITY: &[&str] = &["low", "medium", "high", "urgent"];
pub const MATERIAL_TYPE: &[&str] = &[
    "birth_certificate",
    "household_register",
    "vaccination_record",
    "health_check",
    "photo",
    "other",
];

pub const TASK_STATUS: &[&str] = &["pending", "in_progress", "completed", "cancelled", "overdue"];
pub const TASK_TYPE: &[&str] = &["enrollment", "activity", "daily", "inspection", "other"];
pub const INSPECTION_CATEGORY: &[&str] = &["annual", "special", "routine", "random"];
pub const INSPECTION_PLAN_STATUS: &[&str] = &[
    "pending",
    "preparing",
    "in_progress",
    "completed",
    "overdue",
];
pub const INSPECTION_TASK_TYPE: &[&str] = &[
    "preparation",
    "document",
    "self_check",
    "rectification",
    "other",
];
pub const INSPECTION_TASK_STATUS: &[&str] = &["pending", "in_progress", "completed", "cancelled"];
pub const INSPECTION_TASK_PRIORITY: &[&str] = &["low", "medium", "high"];

pub const OPERATION_RESULT: &[&str] = &["success", "failure"];
pub const SCAN_STATUS: &[&str] = &["pending", "running", "completed", "failed"];
pub const AI_QUERY_TYPE: &[&str] = &["data_query", "ai_response"];
pub const AI_RELATION_STATUS: &[&str] = &["active", "inactive"];
pub const POSTER_ELEMENT_TYPE: &[&str] = &["text", "image", "shape", "qrcode"];

/// 启用/停用
pub const SWITCH: &[i32] = &[0, 1];
/// 材料审核状态：0 待审 1 通过 2 驳回
pub const REVIEW_STATE: &[i32] = &[0, 1, 2];
pub const KINDERGARTEN_TYPE: &[i32] = &[1, 2, 3];
pub const KINDERGARTEN_LEVEL: &[i32] = &[1, 2, 3];
pub const CLASS_TYPE: &[i32] = &[1, 2, 3, 4];
pub const TEACHER_POSITION: &[i32] = &[1, 2, 3, 4, 5, 6];
pub const GENDER: &[i32] = &[1, 2];
pub const STUDENT_STATUS: &[i32] = &[0, 1, 2, 3];
pub const SEMESTER: &[i32] = &[1, 2];
pub const CONSULTATION_SOURCE: &[i32] = &[1, 2, 3, 4, 5, 6];
pub const FOLLOWUP_STATUS: &[i32] = &[1, 2, 3, 4];
pub const INTENTION_LEVEL: &[i32] = &[1, 2, 3, 4, 5];
pub const FOLLOWUP_METHOD: &[i32] = &[1, 2, 3, 4];
pub const FOLLOWUP_RESULT: &[i32] = &[1, 2, 3, 4];
pub const TODO_PRIORITY: &[i32] = &[1, 2, 3, 4, 5];
