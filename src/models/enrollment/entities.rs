use crate::models::enums::{define_int_enum, define_str_enum};

define_str_enum! {
    /// 招生计划状态
    EnrollmentPlanStatus {
        Draft => "draft",
        Active => "active",
        Closed => "closed",
        Suspended => "suspended",
    }
}

define_str_enum! {
    /// 招生计划阶段
    EnrollmentPlanStage {
        PreRegistration => "pre_registration",
        Registration => "registration",
        Review => "review",
        Admission => "admission",
        Completed => "completed",
    }
}

define_str_enum! {
    PlanAssigneeRole {
        Manager => "manager",
        Staff => "staff",
    }
}

define_str_enum! {
    /// 申请类型
    ApplicationType {
        NewEnrollment => "new_enrollment",
        Transfer => "transfer",
        ReEnrollment => "re_enrollment",
    }
}

define_str_enum! {
    /// 入园申请状态，状态之间的流转不做校验
    ApplicationStatus {
        Draft => "draft",
        Submitted => "submitted",
        UnderReview => "under_review",
        Approved => "approved",
        Rejected => "rejected",
        Waitlisted => "waitlisted",
        Enrolled => "enrolled",
        Cancelled => "cancelled",
    }
}

define_str_enum! {
    Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

define_str_enum! {
    /// 申请材料类型
    MaterialType {
        BirthCertificate => "birth_certificate",
        HouseholdRegister => "household_register",
        VaccinationRecord => "vaccination_record",
        HealthCheck => "health_check",
        Photo => "photo",
        Other => "other",
    }
}

define_int_enum! {
    /// 材料审核状态
    MaterialReviewState {
        Pending => 0,
        Approved => 1,
        Rejected => 2,
    }
}

define_int_enum! {
    /// 咨询跟进方式
    FollowupMethod {
        Phone => 1,
        Visit => 2,
        Wechat => 3,
        Other => 4,
    }
}
