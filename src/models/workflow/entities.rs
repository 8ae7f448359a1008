use crate::models::enums::{define_int_enum, define_str_enum};

define_str_enum! {
    /// 任务与待办状态
    TaskStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
        Overdue => "overdue",
    }
}

define_str_enum! {
    TaskType {
        Enrollment => "enrollment",
        Activity => "activity",
        Daily => "daily",
        Inspection => "inspection",
        Other => "other",
    }
}

define_int_enum! {
    /// 待办优先级，1 最低
    TodoPriority {
        Lowest => 1,
        Low => 2,
        Normal => 3,
        High => 4,
        Highest => 5,
    }
}

define_str_enum! {
    InspectionCategory {
        Annual => "annual",
        Special => "special",
        Routine => "routine",
        Random => "random",
    }
}

define_str_enum! {
    InspectionPlanStatus {
        Pending => "pending",
        Preparing => "preparing",
        InProgress => "in_progress",
        Completed => "completed",
        Overdue => "overdue",
    }
}

define_str_enum! {
    InspectionTaskType {
        Preparation => "preparation",
        Document => "document",
        SelfCheck => "self_check",
        Rectification => "rectification",
        Other => "other",
    }
}

define_str_enum! {
    InspectionTaskStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

define_str_enum! {
    InspectionTaskPriority {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}
