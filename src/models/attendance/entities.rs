use crate::models::enums::define_str_enum;

define_str_enum! {
    /// 考勤状态
    AttendanceStatus {
        Present => "present",
        Absent => "absent",
        Late => "late",
        EarlyLeave => "early_leave",
        SickLeave => "sick_leave",
        PersonalLeave => "personal_leave",
    }
}

define_str_enum! {
    /// 考勤记录的变更方式
    ChangeType {
        Create => "create",
        Update => "update",
        Delete => "delete",
        Reset => "reset",
    }
}

impl AttendanceStatus {
    /// 病假与事假
    pub fn is_leave(&self) -> bool {
        matches!(self, AttendanceStatus::SickLeave | AttendanceStatus::PersonalLeave)
    }
}
