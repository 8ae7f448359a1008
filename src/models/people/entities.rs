use crate::models::enums::{define_int_enum, define_str_enum};

define_str_enum! {
    /// 家长与学生的关系
    Relationship {
        Father => "father",
        Mother => "mother",
        Grandfather => "grandfather",
        Grandmother => "grandmother",
        Other => "other",
    }
}

define_str_enum! {
    /// 班级教师角色
    ClassTeacherRole {
        HeadTeacher => "head_teacher",
        AssistantTeacher => "assistant_teacher",
        NurseryTeacher => "nursery_teacher",
    }
}

define_int_enum! {
    /// 班级类型
    ClassType {
        Junior => 1,   // 小班
        Middle => 2,   // 中班
        Senior => 3,   // 大班
        Preschool => 4, // 学前班
    }
}

define_int_enum! {
    Gender {
        Male => 1,
        Female => 2,
    }
}

define_int_enum! {
    /// 学生状态
    StudentStatus {
        Left => 0,      // 离园
        Enrolled => 1,  // 在读
        Graduated => 2, // 毕业
        Suspended => 3, // 休学
    }
}
