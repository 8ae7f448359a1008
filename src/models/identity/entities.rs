use crate::models::enums::{define_int_enum, define_str_enum};

define_str_enum! {
    /// 用户角色
    UserRole {
        Admin => "admin",
        Principal => "principal",
        Teacher => "teacher",
        Parent => "parent",
        Staff => "staff",
    }
}

define_str_enum! {
    /// 用户状态
    UserStatus {
        Active => "active",
        Inactive => "inactive",
        Locked => "locked",
    }
}

define_str_enum! {
    /// 权限类型
    PermissionType {
        Menu => "menu",
        Button => "button",
        Api => "api",
    }
}

define_int_enum! {
    /// 启用状态
    SwitchStatus {
        Disabled => 0,
        Enabled => 1,
    }
}
