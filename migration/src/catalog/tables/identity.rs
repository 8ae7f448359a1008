//! 用户、角色与权限

use crate::catalog::ColumnType::*;
use crate::catalog::DefaultValue::*;
use crate::catalog::{Check, IndexSchema, TableSchema, col, enums, id};

pub(super) fn tables() -> Vec<TableSchema> {
    vec![users(), roles(), permissions(), user_roles(), role_permissions()]
}

fn users() -> TableSchema {
    TableSchema::define("User", "users")
        .underscored()
        .paranoid()
        .comment("用户表")
        .with_column(id())
        .with_column(col("username", String(50)).not_null().unique())
        .with_column(col("password", String(255)).not_null())
        .with_column(col("email", String(100)).unique().check(Check::Email))
        .with_column(col("realName", String(50)))
        .with_column(col("phone", String(20)))
        .with_column(col("avatar", String(255)))
        .with_column(
            col("role", Enum(enums::USER_ROLE))
                .not_null()
                .default(Str("parent")),
        )
        .with_column(
            col("status", Enum(enums::USER_STATUS))
                .not_null()
                .default(Str("active")),
        )
        .with_column(col("lastLoginAt", DateTime))
        .index(IndexSchema::on(&["role"]))
        .index(IndexSchema::on(&["status"]))
}

fn roles() -> TableSchema {
    TableSchema::define("Role", "roles")
        .underscored()
        .paranoid()
        .comment("角色表")
        .with_column(id())
        .with_column(col("name", String(50)).not_null())
        .with_column(col("code", String(50)).not_null().unique())
        .with_column(col("description", String(255)))
        .with_column(
            col("status", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(1)),
        )
        .with_column(col("isSystem", Boolean).not_null().default(Bool(false)))
}

fn permissions() -> TableSchema {
    TableSchema::define("Permission", "permissions")
        .underscored()
        .paranoid()
        .sort_by("sort")
        .comment("权限表")
        .with_column(id())
        .with_column(col("name", String(50)).not_null())
        .with_column(col("chineseName", String(50)))
        .with_column(col("code", String(100)).not_null().unique())
        .with_column(
            col("type", Enum(enums::PERMISSION_TYPE))
                .not_null()
                .default(Str("menu")),
        )
        .with_column(col("parentId", Integer).comment("父级权限"))
        .with_column(col("path", String(255)))
        .with_column(col("component", String(255)))
        .with_column(col("icon", String(50)))
        .with_column(col("sort", Integer).not_null().default(Int(0)))
        .with_column(
            col("status", IntEnum(enums::SWITCH))
                .not_null()
                .default(Int(1)),
        )
        .with_column(col("isHidden", Boolean).not_null().default(Bool(false)))
        .index(IndexSchema::on(&["parentId"]))
}

fn user_roles() -> TableSchema {
    TableSchema::define("UserRole", "user_roles")
        .underscored()
        .comment("用户角色关联表")
        .with_column(id())
        .with_column(col("userId", Integer).not_null())
        .with_column(col("roleId", Integer).not_null())
        .with_column(col("isPrimary", Boolean).not_null().default(Bool(false)))
        .with_column(col("startTime", Date))
        .with_column(col("endTime", Date))
        .with_column(col("grantorId", Integer).comment("授权人"))
        .index(IndexSchema::on(&["userId", "roleId"]).unique())
        .index(IndexSchema::on(&["roleId"]))
}

fn role_permissions() -> TableSchema {
    TableSchema::define("RolePermission", "role_permissions")
        .underscored()
        .comment("角色权限关联表")
        .with_column(id())
        .with_column(col("roleId", Integer).not_null())
        .with_column(col("permissionId", Integer).not_null())
        .with_column(col("grantorId", Integer))
        .with_column(col("isInherit", Boolean).not_null().default(Bool(false)))
        .index(IndexSchema::on(&["roleId", "permissionId"]).unique())
        .index(IndexSchema::on(&["permissionId"]))
}
