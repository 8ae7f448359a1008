//! 幼儿园管理平台数据模型
//!
//! 基于 SeaORM 构建的表结构目录、关联注册表与持久化边界。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 枚举取值与 JSON 文档
//! - `registry`: 表结构与关联注册表、写入校验
//! - `runtime`: 运行时生命周期管理
//! - `services`: 需要事务的跨实体写入
//! - `storage`: 数据存储层（SeaORM）

pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod registry;
pub mod runtime;
pub mod services;
pub mod storage;
