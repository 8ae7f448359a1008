//! 业务模型
//!
//! 枚举列的强类型取值与 JSON 列的文档结构，按实体簇划分。

pub mod enums;
pub mod json;

pub mod attendance;
pub mod audit;
pub mod content;
pub mod enrollment;
pub mod identity;
pub mod people;
pub mod workflow;
