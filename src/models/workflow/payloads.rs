use serde::{Deserialize, Serialize};

use crate::models::json::JsonDocument;

/// 待办标签
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoTags(pub Vec<String>);

impl JsonDocument for TodoTags {
    const VERSION: u32 = 1;
    const NAME: &'static str = "TodoTags";
}
