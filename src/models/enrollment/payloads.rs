use serde::{Deserialize, Serialize};

use crate::models::json::JsonDocument;

/// 咨询跟进详情
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowupDetail {
    pub summary: Option<String>,
    pub parent_feedback: Option<String>,
    pub next_steps: Vec<String>,
    /// 附件地址
    pub attachments: Vec<String>,
}

impl JsonDocument for FollowupDetail {
    const VERSION: u32 = 1;
    const NAME: &'static str = "FollowupDetail";
}

/// 紧急联系人
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: Option<String>,
}

/// 紧急联系人列表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmergencyContacts(pub Vec<EmergencyContact>);

impl JsonDocument for EmergencyContacts {
    const VERSION: u32 = 1;
    const NAME: &'static str = "EmergencyContacts";
}
