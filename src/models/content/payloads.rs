//! 海报元素与 AI 设置的 JSON 文档

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::json::JsonDocument;

/// 元素在画布上的位置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementPosition {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl JsonDocument for ElementPosition {
    const VERSION: u32 = 1;
    const NAME: &'static str = "ElementPosition";
}

/// 元素样式，未识别的属性原样保留
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JsonDocument for ElementStyle {
    const VERSION: u32 = 1;
    const NAME: &'static str = "ElementStyle";
}

/// 元素内容，按元素类型取用对应字段
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qrcode_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

impl JsonDocument for ElementContent {
    const VERSION: u32 = 1;
    const NAME: &'static str = "ElementContent";
}

/// 用户的 AI 偏好
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiSettings {
    pub preferred_model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub enable_memory: bool,
    pub language: String,
    /// 允许查询的数据范围
    pub data_scopes: Vec<String>,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            preferred_model: "default".to_string(),
            temperature: 0.7,
            max_tokens: 2048,
            enable_memory: true,
            language: "zh-CN".to_string(),
            data_scopes: Vec::new(),
        }
    }
}

impl JsonDocument for AiSettings {
    const VERSION: u32 = 1;
    const NAME: &'static str = "AiSettings";
}
