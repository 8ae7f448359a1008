//! JSON 列的类型化读写
//!
//! 以文本存储的 JSON 列在数据访问边界解析为带版本号的强类型文档。
//! 写入时对象文档附带 `schemaVersion`；读取时缺少版本号视为历史数据按当前结构解析。
//! 解析失败或版本高于当前实现时返回文档的默认值，并记录告警，读取本身不会报错。

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::errors::Result;

const VERSION_KEY: &str = "schemaVersion";

/// 存放在 JSON 列中的文档
pub trait JsonDocument: Serialize + DeserializeOwned + Default {
    /// 当前结构版本
    const VERSION: u32;
    /// 用于日志的文档名
    const NAME: &'static str;
}

/// 回退原因
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    /// 文本无法解析为该文档
    Malformed(String),
    /// 写入方的版本高于当前实现
    UnsupportedVersion(u32),
}

/// 解析结果
#[derive(Debug, Clone)]
pub struct Decoded<T> {
    pub value: T,
    /// 列为空时为 None 且不视为回退
    pub version: Option<u32>,
    pub fallback: Option<Fallback>,
}

impl<T> Decoded<T> {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// 序列化文档，对象文档写入版本号
pub fn encode<T: JsonDocument>(document: &T) -> Result<String> {
    let mut value = serde_json::to_value(document)?;
    if let Value::Object(map) = &mut value {
        map.insert(VERSION_KEY.to_string(), Value::from(T::VERSION));
    }
    Ok(serde_json::to_string(&value)?)
}

/// 解析文档，失败时回退到默认值
pub fn decode<T: JsonDocument>(raw: Option<&str>) -> Decoded<T> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Decoded {
            value: T::default(),
            version: None,
            fallback: None,
        };
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => decode_value(Some(value)),
        Err(e) => fallback(Fallback::Malformed(e.to_string())),
    }
}

/// 解析原生 JSON 列读出的值
pub fn decode_value<T: JsonDocument>(value: Option<Value>) -> Decoded<T> {
    let Some(mut value) = value.filter(|v| !v.is_null()) else {
        return Decoded {
            value: T::default(),
            version: None,
            fallback: None,
        };
    };

    let mut version = 0;
    let found = match &mut value {
        Value::Object(map) => map.remove(VERSION_KEY),
        _ => None,
    };
    if let Some(found) = found {
        match found.as_u64().and_then(|v| u32::try_from(v).ok()) {
            Some(v) if v <= T::VERSION => version = v,
            Some(v) => return fallback(Fallback::UnsupportedVersion(v)),
            None => return fallback(Fallback::Malformed(format!("无效的版本号: {found}"))),
        }
    }

    match serde_json::from_value::<T>(value) {
        Ok(document) => Decoded {
            value: document,
            version: Some(version),
            fallback: None,
        },
        Err(e) => fallback(Fallback::Malformed(e.to_string())),
    }
}

/// 解析文档，仅取值
pub fn decode_or_default<T: JsonDocument>(raw: Option<&str>) -> T {
    decode(raw).value
}

fn fallback<T: JsonDocument>(reason: Fallback) -> Decoded<T> {
    warn!("JSON 文档 {} 解析失败，使用默认值: {:?}", T::NAME, reason);
    Decoded {
        value: T::default(),
        version: None,
        fallback: Some(reason),
    }
}
