//! 时间类型模块
//!
//! 后端以 ISO 8601 字符串返回 `created_at`，不同部署下可能带或不带时区后缀。
//! `Timestamp` 统一解析为 UTC 的 `NaiveDateTime`，并提供 pt-BR 风格的展示。

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 无时区后缀时尝试的格式
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// 序列化时使用的格式
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// 内容创建时间
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// 解析后端返回的时间字符串
    ///
    /// 依次尝试：无时区 ISO 格式、空格分隔格式、RFC 3339（换算为 UTC）。
    /// 返回 None 如果所有格式都无法解析
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(Self(dt));
            }
        }
        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| Self(dt.naive_utc()))
    }

    /// pt-BR 日期格式 (dd/mm/aaaa)
    pub fn to_locale_date(&self) -> String {
        self.0.format("%d/%m/%Y").to_string()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_locale_date())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format(WIRE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}
