//! 时间类型模块
//!
//! 提供 `Timestamp`：可序列化的毫秒时间戳，用于传输和展示。
//! 后端以毫秒数下发所有时间字段，前端只负责格式化。

use chrono::DateTime;
use serde::{Deserialize, Serialize};

/// 毫秒时间戳
///
/// 内部存储为 `i64`，表示自 Unix 纪元以来的毫秒数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// 创建新的时间戳
    #[inline]
    pub const fn new(ms: i64) -> Self {
        Self(ms)
    }

    /// 获取毫秒值
    #[inline]
    pub const fn as_millis(&self) -> i64 {
        self.0
    }

    /// 获取秒值
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0 / 1000
    }

    /// 格式化为日期，如 `14 Mar 2026`
    ///
    /// 无法表示的时间戳返回 `"-"`（仅理论上可能，防御越界毫秒值）。
    pub fn format_date(&self) -> String {
        match DateTime::from_timestamp_millis(self.0) {
            Some(dt) => dt.format("%d %b %Y").to_string(),
            None => "-".to_string(),
        }
    }

    /// 格式化为日期加时间，如 `14 Mar 2026 18:30`
    pub fn format_date_time(&self) -> String {
        match DateTime::from_timestamp_millis(self.0) {
            Some(dt) => dt.format("%d %b %Y %H:%M").to_string(),
            None => "-".to_string(),
        }
    }

    /// 解析日期输入框的 `YYYY-MM-DD` 值为当日零点 (UTC) 的时间戳
    pub fn parse_ymd(value: &str) -> Option<Self> {
        let date = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
        let dt = date.and_hms_opt(0, 0, 0)?;
        Some(Self(dt.and_utc().timestamp_millis()))
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}
