//! 预约表单状态管理模块
//!
//! 将零散的 signal 整合为 `BookingFormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 校验并转换为请求对象

use leptos::prelude::*;
use mehndihub_shared::{CreateBookingRequest, Timestamp};

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct BookingFormState {
    pub event_type: RwSignal<String>,
    /// 日期输入框原始值 (`YYYY-MM-DD`)
    pub event_date: RwSignal<String>,
    pub city: RwSignal<String>,
    pub address: RwSignal<String>,
    pub budget_min: RwSignal<f64>,
    pub budget_max: RwSignal<f64>,
    pub notes: RwSignal<String>,
}

impl BookingFormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            event_type: RwSignal::new(String::new()),
            event_date: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            budget_min: RwSignal::new(0.0),
            budget_max: RwSignal::new(0.0),
            notes: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.event_type.set(String::new());
        self.event_date.set(String::new());
        self.city.set(String::new());
        self.address.set(String::new());
        self.budget_min.set(0.0);
        self.budget_max.set(0.0);
        self.notes.set(String::new());
    }

    /// 校验表单并转换为 API 请求对象
    pub fn to_request(&self) -> Result<CreateBookingRequest, String> {
        if self.event_type.get().trim().is_empty() || self.city.get().trim().is_empty() {
            return Err("Please fill in all required fields".to_string());
        }

        let event_date = Timestamp::parse_ymd(&self.event_date.get())
            .ok_or_else(|| "Please choose a valid event date".to_string())?;

        let budget_min = self.budget_min.get();
        let budget_max = self.budget_max.get();
        if budget_max < budget_min {
            return Err("Maximum budget must not be below the minimum".to_string());
        }

        let address = self.address.get();
        let notes = self.notes.get();

        Ok(CreateBookingRequest {
            event_type: self.event_type.get(),
            event_date: event_date.as_millis(),
            city: self.city.get(),
            address: (!address.trim().is_empty()).then_some(address),
            budget_min,
            budget_max,
            notes: (!notes.trim().is_empty()).then_some(notes),
        })
    }
}

impl Default for BookingFormState {
    fn default() -> Self {
        Self::new()
    }
}
