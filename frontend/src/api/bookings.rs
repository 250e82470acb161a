//! 预约与招募端点 (bookings / jobs)

use super::ApiClient;
use mehndihub_shared::{
    ApiResponse, Booking, BookingStatus, CreateBookingRequest, UpdateBookingStatusRequest,
};

impl ApiClient {
    /// 当前用户的预约列表，可按状态过滤，带分页
    pub async fn list_my_bookings(
        &self,
        status: Option<BookingStatus>,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse<Vec<Booking>>, String> {
        let mut path = format!("/bookings?page={}&limit={}", page, limit);
        if let Some(status) = status {
            path.push_str("&status=");
            path.push_str(status.as_str());
        }
        self.get(&path).await
    }

    pub async fn get_booking(&self, id: &str) -> Result<ApiResponse<Booking>, String> {
        self.get(&format!("/bookings/{}", id)).await
    }

    pub async fn create_booking(
        &self,
        booking: &CreateBookingRequest,
    ) -> Result<ApiResponse<Booking>, String> {
        self.post("/bookings", booking).await
    }

    pub async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<ApiResponse<Booking>, String> {
        self.patch(
            &format!("/bookings/{}", id),
            &UpdateBookingStatusRequest { status },
        )
        .await
    }

    /// 取消预约；实际的退款/结算逻辑在后端
    pub async fn cancel_booking(&self, id: &str) -> Result<ApiResponse<Booking>, String> {
        self.patch_empty(&format!("/bookings/{}/cancel", id)).await
    }

    /// 画师视角：尚无画师接单的公开预约
    pub async fn list_open_jobs(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse<Vec<Booking>>, String> {
        self.get(&format!("/jobs?page={}&limit={}", page, limit)).await
    }
}
