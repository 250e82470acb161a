//! 接单申请端点 (applications / proposals)

use super::{Ack, ApiClient};
use mehndihub_shared::{ApiResponse, JobApplication, SubmitProposalRequest};

impl ApiClient {
    /// 画师对某个预约提交提案
    pub async fn submit_proposal(
        &self,
        proposal: &SubmitProposalRequest,
    ) -> Result<ApiResponse<JobApplication>, String> {
        self.post("/applications", proposal).await
    }

    /// 画师自己的全部申请
    pub async fn list_my_applications(&self) -> Result<ApiResponse<Vec<JobApplication>>, String> {
        self.get("/applications/mine").await
    }

    /// 客户视角：某预约收到的全部申请
    pub async fn list_applications_for_booking(
        &self,
        booking_id: &str,
    ) -> Result<ApiResponse<Vec<JobApplication>>, String> {
        self.get(&format!("/bookings/{}/applications", booking_id)).await
    }

    /// 画师撤回申请
    pub async fn withdraw_application(&self, id: &str) -> Result<ApiResponse<Ack>, String> {
        self.delete(&format!("/applications/{}", id)).await
    }

    /// 客户接受某个申请；后端同时拒绝其余申请并确认预约
    pub async fn accept_application(
        &self,
        id: &str,
    ) -> Result<ApiResponse<JobApplication>, String> {
        self.post_empty(&format!("/applications/{}/accept", id)).await
    }
}
