//! 管理端点 (admin / users)

use super::ApiClient;
use mehndihub_shared::{
    ApiResponse, Booking, PlatformStats, UpdateUserStatusRequest, UserProfile, UserStatus,
};

impl ApiClient {
    /// 管理端概览统计
    pub async fn admin_stats(&self) -> Result<ApiResponse<PlatformStats>, String> {
        self.get("/admin/stats").await
    }

    /// 全部用户，带分页
    pub async fn admin_list_users(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse<Vec<UserProfile>>, String> {
        self.get(&format!("/admin/users?page={}&limit={}", page, limit)).await
    }

    /// 封禁/恢复用户
    pub async fn admin_update_user_status(
        &self,
        id: &str,
        status: UserStatus,
    ) -> Result<ApiResponse<UserProfile>, String> {
        self.patch(
            &format!("/admin/users/{}/status", id),
            &UpdateUserStatusRequest { status },
        )
        .await
    }

    /// 平台全部预约，带分页
    pub async fn admin_list_bookings(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse<Vec<Booking>>, String> {
        self.get(&format!("/admin/bookings?page={}&limit={}", page, limit)).await
    }

    /// 画师公开主页资料
    pub async fn get_artist(&self, id: &str) -> Result<ApiResponse<UserProfile>, String> {
        self.get(&format!("/users/artists/{}", id)).await
    }

    /// 画师目录
    pub async fn list_artists(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<ApiResponse<Vec<UserProfile>>, String> {
        self.get(&format!("/users/artists?page={}&limit={}", page, limit)).await
    }
}
