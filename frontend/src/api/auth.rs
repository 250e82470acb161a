//! 认证端点 (auth)

use super::{Ack, ApiClient};
use mehndihub_shared::{
    ApiResponse, LoginRequest, RegisterRequest, SessionData, UpdateProfileRequest,
};

impl ApiClient {
    /// 登录；成功信封的 `token` 字段携带 Bearer 令牌
    pub async fn login(&self, credentials: &LoginRequest) -> Result<ApiResponse<SessionData>, String> {
        self.post("/auth/login", credentials).await
    }

    /// 注册；后端发送验证邮件，首次登录前需先完成验证
    pub async fn register(&self, user_data: &RegisterRequest) -> Result<ApiResponse<Ack>, String> {
        self.post("/auth/register", user_data).await
    }

    /// 登出（服务端失效令牌）
    pub async fn logout(&self) -> Result<ApiResponse<Ack>, String> {
        self.post_empty("/auth/logout").await
    }

    /// 当前登录用户的资料
    pub async fn get_profile(&self) -> Result<ApiResponse<SessionData>, String> {
        self.get("/auth/profile").await
    }

    /// 更新当前用户资料
    pub async fn update_profile(
        &self,
        changes: &UpdateProfileRequest,
    ) -> Result<ApiResponse<SessionData>, String> {
        self.put("/auth/profile", changes).await
    }
}
