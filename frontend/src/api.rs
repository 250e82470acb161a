//! API 客户端模块
//!
//! 所有后端调用的唯一入口：单一 `send` 原语负责拼接 URL、附加
//! Bearer 令牌、归一化成功/失败响应；各资源命名空间（`api/` 目录）
//! 只是端点路径与请求体形状的薄封装，不含任何业务逻辑。
//!
//! 失败语义：每次调用要么返回解析后的响应信封，要么返回一条
//! 人类可读的错误消息。不重试、不超时、不退避，单次尝试。

use crate::web::{HttpClient, HttpError, HttpMethod};
use mehndihub_shared::{ApiResponse, BEARER_PREFIX, HEADER_AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;

mod admin;
mod applications;
mod auth;
mod bookings;
mod content;
mod messaging;
mod payments;
pub mod uploads;

/// 后端固定源；所有端点都是 `/api` 下的后缀
pub const API_BASE_URL: &str = "https://api.mehndihub.app/api";

/// 连接层彻底失败（如拒绝连接）时的固定提示
pub const NETWORK_UNREACHABLE_MESSAGE: &str =
    "Unable to connect to the server. The backend may be unreachable, please try again later.";

/// 无实际负载的响应端点使用的 data 形状
pub type Ack = Option<serde_json::Value>;

// =========================================================
// 纯函数：请求头与响应归一化
// =========================================================

/// 构造一次请求的默认头集合
///
/// 有令牌时附加 `Authorization: Bearer <token>`；
/// 无令牌时完全省略该头（绝不发送 `Bearer null`）。
pub(crate) fn request_headers(token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = vec![("Content-Type", "application/json".to_string())];
    if let Some(token) = token {
        headers.push((HEADER_AUTHORIZATION, format!("{}{}", BEARER_PREFIX, token)));
    }
    headers
}

fn invalid_response_message(status: u16, status_text: &str) -> String {
    format!("Server returned invalid response: {} {}", status, status_text)
}

/// 从失败响应体提炼一条错误消息
///
/// 优先级：字段级校验错误列表 -> 后端 message -> 状态码兜底。
fn failure_message(status: u16, status_text: &str, body: &serde_json::Value) -> String {
    if let Some(errors) = body.get("errors").and_then(|e| e.as_array()) {
        let msgs: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("msg").or_else(|| e.get("message")))
            .filter_map(|m| m.as_str())
            .collect();
        if !msgs.is_empty() {
            return format!("Validation errors: {}", msgs.join(", "));
        }
    }

    if let Some(message) = body.get("message").and_then(|m| m.as_str()) {
        return message.to_string();
    }

    format!("Server error: {} {}", status, status_text)
}

/// 将原始响应归一化为信封或错误消息
///
/// 响应体无条件按 JSON 解析；解析失败即视为无效响应，
/// 无论状态码是多少。
pub(crate) fn decode_response<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<ApiResponse<T>, String> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| invalid_response_message(status, status_text))?;

    if !(200..300).contains(&status) {
        return Err(failure_message(status, status_text, &value));
    }

    serde_json::from_value(value).map_err(|_| invalid_response_message(status, status_text))
}

// =========================================================
// 客户端本体
// =========================================================

/// 平台 API 客户端
///
/// 令牌在每次请求时从持久化存储读取，因此客户端本身无状态、
/// 可随意克隆；各视图直接 `ApiClient::new()` 即可。
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    /// 指定基址创建客户端（测试用）
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 请求原语：单次 fetch + 归一化
    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse<T>, String> {
        let url = self.url(path);
        let mut builder = HttpClient::request(method, &url);

        for (key, value) in request_headers(crate::auth::stored_token().as_deref()) {
            builder = builder.header(key, &value);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let res = builder.send().await.map_err(|err| match err {
            HttpError::NetworkError(_) => NETWORK_UNREACHABLE_MESSAGE.to_string(),
            other => other.to_string(),
        })?;

        let status = res.status();
        let status_text = res.status_text();
        let text = res
            .text()
            .await
            .map_err(|_| invalid_response_message(status, &status_text))?;

        decode_response(status, &status_text, &text)
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, String> {
        serde_json::to_string(body).map_err(|e| format!("Failed to encode request body: {}", e))
    }

    // ---- 各命名空间共用的方法族 ----

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, String> {
        self.send(HttpMethod::Get, path, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, String> {
        self.send(HttpMethod::Post, path, Some(Self::encode(body)?)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, String> {
        self.send(HttpMethod::Post, path, None).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, String> {
        self.send(HttpMethod::Put, path, Some(Self::encode(body)?)).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, String> {
        self.send(HttpMethod::Patch, path, Some(Self::encode(body)?)).await
    }

    pub(crate) async fn patch_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, String> {
        self.send(HttpMethod::Patch, path, None).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, String> {
        self.send(HttpMethod::Delete, path, None).await
    }
}

#[cfg(test)]
mod tests;
