//! 直传端点 (uploads)
//!
//! 图片/视频不经过后端，由浏览器直接以未签名预设上传到外部资源
//! 主机，拿到的安全 URL 之后作为普通字符串字段使用（作品集条目、
//! 博客封面）。不附加 Bearer 令牌，也不设置 Content-Type。

use crate::web::HttpClient;
use serde::Deserialize;
use web_sys::FormData;

/// 固定的未签名上传端点
pub const UPLOAD_URL: &str = "https://api.cloudinary.com/v1_1/mehndihub/auto/upload";
const UPLOAD_PRESET: &str = "mehndihub_unsigned";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// 上传一个浏览器文件，返回其安全 URL
pub async fn upload_media(file: &web_sys::File) -> Result<String, String> {
    let form = FormData::new().map_err(|_| "Failed to build upload form".to_string())?;
    form.append_with_blob("file", file)
        .map_err(|_| "Failed to attach file to upload form".to_string())?;
    form.append_with_str("upload_preset", UPLOAD_PRESET)
        .map_err(|_| "Failed to attach upload preset".to_string())?;

    let res = HttpClient::post(UPLOAD_URL)
        .form_body(form)
        .send()
        .await
        .map_err(|_| super::NETWORK_UNREACHABLE_MESSAGE.to_string())?;

    let status = res.status();
    let status_text = res.status_text();
    let text = res
        .text()
        .await
        .map_err(|_| format!("Upload failed: {} {}", status, status_text))?;

    if !(200..300).contains(&status) {
        return Err(format!("Upload failed: {} {}", status, status_text));
    }

    serde_json::from_str::<UploadResponse>(&text)
        .map(|r| r.secure_url)
        .map_err(|_| format!("Upload failed: {} {}", status, status_text))
}
