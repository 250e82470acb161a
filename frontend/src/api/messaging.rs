//! 通知与私信端点 (notifications / chat)

use super::{Ack, ApiClient};
use mehndihub_shared::{
    ApiResponse, ChatMessage, Conversation, NotificationItem, SendMessageRequest,
};

impl ApiClient {
    /// 当前用户的通知列表
    pub async fn list_notifications(&self) -> Result<ApiResponse<Vec<NotificationItem>>, String> {
        self.get("/notifications").await
    }

    /// 标记单条通知为已读
    pub async fn mark_notification_read(&self, id: &str) -> Result<ApiResponse<Ack>, String> {
        self.patch_empty(&format!("/notifications/{}/read", id)).await
    }

    /// 全部标记为已读
    pub async fn mark_all_notifications_read(&self) -> Result<ApiResponse<Ack>, String> {
        self.patch_empty("/notifications/read-all").await
    }

    /// 会话列表
    pub async fn list_conversations(&self) -> Result<ApiResponse<Vec<Conversation>>, String> {
        self.get("/chat/conversations").await
    }

    /// 某会话的消息记录
    pub async fn list_messages(
        &self,
        conversation_id: &str,
    ) -> Result<ApiResponse<Vec<ChatMessage>>, String> {
        self.get(&format!("/chat/conversations/{}/messages", conversation_id)).await
    }

    /// 发送消息
    pub async fn send_message(
        &self,
        message: &SendMessageRequest,
    ) -> Result<ApiResponse<ChatMessage>, String> {
        self.post("/chat/messages", message).await
    }
}
