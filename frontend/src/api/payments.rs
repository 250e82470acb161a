//! 支付/钱包/交易端点 (payments / wallet / transactions)
//!
//! 真正的扣款与结算在后端完成；这里只是按顺序触发的远程调用。

use super::{Ack, ApiClient};
use mehndihub_shared::{
    ApiResponse, CreatePaymentRequest, TransactionRecord, WalletSummary, WithdrawalRequest,
};

impl ApiClient {
    /// 为预约创建支付
    pub async fn create_payment(
        &self,
        payment: &CreatePaymentRequest,
    ) -> Result<ApiResponse<TransactionRecord>, String> {
        self.post("/payments", payment).await
    }

    /// 确认支付（第三方支付回跳后调用）
    pub async fn confirm_payment(&self, id: &str) -> Result<ApiResponse<TransactionRecord>, String> {
        self.post_empty(&format!("/payments/{}/confirm", id)).await
    }

    /// 支付历史
    pub async fn payment_history(&self) -> Result<ApiResponse<Vec<TransactionRecord>>, String> {
        self.get("/payments/history").await
    }

    /// 画师钱包概览
    pub async fn get_wallet(&self) -> Result<ApiResponse<WalletSummary>, String> {
        self.get("/wallet").await
    }

    /// 画师发起提现
    pub async fn request_withdrawal(&self, amount: f64) -> Result<ApiResponse<Ack>, String> {
        self.post("/wallet/withdraw", &WithdrawalRequest { amount }).await
    }

    /// 交易流水
    pub async fn list_transactions(&self) -> Result<ApiResponse<Vec<TransactionRecord>>, String> {
        self.get("/transactions").await
    }
}
