//! 认证模块
//!
//! 管理用户会话状态，与路由系统解耦。
//! 路由服务通过注入的会话信号来执行守卫判定。
//!
//! 会话的持久化形式是三个 LocalStorage 键：`token`、`user`
//! （JSON 序列化的资料副本）、`isAuthenticated`（字符串 `"true"`）。
//! 不变量：已认证必然意味着 user 与真实令牌同时存在；
//! 启动时对三者做一致性校验，不一致一律视为未登录并清理残留。

use crate::api::ApiClient;
use crate::web::LocalStorage;
use leptos::prelude::*;

pub use crate::web::route::SessionView;
use mehndihub_shared::{
    ApiResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, UserProfile,
};

pub(crate) const STORAGE_TOKEN_KEY: &str = "token";
const STORAGE_USER_KEY: &str = "user";
const STORAGE_AUTH_FLAG_KEY: &str = "isAuthenticated";

/// 会话占用的全部持久化键；登出/清理按此清空
const SESSION_KEYS: [&str; 3] = [STORAGE_TOKEN_KEY, STORAGE_USER_KEY, STORAGE_AUTH_FLAG_KEY];

/// 认证状态
///
/// `is_loading` 为 true 表示持久化状态尚未读取（Unknown）；
/// 之后在 Anonymous 与 Authenticated 之间流转。
#[derive(Clone, Default)]
pub struct AuthState {
    /// 当前用户的缓存资料（仅认证后存在）
    pub user: Option<UserProfile>,
    /// 是否已认证
    pub is_authenticated: bool,
    /// 是否正在加载
    pub is_loading: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文，初始处于加载中
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            user: None,
            is_authenticated: false,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// 获取守卫视角的会话信号（用于路由服务注入）
    pub fn session_signal(&self) -> Signal<SessionView> {
        let state = self.state;
        Signal::derive(move || state.with(session_view))
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

// =========================================================
// 纯函数：状态映射与会话恢复
// =========================================================

/// 认证状态到守卫视角的映射
///
/// 标志位与缓存资料不一致时（理论上不会出现，启动校验会清理），
/// 按未登录处理。
fn session_view(state: &AuthState) -> SessionView {
    if state.is_loading {
        return SessionView::Unknown;
    }
    match (&state.user, state.is_authenticated) {
        (Some(user), true) => SessionView::Authenticated(user.user_type),
        _ => SessionView::Anonymous,
    }
}

/// 过滤占位令牌：空串与字面量 "undefined"/"null" 视为缺失
fn normalize_token(raw: String) -> Option<String> {
    if raw.is_empty() || raw == "undefined" || raw == "null" {
        None
    } else {
        Some(raw)
    }
}

/// 从持久化的三元组恢复会话
///
/// 仅当标志位为 `"true"`、存在真实令牌且缓存资料可解析时成功。
fn restore_session(
    token: Option<String>,
    user_json: Option<String>,
    flag: Option<String>,
) -> Option<UserProfile> {
    if flag.as_deref() != Some("true") {
        return None;
    }
    token.and_then(normalize_token)?;
    serde_json::from_str(&user_json?).ok()
}

/// 会话持久化的写入计划
///
/// [`restore_session`] 的镜像：登录成功后要写入的键值对。
/// `token` 为 `None` 时是不经过登录的资料刷新，只更新 user 与标志位。
fn session_writes(token: Option<&str>, user: &UserProfile) -> Vec<(&'static str, String)> {
    let mut writes = Vec::with_capacity(SESSION_KEYS.len());
    if let Some(token) = token {
        writes.push((STORAGE_TOKEN_KEY, token.to_string()));
    }
    if let Ok(json) = serde_json::to_string(user) {
        writes.push((STORAGE_USER_KEY, json));
    }
    writes.push((STORAGE_AUTH_FLAG_KEY, "true".to_string()));
    writes
}

// =========================================================
// 持久化读写
// =========================================================

/// 从持久化存储读取当前令牌（API 客户端每次请求时调用）
pub(crate) fn stored_token() -> Option<String> {
    LocalStorage::get(STORAGE_TOKEN_KEY).and_then(normalize_token)
}

fn persist_session(token: &str, user: &UserProfile) {
    for (key, value) in session_writes(Some(token), user) {
        LocalStorage::set(key, &value);
    }
}

fn persist_user(user: &UserProfile) {
    for (key, value) in session_writes(None, user) {
        LocalStorage::set(key, &value);
    }
}

fn clear_persisted_session() {
    for key in SESSION_KEYS {
        LocalStorage::delete(key);
    }
}

// =========================================================
// 会话操作
// =========================================================

/// 初始化认证状态
///
/// 同步读取持久化的会话三元组；默认配置下启动时不发起网络请求，
/// 直接信任缓存资料（需要重新校验的调用方使用 [`check_auth_status`]）。
pub fn init_auth(ctx: &AuthContext) {
    let restored = restore_session(
        LocalStorage::get(STORAGE_TOKEN_KEY),
        LocalStorage::get(STORAGE_USER_KEY),
        LocalStorage::get(STORAGE_AUTH_FLAG_KEY),
    );

    if restored.is_none() {
        // 清理不一致的残留键（如有标志位却无令牌）
        clear_persisted_session();
    }

    ctx.set_state.set(AuthState {
        is_authenticated: restored.is_some(),
        user: restored,
        is_loading: false,
    });
}

/// 登录并持久化会话
///
/// 成功时写入令牌/资料/标志位并进入已认证状态；
/// 任何失败都会清空三者、回到未登录，并把错误原样抛给调用方。
pub async fn login(ctx: &AuthContext, credentials: LoginRequest) -> Result<UserProfile, String> {
    let api = ApiClient::new();

    match try_login(&api, &credentials).await {
        Ok((token, user)) => {
            persist_session(&token, &user);
            ctx.set_state.set(AuthState {
                user: Some(user.clone()),
                is_authenticated: true,
                is_loading: false,
            });
            Ok(user)
        }
        Err(err) => {
            clear_persisted_session();
            ctx.set_state.set(AuthState {
                user: None,
                is_authenticated: false,
                is_loading: false,
            });
            Err(err)
        }
    }
}

async fn try_login(
    api: &ApiClient,
    credentials: &LoginRequest,
) -> Result<(String, UserProfile), String> {
    let resp = api.login(credentials).await?;
    // 缺少令牌的"成功"响应一律按失败处理
    let token = resp
        .token
        .ok_or_else(|| "Login response did not include a token".to_string())?;
    Ok((token, resp.data.user))
}

/// 注销并清除会话
///
/// 远端登出是尽力而为（失败被吞掉）；本地状态无条件清空。
/// 导航由路由服务监听会话变化自动处理。
pub async fn logout(ctx: &AuthContext) {
    let _ = ApiClient::new().logout().await;

    clear_persisted_session();
    ctx.set_state.set(AuthState {
        user: None,
        is_authenticated: false,
        is_loading: false,
    });
}

/// 注册新账号
///
/// 结果原样返回，不改变会话状态：后端要求先完成邮箱验证才能首次登录。
pub async fn register(
    user_data: RegisterRequest,
) -> Result<ApiResponse<Option<serde_json::Value>>, String> {
    ApiClient::new().register(&user_data).await
}

/// 覆盖缓存的用户资料并标记为已认证
///
/// 用于不经过 `login` 的资料编辑之后同步会话。
pub fn update_user(ctx: &AuthContext, user: UserProfile) {
    persist_user(&user);
    ctx.set_state.set(AuthState {
        user: Some(user),
        is_authenticated: true,
        is_loading: false,
    });
}

/// 更新资料并同步会话
pub async fn update_profile(
    ctx: &AuthContext,
    changes: UpdateProfileRequest,
) -> Result<UserProfile, String> {
    let resp = ApiClient::new().update_profile(&changes).await?;
    update_user(ctx, resp.data.user.clone());
    Ok(resp.data.user)
}

/// 向后端校验当前会话
///
/// 默认启动路径不调用此函数（信任缓存）；调用方需要强一致时使用。
/// 成功则刷新缓存资料，失败则清空会话。
pub async fn check_auth_status(ctx: &AuthContext) {
    match ApiClient::new().get_profile().await {
        Ok(resp) => update_user(ctx, resp.data.user),
        Err(_) => {
            clear_persisted_session();
            ctx.set_state.set(AuthState {
                user: None,
                is_authenticated: false,
                is_loading: false,
            });
        }
    }
}

#[cfg(test)]
mod tests;
