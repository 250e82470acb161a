//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、每个路由的访问级别，
//! 以及核心的守卫判定函数 [`guard`]。

use mehndihub_shared::UserType;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由，仅限未登录用户)
    #[default]
    Login,
    /// 注册页面 (仅限未登录用户)
    Register,
    /// 客户控制台
    ClientDashboard,
    /// 画师控制台
    ArtistDashboard,
    /// 管理员控制台
    AdminDashboard,
    /// 页面未找到
    NotFound,
}

/// 路由访问级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// 任何人可访问
    Public,
    /// 仅限未登录用户（登录/注册页）
    PublicOnly,
    /// 需要认证；`allowed` 为 `None` 时任意角色均可，
    /// 否则要求当前角色在列表内
    Protected {
        allowed: Option<&'static [UserType]>,
    },
}

/// 守卫视角下的会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionView {
    /// 持久化状态尚未读取完成
    Unknown,
    /// 无有效会话
    Anonymous,
    /// 已认证，携带当前角色
    Authenticated(UserType),
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 渲染目标路由
    Render,
    /// 会话状态未知，暂不渲染任何内容
    Wait,
    /// 重定向到另一路由
    Redirect(AppRoute),
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/dashboard" => Self::ClientDashboard,
            "/artist-dashboard" => Self::ArtistDashboard,
            "/admin-dashboard" => Self::AdminDashboard,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::ClientDashboard => "/dashboard",
            Self::ArtistDashboard => "/artist-dashboard",
            Self::AdminDashboard => "/admin-dashboard",
            Self::NotFound => "/404",
        }
    }

    /// 路由的访问级别
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Login | Self::Register => RouteAccess::PublicOnly,
            Self::ClientDashboard => RouteAccess::Protected {
                allowed: Some(&[UserType::Client]),
            },
            Self::ArtistDashboard => RouteAccess::Protected {
                allowed: Some(&[UserType::Artist]),
            },
            Self::AdminDashboard => RouteAccess::Protected {
                allowed: Some(&[UserType::Admin]),
            },
            Self::NotFound => RouteAccess::Public,
        }
    }

    /// 各角色登录后的默认落地路由
    pub fn landing_for(role: UserType) -> Self {
        match role {
            UserType::Artist => Self::ArtistDashboard,
            UserType::Admin => Self::AdminDashboard,
            UserType::Client => Self::ClientDashboard,
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// **核心守卫逻辑**
///
/// 纯函数：给定目标路由与当前会话状态，判定渲染、等待或重定向。
/// 角色不匹配时重定向到该用户自己角色的落地路由，而不是错误页；
/// 已登录用户访问登录/注册页同样回到落地路由。
pub fn guard(route: AppRoute, session: SessionView) -> GuardOutcome {
    match route.access() {
        RouteAccess::Public => GuardOutcome::Render,
        RouteAccess::PublicOnly => match session {
            SessionView::Unknown => GuardOutcome::Wait,
            SessionView::Anonymous => GuardOutcome::Render,
            SessionView::Authenticated(role) => GuardOutcome::Redirect(AppRoute::landing_for(role)),
        },
        RouteAccess::Protected { allowed } => match session {
            SessionView::Unknown => GuardOutcome::Wait,
            SessionView::Anonymous => GuardOutcome::Redirect(AppRoute::Login),
            SessionView::Authenticated(role) => match allowed {
                Some(roles) if !roles.contains(&role) => {
                    GuardOutcome::Redirect(AppRoute::landing_for(role))
                }
                _ => GuardOutcome::Render,
            },
        },
    }
}

#[cfg(test)]
mod tests;
