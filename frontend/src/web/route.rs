//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其守卫规则。

use jornal_shared::ContentId;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Videos,
    Articles,
    /// 单篇文章
    ArticleDetail(ContentId),
    /// 管理面板 (需要认证)
    Admin,
    /// 登录页面 (已认证时离开)
    Login,
    /// 页面未找到
    NotFound,
}

/// 守卫的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// 渲染该路由
    Render(AppRoute),
    /// 以替换 History 的方式重定向
    Redirect(AppRoute),
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => Self::Home,
            "/videos" => Self::Videos,
            "/articles" => Self::Articles,
            "/admin" => Self::Admin,
            "/login" => Self::Login,
            _ => path
                .strip_prefix("/articles/")
                .and_then(|id| id.parse::<ContentId>().ok())
                .map(Self::ArticleDetail)
                .unwrap_or(Self::NotFound),
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Videos => "/videos".to_string(),
            Self::Articles => "/articles".to_string(),
            Self::ArticleDetail(id) => format!("/articles/{}", id),
            Self::Admin => "/admin".to_string(),
            Self::Login => "/login".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Admin
    }

    /// 根据认证状态判定渲染或重定向
    ///
    /// 会话仍在恢复中时按未认证处理。
    pub fn guard(self, is_authenticated: bool) -> RouteDecision {
        if self.requires_auth() && !is_authenticated {
            RouteDecision::Redirect(Self::auth_failure_redirect())
        } else if self.should_redirect_when_authenticated() && is_authenticated {
            RouteDecision::Redirect(Self::auth_success_redirect())
        } else {
            RouteDecision::Render(self)
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/videos/"), AppRoute::Videos);
        assert_eq!(AppRoute::from_path("/articles"), AppRoute::Articles);
        assert_eq!(AppRoute::from_path("/articles/42"), AppRoute::ArticleDetail(42));
        assert_eq!(AppRoute::from_path("/articles/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::Admin);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::NotFound);
    }

    #[test]
    fn test_paths_round_trip_for_declared_routes() {
        for route in [
            AppRoute::Home,
            AppRoute::Videos,
            AppRoute::Articles,
            AppRoute::ArticleDetail(7),
            AppRoute::Admin,
            AppRoute::Login,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn test_guard_admin() {
        assert_eq!(
            AppRoute::Admin.guard(true),
            RouteDecision::Render(AppRoute::Admin)
        );
        assert_eq!(
            AppRoute::Admin.guard(false),
            RouteDecision::Redirect(AppRoute::Login)
        );
    }

    #[test]
    fn test_guard_login() {
        assert_eq!(
            AppRoute::Login.guard(false),
            RouteDecision::Render(AppRoute::Login)
        );
        assert_eq!(
            AppRoute::Login.guard(true),
            RouteDecision::Redirect(AppRoute::Admin)
        );
    }

    #[test]
    fn test_public_routes_render_unconditionally() {
        for route in [
            AppRoute::Home,
            AppRoute::Videos,
            AppRoute::Articles,
            AppRoute::ArticleDetail(1),
            AppRoute::NotFound,
        ] {
            for auth in [true, false] {
                assert_eq!(route.guard(auth), RouteDecision::Render(route));
            }
        }
    }

    #[test]
    fn test_redirect_targets_are_stable() {
        // A redirect target never redirects again for the same auth state.
        for auth in [true, false] {
            for route in [AppRoute::Admin, AppRoute::Login] {
                if let RouteDecision::Redirect(target) = route.guard(auth) {
                    assert_eq!(target.guard(auth), RouteDecision::Render(target));
                }
            }
        }
    }
}
