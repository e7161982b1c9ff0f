//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。
//!
//! 用户主动导航使用 pushState；守卫触发的重定向（初次加载、后退/前进、
//! 认证状态变化）一律使用 replaceState，受保护页面之间不会形成后退循环。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, RouteDecision};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// History 写入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Replace,
}

fn write_history(path: &str, mode: HistoryMode) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = match mode {
                HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
                HistoryMode::Replace => {
                    history.replace_state_with_url(&JsValue::NULL, "", Some(path))
                }
            };
        }
    }
}

/// 一次导航应写入的 History 条目
///
/// 只有放行的用户导航会 push；重定向目标总是替换当前条目。
fn history_entry(
    decision: RouteDecision,
    requested: &str,
    current: &str,
    mode: HistoryMode,
) -> Option<(String, HistoryMode)> {
    match decision {
        RouteDecision::Render(_) => (mode == HistoryMode::Push && current != requested)
            .then(|| (requested.to_string(), HistoryMode::Push)),
        RouteDecision::Redirect(redirect) => Some((redirect.to_path(), HistoryMode::Replace)),
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: RwSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建新的路由服务，初始路由同样经过守卫
    fn new(is_authenticated: Signal<bool>) -> Self {
        let router = Self {
            current_route: RwSignal::new(AppRoute::default()),
            is_authenticated,
        };
        router.apply(&current_path(), HistoryMode::Replace);
        router
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> Signal<AppRoute> {
        self.current_route.into()
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.apply(path, HistoryMode::Push);
    }

    /// 对请求路径执行守卫并更新 History 与当前路由
    ///
    /// 重定向时被拒绝的路径不会写入 History，只写入重定向目标。
    fn apply(&self, requested: &str, mode: HistoryMode) {
        let target = AppRoute::from_path(requested);
        let is_auth = self.is_authenticated.get_untracked();

        let decision = target.guard(is_auth);
        if let RouteDecision::Redirect(redirect) = decision {
            log_info!(
                "[Router] {} -> {} (authenticated: {})",
                target,
                redirect,
                is_auth
            );
        }

        if let Some((path, mode)) = history_entry(decision, requested, &current_path(), mode) {
            write_history(&path, mode);
        }
        let (RouteDecision::Render(route) | RouteDecision::Redirect(route)) = decision;
        self.current_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            router.apply(&current_path(), HistoryMode::Replace);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时对当前路由重新执行守卫
    fn setup_auth_redirect(&self) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = router.is_authenticated.get();
            let route = router.current_route.get_untracked();

            if let RouteDecision::Redirect(redirect) = route.guard(is_auth) {
                log_info!(
                    "[Router] Auth state changed (authenticated: {}), redirecting to {}.",
                    is_auth,
                    redirect
                );
                write_history(&redirect.to_path(), HistoryMode::Replace);
                router.current_route.set(redirect);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 客户端导航链接
#[component]
pub fn Link(
    /// 目标路径
    #[prop(into)]
    to: String,
    /// 链接样式
    class: Signal<String>,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let target = to.clone();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&target);
    };

    view! {
        <a href=to class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_to_guarded_page_replaces_history() {
        let decision = AppRoute::Admin.guard(false);
        assert_eq!(
            history_entry(decision, "/admin", "/videos", HistoryMode::Push),
            Some(("/login".to_string(), HistoryMode::Replace))
        );
    }

    #[test]
    fn test_login_link_while_authenticated_replaces_history() {
        let decision = AppRoute::Login.guard(true);
        assert_eq!(
            history_entry(decision, "/login", "/", HistoryMode::Push),
            Some(("/admin".to_string(), HistoryMode::Replace))
        );
    }

    #[test]
    fn test_allowed_navigation_pushes_once() {
        let decision = AppRoute::Videos.guard(false);
        assert_eq!(
            history_entry(decision, "/videos", "/", HistoryMode::Push),
            Some(("/videos".to_string(), HistoryMode::Push))
        );
        assert_eq!(
            history_entry(decision, "/videos", "/videos", HistoryMode::Push),
            None
        );
    }

    #[test]
    fn test_allowed_popstate_writes_nothing() {
        let decision = AppRoute::Articles.guard(false);
        assert_eq!(
            history_entry(decision, "/articles", "/articles", HistoryMode::Replace),
            None
        );
    }
}
