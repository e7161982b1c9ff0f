//! Jornal TGI 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `session` / `admin` / `content`: 与 DOM 无关的状态机与控制器
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 把会话控制器绑定到响应式信号
//! - `components`: UI 组件层

#[macro_use]
mod log;

pub mod admin;
mod api;
mod auth;
mod config;
pub mod content;
mod error;
pub mod session;
mod state;

mod components {
    pub mod articles;
    mod cards;
    mod content_dialog;
    pub mod dashboard;
    pub mod footer;
    pub mod header;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod videos;
}

use crate::api::JornalApi;
use crate::auth::{AuthContext, init_auth};
use crate::components::articles::{ArticleDetailPage, ArticlesPage};
use crate::components::dashboard::AdminPage;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::videos::VideosPage;
use crate::config::AppConfig;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::HttpClient;
    pub use storage::PersistedToken;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Videos => view! { <VideosPage /> }.into_any(),
        AppRoute::Articles => view! { <ArticlesPage /> }.into_any(),
        AppRoute::ArticleDetail(id) => view! { <ArticleDetailPage id=id /> }.into_any(),
        AppRoute::Admin => view! { <AdminPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-96">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Página não encontrada"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 配置与 API 客户端
    let config = AppConfig::from_env();
    let api = JornalApi::from_config(&config);
    provide_context(api.clone());

    // 2. 创建认证上下文并从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new(&config, api);
    provide_context(auth_ctx.clone());
    init_auth(&auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务（解耦！）
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 4. 路由器组件：注入认证信号实现守卫
        <Router is_authenticated=is_authenticated>
            <div class="min-h-screen flex flex-col bg-base-200">
                <Header />
                <main class="flex-1">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <Footer />
            </div>
        </Router>
    }
}
