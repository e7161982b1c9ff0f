//! 页头：站点导航与会话入口

use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Newspaper, ShieldCheck};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

const NAV_BASE: &str = "px-3 py-2 rounded-md text-sm font-medium transition-colors";

fn nav_class(active: bool) -> String {
    if active {
        format!("{NAV_BASE} bg-primary text-primary-content")
    } else {
        format!("{NAV_BASE} text-neutral-content/80 hover:bg-neutral-focus hover:text-neutral-content")
    }
}

/// 指向 `route` 的导航链接，当前路由高亮
#[component]
fn NavLink(route: AppRoute, label: &'static str) -> impl IntoView {
    let router = use_router();
    let class = Signal::derive(move || nav_class(router.current_route().get() == route));

    view! {
        <Link to=route.to_path() class=class>
            {label}
        </Link>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let is_authenticated = auth.is_authenticated_signal();
    let username = auth.username_signal();

    let on_logout = {
        let auth = auth.clone();
        move |_| logout(&auth)
    };

    let home_class = Signal::derive(|| {
        "flex items-center gap-2 hover:opacity-80 transition-opacity".to_string()
    });

    view! {
        <header class="navbar bg-neutral text-neutral-content sticky top-0 z-50 shadow">
            <div class="max-w-7xl w-full mx-auto px-4 flex flex-wrap items-center justify-between gap-2">
                <Link to="/" class=home_class>
                    <Newspaper attr:class="h-8 w-8 text-primary" />
                    <span class="text-xl font-bold">"Jornal TGI"</span>
                </Link>

                <nav class="flex items-center gap-1">
                    <NavLink route=AppRoute::Home label="Início" />
                    <NavLink route=AppRoute::Videos label="Vídeos" />
                    <NavLink route=AppRoute::Articles label="Artigos" />
                </nav>

                <div class="flex items-center gap-2">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=|| view! { <NavLink route=AppRoute::Login label="Login" /> }
                    >
                        <span class="hidden sm:inline text-sm opacity-70">
                            {move || username.get().map(|name| format!("Olá, {name}"))}
                        </span>
                        <div class="flex items-center gap-1">
                            <ShieldCheck attr:class="h-4 w-4 opacity-70" />
                            <NavLink route=AppRoute::Admin label="Admin" />
                        </div>
                        <button class="btn btn-ghost btn-sm gap-1" on:click=on_logout.clone()>
                            <LogOut attr:class="h-4 w-4" /> "Sair"
                        </button>
                    </Show>
                </div>
            </div>
        </header>
    }
}
