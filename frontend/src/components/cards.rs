//! 公开页面共用的卡片与占位视图

use crate::components::icons::Play;
use jornal_shared::{Article, Video};
use leptos::prelude::*;

/// 在新标签页打开外部链接
pub fn open_external(url: &str) {
    let opened = web_sys::window()
        .map(|w| w.open_with_url_and_target(url, "_blank").is_ok())
        .unwrap_or(false);
    if !opened {
        log_warn!("Não foi possível abrir {}", url);
    }
}

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center min-h-96">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// 空集合提示；`searching` 区分“无结果”与“暂无内容”
#[component]
pub fn EmptyState(
    searching: Signal<bool>,
    /// (搜索无结果, 暂无内容)
    titles: (&'static str, &'static str),
    hints: (&'static str, &'static str),
    children: Children,
) -> impl IntoView {
    let pick = move |pair: (&'static str, &'static str)| {
        if searching.get() { pair.0 } else { pair.1 }
    };

    view! {
        <div class="text-center py-12">
            <div class="flex justify-center mb-4 opacity-40">{children()}</div>
            <h3 class="text-lg font-medium mb-2">{move || pick(titles)}</h3>
            <p class="text-base-content/70">{move || pick(hints)}</p>
        </div>
    }
}

#[component]
pub fn VideoCard(video: Video) -> impl IntoView {
    let Video {
        title,
        url,
        description,
        thumbnail_url,
        created_at,
        ..
    } = video;

    let thumbnail = match thumbnail_url.filter(|t| !t.is_empty()) {
        Some(src) => view! {
            <img src=src alt=title.clone() class="w-full h-full object-cover" />
        }
        .into_any(),
        None => view! { <Play attr:class="h-12 w-12 opacity-40" /> }.into_any(),
    };

    view! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <figure class="aspect-video bg-base-200 flex items-center justify-center overflow-hidden">
                {thumbnail}
            </figure>
            <div class="card-body">
                <h2 class="card-title line-clamp-2">{title}</h2>
                <p class="text-sm text-base-content/60 grow-0">{created_at.to_locale_date()}</p>
                <p class="text-sm text-base-content/70 line-clamp-3">{description}</p>
                <div class="card-actions mt-2">
                    <button class="btn btn-primary btn-sm w-full gap-2" on:click=move |_| open_external(&url)>
                        <Play attr:class="h-4 w-4" /> "Assistir Vídeo"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// 文章卡片，操作按钮由调用方提供
#[component]
pub fn ArticleCard(article: Article, children: Children) -> impl IntoView {
    let excerpt = article.excerpt();

    view! {
        <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
            <div class="card-body">
                <h2 class="card-title line-clamp-2">{article.title}</h2>
                <p class="text-sm text-base-content/60 grow-0">{article.created_at.to_locale_date()}</p>
                <p class="text-sm text-base-content/70 line-clamp-4">{excerpt}</p>
                <div class="card-actions mt-2">{children()}</div>
            </div>
        </div>
    }
}
