use crate::admin::{AdminController, AdminPanel, ContentKind};
use crate::api::use_api;
use crate::auth::{revalidate, use_auth};
use crate::components::cards::Spinner;
use crate::components::content_dialog::ContentDialog;
use crate::components::icons::*;
use jornal_shared::ContentId;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 浏览器原生确认框；无法弹出时视为取消
fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let panel = RwSignal::new(AdminPanel::new());
    let controller = AdminController::new(panel, use_api());
    // 管理列表当前的标签页（与对话框内的表单标签页互不影响）
    let list_tab = RwSignal::new(ContentKind::Video);

    revalidate(&use_auth());
    {
        let controller = controller.clone();
        spawn_local(async move { controller.refresh().await });
    }

    let on_submit = {
        let controller = controller.clone();
        Callback::new(move |kind: ContentKind| {
            let controller = controller.clone();
            spawn_local(async move { controller.submit(kind).await });
        })
    };

    let on_delete = {
        let controller = controller.clone();
        Callback::new(move |(kind, id): (ContentKind, ContentId)| {
            let controller = controller.clone();
            spawn_local(async move { controller.delete(kind, id, confirm).await });
        })
    };

    // 3秒后清除状态消息
    Effect::new(move |_| {
        if let Some(shown) = panel.with(|p| p.status.clone()) {
            set_timeout(
                move || {
                    let _ = panel.try_update(|p| {
                        if p.status.as_ref() == Some(&shown) {
                            p.status = None;
                        }
                    });
                },
                std::time::Duration::from_secs(3),
            );
        }
    });

    let loading = move || panel.with(|p| p.loading);
    let video_count = move || panel.with(|p| p.videos.len());
    let article_count = move || panel.with(|p| p.articles.len());
    let tab_class = move |kind: ContentKind| {
        if list_tab.get() == kind { "tab tab-active gap-2" } else { "tab gap-2" }
    };

    view! {
        <div class="max-w-7xl mx-auto px-4 py-8 space-y-6">
            <div>
                <h1 class="text-3xl font-bold mb-4 flex items-center gap-3">
                    <ShieldCheck attr:class="h-8 w-8 text-primary" /> "Painel Administrativo"
                </h1>
                <p class="text-base-content/70">"Gerencie vídeos e artigos do seu jornal."</p>
            </div>

            // 状态消息
            {move || panel.with(|p| p.status.clone()).map(|status| {
                let class = if status.is_error { "alert alert-error" } else { "alert alert-success" };
                view! {
                    <div role="alert" class=class>
                        <span>{status.text}</span>
                    </div>
                }
            })}

            <div class="flex items-center gap-2">
                <button class="btn btn-primary gap-2" on:click=move |_| panel.update(AdminPanel::open_create)>
                    <Plus attr:class="h-4 w-4" /> "Adicionar Conteúdo"
                </button>
                <button
                    class="btn btn-ghost btn-circle"
                    disabled=loading
                    on:click={
                        let controller = controller.clone();
                        move |_| {
                            let controller = controller.clone();
                            spawn_local(async move { controller.refresh().await });
                        }
                    }
                >
                    <RefreshCw attr:class=move || if loading() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                </button>
            </div>

            <ContentDialog panel=panel on_submit=on_submit />

            <div role="tablist" class="tabs tabs-boxed w-fit">
                <a role="tab" class=move || tab_class(ContentKind::Video) on:click=move |_| list_tab.set(ContentKind::Video)>
                    <Play attr:class="h-4 w-4" /> "Vídeos (" {video_count} ")"
                </a>
                <a role="tab" class=move || tab_class(ContentKind::Article) on:click=move |_| list_tab.set(ContentKind::Article)>
                    <FileText attr:class="h-4 w-4" /> "Artigos (" {article_count} ")"
                </a>
            </div>

            <Show when=move || !loading() fallback=|| view! { <Spinner /> }>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    <Show
                        when=move || list_tab.get() == ContentKind::Video
                        fallback=move || view! {
                            <For
                                each=move || panel.with(|p| p.articles.clone())
                                key=|a| (a.id, a.title.clone())
                                children=move |article| {
                                    let id = article.id;
                                    let excerpt = article.excerpt();
                                    let date = article.created_at.to_locale_date();
                                    let title = article.title.clone();
                                    view! {
                                        <AdminItem
                                            title=title
                                            date=date
                                            text=excerpt
                                            on_edit=move || panel.update(|p| p.edit_article(&article))
                                            on_delete=move || on_delete.run((ContentKind::Article, id))
                                        />
                                    }
                                }
                            />
                        }
                    >
                        <For
                            each=move || panel.with(|p| p.videos.clone())
                            key=|v| (v.id, v.title.clone())
                            children=move |video| {
                                let id = video.id;
                                let date = video.created_at.to_locale_date();
                                let title = video.title.clone();
                                let description = video.description.clone();
                                view! {
                                    <AdminItem
                                        title=title
                                        date=date
                                        text=description
                                        on_edit=move || panel.update(|p| p.edit_video(&video))
                                        on_delete=move || on_delete.run((ContentKind::Video, id))
                                    />
                                }
                            }
                        />
                    </Show>
                </div>
            </Show>
        </div>
    }
}

/// 管理列表中的单个条目
#[component]
fn AdminItem(
    title: String,
    date: String,
    text: String,
    on_edit: impl Fn() + 'static,
    on_delete: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title line-clamp-2">{title}</h2>
                <p class="text-sm text-base-content/60 grow-0">{date}</p>
                <p class="text-sm text-base-content/70 line-clamp-3">{text}</p>
                <div class="card-actions mt-2">
                    <button class="btn btn-outline btn-sm gap-1" on:click=move |_| on_edit()>
                        <Pencil attr:class="h-4 w-4" /> "Editar"
                    </button>
                    <button class="btn btn-outline btn-error btn-sm gap-1" on:click=move |_| on_delete()>
                        <Trash2 attr:class="h-4 w-4" /> "Excluir"
                    </button>
                </div>
            </div>
        </div>
    }
}
