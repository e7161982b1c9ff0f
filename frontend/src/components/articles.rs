use crate::api::use_api;
use crate::components::cards::{ArticleCard, EmptyState, Spinner};
use crate::components::icons::{Calendar, FileText, Search};
use crate::content::{ContentBackend, filter_items, load_collection};
use crate::web::router::Link;
use jornal_shared::{Article, ContentId};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 文章正文（列表弹窗与详情页共用）
#[component]
fn ArticleBody(article: Article) -> impl IntoView {
    let summary = article.summary.filter(|s| !s.is_empty());

    view! {
        <h2 class="text-2xl font-bold mb-2">{article.title}</h2>
        <p class="text-sm text-base-content/60 flex items-center gap-1 mb-4">
            <Calendar attr:class="h-4 w-4" />
            "Publicado em " {article.created_at.to_locale_date()}
        </p>
        {summary.map(|summary| view! {
            <div class="bg-base-200 rounded-box p-4 mb-4">
                <h3 class="font-semibold mb-2">"Resumo"</h3>
                <p class="text-sm leading-relaxed">{summary}</p>
            </div>
        })}
        <div class="whitespace-pre-wrap leading-relaxed">{article.content}</div>
    }
}

#[component]
pub fn ArticlesPage() -> impl IntoView {
    let api = use_api();

    let articles = RwSignal::new(Vec::<Article>::new());
    let loading = RwSignal::new(true);
    let search_term = RwSignal::new(String::new());
    let selected = RwSignal::new(Option::<Article>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    spawn_local(async move {
        let loaded = load_collection("artigos", api.list_articles()).await;
        articles.try_set(loaded);
        loading.try_set(false);
    });

    let filtered =
        Memo::new(move |_| articles.with(|all| search_term.with(|t| filter_items(all, t))));
    let searching = Signal::derive(move || !search_term.with(String::is_empty));

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            let open = selected.with(Option::is_some);
            if open && !dialog.open() {
                let _ = dialog.show_modal();
            } else if !open && dialog.open() {
                dialog.close();
            }
        }
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
            <div class="max-w-7xl mx-auto px-4 py-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-4 flex items-center gap-3">
                        <FileText attr:class="h-8 w-8 text-primary" /> "Artigos"
                    </h1>
                    <p class="text-base-content/70 mb-6">
                        "Leia nossos artigos mais recentes e informativos."
                    </p>
                    <label class="input input-bordered flex items-center gap-2 max-w-md">
                        <Search attr:class="h-4 w-4 opacity-60" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Buscar artigos..."
                            on:input=move |ev| search_term.set(event_target_value(&ev))
                            prop:value=search_term
                        />
                    </label>
                </div>

                <Show
                    when=move || !filtered.with(Vec::is_empty)
                    fallback=move || view! {
                        <EmptyState
                            searching=searching
                            titles=("Nenhum artigo encontrado", "Nenhum artigo disponível")
                            hints=("Tente buscar com outros termos.", "Novos artigos serão adicionados em breve.")
                        >
                            <FileText attr:class="h-16 w-16" />
                        </EmptyState>
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || filtered.get()
                            key=|a| a.id
                            children=move |article| {
                                let target = article.clone();
                                view! {
                                    <ArticleCard article=article>
                                        <button
                                            class="btn btn-outline btn-sm w-full gap-2"
                                            on:click=move |_| selected.set(Some(target.clone()))
                                        >
                                            <FileText attr:class="h-4 w-4" /> "Ler Artigo"
                                        </button>
                                    </ArticleCard>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </Show>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| selected.set(None)>
            <div class="modal-box max-w-4xl max-h-[90vh]">
                <form method="dialog">
                    <button class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2">"✕"</button>
                </form>
                {move || selected.get().map(|article| view! { <ArticleBody article=article /> })}
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"Fechar"</button>
            </form>
        </dialog>
    }
}

/// 单篇文章页面，加载失败时显示未找到提示
#[component]
pub fn ArticleDetailPage(id: ContentId) -> impl IntoView {
    let api = use_api();

    let article = RwSignal::new(Option::<Article>::None);
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match api.get_article(id).await {
            Ok(found) => {
                article.try_set(Some(found));
            }
            Err(e) => log_error!("Erro ao carregar artigo {}: {}", id, e),
        }
        loading.try_set(false);
    });

    let back_class = Signal::derive(|| "btn btn-ghost btn-sm mb-6".to_string());

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
            <div class="max-w-4xl mx-auto px-4 py-8">
                <Link to="/articles" class=back_class>"← Voltar para artigos"</Link>
                {move || match article.get() {
                    Some(article) => view! {
                        <article class="card bg-base-100 shadow">
                            <div class="card-body">
                                <ArticleBody article=article />
                            </div>
                        </article>
                    }
                    .into_any(),
                    None => view! {
                        <div class="text-center py-12">
                            <FileText attr:class="h-16 w-16 mx-auto mb-4 opacity-40" />
                            <h3 class="text-lg font-medium mb-2">"Artigo não encontrado"</h3>
                            <p class="text-base-content/70">
                                "O artigo solicitado não existe ou foi removido."
                            </p>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </Show>
    }
}
