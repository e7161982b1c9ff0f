use crate::api::use_api;
use crate::components::cards::{ArticleCard, Spinner, VideoCard};
use crate::components::icons::{FileText, Play};
use crate::content::{ContentBackend, load_collection, recent};
use crate::web::router::Link;
use jornal_shared::{Article, RECENT_LIMIT, Video};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn HomePage() -> impl IntoView {
    let api = use_api();

    let recent_videos = RwSignal::new(Vec::<Video>::new());
    let recent_articles = RwSignal::new(Vec::<Article>::new());
    let loading = RwSignal::new(true);

    // 两个集合并发加载，任一失败只影响自身
    spawn_local(async move {
        let (videos, articles) = futures::join!(
            load_collection("vídeos", api.list_videos()),
            load_collection("artigos", api.list_articles()),
        );
        // 页面可能已卸载
        recent_videos.try_set(recent(&videos, RECENT_LIMIT));
        recent_articles.try_set(recent(&articles, RECENT_LIMIT));
        loading.try_set(false);
    });

    let see_all = Signal::derive(|| "btn btn-outline btn-sm".to_string());

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
            <div class="max-w-7xl mx-auto px-4 py-8">
                <div class="text-center mb-12">
                    <h1 class="text-4xl font-bold mb-4">"Bem-vindo ao Jornal TGI"</h1>
                    <p class="text-xl text-base-content/70 max-w-3xl mx-auto">
                        "Seu portal de notícias e informações. Acompanhe os últimos vídeos e artigos sobre os temas mais relevantes do momento."
                    </p>
                </div>

                <section class="mb-12">
                    <div class="flex justify-between items-center mb-6">
                        <h2 class="text-2xl font-bold flex items-center gap-2">
                            <Play attr:class="h-6 w-6 text-primary" /> "Vídeos Recentes"
                        </h2>
                        <Link to="/videos" class=see_all>"Ver todos"</Link>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || recent_videos.get()
                            key=|v| v.id
                            children=move |video| view! { <VideoCard video=video /> }
                        />
                    </div>
                </section>

                <section>
                    <div class="flex justify-between items-center mb-6">
                        <h2 class="text-2xl font-bold flex items-center gap-2">
                            <FileText attr:class="h-6 w-6 text-primary" /> "Artigos Recentes"
                        </h2>
                        <Link to="/articles" class=see_all>"Ver todos"</Link>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || recent_articles.get()
                            key=|a| a.id
                            children=move |article| {
                                let path = format!("/articles/{}", article.id);
                                view! {
                                    <ArticleCard article=article>
                                        <Link to=path class=see_all>"Ler mais"</Link>
                                    </ArticleCard>
                                }
                            }
                        />
                    </div>
                </section>
            </div>
        </Show>
    }
}
