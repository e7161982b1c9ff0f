use crate::api::use_api;
use crate::components::cards::{EmptyState, Spinner, VideoCard};
use crate::components::icons::{Play, Search};
use crate::content::{ContentBackend, filter_items, load_collection};
use jornal_shared::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn VideosPage() -> impl IntoView {
    let api = use_api();

    let videos = RwSignal::new(Vec::<Video>::new());
    let loading = RwSignal::new(true);
    let search_term = RwSignal::new(String::new());

    spawn_local(async move {
        let loaded = load_collection("vídeos", api.list_videos()).await;
        videos.try_set(loaded);
        loading.try_set(false);
    });

    let filtered = Memo::new(move |_| videos.with(|all| search_term.with(|t| filter_items(all, t))));
    let searching = Signal::derive(move || !search_term.with(String::is_empty));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
            <div class="max-w-7xl mx-auto px-4 py-8">
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-4 flex items-center gap-3">
                        <Play attr:class="h-8 w-8 text-primary" /> "Vídeos"
                    </h1>
                    <p class="text-base-content/70 mb-6">
                        "Assista aos nossos vídeos mais recentes e informativos."
                    </p>
                    <label class="input input-bordered flex items-center gap-2 max-w-md">
                        <Search attr:class="h-4 w-4 opacity-60" />
                        <input
                            type="text"
                            class="grow"
                            placeholder="Buscar vídeos..."
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
                            titles=("Nenhum vídeo encontrado", "Nenhum vídeo disponível")
                            hints=("Tente buscar com outros termos.", "Novos vídeos serão adicionados em breve.")
                        >
                            <Play attr:class="h-16 w-16" />
                        </EmptyState>
                    }
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <For
                            each=move || filtered.get()
                            key=|v| v.id
                            children=move |video| view! { <VideoCard video=video /> }
                        />
                    </div>
                </Show>
            </div>
        </Show>
    }
}
