//! 内容编辑对话框
//!
//! 打开/关闭由 `AdminPanel::dialog_open` 驱动；两个标签页分别提交视频与文章表单。

mod article_fields;
mod video_fields;

use crate::admin::{AdminPanel, ContentKind};
use crate::components::icons::{FileText, Play};
use leptos::prelude::*;

use article_fields::ArticleFields;
use video_fields::VideoFields;

fn tab_class(active: bool) -> &'static str {
    if active { "tab tab-active gap-2" } else { "tab gap-2" }
}

#[component]
pub fn ContentDialog(
    panel: RwSignal<AdminPanel>,
    #[prop(into)] on_submit: Callback<ContentKind>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if panel.with(|p| p.dialog_open) {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let active_tab = move || panel.with(|p| p.active_tab);
    let submitting = move || panel.with(|p| p.submitting);
    let action = move || {
        if panel.with(|p| p.is_editing()) { "Atualizar" } else { "Criar" }
    };

    let submit_video = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(ContentKind::Video);
    };
    let submit_article = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(ContentKind::Article);
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| panel.update(AdminPanel::close_dialog)>
            <div class="modal-box max-w-2xl max-h-[90vh]">
                <h3 class="font-bold text-lg">
                    {move || if panel.with(|p| p.is_editing()) { "Editar Conteúdo" } else { "Adicionar Conteúdo" }}
                </h3>

                <div role="tablist" class="tabs tabs-boxed my-4">
                    <a role="tab"
                        class=move || tab_class(active_tab() == ContentKind::Video)
                        on:click=move |_| panel.update(|p| p.active_tab = ContentKind::Video)
                    >
                        <Play attr:class="h-4 w-4" /> "Vídeo"
                    </a>
                    <a role="tab"
                        class=move || tab_class(active_tab() == ContentKind::Article)
                        on:click=move |_| panel.update(|p| p.active_tab = ContentKind::Article)
                    >
                        <FileText attr:class="h-4 w-4" /> "Artigo"
                    </a>
                </div>

                <Show
                    when=move || active_tab() == ContentKind::Video
                    fallback=move || view! {
                        <form on:submit=submit_article class="space-y-4">
                            <ArticleFields panel=panel />
                            <button type="submit" class="btn btn-primary w-full" disabled=submitting>
                                {action} " Artigo"
                            </button>
                        </form>
                    }
                >
                    <form on:submit=submit_video class="space-y-4">
                        <VideoFields panel=panel />
                        <button type="submit" class="btn btn-primary w-full" disabled=submitting>
                            {action} " Vídeo"
                        </button>
                    </form>
                </Show>

                <div class="modal-action">
                    <button class="btn btn-ghost" on:click=move |_| panel.update(AdminPanel::close_dialog)>
                        "Cancelar"
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"Fechar"</button>
            </form>
        </dialog>
    }
}
