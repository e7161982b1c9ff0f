//! 文章表单字段

use crate::admin::AdminPanel;
use leptos::prelude::*;

#[component]
pub fn ArticleFields(panel: RwSignal<AdminPanel>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for="article-title" class="label">
                <span class="label-text">"Título"</span>
            </label>
            <input id="article-title" required
                type="text"
                on:input=move |ev| panel.update(|p| p.article_form.title = event_target_value(&ev))
                prop:value=move || panel.with(|p| p.article_form.title.clone())
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="article-summary" class="label">
                <span class="label-text">"Resumo (opcional)"</span>
            </label>
            <textarea id="article-summary"
                rows="2"
                on:input=move |ev| panel.update(|p| p.article_form.summary = event_target_value(&ev))
                prop:value=move || panel.with(|p| p.article_form.summary.clone())
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>
        <div class="form-control">
            <label for="article-content" class="label">
                <span class="label-text">"Conteúdo"</span>
            </label>
            <textarea id="article-content" required
                rows="10"
                on:input=move |ev| panel.update(|p| p.article_form.content = event_target_value(&ev))
                prop:value=move || panel.with(|p| p.article_form.content.clone())
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>
    }
}
