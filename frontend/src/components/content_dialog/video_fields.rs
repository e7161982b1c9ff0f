//! 视频表单字段
//!
//! 直接读写 `AdminPanel::video_form`，不持有额外状态。

use crate::admin::AdminPanel;
use leptos::prelude::*;

#[component]
pub fn VideoFields(panel: RwSignal<AdminPanel>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for="video-title" class="label">
                <span class="label-text">"Título"</span>
            </label>
            <input id="video-title" required
                type="text"
                on:input=move |ev| panel.update(|p| p.video_form.title = event_target_value(&ev))
                prop:value=move || panel.with(|p| p.video_form.title.clone())
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="video-url" class="label">
                <span class="label-text">"URL do Vídeo"</span>
            </label>
            <input id="video-url" required
                type="url"
                placeholder="https://www.youtube.com/watch?v=..."
                on:input=move |ev| panel.update(|p| p.video_form.url = event_target_value(&ev))
                prop:value=move || panel.with(|p| p.video_form.url.clone())
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="video-thumbnail" class="label">
                <span class="label-text">"URL da Thumbnail (opcional)"</span>
            </label>
            <input id="video-thumbnail"
                type="url"
                on:input=move |ev| panel.update(|p| p.video_form.thumbnail_url = event_target_value(&ev))
                prop:value=move || panel.with(|p| p.video_form.thumbnail_url.clone())
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="video-description" class="label">
                <span class="label-text">"Descrição"</span>
            </label>
            <textarea id="video-description" required
                rows="4"
                on:input=move |ev| panel.update(|p| p.video_form.description = event_target_value(&ev))
                prop:value=move || panel.with(|p| p.video_form.description.clone())
                class="textarea textarea-bordered w-full"
            ></textarea>
        </div>
    }
}
