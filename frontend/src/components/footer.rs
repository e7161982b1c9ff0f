use crate::components::icons::Newspaper;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer footer-center bg-neutral text-neutral-content p-8 mt-auto">
            <aside class="flex flex-col items-center gap-4">
                <div class="flex items-center gap-2">
                    <Newspaper attr:class="h-8 w-8 text-primary" />
                    <span class="text-xl font-bold">"Jornal TGI"</span>
                </div>
                <p class="text-sm opacity-70">"Uma parceria com a RecordTV"</p>
                <p class="max-w-md opacity-70">
                    "Portal de notícias e informações desenvolvido para o TGI."
                </p>
                <p class="text-sm opacity-50">"© 2025 Jornal TGI. Todos os direitos reservados."</p>
            </aside>
        </footer>
    }
}
