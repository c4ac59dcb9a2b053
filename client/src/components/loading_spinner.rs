//! Global spinner shown while a request has been pending past the reveal
//! delay.

use leptos::prelude::*;

use crate::state::ui::LoadingState;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    let loading = expect_context::<RwSignal<LoadingState>>();

    view! {
        <Show when=move || loading.get().visible>
            <div class="loading-overlay" aria-busy="true">
                <div class="spinner"></div>
            </div>
        </Show>
    }
}
