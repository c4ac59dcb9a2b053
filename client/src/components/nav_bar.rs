//! Top navigation between the objects, admin and products pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::app::{AppState, View};

#[component]
pub fn NavBar() -> impl IntoView {
    let app = expect_context::<RwSignal<AppState>>();

    view! {
        <header class="app-header">
            <h1 class="app-title">"Byggdelssystem"</h1>
            <nav class="app-nav">
                {View::ALL
                    .into_iter()
                    .map(|view| {
                        let class = move || if app.with(|s| s.view == view) { "nav-btn active" } else { "nav-btn" };
                        view! {
                            <A href=view.path() attr:class=class>
                                {view.label()}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
