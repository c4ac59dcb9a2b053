//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::nav_bar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::net::http::register_loading;
use crate::pages::{admin::AdminPage, objects::ObjectsPage, products::ProductsPage};
use crate::state::app::AppState;
#[cfg(feature = "hydrate")]
use crate::state::app::{AppAction, dispatch};
use crate::state::history::DetailHistory;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastKind, show_toast};
use crate::state::ui::{LoadingState, ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="sv">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, loads the schema caches once the
/// client is running and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app = RwSignal::new(AppState::default());
    let toasts = RwSignal::new(ToastState::default());
    let loading = RwSignal::new(LoadingState::default());
    let history = RwSignal::new(DetailHistory::default());

    provide_context(app);
    provide_context(toasts);
    provide_context(loading);
    provide_context(history);
    register_loading(loading);

    // Browser storage is only read after hydration so the first client
    // render matches the server markup.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if AppState::restore().tree_view_active {
                dispatch(app, AppAction::ToggleTreeView);
            }
            history.set(DetailHistory::load());

            leptos::task::spawn_local(async move {
                use crate::net::api_schema;

                if let Err(e) = api_schema::health().await {
                    log::error!("backend health check failed: {e}");
                    show_toast(toasts, ToastKind::Error, "API anslutning misslyckades");
                }
                match api_schema::list_object_types().await {
                    Ok(types) => dispatch(app, AppAction::SetObjectTypes(types)),
                    Err(e) => {
                        log::error!("load object types failed: {e}");
                        show_toast(toasts, ToastKind::Error, "Kunde inte ladda objekttyper");
                    }
                }
                match api_schema::tree_display_config().await {
                    Ok(config) => dispatch(app, AppAction::SetTreeDisplay(config)),
                    Err(e) => log::warn!("tree display config unavailable: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (app, toasts, history);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/byggdel-ui.css"/>
        <Title text="Byggdelssystem"/>

        <Router>
            <NavBar/>
            <main class="main-content">
                <Routes fallback=|| view! { <p class="empty-state">"Sidan hittades inte."</p> }>
                    <Route path=StaticSegment("") view=ObjectsPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                </Routes>
            </main>
            <ToastHost/>
            <LoadingSpinner/>
        </Router>
    }
}
