//! Documents tab: drag-and-drop/multi-select upload and the document list.
//!
//! Files upload one at a time so the progress bar advances per file and a
//! failure stops the batch without leaving later requests in flight.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::api_objects::document_download_url;
use crate::net::types::Document;
use crate::state::ui::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::ui::{ToastKind, show_toast};
use crate::util::format::{file_icon, format_date, format_file_size, is_pdf, pdf_open_url};

pub const DOCUMENTS_EMPTY_TEXT: &str = "Inga dokument uppladdade ännu";

/// Upload `files` in order, then refresh the list.
#[cfg(feature = "hydrate")]
fn upload_all(
    object_id: i64,
    files: Vec<web_sys::File>,
    description: String,
    progress: RwSignal<Option<u32>>,
    toasts: RwSignal<ToastState>,
    on_changed: Callback<()>,
) {
    use crate::net::http::UploadFields;
    use crate::util::format::upload_percent;

    if files.is_empty() {
        return;
    }
    leptos::task::spawn_local(async move {
        let fields = UploadFields {
            description: Some(description).filter(|d| !d.trim().is_empty()),
            document_type: None,
        };
        let total = files.len();
        progress.set(Some(0));
        for (i, file) in files.iter().enumerate() {
            if let Err(e) = crate::net::api_objects::upload_document(object_id, file, &fields).await {
                log::error!("upload {} for object {object_id} failed: {e}", file.name());
                show_toast(toasts, ToastKind::Error, e.user_message("Uppladdning misslyckades"));
                progress.set(None);
                on_changed.run(());
                return;
            }
            progress.set(Some(upload_percent(i + 1, total)));
        }
        show_toast(toasts, ToastKind::Success, "Dokument uppladdade");
        progress.set(None);
        on_changed.run(());
    });
}

#[cfg(feature = "hydrate")]
fn file_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn FileUpload(object_id: i64, documents: RwSignal<Vec<Document>>, on_changed: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let progress = RwSignal::new(None::<u32>);
    let dragover = RwSignal::new(false);
    let description = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<i64>);
    let input_id = format!("file-input-{object_id}");

    let on_select = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let input = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
            let files = file_list(input.as_ref().and_then(web_sys::HtmlInputElement::files));
            if let Some(input) = input {
                input.set_value("");
            }
            upload_all(object_id, files, description.get_untracked(), progress, toasts, on_changed);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragover.set(false);
        #[cfg(feature = "hydrate")]
        {
            let files = file_list(ev.data_transfer().and_then(|dt| dt.files()));
            upload_all(object_id, files, description.get_untracked(), progress, toasts, on_changed);
        }
    };

    let delete_confirmed = Callback::new(move |()| {
        let Some(document_id) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api_objects::delete_document(document_id).await {
                    Ok(()) => {
                        show_toast(toasts, ToastKind::Success, "Dokument borttaget");
                        on_changed.run(());
                    }
                    Err(e) => {
                        log::error!("delete document {document_id} failed: {e}");
                        show_toast(toasts, ToastKind::Error, e.user_message("Kunde inte ta bort dokument"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (document_id, toasts, on_changed);
        }
    });

    let list = move || {
        let docs = documents.get();
        if docs.is_empty() {
            return view! { <p class="empty-state">{DOCUMENTS_EMPTY_TEXT}</p> }.into_any();
        }
        docs.into_iter()
            .map(|doc| {
                let name = doc.display_name().to_owned();
                let meta = format!(
                    "{} • {} • {}",
                    doc.document_type.clone().filter(|t| !t.trim().is_empty()).unwrap_or_else(|| "Okänd filtyp".to_owned()),
                    doc.file_size.map_or_else(|| "N/A".to_owned(), format_file_size),
                    format_date(doc.uploaded_at.as_deref()),
                );
                let open_url = is_pdf(doc.mime_type.as_deref(), &name)
                    .then(|| pdf_open_url(&document_download_url(doc.id, false)));
                let download_url = document_download_url(doc.id, true);
                let id = doc.id;
                view! {
                    <div class="document-item">
                        <div class="document-icon">{file_icon(&doc.filename)}</div>
                        <div class="document-info">
                            <strong>{name}</strong>
                            <small>{meta}</small>
                            {doc.description.clone().filter(|d| !d.trim().is_empty()).map(|d| view! { <small class="document-description">{d}</small> })}
                        </div>
                        <div class="document-actions">
                            {open_url.map(|url| view! { <a class="btn btn--small" href=url target="_blank" rel="noopener">"Öppna"</a> })}
                            <a class="btn btn--small" href=download_url>"Ladda ner"</a>
                            <button class="btn btn--small btn--danger" on:click=move |_| pending_delete.set(Some(id))>"Ta bort"</button>
                        </div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="file-upload">
            <div
                class=move || if dragover.get() { "upload-area dragover" } else { "upload-area" }
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragover.set(true);
                }
                on:dragleave=move |_| dragover.set(false)
                on:drop=on_drop
            >
                <div class="upload-content">
                    <p>
                        "Dra och släpp filer här eller "
                        <label for=input_id.clone() class="file-label">"välj filer"</label>
                    </p>
                    <input type="file" id=input_id multiple=true class="visually-hidden" on:change=on_select />
                    <input
                        type="text"
                        class="upload-description"
                        placeholder="Beskrivning (valfritt)"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <Show when=move || progress.get().is_some()>
                <div class="progress-bar">
                    <div class="progress-fill" style=move || format!("width: {}%", progress.get().unwrap_or(0))></div>
                </div>
            </Show>
            <div class="documents-list">
                <h4>"Uppladdade dokument"</h4>
                {list}
            </div>
            <Show when=move || pending_delete.with(Option::is_some)>
                <ConfirmDialog
                    message="Är du säker på att du vill ta bort detta dokument?"
                    on_confirm=delete_confirmed
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
        </div>
    }
}
