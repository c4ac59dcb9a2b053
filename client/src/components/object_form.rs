//! Renders a [`FormState`] as inputs and writes edits back into it.

use leptos::prelude::*;

use crate::net::types::{FieldType, ObjectField};
use crate::util::form::{
    FormState, InputKind, OptionLookups, SELECT_PLACEHOLDER, STATUS_OPTIONS, checkbox_caption, field_label,
    input_kind, layout_class, select_options,
};

fn field_input(form: RwSignal<FormState>, lookups: Signal<OptionLookups>, field: ObjectField) -> AnyView {
    let name = field.field_name.clone();
    let input_id = format!("field-{name}");
    let read_only = form.with_untracked(|f| f.is_read_only(&name));
    let value = {
        let name = name.clone();
        move || form.with(|f| f.text(&name))
    };
    let on_text = {
        let name = name.clone();
        move |ev: leptos::ev::Event| {
            let next = event_target_value(&ev);
            form.update(|f| f.set_text(&name, next));
        }
    };

    match input_kind(field.field_type) {
        InputKind::Text => view! {
            <input type="text" id=input_id prop:value=value readonly=read_only on:input=on_text />
        }
        .into_any(),
        InputKind::Textarea(rows) => view! {
            <textarea id=input_id rows=rows.to_string() prop:value=value on:input=on_text></textarea>
        }
        .into_any(),
        InputKind::Richtext => view! {
            <textarea id=input_id class="richtext-source" rows="8" prop:value=value on:input=on_text></textarea>
        }
        .into_any(),
        InputKind::Number(step) => view! {
            <input type="number" id=input_id step=step prop:value=value on:input=on_text />
        }
        .into_any(),
        InputKind::Date => view! {
            <input type="date" id=input_id prop:value=value on:input=on_text />
        }
        .into_any(),
        InputKind::DatetimeLocal => view! {
            <input type="datetime-local" id=input_id prop:value=value on:input=on_text />
        }
        .into_any(),
        InputKind::Checkbox => {
            let caption = checkbox_caption(&field);
            let checked_name = name.clone();
            view! {
                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        id=input_id
                        prop:checked=move || form.with(|f| f.checked(&checked_name))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.set_checked(&name, checked));
                        }
                    />
                    {caption}
                </label>
            }
            .into_any()
        }
        InputKind::Select => {
            let options = move || {
                lookups.with(|l| select_options(&field, l))
                    .into_iter()
                    .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                    .collect::<Vec<_>>()
            };
            view! {
                <select id=input_id prop:value=value on:change=on_text>
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {options}
                </select>
            }
            .into_any()
        }
    }
}

/// Inputs for every schema field followed by the metadata section.
#[component]
pub fn ObjectForm(form: RwSignal<FormState>, #[prop(into)] lookups: Signal<OptionLookups>) -> impl IntoView {
    // Inputs are rebuilt only when the schema changes, not on every keystroke.
    let schema = Memo::new(move |_| form.with(|f| f.fields.clone()));
    let fields = move || {
        schema
            .get()
            .into_iter()
            .map(|field| {
                let name = field.field_name.clone();
                let label = field_label(&field);
                let help = field
                    .help_text
                    .clone()
                    .filter(|h| !h.trim().is_empty() && field.field_type != FieldType::Boolean);
                let class = move || {
                    let base = format!("form-group {}", layout_class(field.field_type));
                    if form.with(|f| f.errors.contains(&name)) { format!("{base} error") } else { base }
                };
                let input_id = format!("field-{}", field.field_name);
                let input = field_input(form, lookups, field.clone());
                view! {
                    <div class=class>
                        <label for=input_id>{label}</label>
                        {input}
                        {help.map(|h| view! { <small class="form-help">{h}</small> })}
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let show_creation = move || form.with(|f| f.mode.shows_creation_metadata());

    view! {
        <div class="form-grid">{fields}</div>
        <fieldset class="form-metadata">
            <legend>"Metadata"</legend>
            <div class="form-group form-group-compact">
                <label for="meta-status">"Status"</label>
                <select
                    id="meta-status"
                    prop:value=move || form.with(|f| f.status.clone())
                    on:change=move |ev| {
                        let status = event_target_value(&ev);
                        form.update(|f| f.status = status);
                    }
                >
                    {STATUS_OPTIONS
                        .iter()
                        .map(|s| view! { <option value=*s>{*s}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <Show when=show_creation>
                <div class="form-group form-group-compact">
                    <label for="meta-version">"Version"</label>
                    <input type="text" id="meta-version" readonly=true prop:value=move || form.with(|f| f.version.clone()) />
                </div>
                <div class="form-group form-group-compact">
                    <label for="meta-main-id">"Huvud-ID"</label>
                    <input
                        type="text"
                        id="meta-main-id"
                        placeholder="Genereras automatiskt"
                        prop:value=move || form.with(|f| f.main_id.clone())
                        on:input=move |ev| {
                            let main_id = event_target_value(&ev);
                            form.update(|f| f.main_id = main_id);
                        }
                    />
                </div>
            </Show>
        </fieldset>
    }
}
