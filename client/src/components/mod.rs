//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin client's widgets while reading/writing shared
//! state from Leptos context providers. Pure behavior lives in `state` and
//! `util`; components only wire it to the DOM.

pub mod confirm_dialog;
pub mod detail_panel;
pub mod file_upload;
pub mod loading_spinner;
pub mod nav_bar;
pub mod object_form;
pub mod object_modal;
pub mod relation_manager;
pub mod relation_modal;
pub mod system_table;
pub mod toast_host;
pub mod tree_view;
