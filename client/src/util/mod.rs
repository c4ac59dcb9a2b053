//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and presentation
//! rules from page and component logic to improve reuse and testability.

pub mod collate;
pub mod debounce;
pub mod display_name;
pub mod form;
pub mod format;
pub mod storage;
