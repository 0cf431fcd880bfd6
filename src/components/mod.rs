//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading/writing state from the
//! Leptos context providers installed by `App`.

pub mod locale_switcher;
pub mod toast_host;
