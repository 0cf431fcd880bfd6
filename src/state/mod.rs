//! Shared client-side state providers.
//!
//! DESIGN
//! ======
//! Each provider owns one concern (session, locale, notifications) behind a
//! `Copy` context handle installed by `App`. Accessors panic outside their
//! provider's subtree so a wiring mistake fails loudly at first render
//! instead of limping along with missing state.

pub mod locale;
pub mod session;
pub mod toast;
