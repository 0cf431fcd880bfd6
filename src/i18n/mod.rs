//! Translated message catalog consumed by the locale provider.

pub mod catalog;
