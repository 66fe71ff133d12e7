//! Locale catalog and active-locale resolution.
mod catalog;
mod resolver;

pub use catalog::{lookup, Strings, CATALOG, DEFAULT_CODE};
pub use resolver::{primary_subtag, resolve_code, LocaleState};
