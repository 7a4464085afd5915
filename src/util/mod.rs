//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document
//! attributes, navigation) and process-wide lookups (translations, handler
//! registries) from component logic to improve reuse and testability.

pub mod browser;
pub mod dark_mode;
pub mod i18n;
pub mod registry;
pub mod storage;
