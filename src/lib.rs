//! `recase` rewrites the casing of document text fields before they are saved.
//!
//! The core of this crate is [`case::change_case`], a pure function applying
//! one of seven case styles to a text. Around it, [`hook::SaveHook`] applies
//! the globally configured style to the free-text fields of a document, and
//! [`install`] / [`diagnostics`] manage the settings fields in the host.
//!
//! The host framework is reached through the traits in [`host`]; [`site::Site`]
//! is a file backed implementation used by the `recase` binary.
//!
//! "Hello world" example:
//! ```
//! use recase::prelude::*;
//!
//! let settings = GlobalSettings::new(true, Style::PascalCase);
//! let meta = DocMeta::new(vec![DocField::new("subject", "Data")]);
//! let mut doc = Document::new("ToDo").with("subject", "hello world");
//!
//! let report = SaveHook::new(&settings, &meta).apply_global_case(&mut doc, "before_save");
//!
//! assert_eq!(report.transformed(), 1);
//! assert_eq!(doc.get_str("subject"), Some("HelloWorld"));
//! assert_eq!(change_case("hello world", "UPPERCASE"), "HELLO WORLD");
//! ```

pub mod case;
pub mod config;
pub mod constants;
pub mod controller;
pub mod diagnostics;
pub mod document;
pub mod error;
pub mod hook;
pub mod host;
pub mod install;
pub mod log;
pub mod settings;
pub mod site;
pub mod string_utils;
pub mod style;
pub mod transforms;

/// The recase prelude
///
/// This module re-exports the most commonly used items from recase.
/// You can use it with `use recase::prelude::*;` to bring all common items into scope.
pub mod prelude {
    // Re-export commonly used traits
    pub use crate::host::{MetaProvider, SettingsProvider};
    pub use crate::transforms::Transform;

    // Re-export commonly used types
    pub use crate::document::{DocField, DocMeta, Document, FieldKind};
    pub use crate::error::Result;
    pub use crate::hook::{HookReport, SaveHook};
    pub use crate::settings::GlobalSettings;
    pub use crate::style::Style;

    // Re-export commonly used functions
    pub use crate::case::{change_case, preview_case_change};
}
