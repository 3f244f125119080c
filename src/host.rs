//! Seams between the plugin and the host framework.
//!
//! The save hook only needs to read the settings and the schema of a document
//! type; installation additionally manages custom fields, the settings record
//! and the document event hooks. [`crate::site::Site`] implements all of them.

use crate::document::DocMeta;
use crate::error::Result;
use crate::install::CustomField;
use crate::settings::GlobalSettings;

/// Provides the change case settings, read fresh on every call
pub trait SettingsProvider {
    fn global_settings(&self) -> Result<GlobalSettings>;
}

/// Provides the schema descriptor of a document type
pub trait MetaProvider {
    fn get_meta(&self, doctype: &str) -> Result<DocMeta>;
}

/// A fixed schema, used when the caller already knows the document layout
impl MetaProvider for DocMeta {
    fn get_meta(&self, _doctype: &str) -> Result<DocMeta> {
        Ok(self.clone())
    }
}

/// Fixed settings, used for previews and tests
impl SettingsProvider for GlobalSettings {
    fn global_settings(&self) -> Result<GlobalSettings> {
        Ok(self.clone())
    }
}

pub trait SettingsStore: SettingsProvider {
    /// Persists the settings into the settings singleton
    fn save_global_settings(&mut self, settings: &GlobalSettings) -> Result<()>;

    /// Checks whether the settings singleton has the given field
    fn has_settings_field(&self, fieldname: &str) -> Result<bool>;
}

pub trait CustomFieldStore {
    fn custom_field_exists(&self, dt: &str, fieldname: &str) -> bool;

    fn insert_custom_field(&mut self, field: CustomField) -> Result<()>;

    /// Removes the custom field, returning whether it existed
    fn delete_custom_field(&mut self, dt: &str, fieldname: &str) -> Result<bool>;
}

pub trait HookRegistry {
    /// Hook paths registered for the document event
    fn hooks(&self, event: &str) -> Vec<String>;

    /// Registers the hook path, returning false if it already was
    fn register_hook(&mut self, event: &str, path: &str) -> bool;

    /// Unregisters the hook path, returning whether it was registered
    fn unregister_hook(&mut self, event: &str, path: &str) -> bool;
}

/// Everything the installer and the diagnostics need from the host
pub trait Host: SettingsStore + MetaProvider + CustomFieldStore + HookRegistry {}

impl<T> Host for T where T: SettingsStore + MetaProvider + CustomFieldStore + HookRegistry {}
