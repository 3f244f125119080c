//! A file backed host used by the command line tool.
//!
//! The site keeps the schema of the known document types, the single
//! documents (such as the settings singleton), the custom fields and the
//! document event hooks in a single JSON file.

use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::host::SETTINGS_DOCTYPE;
use crate::constants::settings::INSERT_AFTER;
use crate::document::{DocField, DocMeta, Document};
use crate::error::*;
use crate::host::{CustomFieldStore, HookRegistry, MetaProvider, SettingsProvider, SettingsStore};
use crate::install::CustomField;
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    #[serde(default)]
    pub meta: BTreeMap<String, DocMeta>,
    #[serde(default)]
    pub singles: BTreeMap<String, Document>,
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub hooks: BTreeMap<String, Vec<String>>,
}

impl Default for Site {
    /// A site with the stock settings singleton and no custom fields
    fn default() -> Site {
        let settings_meta = DocMeta::new(vec![
            DocField::new("default_company", "Link"),
            DocField::new("country", "Link"),
            DocField::new("default_currency", "Link"),
            DocField::new(INSERT_AFTER, "Link"),
        ]);

        Site {
            meta: BTreeMap::from([(SETTINGS_DOCTYPE.to_string(), settings_meta)]),
            singles: BTreeMap::from([(
                SETTINGS_DOCTYPE.to_string(),
                Document::new(SETTINGS_DOCTYPE),
            )]),
            custom_fields: Vec::new(),
            hooks: BTreeMap::new(),
        }
    }
}

impl Site {
    /// Loads the site from the given file, or a default site if the file does not exist.
    ///
    /// # Arguments
    /// * `path` - The path of the site file
    ///
    /// # Returns
    /// The loaded site
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid site
    pub fn load(path: &Path) -> Result<Site> {
        let mut content = String::new();
        match File::open(path) {
            Ok(mut file) => {
                file.read_to_string(&mut content)?;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Site::default()),
            Err(e) => return Err(Error::Io(e)),
        }
        serde_json::from_str(&content).map_err(|e| {
            Error::JsonError(format!("invalid site file {:?}: {}", path.display(), e))
        })
    }

    /// Writes the site to the given file, creating its parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Registers (or replaces) the schema of a document type
    pub fn add_meta<S: Into<String>>(&mut self, doctype: S, meta: DocMeta) {
        self.meta.insert(doctype.into(), meta);
    }
}

impl MetaProvider for Site {
    /// Returns the schema of the document type with its custom fields placed
    /// after the field they are inserted after (or at the end).
    fn get_meta(&self, doctype: &str) -> Result<DocMeta> {
        let custom: Vec<&CustomField> = self
            .custom_fields
            .iter()
            .filter(|f| f.dt == doctype)
            .collect();

        let mut meta = match self.meta.get(doctype) {
            Some(meta) => meta.clone(),
            None if !custom.is_empty() => DocMeta::default(),
            None => return Err(Error::DoctypeNotFound(doctype.to_string())),
        };

        for field in custom {
            let doc_field = DocField {
                fieldname: field.fieldname.clone(),
                fieldtype: field.fieldtype.clone(),
                label: Some(field.label.clone()),
            };
            match meta
                .fields
                .iter()
                .position(|f| f.fieldname == field.insert_after)
            {
                Some(idx) => meta.fields.insert(idx + 1, doc_field),
                None => meta.fields.push(doc_field),
            }
        }
        Ok(meta)
    }
}

impl SettingsProvider for Site {
    fn global_settings(&self) -> Result<GlobalSettings> {
        self.singles
            .get(SETTINGS_DOCTYPE)
            .map(GlobalSettings::from_document)
            .ok_or_else(|| Error::SingleNotFound(SETTINGS_DOCTYPE.to_string()))
    }
}

impl SettingsStore for Site {
    fn save_global_settings(&mut self, settings: &GlobalSettings) -> Result<()> {
        let doc = self
            .singles
            .entry(SETTINGS_DOCTYPE.to_string())
            .or_insert_with(|| Document::new(SETTINGS_DOCTYPE));
        settings.write_to(doc);
        Ok(())
    }

    fn has_settings_field(&self, fieldname: &str) -> Result<bool> {
        Ok(self.get_meta(SETTINGS_DOCTYPE)?.has_field(fieldname))
    }
}

impl CustomFieldStore for Site {
    fn custom_field_exists(&self, dt: &str, fieldname: &str) -> bool {
        self.custom_fields
            .iter()
            .any(|f| f.dt == dt && f.fieldname == fieldname)
    }

    fn insert_custom_field(&mut self, field: CustomField) -> Result<()> {
        if self.custom_field_exists(&field.dt, &field.fieldname) {
            return Err(Error::CustomFieldExists(field.fieldname));
        }
        self.custom_fields.push(field);
        Ok(())
    }

    fn delete_custom_field(&mut self, dt: &str, fieldname: &str) -> Result<bool> {
        let before = self.custom_fields.len();
        self.custom_fields
            .retain(|f| !(f.dt == dt && f.fieldname == fieldname));
        Ok(self.custom_fields.len() != before)
    }
}

impl HookRegistry for Site {
    fn hooks(&self, event: &str) -> Vec<String> {
        self.hooks.get(event).cloned().unwrap_or_default()
    }

    fn register_hook(&mut self, event: &str, path: &str) -> bool {
        let hooks = self.hooks.entry(event.to_string()).or_default();
        if hooks.iter().any(|h| h == path) {
            false
        } else {
            hooks.push(path.to_string());
            true
        }
    }

    fn unregister_hook(&mut self, event: &str, path: &str) -> bool {
        let Some(hooks) = self.hooks.get_mut(event) else {
            return false;
        };
        let before = hooks.len();
        hooks.retain(|h| h != path);
        let removed = hooks.len() != before;
        if hooks.is_empty() {
            self.hooks.remove(event);
        }
        removed
    }
}
