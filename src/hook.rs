//! The "before save" document hook.
//!
//! The hook rewrites the free-text fields of a document using the globally
//! configured style. It never fails: every problem turns into a skipped
//! document or a failed field in the returned [`HookReport`], so the host's
//! save always proceeds.

use serde::Serialize;

use crate::case::CaseTransformer;
use crate::constants::host::{LOG_TITLE, SETTINGS_DOCTYPE};
use crate::constants::policy::{PRIVATE_FIELD_PREFIX, PROTECTED_DOCTYPES, SKIP_FIELDS};
use crate::document::{DocMeta, Document};
use crate::error::{Error, Result};
use crate::host::{MetaProvider, SettingsProvider};
use crate::string_utils::is_blank;
use crate::style::Style;
use crate::{debug, info_log};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The document has no value for the field
    Missing,
    /// The value is not a string
    NotText,
    /// The value is empty or whitespace only
    Blank,
    /// Identity, audit, tree or linkage field
    ProtectedField,
    /// Field name starting with an underscore
    PrivateField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "detail")]
pub enum FieldOutcome {
    Transformed,
    Unchanged,
    Skipped(SkipReason),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub fieldname: String,
    pub outcome: FieldOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum DocumentOutcome {
    Applied { transformed: usize },
    /// The document is the settings singleton itself
    SettingsDocument,
    SettingsUnavailable { cause: String },
    Disabled,
    NoStyle,
    ProtectedDoctype,
    SchemaUnavailable { cause: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookReport {
    pub doctype: String,
    pub event: String,
    pub outcome: DocumentOutcome,
    pub fields: Vec<FieldReport>,
}

impl HookReport {
    fn skipped(doc: &Document, event: &str, outcome: DocumentOutcome) -> Self {
        HookReport {
            doctype: doc.doctype.clone(),
            event: event.to_string(),
            outcome,
            fields: Vec::new(),
        }
    }

    /// Number of fields whose value was rewritten
    pub fn transformed(&self) -> usize {
        match self.outcome {
            DocumentOutcome::Applied { transformed } => transformed,
            _ => 0,
        }
    }

    /// Whether any field failed to transform
    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Fields that failed to transform, with the failure cause
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|f| match &f.outcome {
            FieldOutcome::Failed(cause) => Some((f.fieldname.as_str(), cause.as_str())),
            _ => None,
        })
    }
}

/// Checks whether documents of the given type must never be transformed
pub fn is_protected_doctype(doctype: &str) -> bool {
    PROTECTED_DOCTYPES.contains(&doctype)
}

/// Checks whether the field must never be transformed, returning the reason
pub fn protected_field_reason(fieldname: &str) -> Option<SkipReason> {
    if SKIP_FIELDS.contains(&fieldname) {
        Some(SkipReason::ProtectedField)
    } else if fieldname.starts_with(PRIVATE_FIELD_PREFIX) {
        Some(SkipReason::PrivateField)
    } else {
        None
    }
}

pub struct SaveHook<'a> {
    settings: &'a dyn SettingsProvider,
    meta: &'a dyn MetaProvider,
    transformer: CaseTransformer,
}

impl<'a> SaveHook<'a> {
    pub fn new(settings: &'a dyn SettingsProvider, meta: &'a dyn MetaProvider) -> Self {
        Self::with_transformer(settings, meta, CaseTransformer::default())
    }

    pub fn with_transformer(
        settings: &'a dyn SettingsProvider,
        meta: &'a dyn MetaProvider,
        transformer: CaseTransformer,
    ) -> Self {
        SaveHook {
            settings,
            meta,
            transformer,
        }
    }

    /// Applies the configured case style to the eligible fields of the document
    /// before it is saved.
    ///
    /// # Arguments
    /// * `doc` - The document about to be saved, modified in place
    /// * `event` - The document event that triggered the hook
    ///
    /// # Returns
    /// A report describing what was done to the document and each of its text fields
    pub fn apply_global_case(&self, doc: &mut Document, event: &str) -> HookReport {
        if doc.doctype == SETTINGS_DOCTYPE {
            return HookReport::skipped(doc, event, DocumentOutcome::SettingsDocument);
        }

        let settings = match self.settings.global_settings() {
            Ok(settings) => settings,
            Err(e) => {
                debug!("Settings unavailable while saving {} : {}", doc.doctype, e);
                let outcome = DocumentOutcome::SettingsUnavailable {
                    cause: e.to_string(),
                };
                return HookReport::skipped(doc, event, outcome);
            }
        };

        if !settings.enabled {
            return HookReport::skipped(doc, event, DocumentOutcome::Disabled);
        }

        let Some(style) = settings.style_tag() else {
            return HookReport::skipped(doc, event, DocumentOutcome::NoStyle);
        };

        if is_protected_doctype(&doc.doctype) {
            return HookReport::skipped(doc, event, DocumentOutcome::ProtectedDoctype);
        }

        let meta = match self.meta.get_meta(&doc.doctype) {
            Ok(meta) => meta,
            Err(e) => {
                debug!("No schema for {}, leaving it untouched: {}", doc.doctype, e);
                let outcome = DocumentOutcome::SchemaUnavailable {
                    cause: e.to_string(),
                };
                return HookReport::skipped(doc, event, outcome);
            }
        };

        let fields = self.transform_fields(doc, &meta, Style::from_tag(style));
        let transformed = fields
            .iter()
            .filter(|f| f.outcome == FieldOutcome::Transformed)
            .count();

        if transformed > 0 {
            info_log!(
                LOG_TITLE,
                "Applied case transformation to {} fields in {}",
                transformed,
                doc.doctype
            );
        }

        HookReport {
            doctype: doc.doctype.clone(),
            event: event.to_string(),
            outcome: DocumentOutcome::Applied { transformed },
            fields,
        }
    }

    /// Transforms every free-text field of the schema. An unknown style leaves
    /// every eligible field unchanged.
    fn transform_fields(
        &self,
        doc: &mut Document,
        meta: &DocMeta,
        style: Option<Style>,
    ) -> Vec<FieldReport> {
        meta.text_fields()
            .map(|field| FieldReport {
                fieldname: field.fieldname.clone(),
                outcome: self.transform_field(doc, &field.fieldname, style),
            })
            .collect()
    }

    fn transform_field(
        &self,
        doc: &mut Document,
        fieldname: &str,
        style: Option<Style>,
    ) -> FieldOutcome {
        let original = match doc.get(fieldname) {
            None => return FieldOutcome::Skipped(SkipReason::Missing),
            Some(value) => match value.as_str() {
                None => return FieldOutcome::Skipped(SkipReason::NotText),
                Some(s) if is_blank(s) => return FieldOutcome::Skipped(SkipReason::Blank),
                Some(s) => s.to_string(),
            },
        };

        if let Some(reason) = protected_field_reason(fieldname) {
            return FieldOutcome::Skipped(reason);
        }

        let Some(style) = style else {
            return FieldOutcome::Unchanged;
        };

        match self.transform_value(&original, style) {
            Ok(transformed) if transformed != original => {
                doc.set(fieldname, transformed);
                FieldOutcome::Transformed
            }
            Ok(_) => FieldOutcome::Unchanged,
            Err(e) => {
                debug!("Skipping field {} of {} : {}", fieldname, doc.doctype, e);
                FieldOutcome::Failed(e.to_string())
            }
        }
    }

    fn transform_value(&self, text: &str, style: Style) -> Result<String> {
        self.transformer
            .try_apply(text, style)
            .map_err(|e| match e {
                Error::TransformError { .. } => e,
                other => Error::TransformError {
                    style: style.label(),
                    cause: other.to_string(),
                },
            })
    }
}
