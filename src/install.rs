//! Installation and removal of the change case settings.
//!
//! Installing adds three custom fields to the settings singleton (a section,
//! the enable checkbox and the style selector), initializes their values and
//! registers the save hook. Uninstalling removes exactly those fields.

use serde::{Deserialize, Serialize};

use crate::constants::host::{BEFORE_SAVE_EVENT, HOOK_PATH, INSTALL_LOG_TITLE, SETTINGS_DOCTYPE};
use crate::constants::settings::{ENABLE_FIELD, INSERT_AFTER, SECTION_FIELD, STYLE_FIELD};
use crate::document::FieldKind;
use crate::error::Result;
use crate::host::Host;
use crate::style::Style;
use crate::{debug, error_log};

/// A custom field added to an existing document type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub dt: String,
    pub fieldname: String,
    pub label: String,
    pub fieldtype: FieldKind,
    pub insert_after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub collapsible: bool,
}

impl CustomField {
    fn on_settings(fieldname: &str, label: &str, fieldtype: FieldKind, insert_after: &str) -> Self {
        CustomField {
            dt: SETTINGS_DOCTYPE.to_string(),
            fieldname: fieldname.to_string(),
            label: label.to_string(),
            fieldtype,
            insert_after: insert_after.to_string(),
            options: None,
            default: None,
            depends_on: None,
            description: None,
            collapsible: false,
        }
    }
}

/// The custom fields created on the settings singleton, in insertion order
pub fn custom_fields() -> Vec<CustomField> {
    let section = CustomField::on_settings(
        SECTION_FIELD,
        "Change Case Settings",
        FieldKind::SectionBreak,
        INSERT_AFTER,
    );

    let enable = CustomField {
        default: Some("0".to_string()),
        description: Some(
            "Enable automatic case transformation for all text fields across the system"
                .to_string(),
        ),
        ..CustomField::on_settings(
            ENABLE_FIELD,
            "Enable Change Case",
            FieldKind::Check,
            SECTION_FIELD,
        )
    };

    let style = CustomField {
        options: Some(Style::options()),
        default: Some(Style::SentenceCase.label()),
        depends_on: Some(format!("eval:doc.{}", ENABLE_FIELD)),
        description: Some("Select the case transformation style to apply globally".to_string()),
        ..CustomField::on_settings(STYLE_FIELD, "Case Style", FieldKind::Select, ENABLE_FIELD)
    };

    vec![section, enable, style]
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldFailure {
    pub fieldname: String,
    pub cause: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub created: Vec<String>,
    pub existing: Vec<String>,
    pub removed: Vec<String>,
    pub failed: Vec<FieldFailure>,
    pub settings_initialized: bool,
    pub hook_registered: bool,
}

impl InstallReport {
    fn fail(&mut self, fieldname: &str, cause: String) {
        error_log!(INSTALL_LOG_TITLE, "Custom field {} error: {}", fieldname, cause);
        self.failed.push(FieldFailure {
            fieldname: fieldname.to_string(),
            cause,
        });
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Creates the custom fields that do not exist yet. Running it several times
/// leaves the host unchanged after the first run.
pub fn create_custom_fields<H: Host + ?Sized>(host: &mut H, report: &mut InstallReport) {
    for field in custom_fields() {
        let fieldname = field.fieldname.clone();
        if host.custom_field_exists(&field.dt, &fieldname) {
            debug!("Custom field already exists: {}", fieldname);
            report.existing.push(fieldname);
            continue;
        }
        match host.insert_custom_field(field) {
            Ok(()) => {
                debug!("Created custom field: {}", fieldname);
                report.created.push(fieldname);
            }
            Err(e) => report.fail(&fieldname, e.to_string()),
        }
    }
}

/// Initializes the settings singleton: transformation disabled and the default
/// style selected, keeping any value already set.
pub fn setup_global_defaults<H: Host + ?Sized>(host: &mut H) -> Result<()> {
    let mut settings = host.global_settings()?;

    if host.has_settings_field(STYLE_FIELD)? && settings.style_tag().is_none() {
        settings.style = Some(Style::SentenceCase.label());
    }

    host.save_global_settings(&settings)
}

/// Sets up the change case settings after the application is installed.
/// Failures are logged and reported, never propagated.
///
/// # Arguments
/// * `host` - The host to install into
///
/// # Returns
/// A report of the created, already existing and failed fields
pub fn after_install<H: Host + ?Sized>(host: &mut H) -> InstallReport {
    let mut report = InstallReport::default();

    create_custom_fields(host, &mut report);

    match setup_global_defaults(host) {
        Ok(()) => report.settings_initialized = true,
        Err(e) => {
            error_log!(INSTALL_LOG_TITLE, "Could not initialize {}: {}", SETTINGS_DOCTYPE, e);
        }
    }

    host.register_hook(BEFORE_SAVE_EVENT, HOOK_PATH);
    report.hook_registered = host.hooks(BEFORE_SAVE_EVENT).iter().any(|h| h == HOOK_PATH);

    report
}

/// Removes the change case custom fields and the hook before the application
/// is uninstalled. Only the three fields created by [`after_install`] are removed.
pub fn before_uninstall<H: Host + ?Sized>(host: &mut H) -> InstallReport {
    let mut report = InstallReport::default();

    for field in custom_fields() {
        match host.delete_custom_field(&field.dt, &field.fieldname) {
            Ok(true) => {
                debug!("Removed custom field: {}", field.fieldname);
                report.removed.push(field.fieldname);
            }
            Ok(false) => {}
            Err(e) => report.fail(&field.fieldname, e.to_string()),
        }
    }

    host.unregister_hook(BEFORE_SAVE_EVENT, HOOK_PATH);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_fields() {
        let fields = custom_fields();
        let names: Vec<&str> = fields.iter().map(|f| f.fieldname.as_str()).collect();
        assert_eq!(names, vec![SECTION_FIELD, ENABLE_FIELD, STYLE_FIELD]);
        assert!(fields.iter().all(|f| f.dt == SETTINGS_DOCTYPE));

        assert_eq!(fields[0].fieldtype, FieldKind::SectionBreak);
        assert_eq!(fields[0].insert_after, "default_distance_unit");
        assert!(!fields[0].collapsible);

        assert_eq!(fields[1].fieldtype, FieldKind::Check);
        assert_eq!(fields[1].default.as_deref(), Some("0"));
        assert_eq!(fields[1].insert_after, SECTION_FIELD);

        assert_eq!(fields[2].fieldtype, FieldKind::Select);
        assert_eq!(fields[2].default.as_deref(), Some("Sentence case"));
        assert_eq!(fields[2].depends_on.as_deref(), Some("eval:doc.enable_change_case"));
        assert_eq!(
            fields[2].options.as_deref(),
            Some("Sentence case\nlowercase\nUPPERCASE\nCapitalize Each Word\ntOGGLE cASE\ncamelCase\nPascalCase")
        );
    }
}
