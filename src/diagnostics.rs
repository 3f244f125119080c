use serde::Serialize;

use crate::case::change_case;
use crate::constants::diagnostics::{SAMPLE_EXPECTED, SAMPLE_STYLE, SAMPLE_TEXT};
use crate::constants::host::{BEFORE_SAVE_EVENT, HOOK_PATH};
use crate::constants::settings::{ENABLE_FIELD, STYLE_FIELD};
use crate::error::Result;
use crate::host::Host;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Success,
    Partial,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallationReport {
    pub custom_fields_exist: bool,
    pub transformation_works: bool,
    pub hooks_registered: bool,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl InstallationReport {
    fn from_checks(custom_fields_exist: bool, transformation_works: bool, hooks_registered: bool) -> Self {
        let status = if custom_fields_exist && transformation_works && hooks_registered {
            Status::Success
        } else {
            Status::Partial
        };
        InstallationReport {
            custom_fields_exist,
            transformation_works,
            hooks_registered,
            status,
            error: None,
        }
    }

    /// Report for a host that could not be inspected
    pub fn failed(cause: String) -> Self {
        InstallationReport {
            custom_fields_exist: false,
            transformation_works: false,
            hooks_registered: false,
            status: Status::Error,
            error: Some(cause),
        }
    }
}

fn run_checks<H: Host + ?Sized>(host: &H) -> Result<InstallationReport> {
    // The settings singleton must be readable for the installation to be usable
    host.global_settings()?;
    let custom_fields_exist =
        host.has_settings_field(ENABLE_FIELD)? && host.has_settings_field(STYLE_FIELD)?;

    let transformation_works = change_case(SAMPLE_TEXT, SAMPLE_STYLE) == SAMPLE_EXPECTED;

    let hooks_registered = host
        .hooks(BEFORE_SAVE_EVENT)
        .iter()
        .any(|hook| hook == HOOK_PATH);

    Ok(InstallationReport::from_checks(
        custom_fields_exist,
        transformation_works,
        hooks_registered,
    ))
}

/// Checks whether the installation is working: settings fields present,
/// transformation functional and save hook registered.
///
/// # Returns
/// The check results. Host failures are reported with an `error` status.
pub fn test_installation<H: Host + ?Sized>(host: &H) -> InstallationReport {
    run_checks(host).unwrap_or_else(|e| InstallationReport::failed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_checks() {
        assert_eq!(InstallationReport::from_checks(true, true, true).status, Status::Success);
        assert_eq!(InstallationReport::from_checks(true, true, false).status, Status::Partial);
        assert_eq!(InstallationReport::from_checks(false, true, true).status, Status::Partial);
    }

    #[test]
    fn test_serialization() {
        let report = InstallationReport::from_checks(true, true, false);
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "custom_fields_exist": true,
                "transformation_works": true,
                "hooks_registered": false,
                "status": "partial"
            })
        );

        let report = InstallationReport::failed("site unavailable".to_string());
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "site unavailable");
    }
}
