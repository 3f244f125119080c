use std::path::{Path, PathBuf};

use nu_ansi_term::Color::{Green, Red, Yellow};

use crate::{
    case::preview_case_change,
    config::MainConfig,
    diagnostics::{test_installation, InstallationReport, Status},
    document::{DocMeta, Document},
    error::*,
    hook::{HookReport, SaveHook},
    host::{MetaProvider, SettingsProvider},
    install::{after_install, before_uninstall, InstallReport},
    site::Site,
    style::Style,
};

pub struct SiteController<'a> {
    pub site_file: PathBuf,
    pub config: &'a MainConfig,
}

/// Provides the operations run from the command line against a site file:
/// previews, applying the save hook to a document, installation, removal and
/// diagnostics.
impl<'a> SiteController<'a> {
    pub fn new(site_file: PathBuf, config: &'a MainConfig) -> Self {
        Self { site_file, config }
    }

    fn load_site(&self) -> Result<Site> {
        Site::load(&self.site_file)
    }

    /// Resolves the style used by the preview: the explicit one, then the one
    /// stored in the site settings, then the configured default.
    fn preview_style(&self, style: Option<&str>) -> String {
        if let Some(style) = style {
            return style.to_string();
        }
        self.load_site()
            .and_then(|site| site.global_settings())
            .ok()
            .and_then(|settings| settings.style_tag().map(str::to_string))
            .unwrap_or_else(|| self.config.default_style().label())
    }

    /// Prints the text transformed with the given style (or the current one).
    ///
    /// # Arguments
    /// * `text` - The text to preview
    /// * `style` - The style tag to use, if any
    ///
    /// # Returns
    /// The transformed text
    pub fn preview(&self, text: &str, style: Option<&str>) -> Result<String> {
        let style = self.preview_style(style);
        if Style::from_tag(&style).is_none() {
            eprintln!(
                "{}",
                Yellow.paint(format!("Unknown style \"{}\", text left unchanged", style))
            );
        }
        let transformed = preview_case_change(text, &style);
        println!("{}", transformed);
        Ok(transformed)
    }

    /// Lists the available styles, marking the one currently configured in the site
    pub fn list_styles(&self) -> Result<bool> {
        let current = self
            .load_site()
            .and_then(|site| site.global_settings())
            .ok()
            .and_then(|settings| settings.style.clone());

        for style in Style::ALL {
            let label = style.label();
            if current.as_deref() == Some(label.as_str()) {
                println!("{} {}", Green.paint(format!("* {}", label)), style.key());
            } else {
                println!("  {} {}", label, style.key());
            }
        }
        Ok(true)
    }

    /// Runs the save hook on the document stored in the given file and prints
    /// the resulting document (or the hook report).
    ///
    /// # Arguments
    /// * `doc_file` - JSON file holding the document
    /// * `schema_file` - Optional JSON file holding the schema, the site schema is used otherwise
    /// * `event` - The document event name (defaults to the configured one)
    /// * `show_report` - Prints the hook report instead of the document
    ///
    /// # Returns
    /// The hook report
    pub fn apply(
        &self,
        doc_file: &Path,
        schema_file: Option<&Path>,
        event: Option<&str>,
        show_report: bool,
    ) -> Result<HookReport> {
        let mut doc: Document = read_json(doc_file)?;
        let site = self.load_site()?;
        let schema: Option<DocMeta> = schema_file.map(read_json::<DocMeta>).transpose()?;

        let meta: &dyn MetaProvider = match &schema {
            Some(schema) => schema,
            None => &site,
        };
        let event = event.unwrap_or(self.config.defaults.event.as_str());
        let report = SaveHook::new(&site, meta).apply_global_case(&mut doc, event);

        for (field, cause) in report.failures() {
            eprintln!("{}", Red.paint(format!("Field {} skipped: {}", field, cause)));
        }

        if show_report {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Ok(report)
    }

    /// Enables or disables the transformation and optionally selects the style.
    /// Disabling clears the selected style unless a new one is given.
    pub fn configure(&self, enabled: Option<bool>, style: Option<&str>) -> Result<bool> {
        use crate::host::SettingsStore;

        let mut site = self.load_site()?;
        let mut settings = site.global_settings()?;
        if let Some(style) = style {
            let style: Style = style.parse()?;
            settings.style = Some(style.label());
        }
        if let Some(enabled) = enabled {
            settings.enabled = enabled;
            if !enabled && style.is_none() {
                settings.style = None;
            }
        }
        site.save_global_settings(&settings)?;
        site.save(&self.site_file)?;

        println!(
            "Change case {} (style: {})",
            if settings.enabled {
                Green.paint("enabled")
            } else {
                Yellow.paint("disabled")
            },
            settings.style_tag().unwrap_or("none")
        );
        Ok(true)
    }

    /// Installs the custom settings fields and the save hook into the site
    pub fn install(&self) -> Result<InstallReport> {
        let mut site = self.load_site()?;
        let report = after_install(&mut site);
        site.save(&self.site_file)?;

        for field in &report.created {
            println!("{} Created custom field: {}", Green.paint("✔"), field);
        }
        for field in &report.existing {
            println!("{} Custom field already exists: {}", Yellow.paint("ℹ"), field);
        }
        for failure in &report.failed {
            println!(
                "{} Error creating custom field {}: {}",
                Red.paint("✘"),
                failure.fieldname,
                failure.cause
            );
        }
        if report.is_success() {
            println!("{}", Green.paint("Change case setup completed successfully"));
        }
        Ok(report)
    }

    /// Removes the custom settings fields and the save hook from the site
    pub fn uninstall(&self) -> Result<InstallReport> {
        let mut site = self.load_site()?;
        let report = before_uninstall(&mut site);
        site.save(&self.site_file)?;

        for field in &report.removed {
            println!("{} Removed custom field: {}", Green.paint("✔"), field);
        }
        for failure in &report.failed {
            println!(
                "{} Error removing custom field {}: {}",
                Red.paint("✘"),
                failure.fieldname,
                failure.cause
            );
        }
        Ok(report)
    }

    /// Prints the installation diagnostics as JSON
    ///
    /// # Returns
    /// `true` when the installation is fully working
    pub fn doctor(&self) -> Result<bool> {
        let report: InstallationReport = match self.load_site() {
            Ok(site) => test_installation(&site),
            Err(e) => InstallationReport::failed(e.to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(report.status == Status::Success)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| Error::JsonError(format!("invalid file {:?}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::from_toml;
    use crate::host::SettingsStore;
    use crate::settings::GlobalSettings;
    use tempfile::TempDir;

    fn site_path(dir: &TempDir) -> PathBuf {
        dir.path().join("site.json")
    }

    fn stored_settings(path: &Path) -> GlobalSettings {
        Site::load(path).unwrap().global_settings().unwrap()
    }

    #[test]
    fn test_preview_style_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let config = from_toml("[defaults]\nstyle = \"camelCase\"\n").unwrap();
        let controller = SiteController::new(site_path(&dir), &config);

        // No site file yet, so the configured default applies
        assert_eq!(controller.preview_style(None), "camelCase");
        assert_eq!(controller.preview_style(Some("UPPERCASE")), "UPPERCASE");

        let mut site = Site::default();
        site.save_global_settings(&GlobalSettings::new(true, Style::Lowercase))
            .unwrap();
        site.save(&controller.site_file).unwrap();

        assert_eq!(controller.preview_style(None), "lowercase");
        assert_eq!(controller.preview_style(Some("PascalCase")), "PascalCase");
        assert_eq!(controller.preview("Hello World", None).unwrap(), "hello world");
    }

    #[test]
    fn test_preview_ignores_blank_site_style() {
        let dir = tempfile::tempdir().unwrap();
        let config = MainConfig::default();
        let controller = SiteController::new(site_path(&dir), &config);

        let mut site = Site::default();
        site.save_global_settings(&GlobalSettings {
            enabled: true,
            style: Some("  ".to_string()),
        })
        .unwrap();
        site.save(&controller.site_file).unwrap();

        assert_eq!(controller.preview_style(None), "Sentence case");
        assert_eq!(
            controller.preview("an unknown style", Some("kebab")).unwrap(),
            "an unknown style"
        );
    }

    #[test]
    fn test_configure_enable_with_style() {
        let dir = tempfile::tempdir().unwrap();
        let config = MainConfig::default();
        let controller = SiteController::new(site_path(&dir), &config);

        assert!(controller.configure(Some(true), Some("PascalCase")).unwrap());
        let settings = stored_settings(&controller.site_file);
        assert!(settings.enabled);
        assert_eq!(settings.style_tag(), Some("PascalCase"));

        // Variant names are stored with their canonical label
        controller.configure(None, Some("ToggleCase")).unwrap();
        let settings = stored_settings(&controller.site_file);
        assert!(settings.enabled);
        assert_eq!(settings.style_tag(), Some("tOGGLE cASE"));
    }

    #[test]
    fn test_configure_disable_clears_style() {
        let dir = tempfile::tempdir().unwrap();
        let config = MainConfig::default();
        let controller = SiteController::new(site_path(&dir), &config);

        controller.configure(Some(true), Some("UPPERCASE")).unwrap();
        controller.configure(Some(false), None).unwrap();
        let settings = stored_settings(&controller.site_file);
        assert!(!settings.enabled);
        assert_eq!(settings.style_tag(), None);

        controller.configure(Some(false), Some("lowercase")).unwrap();
        let settings = stored_settings(&controller.site_file);
        assert!(!settings.enabled);
        assert_eq!(settings.style_tag(), Some("lowercase"));
    }

    #[test]
    fn test_configure_rejects_unknown_style() {
        let dir = tempfile::tempdir().unwrap();
        let config = MainConfig::default();
        let controller = SiteController::new(site_path(&dir), &config);

        controller.configure(Some(true), Some("camelCase")).unwrap();
        let err = controller.configure(Some(false), Some("snake_case")).unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(ref s) if s == "snake_case"));

        // Nothing is written when the style is rejected
        let settings = stored_settings(&controller.site_file);
        assert!(settings.enabled);
        assert_eq!(settings.style_tag(), Some("camelCase"));
    }
}
