use std::io::IsTerminal;
use std::path::PathBuf;

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use recase::{controller::SiteController, error::*};

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Reads the enable/disable flags of the settings subcommand
    fn toggle(args: &ArgMatches) -> Option<bool> {
        if args.get_flag("enable") {
            Some(true)
        } else if args.get_flag("disable") {
            Some(false)
        } else {
            None
        }
    }

    /// Start the application, bootstraps the configuration and forwards the request to the controller.
    ///
    /// # Returns
    /// A `Result` indicating whether the application completed successfully.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new()?;
        let site_file = bootstrap.site_file(self.matches.get_one::<String>("site"))?;
        let controller = SiteController::new(site_file, bootstrap.get_config());

        match self.matches.subcommand() {
            Some(("preview", args)) => {
                let text = args
                    .get_one::<String>("text")
                    .ok_or_else(|| Error::ArgsProcessingError("Missing text".to_string()))?;
                controller.preview(text, args.get_one::<String>("style").map(|s| s.as_str()))?;
                Ok(true)
            }
            Some(("styles", _)) => controller.list_styles(),
            Some(("apply", args)) => {
                let document = args
                    .get_one::<PathBuf>("document")
                    .ok_or_else(|| Error::ArgsProcessingError("Missing document".to_string()))?;
                let report = controller.apply(
                    document,
                    args.get_one::<PathBuf>("schema").map(|p| p.as_path()),
                    args.get_one::<String>("event").map(|s| s.as_str()),
                    args.get_flag("report"),
                )?;
                Ok(!report.has_failures())
            }
            Some(("settings", args)) => controller.configure(
                Self::toggle(args),
                args.get_one::<String>("style").map(|s| s.as_str()),
            ),
            Some(("install", _)) => Ok(controller.install()?.is_success()),
            Some(("uninstall", _)) => Ok(controller.uninstall()?.is_success()),
            Some(("doctor", _)) => controller.doctor(),
            _ => Err(Error::ArgsProcessingError(
                "Invalid subcommand provided".to_string(),
            )),
        }
    }
}
