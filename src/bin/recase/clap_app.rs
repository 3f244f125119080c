use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, ArgGroup, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .subcommand_required(true)
    .arg_required_else_help(true)
    .arg(
        arg!(--site <PATH> "Site file to operate on")
        .long_help(
            "Explicitly sets the site file holding the settings, schemas, custom fields \
                    and hooks. Defaults to $RECASE_SITE, then the \"site\" entry of the \
                    configuration file, then site.json inside the configuration directory.",
        )
        .global(true),
    )
    .subcommand(build_preview_command())
    .subcommand(
        Command::new("styles")
        .alias("ls")
        .about("Lists the available case styles.")
        .long_about(
            "Lists the available case styles with their option label and name. \
                    The style currently selected in the site settings is highlighted.",
        ),
    )
    .subcommand(build_apply_command())
    .subcommand(build_settings_command())
    .subcommand(
        Command::new("install")
        .about("Installs the change case settings in the site.")
        .long_about(
            "Creates the change case custom fields in the settings record, initializes \
                    their values and registers the save hook. Existing fields are kept.",
        ),
    )
    .subcommand(
        Command::new("uninstall")
        .about("Removes the change case settings from the site.")
        .long_about("Removes the change case custom fields and the save hook from the site."),
    )
    .subcommand(
        Command::new("doctor")
        .about("Checks whether the installation is working.")
        .long_about(
            "Checks that the custom fields exist, that the transformation works \
                    and that the save hook is registered, printing the result as JSON.",
        ),
    )
}

/// Builds the preview command
///
/// # Returns
/// A `Command` object representing the preview command.
fn build_preview_command() -> Command {
    Command::new("preview")
    .arg(arg!(<text> "The text to transform"))
    .arg(
        arg!(-s --style <STYLE> "The case style to apply")
        .long_help(
            "The case style to apply, either its label (e.g. \"tOGGLE cASE\") or its \
                    name (e.g. ToggleCase). Defaults to the style selected in the site settings.",
        ),
    )
    .about("Previews the case transformation of a text.")
}

/// Builds the apply command
///
/// # Returns
/// A `Command` object representing the apply command.
fn build_apply_command() -> Command {
    Command::new("apply")
    .arg(
        arg!(<document> "JSON file holding the document to save")
        .value_parser(value_parser!(std::path::PathBuf)),
    )
    .arg(
        arg!(--schema <FILE> "JSON file holding the document schema")
        .long_help(
            "JSON file holding the fields of the document type ({\"fields\": [...]}). \
                    When not given, the schema registered in the site is used.",
        )
        .value_parser(value_parser!(std::path::PathBuf)),
    )
    .arg(arg!(-e --event <NAME> "The document event triggering the hook"))
    .arg(arg!(-r --report "Prints the hook report instead of the document"))
    .about("Applies the save hook to a document.")
    .long_about(
        "Runs the before save hook on the given document using the site settings and \
                prints the resulting document.",
    )
}

/// Builds the settings command
///
/// # Returns
/// A `Command` object representing the settings command.
fn build_settings_command() -> Command {
    Command::new("settings")
    .arg(arg!(--enable "Enables the case transformation"))
    .arg(arg!(--disable "Disables the case transformation"))
    .group(ArgGroup::new("toggle").args(["enable", "disable"]))
    .arg(arg!(-s --style <STYLE> "Selects the case style"))
    .about("Shows or updates the change case settings.")
    .long_about(
        "Enables or disables the case transformation and selects the style applied \
                to the documents. Disabling clears the selected style.",
    )
}
