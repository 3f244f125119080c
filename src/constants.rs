//! Module for shared constants used across the codebase

/// Names of the host records and events the plugin works with
pub mod host {
    /// The settings singleton holding the change case configuration
    pub const SETTINGS_DOCTYPE: &str = "Global Defaults";

    /// Document event the save hook is attached to
    pub const BEFORE_SAVE_EVENT: &str = "before_save";

    /// Hook path registered in the host's document event pipeline
    pub const HOOK_PATH: &str = "recase::hook::apply_global_case";

    /// Title used for error log entries
    pub const LOG_TITLE: &str = "Change Case";

    /// Title used for error log entries raised during (un)installation
    pub const INSTALL_LOG_TITLE: &str = "Change Case Install";
}

/// Field names of the settings singleton
pub mod settings {
    pub const SECTION_FIELD: &str = "change_case_section";
    pub const ENABLE_FIELD: &str = "enable_change_case";
    pub const STYLE_FIELD: &str = "sentence_case";

    /// Field of the stock settings record the custom section is inserted after
    pub const INSERT_AFTER: &str = "default_distance_unit";
}

/// Document policy used by the save hook
pub mod policy {
    /// System-critical document types that are never transformed
    pub const PROTECTED_DOCTYPES: &[&str] = &[
        "DocType",
        "DocField",
        "DocPerm",
        "Custom Field",
        "Custom Script",
        "Property Setter",
        "Print Format",
        "Server Script",
        "Client Script",
        "Error Log",
        "Activity Log",
        "Version",
        "File",
        "Email Queue",
        "Communication",
        "Comment",
        "View Log",
        "Access Log",
        "Route History",
        "Global Defaults",
        "User",
        "Role",
        "System Settings",
    ];

    /// Identity, audit, tree and linkage fields that are never transformed
    pub const SKIP_FIELDS: &[&str] = &[
        "name",
        "owner",
        "modified_by",
        "creation",
        "modified",
        "docstatus",
        "idx",
        "parent",
        "parentfield",
        "parenttype",
        "_user_tags",
        "_comments",
        "_assign",
        "_liked_by",
        "route",
    ];

    /// Any field starting with this prefix is treated as private
    pub const PRIVATE_FIELD_PREFIX: char = '_';
}

/// Input used by the installation diagnostics
pub mod diagnostics {
    pub const SAMPLE_TEXT: &str = "hello world";
    pub const SAMPLE_STYLE: &str = "UPPERCASE";
    pub const SAMPLE_EXPECTED: &str = "HELLO WORLD";
}
