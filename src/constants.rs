//! Application-wide constants
//!
//! File names, document keys and rendering parameters shared by the
//! encoder, model and persistence layers.

/// Persistence file names and document keys
pub mod storage {
    /// Directory under the home directory holding per-user code files
    pub const APP_DIR: &str = ".datamatrix_tool";

    /// Per-user file name is `<prefix><login name>.json`
    pub const PER_USER_FILE_PREFIX: &str = "datamatrix_codes_";

    pub const FILE_EXTENSION: &str = "json";

    /// Overlay variant file, relative to the working directory
    pub const OVERLAY_FILENAME: &str = "qr_codes.json";

    /// List key used by the per-user document
    pub const PER_USER_LIST_KEY: &str = "codes";

    /// List key used by the overlay document
    pub const OVERLAY_LIST_KEY: &str = "qr_codes";

    pub const CURRENT_INDEX_KEY: &str = "current_index";
}

/// Login name lookup
pub mod user {
    /// Environment variables consulted in order, first non-empty wins
    pub const NAME_ENV_VARS: [&str; 4] = ["LOGNAME", "USER", "LNAME", "USERNAME"];

    /// Used when no login name can be determined
    pub const UNKNOWN_USER: &str = "unknown";
}

/// QR rendering parameters
pub mod qr {
    /// Pixels per module
    pub const MODULE_PIXELS: u32 = 10;

    /// Quiet zone width in modules
    pub const QUIET_ZONE_MODULES: u32 = 4;
}

/// Data Matrix rendering parameters
#[cfg(feature = "datamatrix")]
pub mod datamatrix {
    /// Pixels per module
    pub const MODULE_PIXELS: u32 = 5;

    /// White margin around the symbol in pixels
    pub const MARGIN_PIXELS: u32 = 10;
}

/// Entries synthesized for an empty per-user collection
pub mod presets {
    /// (display name, payload)
    pub const PRESETS: [(&str, &str); 3] = [
        ("TestString", "ts"),
        ("Number", "12"),
        ("テスト", "test"),
    ];
}

/// Logging configuration
pub mod logging {
    /// Environment variable selecting the log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";

    pub const DEFAULT_LEVEL: &str = "info";
}
