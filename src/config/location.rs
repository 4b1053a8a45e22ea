//! Resolution of where the code document lives
//!
//! All OS lookups (home directory, login name) happen in
//! [`StorageTarget::for_variant`]; everything else works on plain paths so
//! tests can point the store at a temporary directory.

use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::constants::storage::{APP_DIR, FILE_EXTENSION, OVERLAY_FILENAME, PER_USER_FILE_PREFIX};
use crate::constants::user::{NAME_ENV_VARS, UNKNOWN_USER};
use crate::types::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageTarget {
    /// `<home>/.datamatrix_tool/datamatrix_codes_<username>.json`
    PerUser {
        home: Option<PathBuf>,
        username: String,
    },
    /// `qr_codes.json` in the process working directory
    WorkingDir,
    /// User-supplied path
    Explicit(PathBuf),
}

impl StorageTarget {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::PerUser => StorageTarget::PerUser {
                home: dirs::home_dir(),
                username: login_name(),
            },
            Variant::Overlay => StorageTarget::WorkingDir,
        }
    }

    /// Path of the document file.
    ///
    /// For the per-user target the application directory is created on
    /// demand; if that fails the bare file name (working directory) is used.
    pub fn resolve(&self) -> PathBuf {
        match self {
            StorageTarget::PerUser { home, username } => {
                let file_name = per_user_file_name(username);
                let Some(home) = home else {
                    warn!("No home directory, storing codes in working directory");
                    return PathBuf::from(file_name);
                };

                let dir = home.join(APP_DIR);
                if !dir.is_dir() {
                    if let Err(e) = fs::create_dir_all(&dir) {
                        warn!(path = %dir.display(), error = %e, "Failed to create config directory, using working directory");
                        return PathBuf::from(file_name);
                    }
                    info!(path = %dir.display(), "Created config directory");
                }
                dir.join(file_name)
            }
            StorageTarget::WorkingDir => PathBuf::from(OVERLAY_FILENAME),
            StorageTarget::Explicit(path) => path.clone(),
        }
    }
}

pub fn per_user_file_name(username: &str) -> String {
    format!("{PER_USER_FILE_PREFIX}{username}.{FILE_EXTENSION}")
}

/// OS login name from the environment, `unknown` when unset
pub fn login_name() -> String {
    login_name_from(|var| env::var(var).ok())
}

fn login_name_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    NAME_ENV_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_per_user_path_under_home() {
        let home = TempDir::new().unwrap();
        let target = StorageTarget::PerUser {
            home: Some(home.path().to_path_buf()),
            username: "alice".to_string(),
        };

        let path = target.resolve();
        assert_eq!(
            path,
            home.path().join(".datamatrix_tool").join("datamatrix_codes_alice.json")
        );
        assert!(home.path().join(".datamatrix_tool").is_dir());
    }

    #[test]
    fn test_per_user_existing_directory_is_reused() {
        let home = TempDir::new().unwrap();
        fs::create_dir(home.path().join(".datamatrix_tool")).unwrap();
        let target = StorageTarget::PerUser {
            home: Some(home.path().to_path_buf()),
            username: "bob".to_string(),
        };

        assert!(target.resolve().starts_with(home.path()));
    }

    #[test]
    fn test_per_user_falls_back_when_directory_cannot_be_created() {
        let tmp = TempDir::new().unwrap();
        // A regular file where the home directory should be
        let home = tmp.path().join("not-a-dir");
        fs::write(&home, b"").unwrap();
        let target = StorageTarget::PerUser {
            home: Some(home),
            username: "carol".to_string(),
        };

        assert_eq!(target.resolve(), PathBuf::from("datamatrix_codes_carol.json"));
    }

    #[test]
    fn test_per_user_without_home_uses_bare_name() {
        let target = StorageTarget::PerUser {
            home: None,
            username: "dave".to_string(),
        };
        assert_eq!(target.resolve(), PathBuf::from("datamatrix_codes_dave.json"));
    }

    #[test]
    fn test_overlay_and_explicit_targets() {
        assert_eq!(StorageTarget::WorkingDir.resolve(), PathBuf::from("qr_codes.json"));
        assert_eq!(
            StorageTarget::Explicit(PathBuf::from("/tmp/x.json")).resolve(),
            PathBuf::from("/tmp/x.json")
        );
        assert_eq!(
            StorageTarget::for_variant(Variant::Overlay),
            StorageTarget::WorkingDir
        );
    }

    #[test]
    fn test_login_name_is_never_empty() {
        assert!(!login_name().is_empty());
    }

    fn env_of<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn test_login_name_prefers_logname_over_user() {
        let vars = [("USERNAME", "win"), ("USER", "root"), ("LOGNAME", "alice")];
        assert_eq!(login_name_from(env_of(&vars)), "alice");
    }

    #[test]
    fn test_login_name_skips_blank_and_falls_through() {
        let vars = [("LOGNAME", "  "), ("LNAME", "bob"), ("USERNAME", "win")];
        assert_eq!(login_name_from(env_of(&vars)), "bob");

        let vars = [("USERNAME", "win")];
        assert_eq!(login_name_from(env_of(&vars)), "win");
    }

    #[test]
    fn test_login_name_unknown_when_unset() {
        assert_eq!(login_name_from(|_| None), "unknown");
    }
}
