//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't stop a command.

use super::types::AppConfig;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - An `install_root` that is missing or lacks the `vs/code` tree
/// - An `assets_dir` that is not a directory
/// - A blank `reload_command`
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if let Some(root) = &config.install_root {
        if !root.is_dir() {
            warnings.push(ValidationWarning {
                field: "install_root".to_string(),
                message: format!("{} does not exist or is not a directory.", root.display()),
            });
        } else if !root.join("vs").join("code").is_dir() {
            warnings.push(ValidationWarning {
                field: "install_root".to_string(),
                message: format!(
                    "{} has no vs/code directory. It should point at VS Code's resources/app/out.",
                    root.display()
                ),
            });
        }
    }

    if let Some(dir) = &config.assets_dir
        && !dir.is_dir()
    {
        warnings.push(ValidationWarning {
            field: "assets_dir".to_string(),
            message: format!(
                "{} is not a directory. Bundled assets will be used.",
                dir.display()
            ),
        });
    }

    if config
        .reload_command
        .as_deref()
        .is_some_and(|cmd| cmd.trim().is_empty())
    {
        warnings.push(ValidationWarning {
            field: "reload_command".to_string(),
            message: "Reload command is empty and will be ignored.".to_string(),
        });
    }

    warnings
}
