//! VS Code installation layout.
//!
//! The installation root is VS Code's `resources/app/out` directory, the one
//! holding the editor's entry-point script. Both patched files live in the
//! workbench directory below it.

mod detect;

pub use detect::{candidate_roots, detect_install_root};

use std::path::{Path, PathBuf};

use crate::error::InstallError;

/// File name of the workbench markup.
pub const WORKBENCH_HTML: &str = "workbench.html";

/// File name of the rendered theme script.
pub const SCRIPT_FILE: &str = "fluent.js";

/// Workbench directory names, oldest layout first.
const WORKBENCH_VARIANTS: [&str; 2] = ["electron-browser", "electron-sandbox"];

/// Absolute paths of the two files the patcher touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
    workbench_dir: PathBuf,
}

impl InstallLayout {
    /// Derive the layout under `root`.
    ///
    /// Uses `vs/code/electron-browser/workbench` unless only the newer
    /// `electron-sandbox` directory holds a workbench file.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let code_dir = root.join("vs").join("code");

        let workbench_dir = WORKBENCH_VARIANTS
            .iter()
            .map(|variant| code_dir.join(variant).join("workbench"))
            .find(|dir| dir.join(WORKBENCH_HTML).is_file())
            .unwrap_or_else(|| code_dir.join(WORKBENCH_VARIANTS[0]).join("workbench"));

        Self {
            root,
            workbench_dir,
        }
    }

    /// Resolve the layout from an explicit root, or detect one.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, InstallError> {
        let root = match explicit {
            Some(root) => {
                if !root.join("vs").join("code").is_dir() {
                    return Err(InstallError::MissingWorkbench(root.to_path_buf()));
                }
                root.to_path_buf()
            }
            None => detect_install_root().ok_or(InstallError::NotFound)?,
        };
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn workbench_dir(&self) -> &Path {
        &self.workbench_dir
    }

    /// Path of the workbench markup file.
    pub fn html_file(&self) -> PathBuf {
        self.workbench_dir.join(WORKBENCH_HTML)
    }

    /// Path of the rendered script file.
    pub fn script_file(&self) -> PathBuf {
        self.workbench_dir.join(SCRIPT_FILE)
    }
}
