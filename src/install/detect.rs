//! Installation root detection logic.

use std::path::PathBuf;

use tracing::{debug, info, warn};

/// Well-known `resources/app/out` locations for the current platform.
#[cfg(target_os = "linux")]
pub fn candidate_roots() -> Vec<PathBuf> {
    [
        "/usr/share/code/resources/app/out",
        "/opt/visual-studio-code/resources/app/out",
        "/usr/lib/code/out",
        "/snap/code/current/usr/share/code/resources/app/out",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(target_os = "macos")]
pub fn candidate_roots() -> Vec<PathBuf> {
    let bundle = "Visual Studio Code.app/Contents/Resources/app/out";
    let mut roots = vec![PathBuf::from("/Applications").join(bundle)];
    if let Some(home) = dirs::home_dir() {
        roots.push(home.join("Applications").join(bundle));
    }
    roots
}

#[cfg(windows)]
pub fn candidate_roots() -> Vec<PathBuf> {
    let suffix = PathBuf::from("Microsoft VS Code")
        .join("resources")
        .join("app")
        .join("out");

    ["LOCALAPPDATA", "ProgramFiles", "ProgramFiles(x86)"]
        .into_iter()
        .filter_map(|var| std::env::var_os(var))
        .map(|base| {
            let base = PathBuf::from(base);
            // Per-user installs live under %LOCALAPPDATA%\Programs
            if base.ends_with("Local") {
                base.join("Programs").join(&suffix)
            } else {
                base.join(&suffix)
            }
        })
        .collect()
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
pub fn candidate_roots() -> Vec<PathBuf> {
    Vec::new()
}

/// Find the first candidate that contains a `vs/code` tree.
pub fn detect_install_root() -> Option<PathBuf> {
    for root in candidate_roots() {
        if root.join("vs").join("code").is_dir() {
            info!("Detected VS Code installation at {:?}", root);
            return Some(root);
        }
        debug!("No VS Code installation at {:?}", root);
    }

    warn!("No VS Code installation detected");
    None
}
