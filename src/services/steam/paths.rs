use std::path::{Path, PathBuf};

/// Probe the default CS2 install locations and return the demo folder of
/// the first one that exists on disk. A plain existence check; users with
/// custom Steam libraries pick the folder manually.
pub fn detect_demo_folder() -> Option<PathBuf> {
    detect_demo_folder_in(&steam_roots())
}

/// Inner probe that accepts the candidate Steam roots for testability.
pub fn detect_demo_folder_in(roots: &[PathBuf]) -> Option<PathBuf> {
    roots
        .iter()
        .map(|root| demo_dir_under(root))
        .find(|path| path.is_dir())
}

/// Demo folder inside a CS2 install, relative to the Steam root.
fn demo_dir_under(steam_root: &Path) -> PathBuf {
    steam_root
        .join("steamapps")
        .join("common")
        .join("Counter-Strike Global Offensive")
        .join("game")
        .join("csgo")
}

#[cfg(target_os = "windows")]
fn steam_roots() -> Vec<PathBuf> {
    std::env::var("ProgramFiles(x86)")
        .map(|pf| vec![PathBuf::from(pf).join("Steam")])
        .unwrap_or_default()
}

#[cfg(not(target_os = "windows"))]
fn steam_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(home) = std::env::var("HOME") {
        let home = PathBuf::from(home);
        roots.push(home.join(".steam").join("steam"));
        roots.push(home.join(".local").join("share").join("Steam"));
    }
    roots
}

#[cfg(test)]
#[path = "tests/paths_tests.rs"]
mod tests;
