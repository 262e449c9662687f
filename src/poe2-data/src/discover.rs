//! Installation discovery
//!
//! Probes the usual install locations: the standalone and Steam default
//! directories on Windows, then the Steam library paths under the home
//! directory (covers Proton prefixes and macOS).

use std::path::PathBuf;

/// Fixed install locations, probed first
pub const INSTALL_DIRS: &[&str] = &[
    r"C:\Program Files (x86)\Grinding Gear Games\Path of Exile 2",
    r"C:\Program Files (x86)\Steam\steamapps\common\Path of Exile 2",
    r"C:\Program Files\Grinding Gear Games\Path of Exile 2",
];

/// Steam roots relative to the home directory
const STEAM_ROOTS: &[&str] = &[
    ".local/share/Steam",
    ".steam/steam",
    "Library/Application Support/Steam",
];

const STEAM_APP_DIR: &str = "steamapps/common/Path of Exile 2";

/// All install directories worth probing on this machine
pub fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = INSTALL_DIRS.iter().map(PathBuf::from).collect();

    if let Some(home) = dirs::home_dir() {
        for root in STEAM_ROOTS {
            dirs.push(home.join(root).join(STEAM_APP_DIR));
        }
    }

    dirs
}

/// Find a PoE 2 installation automatically.
///
/// Returns the `Content.ggpk` path for an archive install, or the install
/// root itself when it holds an extracted data tree.
pub fn find_install() -> Option<PathBuf> {
    probe(&candidate_dirs())
}

/// Probe an explicit list of install roots, in order
pub fn probe(dirs: &[PathBuf]) -> Option<PathBuf> {
    for dir in dirs {
        let ggpk = dir.join("Content.ggpk");
        if ggpk.is_file() {
            return Some(ggpk);
        }
        if dir.join("Data").is_dir() || dir.join("data").is_dir() {
            return Some(dir.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_probe_prefers_archive_in_order() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        fs::write(b.path().join("Content.ggpk"), b"GGPK").unwrap();

        let found = probe(&[a.path().to_path_buf(), b.path().to_path_buf()]).unwrap();
        assert_eq!(found, b.path().join("Content.ggpk"));
    }

    #[test]
    fn test_probe_accepts_extracted_tree() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("data")).unwrap();

        let found = probe(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(found, dir.path());
    }

    #[test]
    fn test_probe_empty_dirs_yield_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(probe(&[dir.path().to_path_buf()]).is_none());
    }

    #[test]
    fn test_candidate_dirs_include_fixed_paths() {
        let dirs = candidate_dirs();
        assert!(dirs.len() >= INSTALL_DIRS.len());
        for (dir, fixed) in dirs.iter().zip(INSTALL_DIRS) {
            assert_eq!(dir.as_os_str(), *fixed);
        }
    }
}
