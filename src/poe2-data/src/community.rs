//! Community data mirrors
//!
//! Catalog of pre-extracted JSON snapshots published by the community,
//! downloaded as a fallback when the local archive cannot be read.

/// A community mirror serving pre-extracted data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mirror {
    pub name: &'static str,
    pub base_url: &'static str,
}

/// All known mirrors
pub const MIRRORS: &[Mirror] = &[
    Mirror {
        name: "RePoE",
        base_url: "https://github.com/brather1ng/RePoE/raw/master/data/",
    },
    Mirror {
        name: "PyPoE_ExportedData",
        base_url: "https://github.com/OmegaK2/PyPoE/raw/master/exported/",
    },
    Mirror {
        name: "poedb",
        base_url: "https://poedb.tw/us/api/",
    },
];

/// One downloadable snapshot: local filename plus its mirror and
/// mirror-relative path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    pub name: &'static str,
    pub mirror: &'static str,
    pub remote: &'static str,
}

/// Snapshot files fetched by the fallback, in download order
pub const SNAPSHOT_FILES: &[SnapshotFile] = &[
    SnapshotFile {
        name: "base_items.json",
        mirror: "RePoE",
        remote: "base_items.json",
    },
    SnapshotFile {
        name: "uniques.json",
        mirror: "RePoE",
        remote: "uniques.json",
    },
    SnapshotFile {
        name: "gems.json",
        mirror: "RePoE",
        remote: "gems.json",
    },
    SnapshotFile {
        name: "mods.json",
        mirror: "RePoE",
        remote: "mods.json",
    },
    SnapshotFile {
        name: "passive_skills.json",
        mirror: "RePoE",
        remote: "passive_skills.json",
    },
];

/// Fixed per-request timeout for snapshot downloads
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 30;

/// Look up a mirror by name
pub fn mirror_by_name(name: &str) -> Option<&'static Mirror> {
    MIRRORS.iter().find(|m| m.name == name)
}

/// Full download URL for a snapshot file, if its mirror is known
pub fn download_url(file: &SnapshotFile) -> Option<String> {
    mirror_by_name(file.mirror).map(|m| format!("{}{}", m.base_url, file.remote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_snapshot_resolves_to_https_url() {
        for file in SNAPSHOT_FILES {
            let url = download_url(file).expect("unknown mirror");
            assert!(url.starts_with("https://"), "bad url: {}", url);
            assert!(url.ends_with(file.remote));
        }
    }

    #[test]
    fn test_snapshot_names_unique() {
        let names: HashSet<_> = SNAPSHOT_FILES.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), SNAPSHOT_FILES.len());
    }

    #[test]
    fn test_mirror_names_unique() {
        let names: HashSet<_> = MIRRORS.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), MIRRORS.len());
    }

    #[test]
    fn test_mirror_by_name() {
        assert!(mirror_by_name("RePoE").is_some());
        assert!(mirror_by_name("unknown").is_none());
    }
}
