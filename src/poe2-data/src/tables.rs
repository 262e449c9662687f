//! Catalog of the game-data tables to extract
//!
//! Table paths are archive-internal (forward slashes, relative to the
//! archive root) and grouped into the categories the output files are
//! organized by.

use std::path::Path;

/// A named group of data tables extracted into one output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub files: &'static [&'static str],
}

/// All table categories, in output order
pub const CATEGORIES: &[Category] = &[
    Category {
        name: "items",
        files: &[
            "Data/BaseItemTypes.dat64",
            "Data/UniqueItems.dat64",
            "Data/ItemClasses.dat64",
            "Data/ItemExperiencePerLevel.dat64",
            "Data/WeaponTypes.dat64",
            "Data/ArmourTypes.dat64",
            "Data/ShieldTypes.dat64",
        ],
    },
    Category {
        name: "mods",
        files: &[
            "Data/Mods.dat64",
            "Data/ModType.dat64",
            "Data/ModDomains.dat64",
            "Data/ModGenerationType.dat64",
            "Data/Tags.dat64",
            "Data/SpawnWeight.dat64",
            "Data/CraftingBenchOptions.dat64",
        ],
    },
    Category {
        name: "skills",
        files: &[
            "Data/ActiveSkills.dat64",
            "Data/GrantedEffects.dat64",
            "Data/GrantedEffectsPerLevel.dat64",
            "Data/GemTags.dat64",
            "Data/SkillGems.dat64",
            "Data/SupportGems.dat64",
            "Data/SkillTotemVariations.dat64",
        ],
    },
    Category {
        name: "passive",
        files: &[
            "Data/PassiveSkills.dat64",
            "Data/PassiveSkillTrees.dat64",
            "Data/PassiveTreeExpansionJewelSizes.dat64",
            "Data/PassiveJewelSlots.dat64",
            "Data/AlternatePassiveSkills.dat64",
        ],
    },
    Category {
        name: "stats",
        files: &[
            "Data/Stats.dat64",
            "Data/StatDescriptions.dat64",
            "Data/StatInterpolationTypes.dat64",
        ],
    },
    Category {
        name: "currency",
        files: &[
            "Data/CurrencyItems.dat64",
            "Data/CurrencyStashTabLayout.dat64",
            "Data/Essences.dat64",
            "Data/EssenceTypes.dat64",
        ],
    },
];

/// Known locations of the passive tree JSON inside the archive.
///
/// The tree ships as plain JSON rather than a .dat64 table, and its path
/// has moved between game versions. Tried in order.
pub const PASSIVE_TREE_PATHS: &[&str] = &[
    "Data/PassiveSkillTree.json",
    "Data/PassiveSkillTree_0_3_0.json",
    "Metadata/PassiveSkillTree.json",
];

/// Look up a category by name
pub fn category_by_name(name: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.name == name)
}

/// Table name for an archive-internal path (the file stem)
///
/// `Data/BaseItemTypes.dat64` -> `BaseItemTypes`
pub fn table_name(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_name_strips_directory_and_extension() {
        assert_eq!(table_name("Data/BaseItemTypes.dat64"), "BaseItemTypes");
        assert_eq!(table_name("Metadata/PassiveSkillTree.json"), "PassiveSkillTree");
        assert_eq!(table_name("Mods.dat64"), "Mods");
    }

    #[test]
    fn test_category_by_name() {
        let items = category_by_name("items").unwrap();
        assert!(items.files.contains(&"Data/BaseItemTypes.dat64"));
        assert!(category_by_name("nonexistent").is_none());
    }

    #[test]
    fn test_category_names_unique() {
        let names: HashSet<_> = CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CATEGORIES.len());
    }

    #[test]
    fn test_table_paths_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for category in CATEGORIES {
            for path in category.files {
                assert!(seen.insert(*path), "duplicate table path: {}", path);
                assert!(path.ends_with(".dat64"), "unexpected extension: {}", path);
                assert!(!table_name(path).is_empty());
            }
        }
    }
}
