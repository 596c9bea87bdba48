// Trait catalog - the fixed set of cosmetic traits a Degen can wear
//
// The catalog is loaded once at startup and treated as immutable for the
// session. Selection logic receives it as an injected dependency so tests
// can substitute alternate catalogs (empty, all-ineligible, etc.).

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A single cosmetic trait in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    /// Stable unique key, e.g. "laser-eyes"
    pub id: String,

    /// Display label
    pub name: String,

    /// Display tier label, e.g. "Flags Tier 1"
    pub tier: String,

    /// Human-readable unlock requirement - shown to the user, never evaluated
    pub requirement: String,

    /// Whether the trait is unlocked for selection
    ///
    /// A deployed build would compute this per-FID from live signals; here it
    /// is static data consulted through the eligibility oracle.
    pub eligible: bool,
}

/// Immutable, ordered trait catalog
///
/// Iteration order is catalog order - the UI always renders traits in this
/// order regardless of the order they were selected in.
#[derive(Debug, Clone)]
pub struct Catalog {
    traits: Vec<Trait>,
}

/// Catalog file structure for TOML loading
///
/// ```toml
/// [[trait]]
/// id = "orb"
/// name = "Floating Companion Orb"
/// tier = "Engagement Tier 3"
/// requirement = "21 days active"
/// eligible = true
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "trait", default)]
    traits: Vec<Trait>,
}

impl Catalog {
    /// Build a catalog, validating that every trait id is unique
    pub fn new(traits: Vec<Trait>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &traits {
            if entry.id.is_empty() {
                bail!("catalog contains a trait with an empty id");
            }
            if !seen.insert(entry.id.as_str()) {
                bail!("duplicate trait id in catalog: {}", entry.id);
            }
        }
        Ok(Self { traits })
    }

    /// The built-in Degen catalog
    pub fn builtin() -> Self {
        let traits = vec![
            Trait {
                id: "orb".into(),
                name: "Floating Companion Orb".into(),
                tier: "Engagement Tier 3".into(),
                requirement: "21 days active".into(),
                eligible: true,
            },
            Trait {
                id: "teeth".into(),
                name: "Golden Teeth".into(),
                tier: "Engagement Tier 2".into(),
                requirement: "21 days active".into(),
                eligible: true,
            },
            Trait {
                id: "sword".into(),
                name: "Sword".into(),
                tier: "Engagement Tier 1".into(),
                requirement: "21 days active".into(),
                eligible: true,
            },
            Trait {
                id: "jetpack".into(),
                name: "Jetpack".into(),
                tier: "Followers Tier 2".into(),
                requirement: "\u{2265}1k followers".into(),
                eligible: true,
            },
            Trait {
                id: "display".into(),
                name: "Holographic Display".into(),
                tier: "Followers Tier 1".into(),
                requirement: "\u{2265}10k followers".into(),
                eligible: true,
            },
            Trait {
                id: "golden-hands".into(),
                name: "Golden Hands".into(),
                tier: "DEGEN Tier 2".into(),
                requirement: ">2k DEGEN".into(),
                eligible: true,
            },
            Trait {
                id: "diamond-hands".into(),
                name: "Diamond Hands".into(),
                tier: "DEGEN Tier 1".into(),
                requirement: ">20k DEGEN".into(),
                eligible: false,
            },
            Trait {
                id: "shoulder-pads".into(),
                name: "Mechanical Shoulder Pads".into(),
                tier: "Flags Tier 2".into(),
                requirement: "score\u{2265}0.6 + power".into(),
                eligible: true,
            },
            Trait {
                id: "laser-eyes".into(),
                name: "Laser Eyes".into(),
                tier: "Flags Tier 1".into(),
                requirement: "score\u{2265}0.8 + pro".into(),
                eligible: true,
            },
        ];

        // The built-in list is validated by tests; construction cannot fail
        Self::new(traits).expect("built-in catalog is valid")
    }

    /// Load a catalog from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let file: CatalogFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
        if file.traits.is_empty() {
            bail!("catalog file {} defines no traits", path.display());
        }
        Self::new(file.traits)
    }

    /// Load the configured catalog, falling back to the built-in one
    ///
    /// A broken catalog file is not fatal - the user still gets a working
    /// screen, plus a logged warning explaining what was ignored.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        match path {
            Some(p) => match Self::from_toml_file(p) {
                Ok(catalog) => {
                    tracing::info!("Loaded catalog from {} ({} traits)", p.display(), catalog.len());
                    catalog
                }
                Err(e) => {
                    tracing::warn!("Ignoring catalog file {}: {:#}", p.display(), e);
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }

    /// Look up a trait by id
    pub fn get(&self, id: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.id == id)
    }

    /// Iterate traits in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.traits.iter()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, eligible: bool) -> Trait {
        Trait {
            id: id.to_string(),
            name: format!("Trait {}", id),
            tier: "Test Tier".to_string(),
            requirement: "none".to_string(),
            eligible,
        }
    }

    #[test]
    fn builtin_catalog_has_unique_ids_and_one_locked_trait() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);

        let ids: HashSet<_> = catalog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len(), "ids must be unique");

        // diamond-hands is the only locked trait in the built-in set
        let locked: Vec<_> = catalog.iter().filter(|t| !t.eligible).collect();
        assert_eq!(locked.len(), 1);
        assert_eq!(locked[0].id, "diamond-hands");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![sample("a", true), sample("a", true)]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_ids_are_rejected() {
        let result = Catalog::new(vec![sample("", true)]);
        assert!(result.is_err());
    }

    #[test]
    fn iteration_preserves_construction_order() {
        let catalog =
            Catalog::new(vec![sample("z", true), sample("a", true), sample("m", false)]).unwrap();
        let order: Vec<_> = catalog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, ["z", "a", "m"]);
    }

    #[test]
    fn catalog_file_parses_trait_tables() {
        let toml_src = r#"
            [[trait]]
            id = "orb"
            name = "Floating Companion Orb"
            tier = "Engagement Tier 3"
            requirement = "21 days active"
            eligible = true

            [[trait]]
            id = "visor"
            name = "Night Visor"
            tier = "Engagement Tier 1"
            requirement = "7 days active"
            eligible = false
        "#;

        let file: CatalogFile = toml::from_str(toml_src).unwrap();
        let catalog = Catalog::new(file.traits).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("visor").is_some());
        assert!(!catalog.get("visor").unwrap().eligible);
    }
}
