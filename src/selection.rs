// Selection state core
//
// All interactive state for the trait-selection screen lives here: the
// selected-trait set, the preview flags, and the session phase. Every
// operation is synchronous, performs no I/O, and returns a typed outcome;
// the TUI layer maps outcomes to toasts and events. This keeps the
// invariants testable without a terminal.
//
// Invariants:
// - the selection never exceeds MAX_TRAITS entries
// - only catalog ids the oracle approves can enter the selection
// - removal is always allowed, regardless of limit or eligibility

use crate::catalog::{Catalog, Trait};
use crate::eligibility::EligibilityOracle;
use std::collections::HashSet;

/// Maximum number of traits a single Degen can wear
pub const MAX_TRAITS: usize = 4;

/// Where the session is in the select -> preview -> mint flow
///
/// Minting does not consume the preview: the flag stays set, so the user can
/// mint again (or keep editing) without regenerating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    PreviewReady,
    Minted,
}

impl Phase {
    /// Display name for the status bar
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "selecting",
            Phase::PreviewReady => "preview ready",
            Phase::Minted => "minted",
        }
    }
}

/// Result of a toggle request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Trait added to the selection
    Added,
    /// Trait removed from the selection
    Removed,
    /// Trait is locked for this FID - selection unchanged
    Ineligible,
    /// Selection already holds MAX_TRAITS - selection unchanged
    LimitReached,
    /// Id not present in the catalog - selection unchanged
    UnknownTrait,
}

/// Result of a preview request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// Preview generated and opened
    Opened,
    /// Nothing selected yet
    EmptySelection,
    /// No identifier entered
    MissingFid,
}

/// Result of a mint confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MintOutcome {
    /// Mint accepted; carries what the success notification needs
    Submitted { fid: String, trait_count: usize },
    /// No preview has been generated yet
    PreviewRequired,
}

/// Behavior switches for the selection core
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionOptions {
    /// Clear the generated-preview flag whenever the selection changes
    ///
    /// The observed product behavior leaves a stale preview mintable after
    /// further edits; `true` forces a regeneration before minting.
    pub reset_preview_on_change: bool,
}

/// The selection state machine
pub struct Selection {
    catalog: Catalog,
    oracle: Box<dyn EligibilityOracle>,
    options: SelectionOptions,

    selected: HashSet<String>,
    preview_generated: bool,
    preview_open: bool,
    phase: Phase,
}

impl Selection {
    /// Create an empty selection over the given catalog
    pub fn new(
        catalog: Catalog,
        oracle: Box<dyn EligibilityOracle>,
        options: SelectionOptions,
    ) -> Self {
        Self {
            catalog,
            oracle,
            options,
            selected: HashSet::new(),
            preview_generated: false,
            preview_open: false,
            phase: Phase::Idle,
        }
    }

    /// Toggle a trait in or out of the selection
    pub fn toggle(&mut self, fid: &str, id: &str) -> ToggleOutcome {
        if self.selected.contains(id) {
            // Removal is unconditional - even for traits that have since
            // become ineligible, and even when the selection is full
            self.selected.remove(id);
            self.note_selection_changed();
            return ToggleOutcome::Removed;
        }

        let Some(entry) = self.catalog.get(id) else {
            return ToggleOutcome::UnknownTrait;
        };

        if !self.oracle.eligible(fid, entry) {
            return ToggleOutcome::Ineligible;
        }

        if self.selected.len() >= MAX_TRAITS {
            return ToggleOutcome::LimitReached;
        }

        self.selected.insert(id.to_string());
        self.note_selection_changed();
        ToggleOutcome::Added
    }

    /// Generate the preview and open the preview surface
    pub fn generate_preview(&mut self, fid: &str) -> PreviewOutcome {
        if fid.trim().is_empty() {
            return PreviewOutcome::MissingFid;
        }
        if self.selected.is_empty() {
            return PreviewOutcome::EmptySelection;
        }

        self.preview_generated = true;
        self.preview_open = true;
        self.phase = Phase::PreviewReady;
        PreviewOutcome::Opened
    }

    /// Confirm the mint from the preview surface
    ///
    /// Requires a previously generated preview; the preview flag is not
    /// cleared on success (see `SelectionOptions::reset_preview_on_change`).
    pub fn confirm_mint(&mut self, fid: &str) -> MintOutcome {
        if !self.preview_generated {
            return MintOutcome::PreviewRequired;
        }

        self.preview_open = false;
        self.phase = Phase::Minted;
        MintOutcome::Submitted {
            fid: fid.to_string(),
            trait_count: self.selected.len(),
        }
    }

    /// Dismiss the preview surface without minting
    pub fn close_preview(&mut self) {
        self.preview_open = false;
    }

    fn note_selection_changed(&mut self) {
        if self.options.reset_preview_on_change && self.preview_generated {
            self.preview_generated = false;
            self.phase = Phase::Idle;
        }
    }

    // ── Derived views ────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether another trait can still be added
    pub fn can_select_more(&self) -> bool {
        self.selected.len() < MAX_TRAITS
    }

    /// Selected traits resolved against the catalog, in catalog order
    ///
    /// The selection itself is an unordered membership set; rendering order
    /// always follows the catalog, not the order of selection.
    pub fn selected_traits(&self) -> Vec<&Trait> {
        self.catalog
            .iter()
            .filter(|t| self.selected.contains(&t.id))
            .collect()
    }

    pub fn preview_generated(&self) -> bool {
        self.preview_generated
    }

    pub fn preview_open(&self) -> bool {
        self.preview_open
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Trait;
    use crate::eligibility::StaticOracle;

    const FID: &str = "3621";

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    fn selection() -> Selection {
        Selection::new(catalog(), Box::new(StaticOracle), SelectionOptions::default())
    }

    fn selection_with_reset() -> Selection {
        Selection::new(
            catalog(),
            Box::new(StaticOracle),
            SelectionOptions {
                reset_preview_on_change: true,
            },
        )
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = selection();
        assert_eq!(sel.toggle(FID, "orb"), ToggleOutcome::Added);
        assert!(sel.is_selected("orb"));
        assert_eq!(sel.toggle(FID, "orb"), ToggleOutcome::Removed);
        assert!(!sel.is_selected("orb"));
    }

    #[test]
    fn selection_never_exceeds_limit() {
        let mut sel = selection();
        // Hammer the toggle with every id repeatedly; the invariant must hold
        // after every single call
        let ids: Vec<String> = catalog().iter().map(|t| t.id.clone()).collect();
        for round in 0..3 {
            for id in &ids {
                let _ = sel.toggle(FID, id);
                assert!(
                    sel.selected_count() <= MAX_TRAITS,
                    "limit violated in round {}",
                    round
                );
            }
        }
    }

    #[test]
    fn ineligible_trait_never_enters_selection() {
        let mut sel = selection();
        for _ in 0..5 {
            assert_eq!(sel.toggle(FID, "diamond-hands"), ToggleOutcome::Ineligible);
            assert!(!sel.is_selected("diamond-hands"));
            assert_eq!(sel.selected_count(), 0);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let mut sel = selection();
        assert_eq!(sel.toggle(FID, "mystery-cape"), ToggleOutcome::UnknownTrait);
        assert_eq!(sel.selected_count(), 0);
    }

    #[test]
    fn fifth_trait_is_rejected_and_selection_unchanged() {
        let mut sel = selection();
        for id in ["orb", "teeth", "sword", "jetpack"] {
            assert_eq!(sel.toggle(FID, id), ToggleOutcome::Added);
        }
        assert_eq!(sel.toggle(FID, "display"), ToggleOutcome::LimitReached);

        assert_eq!(sel.selected_count(), 4);
        for id in ["orb", "teeth", "sword", "jetpack"] {
            assert!(sel.is_selected(id));
        }
        assert!(!sel.is_selected("display"));
    }

    #[test]
    fn selected_trait_is_removable_when_full() {
        let mut sel = selection();
        for id in ["orb", "teeth", "sword", "jetpack"] {
            sel.toggle(FID, id);
        }
        assert!(!sel.can_select_more());
        assert_eq!(sel.toggle(FID, "sword"), ToggleOutcome::Removed);
        assert!(sel.can_select_more());
    }

    #[test]
    fn preview_with_empty_selection_changes_nothing() {
        let mut sel = selection();
        assert_eq!(sel.generate_preview(FID), PreviewOutcome::EmptySelection);
        assert!(!sel.preview_generated());
        assert!(!sel.preview_open());
        assert_eq!(sel.phase(), Phase::Idle);
    }

    #[test]
    fn preview_with_missing_fid_changes_nothing() {
        let mut sel = selection();
        sel.toggle(FID, "orb");
        assert_eq!(sel.generate_preview(""), PreviewOutcome::MissingFid);
        assert_eq!(sel.generate_preview("   "), PreviewOutcome::MissingFid);
        assert!(!sel.preview_generated());
        assert!(!sel.preview_open());
    }

    #[test]
    fn preview_with_selection_opens_surface() {
        let mut sel = selection();
        sel.toggle(FID, "orb");
        assert_eq!(sel.generate_preview(FID), PreviewOutcome::Opened);
        assert!(sel.preview_generated());
        assert!(sel.preview_open());
        assert_eq!(sel.phase(), Phase::PreviewReady);
    }

    #[test]
    fn mint_without_preview_is_rejected() {
        let mut sel = selection();
        sel.toggle(FID, "orb");
        assert_eq!(sel.confirm_mint(FID), MintOutcome::PreviewRequired);
        assert_eq!(sel.phase(), Phase::Idle);
        assert!(sel.is_selected("orb"));
    }

    #[test]
    fn mint_after_preview_reports_fid_and_count() {
        let mut sel = selection();
        sel.toggle(FID, "orb");
        assert_eq!(sel.generate_preview(FID), PreviewOutcome::Opened);

        match sel.confirm_mint(FID) {
            MintOutcome::Submitted { fid, trait_count } => {
                assert_eq!(fid, FID);
                assert_eq!(trait_count, 1);
            }
            other => panic!("expected Submitted, got {:?}", other),
        }

        assert!(!sel.preview_open(), "mint closes the preview surface");
        assert_eq!(sel.phase(), Phase::Minted);
        // Preview flag survives the mint - the user can mint again
        assert!(sel.preview_generated());
    }

    #[test]
    fn stale_preview_is_mintable_by_default() {
        let mut sel = selection();
        sel.toggle(FID, "orb");
        sel.generate_preview(FID);
        sel.close_preview();

        // Edit the selection after the preview was generated
        sel.toggle(FID, "teeth");

        // Default behavior: the stale preview still gates nothing
        assert!(sel.preview_generated());
        assert!(matches!(
            sel.confirm_mint(FID),
            MintOutcome::Submitted { trait_count: 2, .. }
        ));
    }

    #[test]
    fn reset_option_invalidates_preview_on_change() {
        let mut sel = selection_with_reset();
        sel.toggle(FID, "orb");
        sel.generate_preview(FID);
        sel.close_preview();

        sel.toggle(FID, "teeth");
        assert!(!sel.preview_generated());
        assert_eq!(sel.phase(), Phase::Idle);
        assert_eq!(sel.confirm_mint(FID), MintOutcome::PreviewRequired);

        // Regenerating restores the path to mint
        assert_eq!(sel.generate_preview(FID), PreviewOutcome::Opened);
        assert!(matches!(sel.confirm_mint(FID), MintOutcome::Submitted { .. }));
    }

    #[test]
    fn close_preview_only_hides_surface() {
        let mut sel = selection();
        sel.toggle(FID, "orb");
        sel.generate_preview(FID);
        sel.close_preview();
        assert!(!sel.preview_open());
        assert!(sel.preview_generated());
        assert_eq!(sel.phase(), Phase::PreviewReady);
    }

    #[test]
    fn selected_traits_follow_catalog_order() {
        let mut sel = selection();
        // Select in reverse catalog order
        sel.toggle(FID, "laser-eyes");
        sel.toggle(FID, "jetpack");
        sel.toggle(FID, "orb");

        let order: Vec<_> = sel.selected_traits().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(order, ["orb", "jetpack", "laser-eyes"]);
    }

    #[test]
    fn all_ineligible_catalog_yields_no_selection() {
        let traits = vec![
            Trait {
                id: "a".into(),
                name: "A".into(),
                tier: "T".into(),
                requirement: "r".into(),
                eligible: false,
            },
            Trait {
                id: "b".into(),
                name: "B".into(),
                tier: "T".into(),
                requirement: "r".into(),
                eligible: false,
            },
        ];
        let catalog = Catalog::new(traits).unwrap();
        let mut sel = Selection::new(catalog, Box::new(StaticOracle), SelectionOptions::default());

        assert_eq!(sel.toggle(FID, "a"), ToggleOutcome::Ineligible);
        assert_eq!(sel.toggle(FID, "b"), ToggleOutcome::Ineligible);
        assert_eq!(sel.generate_preview(FID), PreviewOutcome::EmptySelection);
    }
}
