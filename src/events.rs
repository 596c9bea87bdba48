// Events that describe what happened during a selection session
//
// Every user-visible state change is recorded as a SessionEvent. The TUI
// emits them as the user works; the session log task appends them to disk.
// Using an enum keeps the channel between tasks type-safe and makes the
// JSONL output greppable by event type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a user action was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Trait is locked for this FID
    Ineligible,
    /// Selection already holds the maximum number of traits
    LimitReached,
    /// Preview requested with nothing selected
    EmptySelection,
    /// Preview requested without an identifier
    MissingFid,
    /// Mint confirmed without a generated preview
    PreviewRequired,
}

/// Main event type that flows through the application
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")] // Creates JSON like {"type": "TraitSelected", ...}
pub enum SessionEvent {
    /// A trait was added to the selection
    TraitSelected {
        timestamp: DateTime<Utc>,
        trait_id: String,
        selected_count: usize,
    },

    /// A trait was removed from the selection
    TraitRemoved {
        timestamp: DateTime<Utc>,
        trait_id: String,
        selected_count: usize,
    },

    /// A selection attempt was rejected
    SelectionRejected {
        timestamp: DateTime<Utc>,
        trait_id: String,
        reason: RejectReason,
    },

    /// A preview was generated and the preview surface opened
    PreviewGenerated {
        timestamp: DateTime<Utc>,
        fid: String,
        trait_ids: Vec<String>,
    },

    /// The preview surface was dismissed without minting
    PreviewDismissed { timestamp: DateTime<Utc> },

    /// A preview or mint request was rejected
    ActionRejected {
        timestamp: DateTime<Utc>,
        reason: RejectReason,
    },

    /// A mint was submitted through the mint service
    MintSubmitted {
        timestamp: DateTime<Utc>,
        fid: String,
        trait_count: usize,
    },
}

/// Summary counters for the status bar
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub toggles: usize,
    pub rejections: usize,
    pub previews_generated: usize,
    pub mints_submitted: usize,
}

impl Stats {
    /// Update counters from an event
    pub fn record(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::TraitSelected { .. } | SessionEvent::TraitRemoved { .. } => {
                self.toggles += 1;
            }
            SessionEvent::SelectionRejected { .. } | SessionEvent::ActionRejected { .. } => {
                self.rejections += 1;
            }
            SessionEvent::PreviewGenerated { .. } => {
                self.previews_generated += 1;
            }
            SessionEvent::MintSubmitted { .. } => {
                self.mints_submitted += 1;
            }
            SessionEvent::PreviewDismissed { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let event = SessionEvent::MintSubmitted {
            timestamp: Utc::now(),
            fid: "3621".to_string(),
            trait_count: 3,
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"MintSubmitted""#));
        assert!(json.contains(r#""trait_count":3"#));

        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, SessionEvent::MintSubmitted { trait_count: 3, .. }));
    }

    #[test]
    fn stats_count_each_event_class() {
        let mut stats = Stats::default();
        let now = Utc::now();

        stats.record(&SessionEvent::TraitSelected {
            timestamp: now,
            trait_id: "orb".into(),
            selected_count: 1,
        });
        stats.record(&SessionEvent::SelectionRejected {
            timestamp: now,
            trait_id: "diamond-hands".into(),
            reason: RejectReason::Ineligible,
        });
        stats.record(&SessionEvent::PreviewGenerated {
            timestamp: now,
            fid: "3621".into(),
            trait_ids: vec!["orb".into()],
        });
        stats.record(&SessionEvent::MintSubmitted {
            timestamp: now,
            fid: "3621".into(),
            trait_count: 1,
        });

        assert_eq!(stats.toggles, 1);
        assert_eq!(stats.rejections, 1);
        assert_eq!(stats.previews_generated, 1);
        assert_eq!(stats.mints_submitted, 1);
    }
}
