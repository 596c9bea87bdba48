// Mint service - the seam to the (out-of-scope) mint transaction backend
//
// Confirming a mint in the preview surface calls through this interface.
// The in-scope implementation is a stub: it logs the request and returns a
// receipt for the success toast. A real implementation would submit an
// on-chain transaction here.

use crate::catalog::Trait;
use anyhow::Result;
use chrono::{DateTime, Utc};

/// Receipt returned by a mint submission
#[derive(Debug, Clone)]
pub struct MintReceipt {
    pub fid: String,
    pub trait_count: usize,
    pub submitted_at: DateTime<Utc>,
}

/// Submits mint requests for a composed Degen
pub trait MintService {
    fn mint(&self, fid: &str, traits: &[&Trait]) -> Result<MintReceipt>;
}

/// Stub minter: no chain interaction, just a trace line and a receipt
#[derive(Debug, Default, Clone, Copy)]
pub struct StubMinter;

impl MintService for StubMinter {
    fn mint(&self, fid: &str, traits: &[&Trait]) -> Result<MintReceipt> {
        let ids: Vec<&str> = traits.iter().map(|t| t.id.as_str()).collect();
        tracing::info!("Mint submitted: FID #{} with traits {:?}", fid, ids);

        Ok(MintReceipt {
            fid: fid.to_string(),
            trait_count: traits.len(),
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn stub_minter_returns_receipt() {
        let catalog = Catalog::builtin();
        let traits: Vec<&Trait> = vec![catalog.get("orb").unwrap(), catalog.get("sword").unwrap()];

        let receipt = StubMinter.mint("3621", &traits).unwrap();
        assert_eq!(receipt.fid, "3621");
        assert_eq!(receipt.trait_count, 2);
    }
}
