use super::types::{Receipt, StoredReceipt, Submitted};
use crate::scoring::{calculate_points, ScoringConfig};
use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Receipt not found: {0}")]
    NotFound(String),
}

/// Append-only in-memory ledger of scored receipts.
///
/// Identifiers are the decimal index of the record ("0", "1", ...). The id is
/// assigned and the record appended under the same write guard, so concurrent
/// submissions never share or skip an id.
#[derive(Debug)]
pub struct ReceiptStore {
    scoring: ScoringConfig,
    receipts: RwLock<Vec<StoredReceipt>>,
}

impl Default for ReceiptStore {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ReceiptStore {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            scoring,
            receipts: RwLock::new(Vec::new()),
        }
    }

    /// Score a receipt, assign it the next id and store it.
    pub fn submit(&self, receipt: Receipt) -> Submitted {
        let result = calculate_points(&receipt, &self.scoring);

        let mut receipts = self.receipts.write();
        let id = receipts.len().to_string();
        let received_at = Utc::now();
        receipts.push(StoredReceipt {
            id: id.clone(),
            points: result.points,
            received_at,
            receipt,
        });
        drop(receipts);

        for contribution in &result.breakdown {
            tracing::debug!(
                id = %id,
                rule = contribution.label,
                points = contribution.points,
                "{}",
                contribution.description
            );
        }
        tracing::info!(
            id = %id,
            points = result.points,
            received_at = %received_at.to_rfc3339(),
            "receipt accepted"
        );

        Submitted {
            id,
            points: result.points,
        }
    }

    /// Points recorded for the receipt with exactly this id.
    pub fn get_points(&self, id: &str) -> Result<u64, StoreError> {
        self.with_receipt(id, |stored| stored.points)
    }

    pub fn len(&self) -> usize {
        self.receipts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_receipt<T>(&self, id: &str, f: impl FnOnce(&StoredReceipt) -> T) -> Result<T, StoreError> {
        let receipts = self.receipts.read();
        // The id doubles as the index; the string comparison rejects
        // non-canonical forms such as "007" or "+7".
        id.parse::<usize>()
            .ok()
            .and_then(|index| receipts.get(index))
            .filter(|stored| stored.id == id)
            .map(f)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
