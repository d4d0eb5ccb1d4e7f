//! Kerning pair lookup

use std::collections::HashMap;

use crate::error::ConfigurationError;

use super::description::KerningRecord;

/// Pixel adjustments for ordered character pairs
///
/// Keyed by `(first, second)`; a missing pair adjusts by zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KerningTable {
    pairs: HashMap<(char, char), i32>,
}

impl KerningTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from kerning records
    ///
    /// When a pair is listed twice the later amount wins.
    pub fn from_records(records: &[KerningRecord]) -> Result<Self, ConfigurationError> {
        let mut table = Self {
            pairs: HashMap::with_capacity(records.len()),
        };

        for record in records {
            let first = char::from_u32(record.first)
                .ok_or(ConfigurationError::InvalidCodePoint(record.first))?;
            let second = char::from_u32(record.second)
                .ok_or(ConfigurationError::InvalidCodePoint(record.second))?;

            if let Some(previous) = table.insert(first, second, record.amount) {
                log::warn!(
                    "Kerning pair ({:?}, {:?}) listed twice: {} replaced by {}",
                    first,
                    second,
                    previous,
                    record.amount
                );
            }
        }

        Ok(table)
    }

    /// Set the adjustment for a pair, returning the amount it replaced
    pub fn insert(&mut self, first: char, second: char, amount: i32) -> Option<i32> {
        self.pairs.insert((first, second), amount)
    }

    /// Adjustment applied when `second` directly follows `first`
    pub fn get(&self, first: char, second: char) -> i32 {
        self.pairs.get(&(first, second)).copied().unwrap_or(0)
    }

    /// Number of pairs with an adjustment
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the table holds no pairs
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
