//! In-memory store of finished games.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use tracing::debug;

use crate::error::HistoryError;
use crate::record::GameRecord;

/// Game records keyed by id, listed newest first.
#[derive(Debug, Clone, Default)]
pub struct GameHistory {
    /// Ids, newest first.
    order: Vec<String>,
    records: HashMap<String, GameRecord>,
}

impl GameHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record at the front of the list.
    ///
    /// # Errors
    ///
    /// Returns an error if a record with the same id is already stored.
    pub fn add(&mut self, record: GameRecord) -> Result<(), HistoryError> {
        if self.records.contains_key(&record.id) {
            return Err(HistoryError::DuplicateId);
        }
        debug!(id = %record.id, game_type = %record.game_type, "record stored");
        self.order.insert(0, record.id.clone());
        self.records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Returns the record with the given id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.records.get(id)
    }

    /// Removes and returns the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if no such record is stored.
    pub fn remove(&mut self, id: &str) -> Result<GameRecord, HistoryError> {
        let record = self.records.remove(id).ok_or(HistoryError::NotFound)?;
        self.order.retain(|stored| stored != id);
        Ok(record)
    }

    /// Iterates over the records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
