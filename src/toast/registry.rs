// SPDX-License-Identifier: MPL-2.0
//! Ordered store of the toasts currently alive under one provider.

use super::record::{ToastId, ToastOptions, ToastRecord};
use crate::config::ProviderConfig;

/// Insertion-ordered toast records with unique ids.
///
/// There is no cap on the number of live records.
#[derive(Debug)]
pub struct Registry<M> {
    records: Vec<ToastRecord<M>>,
    next_id: u64,
}

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl<M> Registry<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves `options` against `config`, appends the record and returns its id.
    ///
    /// Never fails: unusable fields are replaced by defaults.
    pub fn add(&mut self, options: ToastOptions<M>, config: &ProviderConfig) -> ToastId {
        let id = ToastId::from_raw(self.next_id);
        self.next_id += 1;
        self.records.push(options.resolve(id, config));
        id
    }

    /// Removes the record with `id`. Absent ids are a no-op returning `None`.
    pub fn remove(&mut self, id: ToastId) -> Option<ToastRecord<M>> {
        let pos = self.records.iter().position(|record| record.id() == id)?;
        Some(self.records.remove(pos))
    }

    pub fn records(&self) -> impl Iterator<Item = &ToastRecord<M>> {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastRecord<M>> {
        self.records.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record without reporting them. Ids are never reused.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
