//! Candidate row sources for an access path.

use crate::planner::AccessPath;
use core::slice;
use sylph_core::{Row, RowId};
use sylph_storage::RowStore;

/// Rows produced by an access path, in insertion order.
pub enum Candidates<'a> {
    /// Contiguous rows from the arena (full scan or single unique hit).
    Rows(slice::Iter<'a, Row>),
    /// Handles from a plain map.
    Handles {
        store: &'a RowStore,
        ids: slice::Iter<'a, RowId>,
    },
}

impl<'a> Candidates<'a> {
    /// Opens the candidate source for a path.
    pub fn open(store: &'a RowStore, path: &AccessPath) -> Self {
        match path {
            AccessPath::UniqueProbe { field, key } => {
                let hit = store
                    .indexes()
                    .lookup_unique(*field, key)
                    .and_then(|id| store.get(id));
                let rows: &'a [Row] = match hit {
                    Some(row) => slice::from_ref(row),
                    None => &[],
                };
                Candidates::Rows(rows.iter())
            }
            AccessPath::IndexProbe { field, key, .. } => Candidates::Handles {
                store,
                ids: store.indexes().lookup_plain(*field, key).iter(),
            },
            AccessPath::FullScan => Candidates::Rows(store.rows().iter()),
        }
    }
}

impl<'a> Iterator for Candidates<'a> {
    type Item = &'a Row;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Candidates::Rows(rows) => rows.next(),
            Candidates::Handles { store, ids } => {
                let store = *store;
                ids.find_map(|id| store.get(*id))
            }
        }
    }
}
