//! Access path selection.
//!
//! Chooses how candidate rows are produced for a bound condition. Paths are
//! tried in a fixed priority order:
//!
//! 1. A unique probe on the first equality term over a unique or primary key
//!    field with a non-null value.
//! 2. A plain index probe on the equality term over an indexed field whose
//!    probe yields the fewest candidates. Ties keep condition order.
//! 3. A full scan.
//!
//! The chosen path only narrows candidates; the executor still evaluates the
//! whole condition against each of them.

use crate::ast::BoundCondition;
use core::fmt;
use sylph_core::Value;
use sylph_index::Index;
use sylph_storage::RowStore;

/// How candidate rows are fetched.
#[derive(Clone, Debug, PartialEq)]
pub enum AccessPath {
    /// Single lookup in a unique map.
    UniqueProbe { field: usize, key: Value },
    /// Lookup in a plain map.
    IndexProbe {
        field: usize,
        key: Value,
        candidates: usize,
    },
    /// Every row in insertion order.
    FullScan,
}

impl AccessPath {
    /// Returns true for either probe kind.
    pub fn uses_index(&self) -> bool {
        !matches!(self, AccessPath::FullScan)
    }
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessPath::UniqueProbe { field, key } => {
                write!(f, "unique probe on field #{} = {}", field, key)
            }
            AccessPath::IndexProbe {
                field,
                key,
                candidates,
            } => write!(
                f,
                "index probe on field #{} = {} ({} candidates)",
                field, key, candidates
            ),
            AccessPath::FullScan => f.write_str("full scan"),
        }
    }
}

/// Picks the access path for a bound condition.
pub fn plan(store: &RowStore, condition: &BoundCondition<'_>) -> AccessPath {
    let indexes = store.indexes();

    let unique = condition.terms().iter().find_map(|(pos, p)| {
        let key = p.equality_key().filter(|k| !k.is_null())?;
        indexes.unique(*pos)?;
        Some(AccessPath::UniqueProbe {
            field: *pos,
            key: key.clone(),
        })
    });
    if let Some(path) = unique {
        return path;
    }

    let mut best: Option<(usize, &Value, usize)> = None;
    for (pos, p) in condition.terms() {
        let (Some(key), Some(index)) = (p.equality_key(), indexes.plain(*pos)) else {
            continue;
        };
        let cost = index.cost(key);
        if best.map_or(true, |(_, _, c)| cost < c) {
            best = Some((*pos, key, cost));
        }
    }

    match best {
        Some((field, key, candidates)) => AccessPath::IndexProbe {
            field,
            key: key.clone(),
            candidates,
        },
        None => AccessPath::FullScan,
    }
}
