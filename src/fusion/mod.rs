//! Arcana fusion resolver.
//!
//! Fusing two personas of different arcanas yields a third arcana fixed by
//! the authored table in [`data`]. The table is built once on first use and
//! is read-only afterwards, so any number of callers can share it.
//!
//! Pairs are unordered: a single row answers both `A + B` and `B + A`.

mod data;

use std::sync::LazyLock;

use serde::Serialize;

use crate::arcana::Arcana;

const N: usize = Arcana::COUNT;

/// An unordered pair of two distinct arcanas.
///
/// Stored with the lower-ranked arcana first, so `{A, B}` and `{B, A}` are
/// the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FusionPair {
    first: Arcana,
    second: Arcana,
}

impl FusionPair {
    /// Build the canonical pair. Same-arcana pairs do not exist.
    pub fn new(a: Arcana, b: Arcana) -> Option<Self> {
        match a.rank().cmp(&b.rank()) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> Arcana {
        self.first
    }

    pub fn second(&self) -> Arcana {
        self.second
    }

    /// The partner of `arcana` in this pair, if `arcana` is part of it.
    pub fn partner_of(&self, arcana: Arcana) -> Option<Arcana> {
        if self.first == arcana {
            Some(self.second)
        } else if self.second == arcana {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Immutable fusion lookup table.
///
/// `grid[a][b]` mirrors `grid[b][a]` and the diagonal is always empty.
/// `producers[r]` holds indices into `entries` for rows yielding `r`,
/// in declaration order.
pub struct FusionTable {
    entries: Vec<(FusionPair, Arcana)>,
    grid: [[Option<Arcana>; N]; N],
    producers: Vec<Vec<usize>>,
}

impl FusionTable {
    /// Build a table from `(ingredient, ingredient, result)` rows.
    ///
    /// Self-pairs and repeated pairs are dropped with a warning; the first
    /// occurrence of a pair wins.
    pub fn from_rows(rows: &[(Arcana, Arcana, Arcana)]) -> Self {
        let mut entries = Vec::with_capacity(rows.len());
        let mut grid = [[None; N]; N];
        let mut producers = vec![Vec::new(); N];

        for &(a, b, result) in rows {
            let Some(pair) = FusionPair::new(a, b) else {
                tracing::warn!(arcana = %a, "skipping same-arcana fusion row");
                continue;
            };
            let (i, j) = (pair.first.rank(), pair.second.rank());
            if grid[i][j].is_some() {
                tracing::warn!(first = %pair.first, second = %pair.second, "skipping duplicate fusion row");
                continue;
            }
            grid[i][j] = Some(result);
            grid[j][i] = Some(result);
            producers[result.rank()].push(entries.len());
            entries.push((pair, result));
        }

        Self {
            entries,
            grid,
            producers,
        }
    }

    /// What `a` and `b` fuse into.
    ///
    /// `None` when `a == b` or when the pair has no authored result.
    pub fn resolve(&self, a: Arcana, b: Arcana) -> Option<Arcana> {
        if a == b {
            return None;
        }
        self.grid[a.rank()][b.rank()]
    }

    /// Every pair that fuses into `target`, in table order.
    pub fn find_pairs_producing(&self, target: Arcana) -> Vec<FusionPair> {
        self.producers[target.rank()]
            .iter()
            .map(|&idx| self.entries[idx].0)
            .collect()
    }

    /// All `(partner, result)` combinations involving `arcana`, in table order.
    pub fn partners(&self, arcana: Arcana) -> Vec<(Arcana, Arcana)> {
        self.entries
            .iter()
            .filter_map(|(pair, result)| pair.partner_of(arcana).map(|p| (p, *result)))
            .collect()
    }

    /// Full result grid in declared arcana order.
    pub fn chart(&self) -> [[Option<Arcana>; N]; N] {
        self.grid
    }

    pub fn entries(&self) -> impl Iterator<Item = (FusionPair, Arcana)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static TABLE: LazyLock<FusionTable> = LazyLock::new(|| FusionTable::from_rows(data::FUSION_ROWS));

/// The authored fusion table, built on first access.
pub fn table() -> &'static FusionTable {
    &TABLE
}

/// Resolve a fusion against the authored table.
pub fn resolve(a: Arcana, b: Arcana) -> Option<Arcana> {
    table().resolve(a, b)
}

/// Reverse search against the authored table.
pub fn find_pairs_producing(target: Arcana) -> Vec<FusionPair> {
    table().find_pairs_producing(target)
}
