//! Placement store and move engine.
//!
//! The store maps every collection (the tray and each blank) to the
//! ordered candidates it holds. The only way to mutate it is
//! [`PlacementStore::apply`], which keeps every candidate identity in
//! exactly one collection: nothing is ever duplicated or dropped.

use std::collections::BTreeMap;

use crate::model::{BlankId, Candidate, CandidateId, CollectionId, Location};

/// Why a move event left the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The gesture ended outside any drop target.
    NoDestination,
    /// Origin or destination names a collection this question does not have.
    UnknownCollection(CollectionId),
    /// Nothing sits at the origin index.
    EmptyOrigin { collection: CollectionId, index: usize },
    /// Reordering within a single-slot blank.
    SameBlank,
}

/// Result of applying one move event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// State unchanged.
    Ignored(IgnoreReason),
    /// A candidate changed position inside its own collection.
    Reordered,
    /// A candidate moved to another collection.
    Moved,
    /// A candidate took an occupied blank; the occupant went back to the
    /// origin collection at the origin index.
    Swapped { displaced: CandidateId },
}

impl MoveOutcome {
    pub fn changed(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}

/// Which candidates currently sit in which collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementStore {
    collections: BTreeMap<CollectionId, Vec<Candidate>>,
}

impl PlacementStore {
    /// Initial state: every candidate in the tray, every blank empty.
    pub fn new(candidates: Vec<Candidate>, blanks: impl IntoIterator<Item = BlankId>) -> Self {
        let mut collections = BTreeMap::new();
        collections.insert(CollectionId::Tray, candidates);
        for blank in blanks {
            collections.insert(CollectionId::Blank(blank), Vec::new());
        }
        Self { collections }
    }

    /// Candidates in the tray, in display order.
    pub fn tray(&self) -> &[Candidate] {
        self.collection(CollectionId::Tray).unwrap_or_default()
    }

    /// Contents of a collection, or `None` if it does not exist.
    pub fn collection(&self, id: CollectionId) -> Option<&[Candidate]> {
        self.collections.get(&id).map(Vec::as_slice)
    }

    /// The candidate sitting in a blank, if any.
    pub fn occupant(&self, blank: BlankId) -> Option<&Candidate> {
        self.collections
            .get(&CollectionId::Blank(blank))
            .and_then(|slot| slot.first())
    }

    /// Blank ids in reading order.
    pub fn blank_ids(&self) -> impl Iterator<Item = BlankId> + '_ {
        self.collections.keys().filter_map(|id| match id {
            CollectionId::Blank(blank) => Some(*blank),
            CollectionId::Tray => None,
        })
    }

    /// Where a candidate currently is.
    pub fn locate(&self, id: CandidateId) -> Option<Location> {
        self.collections.iter().find_map(|(collection, items)| {
            items
                .iter()
                .position(|c| c.id == id)
                .map(|index| Location::new(*collection, index))
        })
    }

    /// Total number of candidates across all collections.
    pub fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every candidate identity, sorted.
    pub fn candidate_ids(&self) -> Vec<CandidateId> {
        let mut ids: Vec<_> = self
            .collections
            .values()
            .flatten()
            .map(|c| c.id)
            .collect();
        ids.sort();
        ids
    }

    /// Apply one move event.
    ///
    /// Out-of-range destination indices are clamped to the end of the
    /// destination; anything else that does not make sense is ignored.
    pub fn apply(&mut self, origin: Location, dest: Option<Location>) -> MoveOutcome {
        let outcome = self.apply_inner(origin, dest);
        match outcome {
            MoveOutcome::Ignored(reason) => {
                tracing::debug!(?origin, ?dest, ?reason, "move ignored");
            }
            _ => {
                tracing::debug!(?origin, ?dest, ?outcome, "move applied");
            }
        }
        outcome
    }

    fn apply_inner(&mut self, origin: Location, dest: Option<Location>) -> MoveOutcome {
        let Some(dest) = dest else {
            return MoveOutcome::Ignored(IgnoreReason::NoDestination);
        };
        for id in [origin.collection, dest.collection] {
            if !self.collections.contains_key(&id) {
                return MoveOutcome::Ignored(IgnoreReason::UnknownCollection(id));
            }
        }
        let origin_len = self.collections[&origin.collection].len();
        if origin.index >= origin_len {
            return MoveOutcome::Ignored(IgnoreReason::EmptyOrigin {
                collection: origin.collection,
                index: origin.index,
            });
        }

        if origin.collection == dest.collection {
            if origin.collection.is_blank() {
                return MoveOutcome::Ignored(IgnoreReason::SameBlank);
            }
            let items = self.slot_mut(origin.collection);
            let moving = items.remove(origin.index);
            let at = dest.index.min(items.len());
            items.insert(at, moving);
            return MoveOutcome::Reordered;
        }

        let moving = self.slot_mut(origin.collection).remove(origin.index);

        let slot = self.slot_mut(dest.collection);
        let full = dest
            .collection
            .capacity()
            .is_some_and(|cap| slot.len() >= cap);
        let displaced = if full { slot.pop() } else { None };
        let at = dest.index.min(slot.len());
        slot.insert(at, moving);

        match displaced {
            Some(occupant) => {
                let displaced = occupant.id;
                let back = self.slot_mut(origin.collection);
                let at = origin.index.min(back.len());
                back.insert(at, occupant);
                MoveOutcome::Swapped { displaced }
            }
            None => MoveOutcome::Moved,
        }
    }

    /// Only called after the collection was checked to exist.
    fn slot_mut(&mut self, id: CollectionId) -> &mut Vec<Candidate> {
        self.collections.entry(id).or_default()
    }
}
