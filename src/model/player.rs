use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Roster-issued player id, stable for the session.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
pub struct PlayerId(pub i64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleScore {
    pub gross: u32,
    /// Gross minus strokes received; negative when the player beat their
    /// allocation. Never clamped.
    pub net: i32,
}

/// One scorecard row. Mutated only through `Roster` operations.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub handicap: u32,
    /// Entries exist only for holes that have been scored; absence means
    /// "not yet played", distinct from a recorded zero.
    pub ledger: BTreeMap<u8, HoleScore>,
    pub selected_tens: BTreeSet<u8>,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Player {
            id,
            name: String::new(),
            handicap: 0,
            ledger: BTreeMap::new(),
            selected_tens: BTreeSet::new(),
        }
    }

    /// Recorded score for a hole, if one has been entered.
    #[must_use]
    pub fn score(&self, hole_number: u8) -> Option<&HoleScore> {
        self.ledger.get(&hole_number)
    }

    #[must_use]
    pub fn has_ten(&self, hole_number: u8) -> bool {
        self.selected_tens.contains(&hole_number)
    }
}
