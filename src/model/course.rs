use crate::error::ScorecardError;
use serde::{Deserialize, Serialize};

pub const FRONT_NINE_LEN: usize = 9;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hole {
    pub number: u8,
    pub par: u8,
    /// Stroke index of the hole, 1 = hardest. Expected to be a permutation
    /// of 1..=hole_count; the engine tolerates violations (see
    /// `score::allocation`).
    pub handicap: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CourseMetadata {
    pub total_par: u32,
    pub slope: u32,
    pub rating: f32,
    pub location: String,
}

/// Immutable course layout as returned by the course provider. Shared by
/// reference across every player's calculations.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub holes: Vec<Hole>,
    pub metadata: CourseMetadata,
}

impl Course {
    /// Parse a provider course record from its JSON shape.
    ///
    /// # Errors
    /// Returns `ScorecardError::Parse` when the JSON does not match the
    /// provider shape.
    pub fn from_json(raw: &str) -> Result<Self, ScorecardError> {
        Ok(serde_json::from_str(raw)?)
    }

    #[must_use]
    pub fn hole_count(&self) -> u8 {
        self.holes.len() as u8
    }

    #[must_use]
    pub fn hole(&self, number: u8) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    /// First nine holes in sequence order (fewer on a short course).
    #[must_use]
    pub fn front_nine(&self) -> &[Hole] {
        &self.holes[..self.holes.len().min(FRONT_NINE_LEN)]
    }

    /// Everything after the front nine.
    #[must_use]
    pub fn back_nine(&self) -> &[Hole] {
        &self.holes[self.holes.len().min(FRONT_NINE_LEN)..]
    }

    /// Sum of pars over the whole layout. `metadata.total_par` is the
    /// provider's claim; this is the engine's.
    #[must_use]
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| u32::from(h.par)).sum()
    }

    /// Fixed fallback layout for when course lookup fails.
    #[must_use]
    pub fn augusta_national() -> Self {
        const HOLES: [(u8, u8, u8); 18] = [
            (1, 4, 9),
            (2, 5, 1),
            (3, 4, 13),
            (4, 3, 15),
            (5, 4, 5),
            (6, 3, 17),
            (7, 4, 11),
            (8, 5, 3),
            (9, 4, 7),
            (10, 4, 6),
            (11, 4, 8),
            (12, 3, 18),
            (13, 5, 4),
            (14, 4, 14),
            (15, 5, 2),
            (16, 3, 16),
            (17, 4, 12),
            (18, 4, 10),
        ];
        Course {
            id: "augusta".to_string(),
            name: "Augusta National Golf Club".to_string(),
            holes: HOLES
                .iter()
                .map(|&(number, par, handicap)| Hole {
                    number,
                    par,
                    handicap,
                })
                .collect(),
            metadata: CourseMetadata {
                total_par: 72,
                slope: 155,
                rating: 78.1,
                location: "Augusta, GA".to_string(),
            },
        }
    }
}
