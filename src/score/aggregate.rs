use crate::model::{Course, Hole, Player};
use crate::score::allocation::strokes_received;
use serde::Serialize;
use std::ops::Add;

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionSummary {
    pub gross: u32,
    pub net: i32,
    pub strokes: u32,
}

impl Add for SectionSummary {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        SectionSummary {
            gross: self.gross + other.gross,
            net: self.net + other.net,
            strokes: self.strokes + other.strokes,
        }
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScorecardSummary {
    pub front: SectionSummary,
    pub back: SectionSummary,
    pub total: SectionSummary,
}

/// One hole of a player's card as the rendering collaborator shows it.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleLine {
    pub number: u8,
    pub gross: Option<u32>,
    pub net: Option<i32>,
    pub strokes_received: u32,
}

/// Sum a player's card over a subset of holes. Unscored holes contribute 0
/// to gross and net; `strokes` is allocated fresh from the player's present
/// handicap, independent of the ledger.
#[must_use]
pub fn summarize_section(player: &Player, course: &Course, holes: &[Hole]) -> SectionSummary {
    let count = course.hole_count();
    let mut section = SectionSummary::default();
    for hole in holes {
        if let Some(score) = player.score(hole.number) {
            section.gross += score.gross;
            section.net += score.net;
        }
        section.strokes += strokes_received(player.handicap, hole.handicap, count);
    }
    section
}

/// Front-nine, back-nine, and whole-round sums for one player's card.
/// `total` reconciles with `front + back` componentwise.
#[must_use]
pub fn summarize(player: &Player, course: &Course) -> ScorecardSummary {
    ScorecardSummary {
        front: summarize_section(player, course, course.front_nine()),
        back: summarize_section(player, course, course.back_nine()),
        total: summarize_section(player, course, &course.holes),
    }
}

#[must_use]
pub fn hole_line(player: &Player, course: &Course, hole: &Hole) -> HoleLine {
    let score = player.score(hole.number);
    HoleLine {
        number: hole.number,
        gross: score.map(|s| s.gross),
        net: score.map(|s| s.net),
        strokes_received: strokes_received(player.handicap, hole.handicap, course.hole_count()),
    }
}
