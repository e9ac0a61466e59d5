use crate::error::ScorecardError;
use crate::model::{Course, HoleScore, Player, PlayerId};
use crate::score::allocation::strokes_received;
use crate::score::tens::MAX_TEN_HOLES;

pub const MAX_PLAYERS: usize = 4;

/// Name/handicap edits to merge into a player. `None` fields are left alone.
#[derive(Clone, Debug, Default)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub handicap: Option<u32>,
}

/// Single owner of all player records; every mutation goes through here.
/// Insertion order is display order.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: Vec<Player>,
    next_id: i64,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Roster {
            players: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a fresh player (empty name, handicap 0, empty card). Returns
    /// `None` without adding when the roster already holds four players; the
    /// cap is a soft limit, not an error.
    pub fn add_player(&mut self) -> Option<PlayerId> {
        if self.players.len() >= MAX_PLAYERS {
            return None;
        }
        self.next_id += 1;
        let id = PlayerId(self.next_id);
        self.players.push(Player::new(id));
        Some(id)
    }

    /// Merge edits into the matching player. Unknown ids are ignored: ids
    /// are roster-issued, so a miss is a caller bug rather than a reportable
    /// failure.
    pub fn update_player(&mut self, id: PlayerId, patch: PlayerPatch) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id == id) {
            if let Some(name) = patch.name {
                player.name = name;
            }
            if let Some(handicap) = patch.handicap {
                player.handicap = handicap;
            }
        }
    }

    /// Record a gross score for a hole and derive the net from the player's
    /// current handicap, overwriting any earlier entry for that hole. A
    /// handicap edited after entry only affects holes scored from then on.
    ///
    /// # Errors
    /// `UnknownHole` when the course has no such hole, `UnknownPlayer` when
    /// the id is not in the roster.
    pub fn record_gross(
        &mut self,
        id: PlayerId,
        course: &Course,
        hole_number: u8,
        gross: u32,
    ) -> Result<HoleScore, ScorecardError> {
        let hole = course
            .hole(hole_number)
            .ok_or(ScorecardError::UnknownHole(hole_number))?;
        let hole_handicap = hole.handicap;
        let hole_count = course.hole_count();
        let player = self.player_mut(id)?;
        let allowance = strokes_received(player.handicap, hole_handicap, hole_count);
        let entry = HoleScore {
            gross,
            net: gross as i32 - allowance as i32,
        };
        player.ledger.insert(hole_number, entry);
        Ok(entry)
    }

    /// Toggle a hole in the player's Game-of-10s picks. Removal always
    /// works; adding past ten picks is silently ignored.
    ///
    /// # Errors
    /// `UnknownHole` / `UnknownPlayer`, as for `record_gross`.
    pub fn toggle_ten(
        &mut self,
        id: PlayerId,
        course: &Course,
        hole_number: u8,
    ) -> Result<(), ScorecardError> {
        if course.hole(hole_number).is_none() {
            return Err(ScorecardError::UnknownHole(hole_number));
        }
        let player = self.player_mut(id)?;
        if !player.selected_tens.remove(&hole_number)
            && player.selected_tens.len() < MAX_TEN_HOLES
        {
            player.selected_tens.insert(hole_number);
        }
        Ok(())
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, ScorecardError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ScorecardError::UnknownPlayer(id))
    }
}
