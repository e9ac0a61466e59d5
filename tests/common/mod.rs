#![allow(dead_code)]

use golf_scorecard::model::{Course, PlayerId};
use golf_scorecard::roster::{PlayerPatch, Roster};

pub fn augusta() -> Course {
    Course::augusta_national()
}

pub fn roster_with_player(handicap: u32) -> (Roster, PlayerId) {
    let mut roster = Roster::new();
    let id = roster.add_player().expect("empty roster has room");
    roster.update_player(
        id,
        PlayerPatch {
            handicap: Some(handicap),
            ..PlayerPatch::default()
        },
    );
    (roster, id)
}
