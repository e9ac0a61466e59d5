mod common;

use golf_scorecard::error::ScorecardError;
use golf_scorecard::model::{HoleScore, PlayerId};
use golf_scorecard::roster::PlayerPatch;

// Augusta hole 2 carries stroke index 1, so a 20 handicap gets two strokes
// there (base 1, remainder 2).

#[test]
fn test2_net_derives_from_current_handicap() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(20);

    let entry = roster.record_gross(id, &course, 2, 6)?;
    assert_eq!(entry, HoleScore { gross: 6, net: 4 });
    assert_eq!(roster.player(id).unwrap().score(2), Some(&entry));
    Ok(())
}

#[test]
fn test2_rerecording_overwrites() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(20);

    roster.record_gross(id, &course, 2, 6)?;
    let entry = roster.record_gross(id, &course, 2, 5)?;
    assert_eq!(entry, HoleScore { gross: 5, net: 3 });
    assert_eq!(roster.player(id).unwrap().ledger.len(), 1);
    Ok(())
}

#[test]
fn test2_recording_is_idempotent() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(20);

    let first = roster.record_gross(id, &course, 2, 6)?;
    let second = roster.record_gross(id, &course, 2, 6)?;
    assert_eq!(first, second);
    assert_eq!(roster.player(id).unwrap().ledger.len(), 1);
    Ok(())
}

#[test]
fn test2_handicap_edit_is_not_retroactive() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(20);

    roster.record_gross(id, &course, 2, 6)?;
    roster.update_player(
        id,
        PlayerPatch {
            handicap: Some(0),
            ..PlayerPatch::default()
        },
    );

    // The already-recorded hole keeps its stale net.
    assert_eq!(
        roster.player(id).unwrap().score(2),
        Some(&HoleScore { gross: 6, net: 4 })
    );

    // New entries and re-entries use the edited handicap.
    let fresh = roster.record_gross(id, &course, 3, 4)?;
    assert_eq!(fresh, HoleScore { gross: 4, net: 4 });
    let reentered = roster.record_gross(id, &course, 2, 6)?;
    assert_eq!(reentered, HoleScore { gross: 6, net: 6 });
    Ok(())
}

#[test]
fn test2_net_can_go_negative() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(20);

    // Hole 4 carries stroke index 15: base share only.
    let entry = roster.record_gross(id, &course, 4, 0)?;
    assert_eq!(entry, HoleScore { gross: 0, net: -1 });
    Ok(())
}

#[test]
fn test2_recorded_zero_differs_from_unplayed() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(0);

    roster.record_gross(id, &course, 4, 0)?;
    let player = roster.player(id).unwrap();
    assert_eq!(player.score(4), Some(&HoleScore { gross: 0, net: 0 }));
    assert_eq!(player.score(5), None);
    Ok(())
}

#[test]
fn test2_unknown_hole_is_rejected() {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(20);

    assert_eq!(
        roster.record_gross(id, &course, 99, 5),
        Err(ScorecardError::UnknownHole(99))
    );
    assert!(roster.player(id).unwrap().ledger.is_empty());
}

#[test]
fn test2_unknown_player_is_rejected() {
    let course = common::augusta();
    let (mut roster, _) = common::roster_with_player(20);

    assert_eq!(
        roster.record_gross(PlayerId(42), &course, 1, 5),
        Err(ScorecardError::UnknownPlayer(PlayerId(42)))
    );
}
