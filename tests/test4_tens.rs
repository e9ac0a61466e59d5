mod common;

use golf_scorecard::error::ScorecardError;
use golf_scorecard::score::tens_summary;

#[test]
fn test4_summary_counts_picked_holes() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(0);

    roster.record_gross(id, &course, 1, 3)?; // par 4, net 3
    roster.record_gross(id, &course, 2, 7)?; // par 5, net 7
    roster.toggle_ten(id, &course, 1)?;
    roster.toggle_ten(id, &course, 2)?;
    roster.toggle_ten(id, &course, 3)?; // par 4, unscored

    let summary = tens_summary(roster.player(id).unwrap(), &course);
    assert_eq!(summary.count, 3);
    assert_eq!(summary.count_display(), "3/10");
    // Unscored picks count as net 0 but still charge par.
    assert_eq!(summary.total, 10);
    assert_eq!(summary.over_under, -3);
    assert_eq!(summary.over_under_display(), "-3");
    Ok(())
}

#[test]
fn test4_empty_selection_is_even() {
    let course = common::augusta();
    let (roster, id) = common::roster_with_player(0);

    let summary = tens_summary(roster.player(id).unwrap(), &course);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.over_under_display(), "+0");
}

#[test]
fn test4_selection_caps_at_ten() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(0);

    for hole in 1..=10u8 {
        roster.toggle_ten(id, &course, hole)?;
    }
    assert_eq!(roster.player(id).unwrap().selected_tens.len(), 10);

    // The eleventh pick is silently ignored.
    roster.toggle_ten(id, &course, 11)?;
    let player = roster.player(id).unwrap();
    assert_eq!(player.selected_tens.len(), 10);
    assert!(!player.has_ten(11));
    Ok(())
}

#[test]
fn test4_removal_always_works() -> Result<(), ScorecardError> {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(0);

    for hole in 1..=10u8 {
        roster.toggle_ten(id, &course, hole)?;
    }
    roster.toggle_ten(id, &course, 5)?;
    let player = roster.player(id).unwrap();
    assert_eq!(player.selected_tens.len(), 9);
    assert!(!player.has_ten(5));

    // Freed capacity can be used again.
    roster.toggle_ten(id, &course, 11)?;
    assert!(roster.player(id).unwrap().has_ten(11));
    Ok(())
}

#[test]
fn test4_unknown_hole_is_rejected() {
    let course = common::augusta();
    let (mut roster, id) = common::roster_with_player(0);

    assert_eq!(
        roster.toggle_ten(id, &course, 19),
        Err(ScorecardError::UnknownHole(19))
    );
    assert!(roster.player(id).unwrap().selected_tens.is_empty());
}
