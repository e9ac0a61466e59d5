/// Handicap strokes granted on one hole.
///
/// Strokes are dealt one per hole starting from the hardest (stroke index 1)
/// until the remainder runs out; handicaps above the hole count first give
/// every hole an equal base share. Total over stroke indexes 1..=count always
/// equals the player's handicap.
///
/// Stroke indexes outside 1..=count never earn the extra stroke, so a
/// malformed course degrades the allocation rather than crashing it.
#[must_use]
pub fn strokes_received(player_handicap: u32, hole_handicap: u8, hole_count: u8) -> u32 {
    if hole_count == 0 {
        return 0;
    }
    let count = u32::from(hole_count);
    let base = player_handicap / count;
    let remainder = player_handicap % count;
    if (1..=remainder).contains(&u32::from(hole_handicap)) {
        base + 1
    } else {
        base
    }
}
