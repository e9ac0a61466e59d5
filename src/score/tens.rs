use crate::model::{Course, Player};
use serde::Serialize;

pub const MAX_TEN_HOLES: usize = 10;

#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TensSummary {
    pub count: usize,
    pub total: i32,
    pub over_under: i32,
}

impl TensSummary {
    /// "3/10" style display of how many holes are picked.
    #[must_use]
    pub fn count_display(&self) -> String {
        format!("{}/{MAX_TEN_HOLES}", self.count)
    }

    /// Signed over/under display: "+2", "-1", "+0".
    #[must_use]
    pub fn over_under_display(&self) -> String {
        if self.over_under >= 0 {
            format!("+{}", self.over_under)
        } else {
            self.over_under.to_string()
        }
    }
}

/// Game-of-10s standing over the player's picked holes. An unscored pick
/// counts as net 0 but still charges its par to the over/under.
#[must_use]
pub fn tens_summary(player: &Player, course: &Course) -> TensSummary {
    let mut summary = TensSummary {
        count: player.selected_tens.len(),
        ..TensSummary::default()
    };
    for &number in &player.selected_tens {
        let net = player.score(number).map_or(0, |s| s.net);
        summary.total += net;
        if let Some(hole) = course.hole(number) {
            summary.over_under += net - i32::from(hole.par);
        }
    }
    summary
}
