//! Scoring, leveling, and gravity pacing - pure functions
//!
//! Lines are always scored as a single batch per merge event; the level
//! rises by at most one per clear event.

use blockfall_types::{FRAMES_PER_DROP, LINE_SCORES, TARGET_SECONDS_PER_FRAME};

/// Points for clearing `lines` rows at once on the given level.
///
/// 1/2/3/4 rows are worth 40/100/300/1200 times `(level + 1)`; any other
/// count is worth nothing.
pub fn points_for(level: u32, lines: u32) -> u32 {
    if lines == 0 || lines > 4 {
        return 0;
    }
    LINE_SCORES[lines as usize] * (level + 1)
}

/// Cumulative line count at which the current level rolls over.
///
/// The first threshold is `min(start*10 + 10, max(100, start*10 - 50))`;
/// every level past the start level adds a flat 10 lines on top of it.
pub fn lines_for_next_level(start_level: u32, level: u32) -> u32 {
    let first = (start_level * 10 + 10).min((start_level * 10).saturating_sub(50).max(100));
    first + (level - start_level) * 10
}

/// Seconds between automatic gravity steps at the given level.
///
/// Frame counts come from the drop table; levels past the table clamp to
/// its last entry.
pub fn drop_interval(level: u32) -> f32 {
    let index = (level as usize).min(FRAMES_PER_DROP.len() - 1);
    f32::from(FRAMES_PER_DROP[index]) * TARGET_SECONDS_PER_FRAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_scores_match_classic_table() {
        assert_eq!(points_for(0, 1), 40);
        assert_eq!(points_for(0, 2), 100);
        assert_eq!(points_for(0, 3), 300);
        assert_eq!(points_for(0, 4), 1200);

        assert_eq!(points_for(5, 1), 40 * 6);
        assert_eq!(points_for(5, 4), 1200 * 6);

        assert_eq!(points_for(0, 0), 0);
        assert_eq!(points_for(9, 0), 0);
        assert_eq!(points_for(0, 5), 0);
    }

    #[test]
    fn first_threshold_depends_on_start_level() {
        assert_eq!(lines_for_next_level(0, 0), 10);
        assert_eq!(lines_for_next_level(5, 5), 60);
        assert_eq!(lines_for_next_level(9, 9), 100);
        // The 100-line cap kicks in for mid start levels...
        assert_eq!(lines_for_next_level(10, 10), 100);
        assert_eq!(lines_for_next_level(15, 15), 100);
        // ...and lifts again once start*10 - 50 exceeds it.
        assert_eq!(lines_for_next_level(16, 16), 110);
    }

    #[test]
    fn later_levels_add_flat_ten() {
        assert_eq!(lines_for_next_level(0, 1), 20);
        assert_eq!(lines_for_next_level(0, 3), 40);
        assert_eq!(lines_for_next_level(5, 8), 90);
    }

    #[test]
    fn drop_interval_follows_table_and_clamps() {
        let frame = 1.0 / 60.0;
        assert!((drop_interval(0) - 48.0 * frame).abs() < 1e-6);
        assert!((drop_interval(8) - 8.0 * frame).abs() < 1e-6);
        assert!((drop_interval(29) - frame).abs() < 1e-6);
        // Past the table: same as the last entry.
        assert!((drop_interval(200) - frame).abs() < 1e-6);
    }
}
