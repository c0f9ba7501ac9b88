//! Scoring module - points awarded per simultaneous line clear
//!
//! Fixed table with no level multiplier: 1 line = 100, 2 = 300, 3 = 500,
//! 4 = 800. Counts above four fall back to `count * 200`; a single lock can
//! only touch four rows, so the fallback is kept for completeness rather
//! than as a reachable rule.

/// Base points for 0..=4 simultaneous lines.
const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Points awarded for clearing `lines` rows with one lock.
pub fn score_for_lines(lines: usize) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&points) => points,
        None => (lines as u32) * 200,
    }
}
