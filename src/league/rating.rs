//! Paired-comparison (Elo) rating updates for confirmed match outcomes.

/// Rating assigned to newly registered teams.
pub const DEFAULT_RATING: i32 = 1000;

/// Maximum rating transfer per match.
const K_FACTOR: f64 = 32.0;

/// Spread of the logistic expected-score curve.
const SCALE: f64 = 400.0;

/// Computes the post-match ratings for a winner/loser pair.
///
/// Pure and deterministic; the caller persists the returned values. The
/// exchange is zero-sum: the winner gains exactly what the loser gives up,
/// never more than `K_FACTOR` points, and an upset moves more points than an
/// expected win.
pub fn updated_ratings(winner_rating: i32, loser_rating: i32) -> (i32, i32) {
    let expected = expected_score(winner_rating, loser_rating);
    let transfer = (K_FACTOR * (1.0 - expected)).round() as i32;
    (winner_rating + transfer, loser_rating - transfer)
}

fn expected_score(rating: i32, opponent: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf(f64::from(opponent - rating) / SCALE))
}
