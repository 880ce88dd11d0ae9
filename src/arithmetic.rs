/// Combines a computor's old final score with its custom mining score.
///
/// The product wraps on overflow; it is never widened or saturated.
pub fn compute_new_score(old_score: u64, custom_score: u64) -> u64 {
    old_score.wrapping_mul(custom_score)
}
