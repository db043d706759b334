use super::dimension::ClarityDimension;

/// Reduce a dimension set to a single 0-100 clarity score.
///
/// Weighted average of the dimension scores, rounded half up. Computed in
/// integer arithmetic as `(2 * sum(w * s) + sum(w)) / (2 * sum(w))` so the
/// threshold boundaries are exact. An empty set, or one whose weights are all
/// zero, scores 0.
pub fn calculate_score(dimensions: &[ClarityDimension]) -> u8 {
    let (weighted_sum, total_weight) =
        dimensions
            .iter()
            .fold((0u64, 0u64), |(weighted, total), dimension| {
                let weight = u64::from(dimension.weight);
                (
                    weighted + weight * u64::from(dimension.score),
                    total + weight,
                )
            });

    if total_weight == 0 {
        return 0;
    }

    let rounded = (2 * weighted_sum + total_weight) / (2 * total_weight);
    // The average never exceeds the largest input score, which fits in a u8.
    u8::try_from(rounded).unwrap_or(u8::MAX)
}
