use std::collections::HashMap;
use tracing::{debug, warn};

use crate::models::constants::MAX_SCORE;

use super::dimension::{ClarityDimension, DimensionKind};

/// Apply a `name:score,name:score` list to `dimensions`.
///
/// Each parsed score is clamped into 0-100. Pairs without a `:`, pairs whose
/// value does not start with an integer, and unknown dimension names are
/// skipped with a warning; they never fail the parse. When a name repeats,
/// the last value wins. Dimensions not mentioned keep their current score.
///
/// Returns the number of dimensions that received a score.
pub fn parse_dimension_scores(input: &str, dimensions: &mut [ClarityDimension]) -> usize {
    let mut scores: HashMap<DimensionKind, u8> = HashMap::new();

    for pair in input.split(',') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let Some((name, value)) = pair.split_once(':') else {
            warn!(pair, "ignoring dimension score without a ':' separator");
            continue;
        };
        let name = name.trim();

        let Some(raw) = leading_integer(value) else {
            warn!(pair, "ignoring dimension score with a non-numeric value");
            continue;
        };

        let Some(kind) = DimensionKind::from_name(name) else {
            warn!(name, "ignoring score for unknown clarity dimension");
            continue;
        };

        scores.insert(kind, clamp_score(raw));
    }

    let mut applied = 0;
    for dimension in dimensions.iter_mut() {
        if let Some(score) = scores.get(&dimension.kind) {
            dimension.score = *score;
            applied += 1;
        }
    }

    debug!(applied, "applied clarity dimension scores");
    applied
}

fn clamp_score(raw: i64) -> u8 {
    let clamped = raw.clamp(0, i64::from(MAX_SCORE));
    u8::try_from(clamped).unwrap_or(MAX_SCORE)
}

/// Parse the integer at the start of `value` (after leading whitespace),
/// ignoring anything that follows it. `"85"`, `" -10"` and `"70%"` all
/// parse; `"high"` and out-of-range values do not.
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let sign_len = usize::from(value.starts_with(['+', '-']));
    let digits_len = value[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    value[..sign_len + digits_len].parse().ok()
}
