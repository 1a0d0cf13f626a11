//! Combinations of per-slot correct values

use crate::diagnostics::Diagnostics;

/// Expand per-slot acceptable values into every complete combination.
///
/// Slots keep their order inside each combination. The first slot varies
/// slowest and values within a slot keep their declaration order, so
/// `[[A, C], [B, D]]` yields `AB, AD, CB, CD`. No slots yield one empty
/// combination; a slot without values yields none.
pub fn cartesian_product<T: Clone>(slots: &[Vec<T>]) -> Vec<Vec<T>> {
    slots.iter().fold(vec![Vec::new()], |combinations, values| {
        combinations
            .iter()
            .flat_map(|prefix| {
                values.iter().map(move |value| {
                    let mut combination = Vec::with_capacity(prefix.len() + 1);
                    combination.extend_from_slice(prefix);
                    combination.push(value.clone());
                    combination
                })
            })
            .collect()
    })
}

/// Number of combinations [`cartesian_product`] yields, `None` if it does
/// not fit in a `usize`
pub fn combination_count<T>(slots: &[Vec<T>]) -> Option<usize> {
    slots
        .iter()
        .try_fold(1usize, |count, values| count.checked_mul(values.len()))
}

/// Expand slots into combinations, at most `max_combinations` of them.
///
/// Over the limit only the primary combination, the first value of every
/// slot, is kept and a WARNING is recorded.
pub fn bounded_cartesian_product<T: Clone>(
    slots: &[Vec<T>],
    max_combinations: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<Vec<T>> {
    match combination_count(slots) {
        Some(count) if count <= max_combinations => cartesian_product(slots),
        _ => {
            diagnostics.warn_on(
                "correctResponse",
                format!(
                    "Correct values expand to more than {} responses. Ignoring alternate responses",
                    max_combinations
                ),
            );
            slots
                .iter()
                .map(|values| values.first().cloned())
                .collect::<Option<Vec<_>>>()
                .into_iter()
                .collect()
        }
    }
}
