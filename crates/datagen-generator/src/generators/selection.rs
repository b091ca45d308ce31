//! Candidate selection over extracted value maps.

use crate::dataset::ValueMap;
use crate::error::GeneratorError;
use crate::random::RandomSource;
use tracing::trace;

/// How keys are chosen across the maps of a multi-path request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Each map picks its own random key.
    #[default]
    Independent,
    /// One key index is drawn from the first map and reused for every map,
    /// clamped to the last key of maps that are shorter.
    ///
    /// Datasets that order their keys in parallel (e.g. `male`, `female` in
    /// both first- and last-name maps) stay consistent this way.
    Correlated,
}

/// Pick one candidate per map and join them with single spaces.
pub fn select_values<R: RandomSource + ?Sized>(
    maps: &[ValueMap],
    random: &mut R,
    selection: Selection,
) -> Result<String, GeneratorError> {
    let first = maps
        .first()
        .ok_or_else(|| GeneratorError::malformed("<no value maps>", "no paths to resolve"))?;
    if first.is_empty() {
        return Err(GeneratorError::mismatch("value map #0", "no attributes"));
    }

    let shared_index = match selection {
        Selection::Independent => None,
        Selection::Correlated => Some(random.next_index(first.len())),
    };

    let mut values = Vec::with_capacity(maps.len());
    for (position, map) in maps.iter().enumerate() {
        let index = match shared_index {
            Some(index) => index.min(map.len().saturating_sub(1)),
            None if map.is_empty() => 0,
            None => random.next_index(map.len()),
        };
        let (key, candidates) = map.get_index(index).ok_or_else(|| {
            GeneratorError::mismatch(&format!("value map #{position}"), "no attributes")
        })?;
        if candidates.is_empty() {
            return Err(GeneratorError::mismatch(
                &format!("value map #{position}"),
                format!("attribute '{key}' has no candidates"),
            ));
        }

        let value = &candidates[random.next_index(candidates.len())];
        trace!(key = %key, value = %value, "Selected candidate");
        values.push(value.as_str());
    }

    Ok(values.join(" "))
}
