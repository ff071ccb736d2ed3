use crate::{DestinationValues, TotalsRecord};

/// Largest total each destination reaches across every period. Boxes are
/// sized from these so the animation never has to resize them.
///
/// Returns `None` when there are no periods to take a maximum over.
pub(crate) fn extract_maxima(totals: &[TotalsRecord]) -> Option<DestinationValues<f64>> {
    let (first, rest) = totals.split_first()?;

    let maxes = rest.iter().fold(first.destinations, |acc, record| {
        DestinationValues::from_fn(|dest| acc[dest].max(record.destinations[dest]))
    });

    tracing::debug!(?maxes, "extracted destination maxima");
    Some(maxes)
}
