use serde::{Deserialize, Serialize};

use crate::{
    layout::resolve_box_tops, maxima::extract_maxima, totals::aggregate_totals, BoxTops, Dataset,
    DestinationValues, FlowCountRecord, Result, SummaryConfig, SummaryError, TotalsRecord,
};

/// Everything a renderer needs to animate the diagram without resizing boxes
/// mid-playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub totals: Vec<TotalsRecord>,
    pub flows: Vec<FlowCountRecord>,
    pub maxes: DestinationValues<f64>,
    pub box_tops: BoxTops,
}

impl Summary {
    /// Tallest the left-hand source column gets in any period.
    pub fn max_stack_height(&self) -> f64 {
        self.totals
            .iter()
            .map(|total| total.stack_height)
            .fold(0.0, f64::max)
    }
}

/// Builds the summary for `dataset` in one pass: totals, then maxima, then
/// box tops. The dataset must contain at least one period.
pub fn build_summary(dataset: &Dataset, config: &SummaryConfig) -> Result<Summary> {
    config.validate()?;
    if dataset.is_empty() {
        return Err(SummaryError::EmptyDataset);
    }

    let span = tracing::debug_span!("build_summary", periods = dataset.len());
    let _guard = span.enter();

    let aggregated = aggregate_totals(&dataset.periods, &config.sources, &config.layout);
    let maxes = extract_maxima(&aggregated.totals).ok_or(SummaryError::EmptyDataset)?;
    let box_tops = resolve_box_tops(&maxes, &config.layout);

    Ok(Summary {
        totals: aggregated.totals,
        flows: aggregated.flows,
        maxes,
        box_tops,
    })
}
