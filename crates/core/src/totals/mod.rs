use serde::{Deserialize, Serialize};

use crate::{
    Destination, DestinationValues, FuelValues, LayoutConfig, PeriodRecord, SourceCatalog,
    SourceEntry,
};

/// Summed flow sizes for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsRecord {
    pub label: String,
    /// Inflow into each destination box, base contribution included.
    pub destinations: DestinationValues<f64>,
    /// Outflow from each source box.
    pub sources: FuelValues<f64>,
    /// Cumulative height of the left-hand source column in pixels.
    pub stack_height: f64,
}

/// Number of strictly positive flows into each destination for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowCountRecord {
    pub label: String,
    #[serde(flatten)]
    pub counts: DestinationValues<u32>,
}

/// Totals and flow counts, aligned by period index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PeriodTotals {
    pub totals: Vec<TotalsRecord>,
    pub flows: Vec<FlowCountRecord>,
}

pub(crate) fn aggregate_totals(
    periods: &[PeriodRecord],
    sources: &SourceCatalog,
    layout: &LayoutConfig,
) -> PeriodTotals {
    let mut totals = Vec::with_capacity(periods.len());
    let mut flows = Vec::with_capacity(periods.len());

    for period in periods {
        let (total, flow) = aggregate_period(period, sources, layout);
        totals.push(total);
        flows.push(flow);
    }

    tracing::debug!(periods = totals.len(), "aggregated period totals");
    PeriodTotals { totals, flows }
}

fn aggregate_period(
    period: &PeriodRecord,
    sources: &SourceCatalog,
    layout: &LayoutConfig,
) -> (TotalsRecord, FlowCountRecord) {
    let base = sources.base();
    let mut destinations = DestinationValues::<f64>::default();
    let mut source_totals = FuelValues::<f64>::default();
    let mut counts = DestinationValues::<u32>::default();
    let mut stack_height = 0.0;
    let mut base_applied = false;

    for entry in sources.contributors() {
        for dest in Destination::ALL {
            let magnitude = period.magnitude(entry.fuel, dest);
            if magnitude > 0.0 {
                counts[dest] += 1;
            }
            destinations[dest] += magnitude;
            source_totals[entry.fuel] += magnitude;

            // Base flows ride along with the first contributor into each box.
            if !base_applied {
                add_base_contribution(period, base, dest, &mut destinations, &mut source_totals);
            }
        }
        base_applied = true;
        stack_height += source_totals[entry.fuel] * layout.scale + layout.left_gap;
    }

    // A catalog holding only the base source still distributes it. Tying the
    // contribution to the first contributor alone would drop it silently here.
    if !base_applied {
        for dest in Destination::ALL {
            add_base_contribution(period, base, dest, &mut destinations, &mut source_totals);
        }
    }

    let total = TotalsRecord {
        label: period.label.clone(),
        destinations,
        sources: source_totals,
        stack_height,
    };
    let flow = FlowCountRecord {
        label: period.label.clone(),
        counts,
    };
    (total, flow)
}

fn add_base_contribution(
    period: &PeriodRecord,
    base: Option<&SourceEntry>,
    dest: Destination,
    destinations: &mut DestinationValues<f64>,
    source_totals: &mut FuelValues<f64>,
) {
    let Some(base) = base else {
        return;
    };
    if dest.is_primary() {
        return;
    }

    let magnitude = period.magnitude(base.fuel, dest);
    destinations[dest] += magnitude;
    source_totals[base.fuel] += magnitude;
}
