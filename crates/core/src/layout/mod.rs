use serde::{Deserialize, Serialize};

use crate::{Destination, DestinationValues, LayoutConfig};

/// Top coordinate of each stacked destination box on the right side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxTops {
    pub res: f64,
    pub ag: f64,
    pub indus: f64,
    pub trans: f64,
}

impl BoxTops {
    /// Returns the top coordinate for a stacked destination. The primary
    /// destination is positioned elsewhere and yields `None`.
    pub fn get(&self, dest: Destination) -> Option<f64> {
        match dest {
            Destination::Elec => None,
            Destination::Res => Some(self.res),
            Destination::Ag => Some(self.ag),
            Destination::Indus => Some(self.indus),
            Destination::Trans => Some(self.trans),
        }
    }
}

/// Stacks the boxes top to bottom beneath the primary box. Each top depends
/// only on the previous box's top and maximum, so the order is fixed.
pub(crate) fn resolve_box_tops(maxes: &DestinationValues<f64>, layout: &LayoutConfig) -> BoxTops {
    let res = layout.primary_bottom + layout.residential_offset;
    let ag = below(res, maxes[Destination::Res], layout);
    let indus = below(ag, maxes[Destination::Ag], layout);
    let trans = below(indus, maxes[Destination::Indus], layout);

    let tops = BoxTops {
        res,
        ag,
        indus,
        trans,
    };
    tracing::debug!(?tops, "resolved box tops");
    tops
}

fn below(previous_top: f64, previous_max: f64, layout: &LayoutConfig) -> f64 {
    previous_top + previous_max * layout.scale + layout.right_gap
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> LayoutConfig {
        LayoutConfig {
            scale: 1.0,
            left_gap: 1.0,
            right_gap: 1.0,
            primary_bottom: 30.0,
            residential_offset: 30.0,
        }
    }

    #[test]
    fn stacks_boxes_from_maxima() {
        let maxes = DestinationValues {
            elec: 500.0,
            res: 9.0,
            ag: 2.0,
            indus: 3.0,
            trans: 11.0,
        };

        let tops = resolve_box_tops(&maxes, &layout());
        assert_eq!(tops.res, 60.0);
        assert_eq!(tops.ag, 70.0);
        assert_eq!(tops.indus, 73.0);
        assert_eq!(tops.trans, 77.0);
    }

    #[test]
    fn zero_maxima_collapse_to_gaps() {
        let tops = resolve_box_tops(&DestinationValues::default(), &layout());

        assert_eq!(tops.res, 60.0);
        assert_eq!(tops.ag, 61.0);
        assert_eq!(tops.indus, 62.0);
        assert_eq!(tops.trans, 63.0);
    }

    #[test]
    fn tops_are_strictly_ordered() {
        let maxes = DestinationValues::from_fn(|dest| dest.name().len() as f64 * 10.0);
        let tops = resolve_box_tops(&maxes, &LayoutConfig::default());

        let ordered: Vec<f64> = Destination::STACKED
            .iter()
            .filter_map(|dest| tops.get(*dest))
            .collect();
        assert!(ordered.windows(2).all(|pair| pair[1] > pair[0]));
        assert_eq!(tops.get(Destination::Elec), None);
    }

    #[test]
    fn scale_converts_magnitudes_to_pixels() {
        let maxes = DestinationValues {
            res: 1000.0,
            ..Default::default()
        };
        let layout = LayoutConfig {
            scale: 0.5,
            ..layout()
        };

        let tops = resolve_box_tops(&maxes, &layout);
        assert_eq!(tops.ag, 60.0 + 500.0 + 1.0);
    }
}
