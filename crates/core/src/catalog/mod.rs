use std::{
    fmt,
    ops::{Index, IndexMut},
};

use serde::{Deserialize, Serialize};

/// Consuming categories drawn as boxes on the right side of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Electricity generation. Positioned separately from the other boxes.
    Elec,
    Res,
    Ag,
    Indus,
    Trans,
}

impl Destination {
    pub const ALL: [Destination; 5] = [
        Destination::Elec,
        Destination::Res,
        Destination::Ag,
        Destination::Indus,
        Destination::Trans,
    ];

    /// Boxes stacked beneath the primary box, top to bottom.
    pub const STACKED: [Destination; 4] = [
        Destination::Res,
        Destination::Ag,
        Destination::Indus,
        Destination::Trans,
    ];

    /// The destination positioned independently of the stacked boxes.
    pub const PRIMARY: Destination = Destination::Elec;

    pub fn name(self) -> &'static str {
        match self {
            Destination::Elec => "elec",
            Destination::Res => "res",
            Destination::Ag => "ag",
            Destination::Indus => "indus",
            Destination::Trans => "trans",
        }
    }

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Energy sources drawn on the left side of the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fuel {
    Elec,
    Solar,
    Nuclear,
    Hydro,
    Wind,
    Geo,
    Gas,
    Coal,
    Bio,
    Petro,
}

impl Fuel {
    pub const ALL: [Fuel; 10] = [
        Fuel::Elec,
        Fuel::Solar,
        Fuel::Nuclear,
        Fuel::Hydro,
        Fuel::Wind,
        Fuel::Geo,
        Fuel::Gas,
        Fuel::Coal,
        Fuel::Bio,
        Fuel::Petro,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Fuel::Elec => "elec",
            Fuel::Solar => "solar",
            Fuel::Nuclear => "nuclear",
            Fuel::Hydro => "hydro",
            Fuel::Wind => "wind",
            Fuel::Geo => "geo",
            Fuel::Gas => "gas",
            Fuel::Coal => "coal",
            Fuel::Bio => "bio",
            Fuel::Petro => "petro",
        }
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per [`Destination`]. Missing keys deserialize to `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationValues<T> {
    pub elec: T,
    pub res: T,
    pub ag: T,
    pub indus: T,
    pub trans: T,
}

impl<T> DestinationValues<T> {
    pub fn from_fn(mut f: impl FnMut(Destination) -> T) -> Self {
        Self {
            elec: f(Destination::Elec),
            res: f(Destination::Res),
            ag: f(Destination::Ag),
            indus: f(Destination::Indus),
            trans: f(Destination::Trans),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Destination, &T)> + '_ {
        Destination::ALL.into_iter().map(move |dest| (dest, &self[dest]))
    }
}

impl<T> Index<Destination> for DestinationValues<T> {
    type Output = T;

    fn index(&self, dest: Destination) -> &T {
        match dest {
            Destination::Elec => &self.elec,
            Destination::Res => &self.res,
            Destination::Ag => &self.ag,
            Destination::Indus => &self.indus,
            Destination::Trans => &self.trans,
        }
    }
}

impl<T> IndexMut<Destination> for DestinationValues<T> {
    fn index_mut(&mut self, dest: Destination) -> &mut T {
        match dest {
            Destination::Elec => &mut self.elec,
            Destination::Res => &mut self.res,
            Destination::Ag => &mut self.ag,
            Destination::Indus => &mut self.indus,
            Destination::Trans => &mut self.trans,
        }
    }
}

/// One value per [`Fuel`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelValues<T> {
    pub elec: T,
    pub solar: T,
    pub nuclear: T,
    pub hydro: T,
    pub wind: T,
    pub geo: T,
    pub gas: T,
    pub coal: T,
    pub bio: T,
    pub petro: T,
}

impl<T> FuelValues<T> {
    pub fn from_fn(mut f: impl FnMut(Fuel) -> T) -> Self {
        Self {
            elec: f(Fuel::Elec),
            solar: f(Fuel::Solar),
            nuclear: f(Fuel::Nuclear),
            hydro: f(Fuel::Hydro),
            wind: f(Fuel::Wind),
            geo: f(Fuel::Geo),
            gas: f(Fuel::Gas),
            coal: f(Fuel::Coal),
            bio: f(Fuel::Bio),
            petro: f(Fuel::Petro),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Fuel, &T)> + '_ {
        Fuel::ALL.into_iter().map(move |fuel| (fuel, &self[fuel]))
    }
}

impl<T> Index<Fuel> for FuelValues<T> {
    type Output = T;

    fn index(&self, fuel: Fuel) -> &T {
        match fuel {
            Fuel::Elec => &self.elec,
            Fuel::Solar => &self.solar,
            Fuel::Nuclear => &self.nuclear,
            Fuel::Hydro => &self.hydro,
            Fuel::Wind => &self.wind,
            Fuel::Geo => &self.geo,
            Fuel::Gas => &self.gas,
            Fuel::Coal => &self.coal,
            Fuel::Bio => &self.bio,
            Fuel::Petro => &self.petro,
        }
    }
}

impl<T> IndexMut<Fuel> for FuelValues<T> {
    fn index_mut(&mut self, fuel: Fuel) -> &mut T {
        match fuel {
            Fuel::Elec => &mut self.elec,
            Fuel::Solar => &mut self.solar,
            Fuel::Nuclear => &mut self.nuclear,
            Fuel::Hydro => &mut self.hydro,
            Fuel::Wind => &mut self.wind,
            Fuel::Geo => &mut self.geo,
            Fuel::Gas => &mut self.gas,
            Fuel::Coal => &mut self.coal,
            Fuel::Bio => &mut self.bio,
            Fuel::Petro => &mut self.petro,
        }
    }
}

/// A fuel listed in the [`SourceCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub fuel: Fuel,
    /// The base source does not draw its own flows. Its magnitudes are added
    /// into every non-primary destination total instead.
    #[serde(default)]
    pub base_contribution: bool,
}

impl SourceEntry {
    pub fn new(fuel: Fuel) -> Self {
        Self {
            fuel,
            base_contribution: false,
        }
    }

    pub fn base(fuel: Fuel) -> Self {
        Self {
            fuel,
            base_contribution: true,
        }
    }
}

/// Ordered list of sources. Order drives the left-side stacking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceCatalog {
    entries: Vec<SourceEntry>,
}

impl SourceCatalog {
    pub fn new(entries: Vec<SourceEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first entry flagged as the base contribution, if any.
    pub fn base(&self) -> Option<&SourceEntry> {
        self.entries.iter().find(|entry| entry.base_contribution)
    }

    /// Sources that draw their own flows, in catalog order.
    pub fn contributors(&self) -> impl Iterator<Item = &SourceEntry> + '_ {
        self.entries.iter().filter(|entry| !entry.base_contribution)
    }

    pub fn contributor_count(&self) -> usize {
        self.contributors().count()
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        let entries = Fuel::ALL
            .into_iter()
            .map(|fuel| match fuel {
                Fuel::Elec => SourceEntry::base(fuel),
                _ => SourceEntry::new(fuel),
            })
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_flags_electricity_as_base() {
        let catalog = SourceCatalog::default();

        assert_eq!(catalog.len(), Fuel::ALL.len());
        assert_eq!(catalog.base().map(|entry| entry.fuel), Some(Fuel::Elec));
        assert_eq!(catalog.contributor_count(), Fuel::ALL.len() - 1);
        assert!(catalog.contributors().all(|entry| entry.fuel != Fuel::Elec));
    }

    #[test]
    fn destination_values_index_by_enum() {
        let mut values = DestinationValues::from_fn(|dest| dest.name().len());
        assert_eq!(values[Destination::Indus], 5);

        values[Destination::Ag] = 42;
        assert_eq!(values.ag, 42);

        let collected: Vec<_> = values.iter().map(|(dest, _)| dest).collect();
        assert_eq!(collected, Destination::ALL.to_vec());
    }

    #[test]
    fn destination_values_default_missing_keys() {
        let values: DestinationValues<f64> =
            serde_json::from_str(r#"{"res": 2.5, "trans": 1.0}"#).unwrap();

        assert_eq!(values.res, 2.5);
        assert_eq!(values.trans, 1.0);
        assert_eq!(values.elec, 0.0);
        assert_eq!(values.ag, 0.0);
    }

    #[test]
    fn catalog_round_trips_as_plain_list() {
        let json = r#"[{"fuel": "elec", "base_contribution": true}, {"fuel": "coal"}]"#;
        let catalog: SourceCatalog = serde_json::from_str(json).unwrap();

        assert_eq!(
            catalog.entries(),
            &[SourceEntry::base(Fuel::Elec), SourceEntry::new(Fuel::Coal)]
        );
    }

    #[test]
    fn stacked_order_excludes_primary() {
        assert!(Destination::STACKED.iter().all(|dest| !dest.is_primary()));
        assert_eq!(Destination::PRIMARY.to_string(), "elec");
    }
}
