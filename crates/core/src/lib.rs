//! Core library for the Sankey Timeline diagram.
//!
//! A summary build reads a dataset of per-period energy flows and produces
//! everything the renderer needs up front: per-period totals and flow counts,
//! the largest size each destination box reaches, and the vertical position of
//! the stacked destination boxes. The build is pure and holds no shared state,
//! so independent datasets can be summarised concurrently.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod layout;
mod maxima;
pub mod summary;
pub mod totals;

pub use catalog::{Destination, DestinationValues, Fuel, FuelValues, SourceCatalog, SourceEntry};
pub use config::{LayoutConfig, SummaryConfig};
pub use dataset::{Dataset, PeriodRecord};
pub use error::{Result, SummaryError};
pub use layout::BoxTops;
pub use summary::{build_summary, Summary};
pub use totals::{FlowCountRecord, TotalsRecord};
