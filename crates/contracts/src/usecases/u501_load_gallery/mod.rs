pub mod executor;

pub use executor::{fetch_and_normalize, CatalogSource, LoadOutcome};
