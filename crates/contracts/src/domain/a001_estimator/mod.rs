pub mod aggregate;
pub mod wizard;

pub use aggregate::{calculate_estimate, EstimatorInput, KitchenStyle, Material, PriceEstimate};
pub use wizard::{CalculateOutcome, EstimatePolicy, EstimateSummary, EstimatorWizard, WizardStep};
