//! Consultation request form
//!
//! - model.rs: multipart submission
//! - view_model.rs: form state and submit command
//! - view.rs: modal dialog

mod model;
mod view;
mod view_model;

pub use view::ConsultationForm;
pub use view_model::{ConsultationFormViewModel, FormStage};
