pub mod popup;
pub mod request;

pub use popup::{PopupCountdown, PopupEffect, PopupPhase};
pub use request::{AreaRange, ConsultationRequest};
