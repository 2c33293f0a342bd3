//! Insurance application domain module.
//!
//! # Module Structure
//!
//! - `model`: Application records, status lifecycle and the insurance catalogue

mod model;

pub use model::{
    Application, ApplicationStatus, INSURANCE_CATALOGUE, InsuranceType, NewApplication,
    STANDARD_SUBTYPE,
};
