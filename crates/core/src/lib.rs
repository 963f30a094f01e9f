//! Domain layer for the trademark registration service.
//!
//! Pure types and rules with no I/O: the error taxonomy shared by the
//! persistence and HTTP layers, record field normalization, and the
//! registration-number policy.

pub mod error;
pub mod marca;
pub mod registration;
pub mod types;
