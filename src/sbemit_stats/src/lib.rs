//! # Numerical tools for the sbemit emission models.
//!
//! Integration is done on finite intervals and reports non-finite integrands instead
//! of silently propagating them.
pub mod integrate;

/// export all numerical functionality
pub mod prelude {
    pub use crate::integrate::{
        DEFAULT_LIMIT, Integral, IntegrateError, IntegrateResult, integrate, integrate_with,
    };
}
