// =============================================================================
// CornerInch Web - API Client Module
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Re-exports
// 3. Error Types
// =============================================================================

pub mod collector;

pub use collector::FormCollector;

use thiserror::Error;

// -----------------------------------------------------------------------------
// 3. Error Types
// -----------------------------------------------------------------------------

/// Signup delivery errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Collector rejected signup: {status}")]
    Rejected { status: u16 },

    #[error("Could not build request: {0}")]
    Request(String),
}
