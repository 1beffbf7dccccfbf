// =============================================================================
// CornerInch Web - Pages
// =============================================================================

pub mod home;
pub mod not_found;

pub use home::LaunchPage;
pub use not_found::NotFoundPage;
