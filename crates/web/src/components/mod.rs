// =============================================================================
// CornerInch Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Countdown
// 2. Signup
// 3. Feedback
// 4. Static Content
// =============================================================================

pub mod countdown;
pub mod email_signup;
pub mod toaster;
pub mod feature_card;
pub mod footer;

pub use countdown::CountdownTimer;
pub use email_signup::{EmailSignup, SignupVariant};
pub use toaster::Toaster;
pub use feature_card::FeatureCard;
pub use footer::Footer;
