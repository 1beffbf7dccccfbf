// =============================================================================
// CornerInch Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. Format Utilities
// 2. Form Encoding
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Format Utilities
// -----------------------------------------------------------------------------

/// Zero-pad a countdown unit to two digits ("07"). Wider values print in full.
pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}

/// The part of an email address after the `@`, for logging without the
/// full address.
pub fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("?")
}

// -----------------------------------------------------------------------------
// 2. Form Encoding
// -----------------------------------------------------------------------------

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode one `name=value` pair as an `application/x-www-form-urlencoded` body.
pub fn form_pair(name: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
}
