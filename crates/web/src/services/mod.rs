// =============================================================================
// CornerInch Web - Services
// =============================================================================

pub mod toasts;

pub use toasts::{Notice, Notifier, Toast, ToastKind, ToastQueue, Toasts};
