// =============================================================================
// Aarohan Web - Services
// =============================================================================

pub mod toast;

pub use toast::{Toast, ToastKind, ToastQueue, ToastService, Toaster};
