pub mod theme_toggle;
pub mod toast;

pub use theme_toggle::ThemeToggle;
pub use toast::{Toast, ToastKind, ToastStack, Toaster};
