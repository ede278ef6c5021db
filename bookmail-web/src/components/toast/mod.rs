mod toast_container;
mod toaster;

pub use toast_container::ToastContainer;
pub use toaster::{Toast, ToastKind, Toaster};
