pub(crate) mod base;
pub(crate) mod components;
pub(crate) mod routes;
pub(crate) mod vars;

pub mod app;

pub use base::state::GlobalState;
pub use components::forms::{ContactFormHandler, FormError};
pub use components::toast::{Toast, ToastKind, Toaster};
