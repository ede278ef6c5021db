mod contact_form;
mod fields;
mod form_error;
mod handler;

pub mod input;

pub use contact_form::ContactFormView;
pub use fields::{ContactField, FieldType};
pub use form_error::FormError;
pub use handler::ContactFormHandler;
