pub(crate) mod delivery;
pub(crate) mod error;
pub(crate) mod form;
pub(crate) mod http;

pub use delivery::{
    DeliveryConfig, DeliveryProvider, EmailJsClient, TemplateParams,
    DEFAULT_ENDPOINT,
};
pub use error::{ConfigError, DeliveryError, ValidationError};
pub use form::{FormFields, Submission, ValidSubmission};
pub use http::{FetchTransport, HttpResponse, HttpTransport};
