mod config;
mod emailjs;
mod payload;

use async_trait::async_trait;
pub use config::{DeliveryConfig, DEFAULT_ENDPOINT};
pub use emailjs::EmailJsClient;
pub use payload::TemplateParams;

use crate::error::DeliveryError;
use crate::form::ValidSubmission;

/// External service that transmits the email for a submission.
#[async_trait(?Send)]
pub trait DeliveryProvider {
    async fn send(
        &self,
        submission: &ValidSubmission,
    ) -> Result<(), DeliveryError>;
}
