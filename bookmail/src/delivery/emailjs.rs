use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use log::{debug, error};

use super::config::DeliveryConfig;
use super::payload::{SendRequest, TemplateParams};
use super::DeliveryProvider;
use crate::error::DeliveryError;
use crate::form::ValidSubmission;
use crate::http::HttpTransport;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Client for the EmailJS REST `send` operation.
pub struct EmailJsClient<T> {
    config: DeliveryConfig,
    transport: T,
}

impl<T: HttpTransport> EmailJsClient<T> {
    pub fn new(config: DeliveryConfig, transport: T) -> Self {
        Self { config, transport }
    }

    fn request_body(
        &self,
        submission: &ValidSubmission,
    ) -> Result<Bytes, DeliveryError> {
        let request = SendRequest {
            service_id: self.config.service_id(),
            template_id: self.config.template_id(),
            user_id: self.config.public_key(),
            template_params: TemplateParams::from(submission),
        };
        Ok(Bytes::from(serde_json::to_vec(&request)?))
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> DeliveryProvider for EmailJsClient<T> {
    async fn send(
        &self,
        submission: &ValidSubmission,
    ) -> Result<(), DeliveryError> {
        let body = self.request_body(submission)?;
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string());

        debug!(
            "Sending order for '{}' via service {}",
            submission.book_name(),
            self.config.service_id()
        );
        let response = self
            .transport
            .post(self.config.endpoint(), &headers, body)
            .await?;

        if response.is_success() {
            Ok(())
        } else {
            let err = DeliveryError::Rejected {
                status: response.status(),
                text: response.text(),
            };
            error!("Email provider rejected request: {}", err);
            Err(err)
        }
    }
}
