use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Identifiers issued by the email provider. They are opaque to this crate
/// and only checked for presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    service_id: String,
    template_id: String,
    public_key: String,
    endpoint: String,
}

impl DeliveryConfig {
    pub fn new<S: Into<String>>(
        service_id: S,
        template_id: S,
        public_key: S,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            service_id: required("service_id", service_id.into())?,
            template_id: required("template_id", template_id.into())?,
            public_key: required("public_key", public_key.into())?,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(endpoint.trim()).map_err(|e| {
            ConfigError::InvalidEndpoint(format!("{}: {}", endpoint, e))
        })?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(ConfigError::InvalidEndpoint(format!(
                "{}: unsupported scheme {}",
                endpoint,
                url.scheme()
            )));
        }
        self.endpoint = url.to_string();
        Ok(self)
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn required(key: &'static str, value: String) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ConfigError::MissingValue(key))
    } else {
        Ok(value.to_string())
    }
}
