use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::DeliveryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends a single POST request and returns the response, whatever its
/// status. Only failures to complete the exchange are errors.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Bytes,
    ) -> Result<HttpResponse, DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, Bytes::from_static(b"OK")).is_success());
        assert!(HttpResponse::new(204, Bytes::new()).is_success());
        assert!(!HttpResponse::new(199, Bytes::new()).is_success());
        assert!(!HttpResponse::new(400, Bytes::new()).is_success());
    }

    #[test]
    fn test_text_is_lossy() {
        let response = HttpResponse::new(400, Bytes::from_static(b"bad \xff key"));
        assert_eq!(response.text(), "bad \u{fffd} key");
    }
}
