use std::error::Error;
use std::fmt;

use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingContact,
    MissingBookName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingContact => {
                write!(f, "Please provide either a phone number or an email.")
            }
            ValidationError::MissingBookName => {
                write!(f, "Please provide a book name.")
            }
        }
    }
}

impl Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    // provider answered with a non-2xx status, text is the response body
    Rejected { status: u16, text: String },
    Transport(String),
    Encode(String),
}

impl DeliveryError {
    /// Detail shown to the user when a delivery fails.
    pub fn text(&self) -> String {
        match self {
            DeliveryError::Rejected { status, text } => {
                if text.trim().is_empty() {
                    format!("request rejected with status {}", status)
                } else {
                    text.clone()
                }
            }
            DeliveryError::Transport(s) | DeliveryError::Encode(s) => {
                s.clone()
            }
        }
    }
}

impl fmt::Display for DeliveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeliveryError::Rejected { status, .. } => {
                write!(f, "Rejected ({}): {}", status, self.text())
            }
            DeliveryError::Transport(s) => write!(f, "Transport error: {}", s),
            DeliveryError::Encode(s) => write!(f, "Encode error: {}", s),
        }
    }
}

impl Error for DeliveryError {}

impl From<serde_json::Error> for DeliveryError {
    fn from(error: serde_json::Error) -> Self {
        DeliveryError::Encode(error.to_string())
    }
}

impl From<JsValue> for DeliveryError {
    fn from(error: JsValue) -> Self {
        let text = error
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| error.as_string())
            .unwrap_or_else(|| "Unknown error".to_string());
        DeliveryError::Transport(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingValue(&'static str),
    InvalidEndpoint(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(key) => {
                write!(f, "Missing configuration value: {}", key)
            }
            ConfigError::InvalidEndpoint(s) => {
                write!(f, "Invalid endpoint: {}", s)
            }
        }
    }
}

impl Error for ConfigError {}
