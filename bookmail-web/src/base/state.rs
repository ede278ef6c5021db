use bookmail::{ConfigError, DeliveryConfig};

use crate::vars::{ENDPOINT, PUBLIC_KEY, SERVICE_ID, TEMPLATE_ID};

#[derive(Clone, Debug)]
pub struct GlobalState {
    delivery: Result<DeliveryConfig, ConfigError>,
}

impl GlobalState {
    fn new() -> Self {
        Self {
            delivery: load_delivery_config(),
        }
    }

    pub fn delivery_config(&self) -> Result<DeliveryConfig, ConfigError> {
        self.delivery.clone()
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new()
    }
}

fn load_delivery_config() -> Result<DeliveryConfig, ConfigError> {
    let config = DeliveryConfig::new(SERVICE_ID, TEMPLATE_ID, PUBLIC_KEY)?;
    match ENDPOINT {
        Some(endpoint) => config.with_endpoint(endpoint),
        None => Ok(config),
    }
}
