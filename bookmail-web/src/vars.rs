// auto-generated via build.rs from bookmail.yaml and BOOKMAIL_* variables:
// - SERVICE_ID, TEMPLATE_ID, PUBLIC_KEY: &str
// - ENDPOINT: Option<&str>
include!(concat!(env!("OUT_DIR"), "/generated_config.rs"));

pub const TOAST_DURATION_MS: u64 = 5000;
