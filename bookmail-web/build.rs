use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "bookmail.yaml";

#[derive(Debug, Default, Deserialize)]
struct DeliverySpec {
    service_id: Option<String>,
    template_id: Option<String>,
    public_key: Option<String>,
    endpoint: Option<String>,
}

fn main() {
    let config_path = env::var("BOOKMAIL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

    println!("cargo:rerun-if-changed={}", config_path.display());
    for key in [
        "BOOKMAIL_CONFIG",
        "BOOKMAIL_SERVICE_ID",
        "BOOKMAIL_TEMPLATE_ID",
        "BOOKMAIL_PUBLIC_KEY",
        "BOOKMAIL_ENDPOINT",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let spec = load_spec(&config_path);

    let service_id = setting("BOOKMAIL_SERVICE_ID", spec.service_id);
    let template_id = setting("BOOKMAIL_TEMPLATE_ID", spec.template_id);
    let public_key = setting("BOOKMAIL_PUBLIC_KEY", spec.public_key);
    let endpoint = env::var("BOOKMAIL_ENDPOINT").ok().or(spec.endpoint);

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("generated_config.rs");
    let mut f = File::create(&dest_path).unwrap();

    // Debug formatting of a str yields a valid Rust string literal
    writeln!(f, "pub const SERVICE_ID: &str = {:?};", service_id).unwrap();
    writeln!(f, "pub const TEMPLATE_ID: &str = {:?};", template_id).unwrap();
    writeln!(f, "pub const PUBLIC_KEY: &str = {:?};", public_key).unwrap();
    match endpoint {
        Some(endpoint) => writeln!(
            f,
            "pub const ENDPOINT: Option<&str> = Some({:?});",
            endpoint
        )
        .unwrap(),
        None => {
            writeln!(f, "pub const ENDPOINT: Option<&str> = None;").unwrap()
        }
    }
}

fn load_spec(path: &Path) -> DeliverySpec {
    if !path.exists() {
        println!(
            "cargo:warning=No delivery config at {}, relying on environment",
            path.display()
        );
        return DeliverySpec::default();
    }
    let content = fs::read_to_string(path).unwrap();
    match serde_yaml::from_str::<DeliverySpec>(&content) {
        Ok(spec) => spec,
        Err(e) => {
            panic!("Failed to parse {}: {}", path.display(), e);
        }
    }
}

// empty values are kept, they are rejected at runtime with a visible error
fn setting(key: &str, from_file: Option<String>) -> String {
    env::var(key).ok().or(from_file).unwrap_or_default()
}
