use std::panic;

use bookmail_web::app::App;
use leptos::{mount_to_body, view};

pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    // print panic message only - not entire stack trace
    panic::set_hook(Box::new(|info| {
        log::error!("{}", info);
    }));
    mount_to_body(|| view! { <App /> })
}
