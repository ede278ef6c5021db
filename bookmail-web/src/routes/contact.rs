use std::rc::Rc;

use bookmail::{DeliveryProvider, EmailJsClient, FetchTransport};
use leptos::logging::error;
use leptos::*;

use crate::components::forms::{ContactFormHandler, ContactFormView};
use crate::components::toast::Toaster;
use crate::GlobalState;

#[component]
pub fn ContactPage() -> impl IntoView {
    let state = use_context::<RwSignal<GlobalState>>()
        .expect("state to have been provided");
    let toaster = expect_context::<Toaster>();

    match state.with_untracked(|state| state.delivery_config()) {
        Ok(config) => {
            let provider: Rc<dyn DeliveryProvider> =
                Rc::new(EmailJsClient::new(config, FetchTransport));
            let handler = ContactFormHandler::new(provider, toaster);
            view! { <ContactFormView handler/> }.into_view()
        }
        Err(err) => {
            error!("Email delivery is not configured: {}", err);
            view! { <ConfigErrorView error=err.to_string()/> }.into_view()
        }
    }
}

#[component]
fn ConfigErrorView(error: String) -> impl IntoView {
    view! {
        <div class="w-[80%] md:w-[50%] mx-auto mt-10 p-6 bg-white rounded-lg shadow-md text-red-500">
            {"Error loading configuration: "}
            {error}
        </div>
    }
}
