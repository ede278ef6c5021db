use std::time::Duration;

use leptos::*;

use super::{Toast, Toaster};
use crate::components::icons::CloseIcon;
use crate::vars::TOAST_DURATION_MS;

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <div class="fixed top-4 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center space-y-2">
            <For
                each=move || toaster.toasts().get()
                key=|toast| toast.id()
                children=move |toast| view! { <ToastView toast toaster/> }
            />
        </div>
    }
}

#[component]
fn ToastView(toast: Toast, toaster: Toaster) -> impl IntoView {
    let id = toast.id();
    set_timeout(
        move || toaster.dismiss(id),
        Duration::from_millis(TOAST_DURATION_MS),
    );

    view! {
        <div class=toast.kind().class() role="alert">
            <span class="flex-1 text-sm font-medium">{toast.message().to_string()}</span>
            <button
                type="button"
                class="cursor-pointer opacity-60 hover:opacity-100"
                aria-label="Close"
                on:click=move |_| toaster.dismiss(id)
            >
                <CloseIcon/>
            </button>
        </div>
    }
}
