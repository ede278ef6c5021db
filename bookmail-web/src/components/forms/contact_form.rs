use leptos::*;

use super::input::FieldView;
use super::{ContactField, ContactFormHandler};
use crate::components::buttons::SubmitButton;

const FORM_TITLE: &str = "Contact Us📔";

#[component]
pub fn ContactFormView(handler: ContactFormHandler) -> impl IntoView {
    let fields = handler.fields();
    let is_submitting = handler.is_submitting();

    view! {
        <div class="w-[80%] md:w-[50%] md:max-w-4xl mx-auto sm:mt-4 md:mt-10 p-6 bg-white rounded-lg shadow-md">
            <h1 class="text-2xl font-bold text-center mb-6">{FORM_TITLE}</h1>
            <form
                class="grid grid-cols-1 sm:grid-cols-2 gap-4 md:gap-6"
                on:submit=move |ev| handler.on_submit(ev)
            >
                {ContactField::ALL
                    .into_iter()
                    .map(|field| view! {
                        <FieldView field fields disabled=is_submitting/>
                    })
                    .collect_view()}
                <div class="sm:col-span-2 text-center">
                    <SubmitButton is_submitting/>
                </div>
            </form>
        </div>
    }
}
