use leptos::*;

use crate::components::icons::SpinnerIcon;

const SEND_TEXT: &str = "Send";
const SUBMITTING_TEXT: &str = "Submitting...";

fn button_class(is_disabled: bool) -> String {
    let base = "w-full bg-blue-500 text-white py-2 px-4 rounded-md \
                hover:bg-blue-600 focus:outline-none focus:ring-2 \
                focus:ring-blue-400 focus:ring-opacity-50";
    if is_disabled {
        format!("{} opacity-50 cursor-not-allowed", base)
    } else {
        base.to_string()
    }
}

#[component]
pub fn SubmitButton(#[prop(into)] is_submitting: Signal<bool>) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=move || button_class(is_submitting.get())
            disabled=move || is_submitting.get()
        >
            <Show
                when=move || is_submitting.get()
                fallback=|| SEND_TEXT
            >
                <div class="flex items-center justify-center">
                    <SpinnerIcon/>
                    {SUBMITTING_TEXT}
                </div>
            </Show>
        </button>
    }
}
