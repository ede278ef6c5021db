use bookmail::FormFields;
use leptos::*;

use crate::components::forms::{ContactField, FieldType};

const INPUT_CLASS: &str = "mt-1 block w-full border border-gray-300 rounded-md \
                           shadow-sm py-2 px-3 focus:ring-blue-500 \
                           focus:border-blue-500";

const TEXT_AREA_ROWS: &str = "4";

/// Label plus input bound to one member of the shared form fields.
#[component]
pub fn FieldView(
    field: ContactField,
    fields: RwSignal<FormFields>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let wrapper_class = match field.field_type() {
        FieldType::TextArea => "sm:col-span-2",
        _ => "",
    };

    view! {
        <div class=wrapper_class>
            <InputFieldLabelView field/>
            {if field.field_type() == FieldType::TextArea {
                view! { <TextAreaFieldView field fields disabled/> }.into_view()
            } else {
                view! { <InputFieldView field fields disabled/> }.into_view()
            }}
        </div>
    }
}

#[component]
pub fn InputFieldLabelView(field: ContactField) -> impl IntoView {
    view! {
        <label for=field.name() class="block text-sm font-medium text-gray-700">
            {field.label()}
        </label>
    }
}

#[component]
fn InputFieldView(
    field: ContactField,
    fields: RwSignal<FormFields>,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type=field.field_type().input_type()
            name=field.name()
            id=field.name()
            class=INPUT_CLASS
            placeholder=field.placeholder()
            required=field.is_required()
            prop:value=move || fields.with(|fields| field.value(fields).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                fields.update(|fields| field.assign(fields, value));
            }
            disabled=move || disabled.get()
        />
    }
}

#[component]
fn TextAreaFieldView(
    field: ContactField,
    fields: RwSignal<FormFields>,
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <textarea
            name=field.name()
            id=field.name()
            class=INPUT_CLASS
            placeholder=field.placeholder()
            rows=TEXT_AREA_ROWS
            prop:value=move || fields.with(|fields| field.value(fields).to_string())
            on:input=move |ev| {
                let value = event_target_value(&ev);
                fields.update(|fields| field.assign(fields, value));
            }
            disabled=move || disabled.get()
        ></textarea>
    }
}
