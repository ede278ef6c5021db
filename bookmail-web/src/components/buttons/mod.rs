mod submit_button;

pub use submit_button::SubmitButton;
