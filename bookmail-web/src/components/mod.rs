pub mod buttons;
pub mod forms;
pub mod icons;
pub mod toast;
