mod close_icon;
mod spinner_icon;

pub use close_icon::CloseIcon;
pub use spinner_icon::SpinnerIcon;
