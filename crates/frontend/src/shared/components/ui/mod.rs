pub mod alert;
pub mod button;

pub use alert::ErrorAlert;
pub use button::Button;
