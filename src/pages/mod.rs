//! Page components for the PA$TY site.

mod landing;
mod press_kit;

pub use landing::Landing;
pub use press_kit::PressKit;
