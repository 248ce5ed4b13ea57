//! UI components for the PA$TY site.

mod cart_panel;
mod custom_cursor;
mod glitch_link;
mod hero;
mod marquee;
mod menu_overlay;
mod music_section;
mod nav_bar;
mod notification_toast;
mod signup_section;
mod site_footer;
mod store_section;

pub use cart_panel::CartPanel;
pub use custom_cursor::CustomCursor;
pub use glitch_link::GlitchLink;
pub use hero::Hero;
pub use marquee::Marquee;
pub use menu_overlay::MenuOverlay;
pub use music_section::MusicSection;
pub use nav_bar::{scroll_to_section, NavBar};
pub use notification_toast::NotificationToast;
pub use signup_section::SignupSection;
pub use site_footer::SiteFooter;
pub use store_section::StoreSection;
