//! PA$TY Official Site Core Library
//!
//! Headless domain state for the promotional site: the static catalog, the
//! session-local shopping cart, and the single-slot notification model. No
//! I/O, no persistence, no network — everything lives in memory for the
//! lifetime of the UI process.
//!
//! ## Quick Start
//!
//! ```
//! use pasty_core::{Session, PRODUCTS};
//!
//! let mut session = Session::new();
//! let seq = session.add_to_cart(PRODUCTS[0]);
//!
//! assert!(session.cart_open());
//! assert_eq!(session.cart().total(), PRODUCTS[0].price);
//!
//! // The UI schedules this after NOTIFICATION_DURATION.
//! session.expire_notification(seq);
//! assert!(session.notification().is_none());
//! ```

pub mod cart;
pub mod catalog;
pub mod notification;
pub mod session;

// Re-exports
pub use cart::{Cart, CartItem};
pub use catalog::{
    youtube_embed_url, Product, Track, ARTIST_IMAGE_URL, INSTAGRAM_URL, LINKTREE_URL, LOGO_URL,
    MANAGEMENT_EMAIL, PHOTO_ARCHIVE_URL, PRODUCTS, SOUNDCLOUD_URL, TRACKS, YOUTUBE_CHANNEL_URL,
    YOUTUBE_VIDEO_ID,
};
pub use notification::{Notification, NotificationSlot, NOTIFICATION_DURATION};
pub use session::Session;
