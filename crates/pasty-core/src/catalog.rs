//! Static catalog: merch products, released tracks, and site links.
//!
//! Everything here is defined at compile time and read-only. The storefront
//! and press kit render from these constants; the cart captures products
//! *by value* when they are added, so the catalog stays canonical.

use serde::Serialize;

/// A purchasable merch item.
///
/// `Copy` on purpose: adding a product to the cart captures a value copy,
/// never a live reference into the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: u32,
    pub name: &'static str,
    /// Unit price in whole dollars.
    pub price: u32,
    /// Asset path within the deployed bundle.
    pub image: &'static str,
    pub desc: &'static str,
}

/// A released track listed in the music section and press kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub title: &'static str,
    /// Release-format label ("Single", "EP", ...).
    pub length: &'static str,
    /// External streaming URL.
    pub url: &'static str,
}

/// The 2026 merch collection.
pub const PRODUCTS: [Product; 3] = [
    Product {
        id: 1,
        name: "Pa$ty Classic Tee",
        price: 35,
        image: "/first.jpg",
        desc: "100% Cotton. Puff Print Logo.",
    },
    Product {
        id: 2,
        name: "Work Hard Play Hard Tee",
        price: 35,
        image: "/second.jpg",
        desc: "Oversized fit. Acid wash black.",
    },
    Product {
        id: 3,
        name: "Runner Up Hat",
        price: 20,
        image: "/third.jpg",
        desc: "Embroidered details. Snapback.",
    },
];

/// Latest releases, newest first.
pub const TRACKS: [Track; 3] = [
    Track {
        title: "Runaway (feat. Pa$ty)",
        length: "Single",
        url: "https://music.apple.com/us/album/runaway-feat-pa%24ty-single/1844412963",
    },
    Track {
        title: "Yale",
        length: "Single",
        url: "https://music.apple.com/us/album/yale-single/1826390402",
    },
    Track {
        title: "Everyday",
        length: "Single",
        url: "https://music.apple.com/us/song/everyday/1813493592",
    },
];

// Site-wide assets and external destinations.
pub const ARTIST_IMAGE_URL: &str = "/background.jpg";
pub const LOGO_URL: &str = "/logo.png";
pub const LINKTREE_URL: &str = "https://linktr.ee/pastymusic";
pub const PHOTO_ARCHIVE_URL: &str =
    "https://drive.google.com/drive/folders/1jcZVxoElLlwNotT__L13CGLOG3RqAWaR?usp=drive_link";
pub const YOUTUBE_VIDEO_ID: &str = "581MvmIE9to";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/pastymusic_/";
pub const YOUTUBE_CHANNEL_URL: &str = "https://www.youtube.com/@pastymusic_";
pub const SOUNDCLOUD_URL: &str = "https://soundcloud.com";
pub const MANAGEMENT_EMAIL: &str = "jonathangleasonmgmt@gmail.com";

/// Embed URL for the featured video.
pub fn youtube_embed_url() -> String {
    format!("https://www.youtube.com/embed/{}", YOUTUBE_VIDEO_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_ids_are_unique() {
        for (i, a) in PRODUCTS.iter().enumerate() {
            for b in &PRODUCTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn catalog_entries_are_complete() {
        for p in &PRODUCTS {
            assert!(!p.name.is_empty());
            assert!(!p.image.is_empty());
            assert!(!p.desc.is_empty());
        }
        for t in &TRACKS {
            assert!(!t.title.is_empty());
            assert!(t.url.starts_with("https://"));
        }
    }

    #[test]
    fn embed_url_carries_video_id() {
        assert!(youtube_embed_url().contains(YOUTUBE_VIDEO_ID));
    }
}
