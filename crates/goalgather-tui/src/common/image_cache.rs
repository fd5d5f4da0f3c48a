//! Per-session record of image lookups.
//!
//! A URL is requested once. Until the loader answers, and whenever it answers
//! with a placeholder, the UI shows the same placeholder.

use std::collections::HashMap;

use goalgather_core::images::LoadedImage;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Loading,
    Ready(LoadedImage),
}

#[derive(Debug, Default)]
pub struct ImageCache {
    slots: HashMap<String, Slot>,
}

impl ImageCache {
    /// Marks `url` as loading. Returns false if it was already requested.
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty() || self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), Slot::Loading);
        true
    }

    pub fn resolve(&mut self, url: String, image: LoadedImage) {
        self.slots.insert(url, Slot::Ready(image));
    }

    pub fn get(&self, url: &str) -> Option<&LoadedImage> {
        match self.slots.get(url) {
            Some(Slot::Ready(image)) => Some(image),
            Some(Slot::Loading) | None => None,
        }
    }

    /// One-line caption for an image slot.
    pub fn caption(&self, url: &str) -> String {
        match self.get(url) {
            Some(LoadedImage::Image(info)) => format!("🖼  photo {}", info.dimensions_label()),
            Some(LoadedImage::Placeholder) | None => "🖼  image unavailable".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use goalgather_core::images::ImageInfo;

    use super::*;

    #[test]
    fn test_request_once() {
        let mut cache = ImageCache::default();
        assert!(cache.request("https://img/a"));
        assert!(!cache.request("https://img/a"));
        assert!(!cache.request(""));
    }

    #[test]
    fn test_loading_and_placeholder_look_the_same() {
        let mut cache = ImageCache::default();
        cache.request("https://img/a");
        let loading = cache.caption("https://img/a");
        cache.resolve("https://img/a".into(), LoadedImage::Placeholder);
        assert_eq!(cache.caption("https://img/a"), loading);

        cache.resolve(
            "https://img/b".into(),
            LoadedImage::Image(ImageInfo {
                path: PathBuf::from("/cache/b"),
                width: 1080,
                height: 720,
            }),
        );
        assert!(cache.caption("https://img/b").contains("1080x720"));
    }
}
