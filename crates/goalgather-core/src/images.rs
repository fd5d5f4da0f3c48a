//! Remote image boundary.
//!
//! Event banners and post photos are referenced by URL. The app never fetches
//! them; a loader either resolves a pre-fetched copy on disk or reports a
//! placeholder. Every failure collapses to [`LoadedImage::Placeholder`].

use std::path::{Path, PathBuf};

/// Metadata for an image found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    /// "1080x720".
    pub fn dimensions_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedImage {
    Image(ImageInfo),
    Placeholder,
}

impl LoadedImage {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, LoadedImage::Placeholder)
    }
}

pub trait ImageLoader: Send + Sync {
    fn load(&self, url: &str) -> LoadedImage;
}

/// Loader used when no cache directory is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderLoader;

impl ImageLoader for PlaceholderLoader {
    fn load(&self, _url: &str) -> LoadedImage {
        LoadedImage::Placeholder
    }
}

/// Resolves URLs to files in a local directory, keyed by the URL's last path segment.
#[derive(Debug, Clone)]
pub struct CacheDirLoader {
    dir: PathBuf,
}

impl CacheDirLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File the URL would be cached as, if the URL has a usable file name.
    pub fn cached_path(&self, url: &str) -> Option<PathBuf> {
        let parsed = url::Url::parse(url).ok()?;
        let name = parsed.path_segments()?.rev().find(|s| !s.is_empty())?;
        if name == "." || name == ".." {
            return None;
        }
        Some(self.dir.join(name))
    }

    fn try_load(&self, url: &str) -> Result<ImageInfo, String> {
        let path = self
            .cached_path(url)
            .ok_or_else(|| "url has no file name".to_string())?;
        let path_display = path.display();
        // Cached names usually lack an extension, so sniff the format from content.
        let (width, height) = image::ImageReader::open(&path)
            .map_err(|e| format!("{path_display}: {e}"))?
            .with_guessed_format()
            .map_err(|e| format!("{path_display}: {e}"))?
            .into_dimensions()
            .map_err(|e| format!("dimensions: {e}"))?;
        Ok(ImageInfo {
            path,
            width,
            height,
        })
    }
}

impl ImageLoader for CacheDirLoader {
    fn load(&self, url: &str) -> LoadedImage {
        match self.try_load(url) {
            Ok(info) => LoadedImage::Image(info),
            Err(e) => {
                tracing::debug!(url, error = %e, "Image unavailable, using placeholder");
                LoadedImage::Placeholder
            }
        }
    }
}

/// Picks the loader for an optional cache directory.
pub fn loader_for(cache_dir: Option<&Path>) -> Box<dyn ImageLoader> {
    match cache_dir {
        Some(dir) => Box::new(CacheDirLoader::new(dir)),
        None => Box::new(PlaceholderLoader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANNER: &str = "https://images.unsplash.com/photo-1686947079063-f1e7a7dfc6a9?w=1080";

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = image::RgbImage::new(width, height);
        img.save_with_format(path, image::ImageFormat::Png).unwrap();
    }

    #[test]
    fn test_placeholder_loader_never_loads() {
        assert!(PlaceholderLoader.load(BANNER).is_placeholder());
    }

    #[test]
    fn test_cached_path_uses_last_segment_without_query() {
        let loader = CacheDirLoader::new("/cache");
        assert_eq!(
            loader.cached_path(BANNER),
            Some(PathBuf::from("/cache/photo-1686947079063-f1e7a7dfc6a9"))
        );
        assert_eq!(loader.cached_path("not a url"), None);
        assert_eq!(loader.cached_path("https://example.com/"), None);
    }

    #[test]
    fn test_cache_dir_loader_reads_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("photo-1686947079063-f1e7a7dfc6a9"), 4, 3);
        let loaded = CacheDirLoader::new(dir.path()).load(BANNER);
        match loaded {
            LoadedImage::Image(info) => {
                assert_eq!((info.width, info.height), (4, 3));
                assert_eq!(info.dimensions_label(), "4x3");
            }
            LoadedImage::Placeholder => panic!("expected cached image"),
        }
    }

    #[test]
    fn test_missing_or_corrupt_file_is_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let loader = CacheDirLoader::new(dir.path());
        assert!(loader.load(BANNER).is_placeholder());

        std::fs::write(dir.path().join("photo-1686947079063-f1e7a7dfc6a9"), b"nope").unwrap();
        assert!(loader.load(BANNER).is_placeholder());
    }

    #[test]
    fn test_loader_for_without_dir_is_placeholder() {
        assert!(loader_for(None).load(BANNER).is_placeholder());
    }
}
