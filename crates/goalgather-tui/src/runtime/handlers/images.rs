use std::sync::Arc;

use goalgather_core::images::{ImageLoader, LoadedImage};

use crate::events::UiEvent;

/// Resolves an image off the async threads. Loader failures and panics both
/// end as a placeholder.
pub async fn load_image(loader: Arc<dyn ImageLoader>, url: String) -> UiEvent {
    let lookup = url.clone();
    let image = match tokio::task::spawn_blocking(move || loader.load(&lookup)).await {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Image load task failed");
            LoadedImage::Placeholder
        }
    };
    UiEvent::ImageLoaded { url, image }
}

#[cfg(test)]
mod tests {
    use goalgather_core::images::PlaceholderLoader;

    use super::*;

    struct PanickingLoader;

    impl ImageLoader for PanickingLoader {
        fn load(&self, _url: &str) -> LoadedImage {
            panic!("decoder blew up");
        }
    }

    #[tokio::test]
    async fn test_placeholder_loader_reports_url() {
        let event = load_image(Arc::new(PlaceholderLoader), "https://x.test/a.jpg".into()).await;
        match event {
            UiEvent::ImageLoaded { url, image } => {
                assert_eq!(url, "https://x.test/a.jpg");
                assert!(image.is_placeholder());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_panicking_loader_becomes_placeholder() {
        let event = load_image(Arc::new(PanickingLoader), "https://x.test/b.jpg".into()).await;
        assert!(matches!(
            event,
            UiEvent::ImageLoaded {
                image: LoadedImage::Placeholder,
                ..
            }
        ));
    }
}
