//! Load state of external graphics, keyed by resolved url.
//!
//! Each url moves `unknown -> Pending -> Loaded | Error` exactly once. The
//! resolver only polls; the host reports completion through
//! [`ImageCache::mark_loaded`] and [`ImageCache::mark_error`].

use sldreader_traits::{ImageLoader, ImageSize, ResourceLoadError};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum ImageState {
    Pending,
    Loaded(ImageSize),
    Error(ResourceLoadError),
}

impl ImageState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImageState::Pending)
    }
}

#[derive(Debug, Default)]
pub struct ImageCache {
    states: HashMap<String, ImageState>,
    queue: Vec<String>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state of `url`. The first request registers it
    /// as pending and queues it for the host to load.
    pub fn request(&mut self, url: &str) -> &ImageState {
        let queue = &mut self.queue;
        self.states.entry(url.to_string()).or_insert_with(|| {
            log::debug!("Requesting external graphic '{}'", url);
            queue.push(url.to_string());
            ImageState::Pending
        })
    }

    pub fn state(&self, url: &str) -> Option<&ImageState> {
        self.states.get(url)
    }

    /// Drains the urls requested since the last call.
    pub fn take_pending(&mut self) -> Vec<String> {
        std::mem::take(&mut self.queue)
    }

    /// Records a successful load. Returns `false` if the url had already
    /// settled, in which case the report is ignored.
    pub fn mark_loaded(&mut self, url: &str, size: ImageSize) -> bool {
        self.settle(url, ImageState::Loaded(size))
    }

    /// Records a failed load. Failure is terminal for the url.
    pub fn mark_error(&mut self, url: &str, error: ResourceLoadError) -> bool {
        self.settle(url, ImageState::Error(error))
    }

    fn settle(&mut self, url: &str, state: ImageState) -> bool {
        match self.states.get_mut(url) {
            Some(current) if current.is_terminal() => {
                log::warn!(
                    "Ignoring late load report for '{}': already {:?}",
                    url,
                    current
                );
                false
            }
            Some(current) => {
                log::debug!("External graphic '{}' settled: {:?}", url, state);
                *current = state;
                true
            }
            None => {
                // Preloaded by the host before any style asked for it.
                self.states.insert(url.to_string(), state);
                true
            }
        }
    }

    /// Loads every queued url with `loader`, synchronously. Returns the
    /// number of urls that loaded successfully.
    pub fn load_pending(&mut self, loader: &dyn ImageLoader) -> usize {
        let mut loaded = 0;
        for url in self.take_pending() {
            match loader.load(&url) {
                Ok(size) => {
                    if self.mark_loaded(&url, size) {
                        loaded += 1;
                    }
                }
                Err(e) => {
                    log::warn!("{} failed to load '{}': {}", loader.name(), url, e);
                    self.mark_error(&url, e);
                }
            }
        }
        loaded
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sldreader_traits::InMemoryImageLoader;

    const ICON: &str = "http://x/42.png";

    #[test]
    fn test_first_request_is_pending_and_queued() {
        let mut cache = ImageCache::new();
        assert_eq!(cache.request(ICON), &ImageState::Pending);
        assert_eq!(cache.request(ICON), &ImageState::Pending);
        assert_eq!(cache.take_pending(), vec![ICON.to_string()]);
        assert!(cache.take_pending().is_empty());
    }

    #[test]
    fn test_transitions_are_monotonic() {
        let mut cache = ImageCache::new();
        cache.request(ICON);
        assert!(cache.mark_error(ICON, ResourceLoadError::NotFound(ICON.into())));
        assert!(!cache.mark_loaded(ICON, ImageSize::new(10.0, 10.0)));
        assert!(matches!(cache.state(ICON), Some(ImageState::Error(_))));
    }

    #[test]
    fn test_load_pending_with_loader() {
        let _ = env_logger::builder().is_test(true).try_init();
        let loader = InMemoryImageLoader::new();
        loader.add(ICON, ImageSize::new(32.0, 16.0)).unwrap();

        let mut cache = ImageCache::new();
        cache.request(ICON);
        cache.request("http://x/missing.png");
        assert_eq!(cache.load_pending(&loader), 1);

        assert_eq!(
            cache.state(ICON),
            Some(&ImageState::Loaded(ImageSize::new(32.0, 16.0)))
        );
        assert!(matches!(
            cache.state("http://x/missing.png"),
            Some(ImageState::Error(ResourceLoadError::NotFound(_)))
        ));
    }

    #[test]
    fn test_preloaded_url() {
        let mut cache = ImageCache::new();
        assert!(cache.mark_loaded(ICON, ImageSize::new(8.0, 8.0)));
        assert!(matches!(cache.request(ICON), ImageState::Loaded(_)));
        assert!(cache.take_pending().is_empty());
    }
}
