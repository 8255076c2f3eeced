//! ImageLoader trait for abstracting external graphic loading.
//!
//! The style resolver never fetches images itself. It asks the host, through
//! this trait, for the natural size of each external graphic it needs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

/// Error type for external graphic loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceLoadError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{url}': {message}")]
    LoadFailed { url: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),
}

/// Natural pixel size of a loaded image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f64,
    pub height: f64,
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A host-provided source of external graphics.
///
/// # Implementations
///
/// - `InMemoryImageLoader`: answers from a pre-populated table (always available)
///
/// # Example
///
/// ```ignore
/// let loader = InMemoryImageLoader::new();
/// loader.add("http://example.com/icon.png", ImageSize::new(32.0, 32.0))?;
/// let size = loader.load("http://example.com/icon.png")?;
/// ```
pub trait ImageLoader: Send + Sync + Debug {
    /// Loads the image at `url` and reports its natural size.
    fn load(&self, url: &str) -> Result<ImageSize, ResourceLoadError>;

    /// Returns a human-readable name for this loader (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory image loader.
///
/// Images and failures are registered up front. Unregistered urls report
/// [`ResourceLoadError::NotFound`].
#[derive(Debug, Default)]
pub struct InMemoryImageLoader {
    images: RwLock<HashMap<String, Result<ImageSize, ResourceLoadError>>>,
}

impl InMemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an image that loads successfully.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLoadError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, url: impl Into<String>, size: ImageSize) -> Result<(), ResourceLoadError> {
        self.insert(url.into(), Ok(size))
    }

    /// Registers a url whose load fails with `message`.
    ///
    /// # Errors
    ///
    /// Returns `ResourceLoadError::LoadFailed` if the internal lock is poisoned.
    pub fn add_failure(
        &self,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<(), ResourceLoadError> {
        let url = url.into();
        let failure = ResourceLoadError::LoadFailed {
            url: url.clone(),
            message: message.into(),
        };
        self.insert(url, Err(failure))
    }

    fn insert(
        &self,
        url: String,
        entry: Result<ImageSize, ResourceLoadError>,
    ) -> Result<(), ResourceLoadError> {
        let mut images = self
            .images
            .write()
            .map_err(|_| ResourceLoadError::LoadFailed {
                url: url.clone(),
                message: "image store lock poisoned".to_string(),
            })?;
        images.insert(url, entry);
        Ok(())
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.images.read().map(|i| i.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ImageLoader for InMemoryImageLoader {
    fn load(&self, url: &str) -> Result<ImageSize, ResourceLoadError> {
        let images = self
            .images
            .read()
            .map_err(|_| ResourceLoadError::LoadFailed {
                url: url.to_string(),
                message: "image store lock poisoned".to_string(),
            })?;
        images
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(ResourceLoadError::NotFound(url.to_string())))
    }

    fn name(&self) -> &'static str {
        "InMemoryImageLoader"
    }
}
