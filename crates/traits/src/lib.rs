pub mod resource;

pub use resource::{ImageLoader, ImageSize, InMemoryImageLoader, ResourceLoadError};
