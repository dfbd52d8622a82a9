pub mod aggregate;
pub mod browser;
pub mod normalize;

pub use aggregate::{Category, GalleryCatalog, GalleryItem, ALL_CATEGORY_ID};
pub use browser::GalleryBrowser;
