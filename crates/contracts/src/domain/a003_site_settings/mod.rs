pub mod aggregate;
pub mod carousel;

pub use aggregate::SiteSettings;
pub use carousel::HeroCarousel;
