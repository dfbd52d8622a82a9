pub mod gallery;
pub mod lightbox;
