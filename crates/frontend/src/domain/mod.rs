pub mod a001_estimator;
pub mod a002_product;
pub mod a003_site_settings;
pub mod a004_consultation;
