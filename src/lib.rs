pub mod blog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod jsonld;
pub mod pages;
pub mod scheduler;
pub mod security;
pub mod seo;
pub mod server;
pub mod sitemap;
