pub mod check;
pub mod config;
pub mod dns;
pub mod render;
pub mod sku;
pub mod url;
