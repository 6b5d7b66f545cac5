pub mod error;
pub mod media;
pub mod metadata;
pub mod projects;
pub mod route;
pub mod site;
pub mod spotlight;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

pub use error::SiteError;
