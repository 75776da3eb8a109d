pub mod config;
pub mod contact;
pub mod error;
pub mod io;
pub mod paths;
pub mod resolver;
pub mod sitemap;
pub mod store;
pub mod types;

pub use error::{Result, SiteError};
pub use store::{Collection, ContentStore};
