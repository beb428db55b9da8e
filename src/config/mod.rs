//! Configuration module

mod site;

pub use site::ServerConfig;
pub use site::SiteConfig;
pub use site::API_URL_ENV;
