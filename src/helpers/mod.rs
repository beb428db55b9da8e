//! Helper functions for views
//!
//! URL generation, HTML escaping and date formatting shared by the
//! renderer, the router and the content client.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
