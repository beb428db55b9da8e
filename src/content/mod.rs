//! Content module - articles, rich text, and backend response normalization

mod article;
mod blocks;
pub mod envelope;
mod normalize;

pub use article::{retain_displayable, Article, Category, ValidationGap};
pub use blocks::{plain_text, Block};
pub use envelope::Envelope;
pub use normalize::{normalize, normalize_record};
