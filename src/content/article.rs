//! Canonical article and category models

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Block;

/// An article as used by loaders and views, independent of the backend schema version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// Backend record id
    pub id: u64,

    /// URL-friendly name used for routing
    pub slug: Option<String>,

    /// Article title
    pub title: Option<String>,

    /// Rich text body
    pub content: Vec<Block>,

    /// Associated category, if populated
    pub category: Option<Category>,

    /// Publication timestamp
    pub published_at: Option<DateTime<Utc>>,
}

/// Required field that was absent or empty on a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationGap {
    MissingSlug,
    MissingTitle,
}

impl std::fmt::Display for ValidationGap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationGap::MissingSlug => write!(f, "missing slug"),
            ValidationGap::MissingTitle => write!(f, "missing title"),
        }
    }
}

impl Article {
    /// Check that the article can be displayed and linked to
    pub fn validate(&self) -> Result<(), ValidationGap> {
        if self.slug().is_none() {
            return Err(ValidationGap::MissingSlug);
        }
        if self.title().is_none() {
            return Err(ValidationGap::MissingTitle);
        }
        Ok(())
    }

    /// Non-empty slug
    pub fn slug(&self) -> Option<&str> {
        non_empty(self.slug.as_deref())
    }

    /// Non-empty title
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    /// Category name, if a category is attached
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(|c| non_empty(Some(c.name.as_str())))
    }
}

/// A category referenced by zero or more articles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

/// Keep only displayable articles, preserving order
pub fn retain_displayable(articles: Vec<Article>) -> Vec<Article> {
    articles
        .into_iter()
        .filter(|article| match article.validate() {
            Ok(()) => true,
            Err(gap) => {
                tracing::debug!("Skipping article {}: {}", article.id, gap);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: u64, slug: Option<&str>, title: Option<&str>) -> Article {
        Article {
            id,
            slug: slug.map(str::to_string),
            title: title.map(str::to_string),
            content: Vec::new(),
            category: None,
            published_at: None,
        }
    }

    #[test]
    fn test_validate() {
        assert_eq!(article(1, Some("a"), Some("A")).validate(), Ok(()));
        assert_eq!(
            article(2, None, Some("A")).validate(),
            Err(ValidationGap::MissingSlug)
        );
        assert_eq!(
            article(3, Some("a"), Some("  ")).validate(),
            Err(ValidationGap::MissingTitle)
        );
        assert_eq!(
            article(4, Some(""), None).validate(),
            Err(ValidationGap::MissingSlug)
        );
    }

    #[test]
    fn test_retain_displayable_preserves_order() {
        let articles = vec![
            article(1, Some("first"), Some("First")),
            article(2, Some("broken"), None),
            article(3, Some("third"), Some("Third")),
            article(4, None, Some("No slug")),
        ];
        let kept: Vec<u64> = retain_displayable(articles).iter().map(|a| a.id).collect();
        assert_eq!(kept, vec![1, 3]);
    }

    #[test]
    fn test_category_name() {
        let mut a = article(1, Some("a"), Some("A"));
        assert_eq!(a.category_name(), None);
        a.category = Some(Category {
            id: 7,
            name: "Rust".to_string(),
            slug: "rust".to_string(),
        });
        assert_eq!(a.category_name(), Some("Rust"));
    }
}
