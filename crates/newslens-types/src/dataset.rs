use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Article;

/// The in-memory collection of articles for one analysis session.
///
/// Loaded once and then only read. Derived columns are exposed as freshly
/// computed vectors so that no analysis depends on another having run first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    articles: Vec<Article>,
}

impl Dataset {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Headline length per record, in record order
    pub fn headline_lengths(&self) -> Vec<usize> {
        self.articles.iter().map(Article::headline_length).collect()
    }

    /// Parsed calendar date per record (`None` where the date was unparsable)
    pub fn published_dates(&self) -> Vec<Option<NaiveDate>> {
        self.articles.iter().map(Article::published_date).collect()
    }

    /// Hour of day per record (`None` where the date was unparsable)
    pub fn hours(&self) -> Vec<Option<u32>> {
        self.articles.iter().map(Article::hour).collect()
    }

    /// Number of records whose date could not be parsed
    pub fn unparsed_date_count(&self) -> usize {
        self.articles
            .iter()
            .filter(|a| a.published_at.is_none())
            .count()
    }
}

impl From<Vec<Article>> for Dataset {
    fn from(articles: Vec<Article>) -> Self {
        Self::new(articles)
    }
}

impl FromIterator<Article> for Dataset {
    fn from_iter<I: IntoIterator<Item = Article>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}
