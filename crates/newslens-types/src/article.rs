use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::parse_published_at;

/// One row of a financial news export.
///
/// The source fields are kept verbatim. `published_at` is derived from `date`
/// once, at construction, and is `None` when the source text is not a
/// recognizable timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub headline: String,
    pub url: String,
    /// Display name ("Benzinga Insights") or email address
    pub publisher: String,
    /// Raw publication timestamp as found in the source
    pub date: String,
    /// Ticker symbol
    pub stock: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<NaiveDateTime>,
}

impl Article {
    pub fn new(
        headline: impl Into<String>,
        url: impl Into<String>,
        publisher: impl Into<String>,
        date: impl Into<String>,
        stock: impl Into<String>,
    ) -> Self {
        let date = date.into();
        let published_at = parse_published_at(&date);
        Self {
            headline: headline.into(),
            url: url.into(),
            publisher: publisher.into(),
            date,
            stock: stock.into(),
            published_at,
        }
    }

    /// Headline length in characters (not bytes)
    pub fn headline_length(&self) -> usize {
        self.headline.chars().count()
    }

    /// Calendar date of publication, time of day discarded
    pub fn published_date(&self) -> Option<NaiveDate> {
        self.published_at.map(|ts| ts.date())
    }

    /// Hour of day (0-23) of publication
    pub fn hour(&self) -> Option<u32> {
        self.published_at.map(|ts| ts.hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_columns() {
        let article = Article::new(
            "Stocks That Hit 52-Week Highs On Friday",
            "https://www.benzinga.com/news/20/06/16190091",
            "Benzinga Insights",
            "2020-06-05 10:30:54-04:00",
            "A",
        );

        assert_eq!(article.headline_length(), 39);
        assert_eq!(
            article.published_date(),
            NaiveDate::from_ymd_opt(2020, 6, 5)
        );
        assert_eq!(article.hour(), Some(10));
        assert_eq!(article.date, "2020-06-05 10:30:54-04:00");
    }

    #[test]
    fn test_headline_length_counts_characters() {
        let article = Article::new("Café €5", "", "p", "", "X");
        assert_eq!(article.headline_length(), 7);
        assert_eq!(article.headline.len(), 10);
    }

    #[test]
    fn test_unparsable_date_is_kept_verbatim() {
        let article = Article::new("h", "u", "p", "not a date", "X");
        assert_eq!(article.date, "not a date");
        assert_eq!(article.published_at, None);
        assert_eq!(article.published_date(), None);
        assert_eq!(article.hour(), None);
    }
}
