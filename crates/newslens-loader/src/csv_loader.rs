use crate::{Error, Result};
use newslens_types::{Article, Dataset};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Columns every export must carry. Extra columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = ["headline", "url", "publisher", "date", "stock"];

#[derive(Debug, Deserialize)]
struct ArticleRow {
    headline: String,
    url: String,
    publisher: String,
    date: String,
    stock: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Article::new(row.headline, row.url, row.publisher, row.date, row.stock)
    }
}

/// Load a news export from `path`.
///
/// Fails with [`Error::NotFound`] when the path does not resolve to a file.
/// Rows whose date cannot be parsed are kept with an absent timestamp.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(err),
    })?;

    debug!(path = %path.display(), "reading news export");
    let dataset = load_from_reader(file)?;
    info!(
        path = %path.display(),
        records = dataset.len(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Load a news export from any reader positioned at the header row.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(Error::MissingColumn(column.to_string()));
        }
    }

    let mut articles = Vec::new();
    for row in rdr.deserialize::<ArticleRow>() {
        articles.push(Article::from(row?));
    }

    let dataset = Dataset::new(articles);
    let unparsed = dataset.unparsed_date_count();
    if unparsed > 0 {
        warn!(
            unparsed,
            records = dataset.len(),
            "some publication dates could not be parsed and will be ignored by date analyses"
        );
    } else {
        debug!(records = dataset.len(), "all publication dates parsed");
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "headline,url,publisher,date,stock\n";

    #[test]
    fn test_load_from_reader() {
        let data = format!(
            "{}{}{}",
            HEADER,
            "Stocks That Hit 52-Week Highs On Friday,https://example.com/1,Benzinga Insights,2020-06-05 10:30:54-04:00,A\n",
            "\"Agilent, Inc. Q2 Earnings\",https://example.com/2,Lisa Levin,2020-05-26 00:00:00,A\n",
        );

        let dataset = load_from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);

        let second = &dataset.articles()[1];
        assert_eq!(second.headline, "Agilent, Inc. Q2 Earnings");
        assert_eq!(second.publisher, "Lisa Levin");
        assert!(second.published_at.is_some());
    }

    #[test]
    fn test_extra_and_reordered_columns() {
        let data = ",stock,date,publisher,url,headline\n\
                    0,AAPL,2024-01-01,Reuters,https://r.example/a,Apple rallies\n";

        let dataset = load_from_reader(data.as_bytes()).unwrap();
        let article = &dataset.articles()[0];
        assert_eq!(article.headline, "Apple rallies");
        assert_eq!(article.stock, "AAPL");
        assert_eq!(article.url, "https://r.example/a");
    }

    #[test]
    fn test_missing_column() {
        let data = "headline,publisher,date,stock\nh,p,2024-01-01,X\n";
        match load_from_reader(data.as_bytes()) {
            Err(Error::MissingColumn(name)) => assert_eq!(name, "url"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_unparsable_date_is_not_an_error() {
        let data = format!("{}h,u,p,someday,X\nh2,u,p,,Y\n", HEADER);
        let dataset = load_from_reader(data.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.unparsed_date_count(), 2);
    }

    #[test]
    fn test_header_only_is_empty_dataset() {
        let dataset = load_from_reader(HEADER.as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let data = format!("{}h,u,p\n", HEADER);
        assert!(matches!(
            load_from_reader(data.as_bytes()),
            Err(Error::Csv(_))
        ));
    }
}
