pub mod article;
pub mod dataset;
mod timestamp;

pub use article::Article;
pub use dataset::Dataset;
pub use timestamp::parse_published_at;
