pub mod date;
pub mod error;
pub mod types;

pub use date::DateInfo;
pub use error::Error;
pub use types::{Category, NewsCollection, SearchResult};

pub type Result<T> = std::result::Result<T, Error>;
