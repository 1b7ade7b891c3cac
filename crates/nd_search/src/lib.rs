pub mod cli;
pub mod client;
pub mod logging;
pub mod manager;
pub mod parser;
pub mod queries;

pub use cli::SearchArgs;
pub use client::{SearchClient, SearchConfig};
pub use logging::init_logging;
pub use manager::SearchManager;
pub use parser::{resolve_redirect, ParserKind, RegexParser, ResultParser, SelectorParser};
pub use queries::QueryPlan;
