pub mod catalog;
pub mod config;
pub mod error;

// Matching core
pub mod matcher;
pub mod presenter;

// Front ends
pub mod api;
pub mod cli;
pub mod session;

// Re-exports
pub use catalog::{Recipe, RecipeCatalog};
pub use config::Settings;
pub use error::{Error, Result};
pub use matcher::{MatchEngine, MatchResult, TermExtractor};
pub use session::{Request, Response, Session};
