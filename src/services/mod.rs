// Service exports
pub mod quotes;

pub use quotes::{QuoteClient, QuoteError, QuoteSource};
