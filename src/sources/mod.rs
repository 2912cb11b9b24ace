pub mod base;
pub mod file;
pub mod http;
pub mod mock;

pub use base::{StockDocument, StockSource};
pub use file::FileSource;
pub use http::HttpSource;
pub use mock::{bundled_stocks, MockSource};
