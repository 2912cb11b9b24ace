//! 关键词选股：查询解析、条件过滤、置信度评分与排名。
//!
//! 这里的函数都是纯函数，不做 IO，也不会失败。

pub mod engine;
pub mod filter;
pub mod query;
pub mod scoring;

pub use engine::{ScreenReport, Screener, ScreenerConfig};
pub use filter::apply_filter;
pub use query::parse_query;
pub use scoring::score_stock;
