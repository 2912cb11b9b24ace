// 公开导出的模块，供外部使用
pub mod models;
pub mod screener;
pub mod data_provider;
pub mod errors;
pub mod sources;

// 为了支持主程序，暂时保持这些模块公开
// 但在库使用场景中，这些应该是内部模块
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod services;
#[doc(hidden)]
pub mod util;

// 重新导出常用类型，方便使用
pub use models::stock::{FilterSpec, ScoredResult, Sector, StockRecord};
pub use screener::{apply_filter, parse_query, score_stock, ScreenReport, Screener, ScreenerConfig};
pub use data_provider::StockDataProvider;
pub use errors::{Result, ScreenerError};
