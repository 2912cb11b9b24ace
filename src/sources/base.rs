use crate::models::stock::StockRecord;
use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 股票数据源的基础 trait
#[async_trait]
pub trait StockSource {
    /// 日志中使用的数据源名称
    fn name(&self) -> &str;

    /// 加载完整的股票列表
    async fn load(&self) -> Result<Vec<StockRecord>>;
}

/// 股票数据文档：`{ "stocks": [...] }`
#[derive(Debug, Serialize, Deserialize)]
pub struct StockDocument {
    pub stocks: Vec<StockRecord>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentShape {
    Wrapped(StockDocument),
    Bare(Vec<StockRecord>),
}

/// 解析股票数据文档，同时兼容裸数组格式
pub fn parse_stock_document(text: &str) -> Result<Vec<StockRecord>> {
    let shape: DocumentShape = serde_json::from_str(text)?;
    Ok(match shape {
        DocumentShape::Wrapped(doc) => doc.stocks,
        DocumentShape::Bare(stocks) => stocks,
    })
}
