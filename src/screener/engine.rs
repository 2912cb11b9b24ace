use crate::models::stock::{FilterSpec, ScoredResult, StockRecord};
use crate::screener::filter::apply_filter;
use crate::screener::query::parse_query;
use crate::screener::scoring::score_stock;
use chrono::Local;
use log::info;
use serde::Serialize;

/// 排名阶段的参数
#[derive(Debug, Clone, Default)]
pub struct ScreenerConfig {
    /// 最多返回的结果数，`None` 表示不限制
    pub limit: Option<usize>,
    /// 低于该评分的结果被丢弃
    pub min_score: u8,
}

/// 一次筛选的完整结果
#[derive(Debug, Clone, Serialize)]
pub struct ScreenReport {
    pub query: String,
    pub filters: FilterSpec,
    /// 输入股票数量
    pub total: usize,
    /// 通过过滤条件的数量（评分阈值和数量限制之前）
    pub matched: usize,
    pub results: Vec<ScoredResult>,
    pub generated_at: String,
}

/// 查询 -> 过滤 -> 评分 -> 排名
#[derive(Debug, Clone, Default)]
pub struct Screener {
    config: ScreenerConfig,
}

impl Screener {
    pub fn new(config: ScreenerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScreenerConfig {
        &self.config
    }

    /// 为每只股票评分，保持输入顺序
    pub fn score_all(&self, stocks: &[StockRecord]) -> Vec<ScoredResult> {
        stocks
            .iter()
            .map(|stock| ScoredResult {
                stock: stock.clone(),
                score: score_stock(stock),
            })
            .collect()
    }

    /// 按评分降序排列（同分保持原顺序），再应用评分阈值和数量限制
    pub fn rank(&self, mut results: Vec<ScoredResult>) -> Vec<ScoredResult> {
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.retain(|r| r.score >= self.config.min_score);
        if let Some(limit) = self.config.limit {
            results.truncate(limit);
        }
        results
    }

    /// 执行一次完整的筛选
    pub fn screen(&self, stocks: &[StockRecord], query: &str) -> ScreenReport {
        let filters = parse_query(query);
        let matched = apply_filter(stocks, &filters);
        info!(
            "Query {:?} matched {} of {} stocks",
            query,
            matched.len(),
            stocks.len()
        );

        let results = self.rank(self.score_all(&matched));

        ScreenReport {
            query: query.to_string(),
            filters,
            total: stocks.len(),
            matched: matched.len(),
            results,
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
