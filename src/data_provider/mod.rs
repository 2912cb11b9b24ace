use log::info;

use crate::models::stock::{Sector, StockRecord};
use crate::errors::Result;
use crate::sources::base::{parse_stock_document, StockDocument};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 股票数据提供者，提供按代码和板块的查找
pub struct StockDataProvider {
    data: Vec<StockRecord>,
    // 索引用于快速查找
    symbol_index: HashMap<String, usize>,
    sector_index: HashMap<Sector, Vec<usize>>,
}

impl StockDataProvider {
    /// 使用提供的数据创建新的数据提供者实例
    pub fn new_with_data(data: Vec<StockRecord>) -> Self {
        let mut provider = Self {
            data,
            symbol_index: HashMap::new(),
            sector_index: HashMap::new(),
        };

        provider.rebuild_indices();

        provider
    }

    /// 从文件加载数据，文件不存在时返回空数据
    pub fn load_from_file(path: &str) -> Result<Self> {
        let data = if Path::new(path).exists() {
            parse_stock_document(&fs::read_to_string(path)?)?
        } else {
            info!("{} not found, starting with empty dataset", path);
            Vec::new()
        };

        Ok(Self::new_with_data(data))
    }

    /// 保存数据到文件
    pub fn save_to_file(&self, path: &str) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let doc = StockDocument {
            stocks: self.data.clone(),
        };
        fs::write(path, serde_json::to_string_pretty(&doc)?)?;

        info!("Saved {} stocks to {}", self.data.len(), path);
        Ok(())
    }

    /// 获取所有股票列表
    pub fn get_all_stocks(&self) -> &[StockRecord] {
        &self.data
    }

    /// 获取指定股票
    pub fn get_stock_by_symbol(&self, symbol: &str) -> Option<&StockRecord> {
        self.symbol_index.get(symbol).map(|&idx| &self.data[idx])
    }

    /// 获取指定板块的股票
    pub fn get_stocks_by_sector(&self, sector: &Sector) -> Vec<&StockRecord> {
        self.sector_index
            .get(sector)
            .map(|indices| indices.iter().map(|&idx| &self.data[idx]).collect())
            .unwrap_or_default()
    }

    /// 重建索引
    fn rebuild_indices(&mut self) {
        self.symbol_index.clear();
        self.sector_index.clear();

        for (i, stock) in self.data.iter().enumerate() {
            // 代码重复时保留第一条
            self.symbol_index.entry(stock.symbol.clone()).or_insert(i);

            self.sector_index
                .entry(stock.sector.clone())
                .or_default()
                .push(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::bundled_stocks;

    #[test]
    fn test_lookup() {
        let provider = StockDataProvider::new_with_data(bundled_stocks());
        assert_eq!(provider.get_all_stocks().len(), 10);
        assert_eq!(
            provider.get_stock_by_symbol("INFY").map(|s| s.name.as_str()),
            Some("Infosys")
        );
        assert!(provider.get_stock_by_symbol("infy").is_none());

        let it: Vec<&str> = provider
            .get_stocks_by_sector(&Sector::It)
            .iter()
            .map(|s| s.symbol.as_str())
            .collect();
        assert_eq!(it, vec!["TCS", "INFY", "WIPRO", "LTMINDTREE"]);
        assert!(provider.get_stocks_by_sector(&Sector::Pharma).is_empty());
    }

    #[test]
    fn test_duplicate_symbol_first_wins() {
        let mut stocks = bundled_stocks();
        let mut dup = stocks[0].clone();
        dup.price = 1.0;
        stocks.push(dup);
        let provider = StockDataProvider::new_with_data(stocks);
        assert_eq!(provider.get_stock_by_symbol("RELIANCE").unwrap().price, 2850.0);
        assert_eq!(provider.get_all_stocks().len(), 11);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stocks.json");
        let path = path.to_str().unwrap();

        StockDataProvider::new_with_data(bundled_stocks())
            .save_to_file(path)
            .unwrap();
        let loaded = StockDataProvider::load_from_file(path).unwrap();
        assert_eq!(loaded.get_all_stocks(), bundled_stocks().as_slice());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("none.json");
        let provider = StockDataProvider::load_from_file(path.to_str().unwrap()).unwrap();
        assert!(provider.get_all_stocks().is_empty());
    }
}
