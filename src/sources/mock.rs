use crate::models::stock::{Sector, StockRecord};
use crate::errors::Result;
use crate::sources::base::StockSource;
use async_trait::async_trait;

/// 内置的十只股票数据，数据加载失败时使用
pub fn bundled_stocks() -> Vec<StockRecord> {
    let rows: [(&str, &str, f64, f64, Sector, f64, f64, f64); 10] = [
        ("RELIANCE", "Reliance Industries", 2850.0, 4.2, Sector::Energy, 18.5, 21.2, 68.0),
        ("HDFC", "HDFC Bank", 1620.0, 3.1, Sector::Banking, 21.3, 18.9, 65.0),
        ("TCS", "Tata Consultancy Services", 3850.0, 2.8, Sector::It, 25.8, 19.5, 62.0),
        ("INFY", "Infosys", 1420.0, 2.1, Sector::It, 24.2, 18.1, 58.0),
        ("ICICIBANK", "ICICI Bank", 950.0, 1.8, Sector::Banking, 19.5, 17.2, 60.0),
        ("WIPRO", "Wipro", 420.0, -1.2, Sector::It, 22.1, 16.8, 45.0),
        ("BAJAJFINSV", "Bajaj Finserv", 1680.0, 2.5, Sector::Finance, 26.3, 20.1, 70.0),
        ("ASIANPAINT", "Asian Paints", 3245.0, 3.8, Sector::Paints, 28.5, 15.3, 72.0),
        ("LTMINDTREE", "LTIMindtree", 4820.0, 1.5, Sector::It, 21.8, 19.2, 55.0),
        ("SBIN", "State Bank of India", 550.0, 2.2, Sector::Banking, 15.2, 12.1, 63.0),
    ];

    rows.into_iter()
        .map(|(symbol, name, price, change, sector, pe, roe, rsi)| StockRecord {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            sector,
            pe,
            roe,
            rsi,
        })
        .collect()
}

/// 返回内置数据的数据源
pub struct MockSource;

#[async_trait]
impl StockSource for MockSource {
    fn name(&self) -> &str {
        "bundled"
    }

    async fn load(&self) -> Result<Vec<StockRecord>> {
        Ok(bundled_stocks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_bundled_symbols_unique() {
        let stocks = bundled_stocks();
        assert_eq!(stocks.len(), 10);
        let symbols: HashSet<_> = stocks.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols.len(), 10);
        assert!(stocks.iter().all(|s| s.price > 0.0 && (0.0..=100.0).contains(&s.rsi)));
    }
}
