use crate::models::stock::{FilterSpec, StockRecord};

impl FilterSpec {
    /// 判断单只股票是否满足全部已设置的边界（边界值本身视为满足）
    pub fn matches(&self, stock: &StockRecord) -> bool {
        if self.pe_max.map_or(false, |max| stock.pe > max) {
            return false;
        }
        if self.pe_min.map_or(false, |min| stock.pe < min) {
            return false;
        }
        if self.rsi_max.map_or(false, |max| stock.rsi > max) {
            return false;
        }
        if self.rsi_min.map_or(false, |min| stock.rsi < min) {
            return false;
        }
        if self.roe_min.map_or(false, |min| stock.roe < min) {
            return false;
        }
        if self.roe_max.map_or(false, |max| stock.roe > max) {
            return false;
        }
        if let Some(sector) = &self.sector {
            if stock.sector != *sector {
                return false;
            }
        }
        if self.change_min.map_or(false, |min| stock.change < min) {
            return false;
        }
        if self.change_max.map_or(false, |max| stock.change > max) {
            return false;
        }
        true
    }
}

/// 按条件过滤股票，保持输入顺序
pub fn apply_filter(stocks: &[StockRecord], spec: &FilterSpec) -> Vec<StockRecord> {
    stocks
        .iter()
        .filter(|stock| spec.matches(stock))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stock::Sector;

    fn stock(symbol: &str, sector: Sector, pe: f64, roe: f64, rsi: f64, change: f64) -> StockRecord {
        StockRecord {
            symbol: symbol.to_string(),
            name: format!("Test {}", symbol),
            price: 100.0,
            change,
            sector,
            pe,
            roe,
            rsi,
        }
    }

    fn sample() -> Vec<StockRecord> {
        vec![
            stock("AAA", Sector::It, 14.0, 26.0, 55.0, 3.0),
            stock("BBB", Sector::Banking, 30.0, 10.0, 80.0, -5.0),
            stock("CCC", Sector::It, 22.0, 19.0, 65.0, 0.0),
            stock("DDD", Sector::Energy, 18.0, 21.0, 25.0, -0.01),
        ]
    }

    #[test]
    fn test_empty_spec_is_identity() {
        let stocks = sample();
        assert_eq!(apply_filter(&stocks, &FilterSpec::default()), stocks);
    }

    #[test]
    fn test_empty_input() {
        let spec = FilterSpec {
            pe_max: Some(20.0),
            ..Default::default()
        };
        assert!(apply_filter(&[], &spec).is_empty());
    }

    #[test]
    fn test_change_min_zero_is_inclusive_bound() {
        let spec = FilterSpec {
            change_min: Some(0.0),
            ..Default::default()
        };
        let symbols: Vec<String> = apply_filter(&sample(), &spec)
            .into_iter()
            .map(|s| s.symbol)
            .collect();
        assert_eq!(symbols, vec!["AAA", "CCC"]);
    }

    #[test]
    fn test_change_max_zero() {
        let spec = FilterSpec {
            change_max: Some(0.0),
            ..Default::default()
        };
        let symbols: Vec<String> = apply_filter(&sample(), &spec)
            .into_iter()
            .map(|s| s.symbol)
            .collect();
        assert_eq!(symbols, vec!["BBB", "CCC", "DDD"]);
    }

    #[test]
    fn test_each_bound() {
        let s = stock("X", Sector::Pharma, 20.0, 18.0, 30.0, 1.0);
        let cases = [
            (FilterSpec { pe_max: Some(20.0), ..Default::default() }, true),
            (FilterSpec { pe_max: Some(19.9), ..Default::default() }, false),
            (FilterSpec { pe_min: Some(20.0), ..Default::default() }, true),
            (FilterSpec { pe_min: Some(25.0), ..Default::default() }, false),
            (FilterSpec { rsi_max: Some(30.0), ..Default::default() }, true),
            (FilterSpec { rsi_max: Some(29.0), ..Default::default() }, false),
            (FilterSpec { rsi_min: Some(60.0), ..Default::default() }, false),
            (FilterSpec { roe_min: Some(18.0), ..Default::default() }, true),
            (FilterSpec { roe_max: Some(15.0), ..Default::default() }, false),
            (FilterSpec { sector: Some(Sector::Pharma), ..Default::default() }, true),
            (FilterSpec { sector: Some(Sector::It), ..Default::default() }, false),
            (FilterSpec { change_max: Some(0.0), ..Default::default() }, false),
        ];
        for (spec, expected) in cases.iter() {
            assert_eq!(spec.matches(&s), *expected, "spec {:?}", spec);
        }
    }

    #[test]
    fn test_preserves_order_and_is_idempotent() {
        let spec = FilterSpec {
            sector: Some(Sector::It),
            ..Default::default()
        };
        let once = apply_filter(&sample(), &spec);
        assert_eq!(
            once.iter().map(|s| s.symbol.as_str()).collect::<Vec<_>>(),
            vec!["AAA", "CCC"]
        );
        assert_eq!(apply_filter(&once, &spec), once);
    }
}
