use egostrategy_screener::data_provider::StockDataProvider;
use egostrategy_screener::sources::bundled_stocks;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 默认输出到 data/stocks.json，可通过第一个参数指定路径
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/stocks.json".to_string());

    let provider = StockDataProvider::new_with_data(bundled_stocks());
    provider.save_to_file(&path)?;

    println!("已导出 {} 只股票到 {}", provider.get_all_stocks().len(), path);
    Ok(())
}
