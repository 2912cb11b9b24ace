use egostrategy_screener::sources::bundled_stocks;
use egostrategy_screener::util::{format_percent, format_price};
use egostrategy_screener::{parse_query, Screener, ScreenerConfig, StockDataProvider};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 使用内置数据创建数据提供者
    let provider = StockDataProvider::new_with_data(bundled_stocks());
    println!("总股票数量: {}", provider.get_all_stocks().len());

    // 获取特定股票数据
    let symbol = "TCS";
    if let Some(stock) = provider.get_stock_by_symbol(symbol) {
        println!("\n股票: {} ({})", stock.name, stock.symbol);
        println!("板块: {}", stock.sector);
        println!("价格: {}  涨跌: {}", format_price(stock.price), format_percent(stock.change));
    } else {
        println!("未找到股票: {}", symbol);
    }

    // 解析查询并筛选
    let query = "cheap momentum gainers";
    println!("\n查询: {}", query);
    println!("过滤条件: {}", serde_json::to_string(&parse_query(query))?);

    let screener = Screener::new(ScreenerConfig {
        limit: Some(5),
        min_score: 0,
    });
    let report = screener.screen(provider.get_all_stocks(), query);

    println!("{:<12} {:<28} {:>6}", "代码", "名称", "评分");
    println!("{:-<50}", "");
    for result in &report.results {
        println!("{:<12} {:<28} {:>6}", result.stock.symbol, result.stock.name, result.score);
    }

    Ok(())
}
