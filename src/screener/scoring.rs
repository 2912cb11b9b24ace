use crate::models::stock::StockRecord;

const BASE_SCORE: i32 = 50;
const MAX_SCORE: i32 = 100;

/// 计算单只股票的置信度评分，结果限定在 0-100
///
/// 评分只依赖股票自身数据，与查询条件无关；因此不接收过滤条件参数。
///
/// 规则（累加）：
/// - PE < 20: +10，PE < 15: 再 +5
/// - ROE > 18: +10，ROE > 25: 再 +5
/// - 40 < RSI < 70: +10
/// - 涨幅 > 2%: +5
pub fn score_stock(stock: &StockRecord) -> u8 {
    let mut score = BASE_SCORE;

    if stock.pe < 20.0 {
        score += 10;
    }
    if stock.pe < 15.0 {
        score += 5;
    }

    if stock.roe > 18.0 {
        score += 10;
    }
    if stock.roe > 25.0 {
        score += 5;
    }

    // RSI 处于中性区间加分
    if stock.rsi > 40.0 && stock.rsi < 70.0 {
        score += 10;
    }

    if stock.change > 2.0 {
        score += 5;
    }

    score.clamp(0, MAX_SCORE) as u8
}
