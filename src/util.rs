use crate::models::stock::ScoredResult;

// 按印度记数法分组整数部分：最后三位一组，其余每两位一组
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// 千分位格式化（en-IN），最多保留两位小数
pub fn format_number(num: f64) -> String {
    let rounded = format!("{:.2}", num.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let sign = if num < 0.0 && rounded != "0.00" { "-" } else { "" };
    let grouped = group_indian(int_part);
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// 价格格式化，如 `₹1,23,456.5`
pub fn format_price(price: f64) -> String {
    format!("₹{}", format_number(price))
}

/// 涨跌幅格式化，正数带 `+` 号
pub fn format_percent(num: f64) -> String {
    let sign = if num > 0.0 { "+" } else { "" };
    format!("{}{:.2}%", sign, num)
}

/// 打印筛选结果表格的行
pub fn format_result_row(rank: usize, result: &ScoredResult) -> String {
    let stock = &result.stock;
    format!(
        "{:<4} {:<12} {:<28} {:<10} {:>12} {:>8} {:>7.1} {:>7.1} {:>6.1} {:>6}",
        rank,
        stock.symbol,
        stock.name,
        stock.sector.label(),
        format_price(stock.price),
        format_percent(stock.change),
        stock.pe,
        stock.roe,
        stock.rsi,
        result.score
    )
}
