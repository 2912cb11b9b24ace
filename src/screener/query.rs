use crate::models::stock::{FilterSpec, Sector};
use log::debug;

// 板块关键词按固定顺序扫描，后匹配的覆盖先匹配的
const SECTOR_KEYWORDS: [(&str, Sector); 5] = [
    ("banking", Sector::Banking),
    ("it", Sector::It),
    ("pharma", Sector::Pharma),
    ("energy", Sector::Energy),
    ("paints", Sector::Paints),
];

/// 将自然语言查询解析为过滤条件
///
/// 先转为小写，再按固定顺序做字面子串匹配（不分词，"cheaper" 也会命中 "cheap"）。
/// 同一字段被多条规则命中时，以顺序靠后的规则为准，例如 "momentum overbought"
/// 得到 `rsi_min = 70`。任何输入都返回合法的（可能为空的）条件。
pub fn parse_query(query: &str) -> FilterSpec {
    let q = query.to_lowercase();
    let has = |keyword: &str| q.contains(keyword);
    let mut spec = FilterSpec::default();

    // 估值
    if has("cheap") || has("undervalue") {
        spec.pe_max = Some(20.0);
    }
    if has("expensive") {
        spec.pe_min = Some(25.0);
    }

    // 动量
    if has("momentum") || has("breakout") {
        spec.rsi_min = Some(60.0);
    }
    if has("overbought") {
        spec.rsi_min = Some(70.0);
    }
    if has("oversold") {
        spec.rsi_max = Some(30.0);
    }

    // 盈利质量
    if has("quality") || has("high roe") {
        spec.roe_min = Some(18.0);
    }

    for (keyword, sector) in SECTOR_KEYWORDS.iter() {
        if has(keyword) {
            spec.sector = Some(sector.clone());
        }
    }

    // 涨跌
    if has("gainers") || has("up") {
        spec.change_min = Some(0.0);
    }
    if has("losers") || has("down") {
        spec.change_max = Some(0.0);
    }

    debug!("Parsed query {:?} into {:?}", query, spec);
    spec
}
