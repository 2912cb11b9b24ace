use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 行业板块
///
/// 解析时不区分大小写，规范标签为大写（如 `BANKING`）。
/// 未知标签保留为 `Other`，同样以大写存储。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sector {
    Banking,
    It,
    Pharma,
    Energy,
    Paints,
    Finance,
    Other(String),
}

impl Sector {
    /// 大写的规范标签
    pub fn label(&self) -> &str {
        match self {
            Sector::Banking => "BANKING",
            Sector::It => "IT",
            Sector::Pharma => "PHARMA",
            Sector::Energy => "ENERGY",
            Sector::Paints => "PAINTS",
            Sector::Finance => "FINANCE",
            Sector::Other(label) => label,
        }
    }
}

impl FromStr for Sector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Ok(match upper.as_str() {
            "BANKING" => Sector::Banking,
            "IT" => Sector::It,
            "PHARMA" => Sector::Pharma,
            "ENERGY" => Sector::Energy,
            "PAINTS" => Sector::Paints,
            "FINANCE" => Sector::Finance,
            _ => Sector::Other(upper),
        })
    }
}

impl From<String> for Sector {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_else(|never: std::convert::Infallible| match never {})
    }
}

impl From<Sector> for String {
    fn from(sector: Sector) -> Self {
        sector.label().to_string()
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// 单只股票的筛选数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    /// 当期涨跌幅（%）
    pub change: f64,
    pub sector: Sector,
    pub pe: f64,
    /// 净资产收益率（%）
    pub roe: f64,
    /// 相对强弱指数，取值 0-100
    pub rsi: f64,
}

/// 由查询语句生成的过滤条件
///
/// 每个字段都是可选的上下界，`None` 表示不限制。
/// `Some(0.0)` 是有效的边界，与 `None` 不同。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roe_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roe_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_max: Option<f64>,
}

impl FilterSpec {
    /// 没有任何条件时为恒等过滤
    pub fn is_empty(&self) -> bool {
        *self == FilterSpec::default()
    }
}

/// 股票及其置信度评分（0-100）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredResult {
    pub stock: StockRecord,
    pub score: u8,
}
