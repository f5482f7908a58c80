use serde::{Deserialize, Serialize};

/// # Summary
/// 历史价格序列中的单个数据点。
///
/// # Invariants
/// - `price` 非负且已四舍五入到两位小数。
/// - 序列中的顺序即时间顺序。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    // 横轴标签 (Mon..Sun 或 Jan..Dec)
    pub label: String,
    // 当期价格 (USD)
    pub price: f64,
}

/// # Summary
/// 预测对比图中的单个数据点，可直接渲染为双线图。
///
/// # Invariants
/// - `historical` 与 `forecast` 有且仅有一个为 `Some`。
/// - 组合序列中历史点在前、预测点在后。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    // 横轴标签
    pub label: String,
    // 历史价格，预测段为 None
    pub historical: Option<f64>,
    // 外推价格，历史段为 None
    pub forecast: Option<f64>,
}

impl ForecastPoint {
    /// 构造历史段数据点
    pub fn historical(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            historical: Some(price),
            forecast: None,
        }
    }

    /// 构造预测段数据点
    pub fn forecast(label: impl Into<String>, price: f64) -> Self {
        Self {
            label: label.into(),
            historical: None,
            forecast: Some(price),
        }
    }
}
