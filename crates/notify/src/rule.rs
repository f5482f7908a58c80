use gosense_core::common::Period;
use gosense_core::market::entity::HistoricalPoint;
use gosense_core::notify::entity::{AlertKind, VolatilityAlert};
use tracing::debug;

/// # Summary
/// 区间涨跌幅波动预警规则。
///
/// # Invariants
/// - 规则本身无状态，只决定是否产生预警，不负责去重与存储。
/// - 跌幅判断优先于绝对波动判断。
#[derive(Debug, Clone)]
pub struct VolatilityRule {
    // 文案中展示的证券名称
    pub symbol: String,
    // 跌幅低于该百分比触发风险预警
    pub risk_threshold: f64,
    // 涨跌幅绝对值高于该百分比触发波动预警
    pub volatility_threshold: f64,
}

impl Default for VolatilityRule {
    fn default() -> Self {
        Self::new("NVIDIA")
    }
}

impl VolatilityRule {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            risk_threshold: -2.0,
            volatility_threshold: 5.0,
        }
    }

    /// # Summary
    /// 对历史序列执行预警判定。
    ///
    /// # Logic
    /// 1. 计算首尾价格的百分比变化；点数不足或首价为 0 时不预警。
    /// 2. 变化低于 `risk_threshold` 产生风险预警（文案使用绝对值）。
    /// 3. 否则绝对值高于 `volatility_threshold` 产生波动预警（文案保留符号并带上周期名）。
    ///
    /// # Arguments
    /// * `series`: 历史序列。
    /// * `period`: 序列对应的周期。
    ///
    /// # Returns
    /// 命中返回 `VolatilityAlert`，否则返回 None。
    pub fn evaluate(&self, series: &[HistoricalPoint], period: Period) -> Option<VolatilityAlert> {
        let pct = percent_change(series)?;
        debug!(percent_change = pct, %period, "evaluating volatility");

        if pct < self.risk_threshold {
            Some(VolatilityAlert {
                kind: AlertKind::Risk,
                percent_change: pct,
                message: format!(
                    "Risk Alert: {} stock dropped {:.2}% in selected period. High volatility detected.",
                    self.symbol,
                    pct.abs()
                ),
            })
        } else if pct.abs() > self.volatility_threshold {
            Some(VolatilityAlert {
                kind: AlertKind::Volatility,
                percent_change: pct,
                message: format!(
                    "Alert: High volatility detected. Stock moved {:.2}% in {}.",
                    pct,
                    period.lowercase_name()
                ),
            })
        } else {
            None
        }
    }
}

/// # Summary
/// 按默认规则（NVIDIA，-2% / 5%）评估序列。
pub fn evaluate_volatility(series: &[HistoricalPoint], period: Period) -> Option<VolatilityAlert> {
    VolatilityRule::default().evaluate(series, period)
}

/// # Summary
/// 计算序列首尾价格的百分比变化。
///
/// # Returns
/// 少于两个点或首价为 0 时返回 None。
pub fn percent_change(series: &[HistoricalPoint]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let first = series.first()?.price;
    let last = series.last()?.price;
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(prices: &[f64]) -> Vec<HistoricalPoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, price)| HistoricalPoint {
                label: format!("P{}", i),
                price: *price,
            })
            .collect()
    }

    #[test]
    fn test_drop_raises_risk_alert() {
        let alert = evaluate_volatility(&series(&[100.0, 90.0]), Period::Week).unwrap();
        assert_eq!(alert.kind, AlertKind::Risk);
        assert_eq!(
            alert.message,
            "Risk Alert: NVIDIA stock dropped 10.00% in selected period. High volatility detected."
        );
    }

    #[test]
    fn test_small_move_is_silent() {
        assert!(evaluate_volatility(&series(&[100.0, 100.5]), Period::Week).is_none());
        assert!(evaluate_volatility(&series(&[100.0, 98.5]), Period::Week).is_none());
        assert!(evaluate_volatility(&series(&[100.0, 104.0]), Period::Month).is_none());
    }

    #[test]
    fn test_large_rise_raises_volatility_alert() {
        let alert = evaluate_volatility(&series(&[100.0, 103.0, 107.25]), Period::Month).unwrap();
        assert_eq!(alert.kind, AlertKind::Volatility);
        assert_eq!(
            alert.message,
            "Alert: High volatility detected. Stock moved 7.25% in month."
        );
    }

    #[test]
    fn test_custom_symbol() {
        let rule = VolatilityRule::new("AAPL");
        let alert = rule.evaluate(&series(&[200.0, 190.0]), Period::Week).unwrap();
        assert!(alert.message.starts_with("Risk Alert: AAPL stock dropped 5.00%"));
    }

    #[test]
    fn test_degenerate_series() {
        assert!(percent_change(&series(&[])).is_none());
        assert!(percent_change(&series(&[100.0])).is_none());
        assert!(percent_change(&series(&[0.0, 10.0])).is_none());
    }
}
