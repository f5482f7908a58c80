use crate::state::PredictionRequest;
use gosense_core::common::round2;
use gosense_core::market::entity::ForecastPoint;
use gosense_core::market::error::MarketError;
use gosense_core::market::port::{Extrapolator, RandomSource};
use gosense_market::forecast::LinearExtrapolator;
use gosense_market::generator::parse_period;
use serde::Serialize;
use tracing::{info, warn};

/// 无预测数据时展示的最近收盘价
pub const FALLBACK_LAST_CLOSE: f64 = 158.45;
/// 无预测数据时展示的预测收盘价
pub const FALLBACK_EXPECTED_CLOSE: f64 = 170.25;

/// # Summary
/// 预测页的只读视图。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub period: String,
    pub series: Vec<ForecastPoint>,
    pub last_close: f64,
    pub expected_close: f64,
    pub predicted_change: f64,
    pub predicted_percent: f64,
}

/// # Summary
/// 预测应用服务。
pub struct PredictionService {
    extrapolator: LinearExtrapolator,
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionService {
    pub fn new() -> Self {
        Self {
            extrapolator: LinearExtrapolator::new(),
        }
    }

    /// # Summary
    /// 基于仪表盘带来的历史序列计算预测视图。
    ///
    /// # Logic
    /// 1. 解析周期并外推；周期非法或历史为空时记录 `warn!` 并丢弃
    ///    `MarketError`，视图使用空序列。
    /// 2. 最近收盘取最后一个历史点，预测收盘取最后一个预测点，缺失时使用兜底值。
    /// 3. 计算预测涨跌额与涨跌幅。
    pub fn predict(&self, request: &PredictionRequest, rng: &mut dyn RandomSource) -> PredictionView {
        let series = match self.extrapolate(request, rng) {
            Ok(series) => series,
            Err(e) => {
                warn!("forecast unavailable: {}", e);
                Vec::new()
            }
        };

        let last_close = series
            .iter()
            .rev()
            .find_map(|p| p.historical)
            .unwrap_or(FALLBACK_LAST_CLOSE);
        let expected_close = series
            .last()
            .and_then(|p| p.forecast)
            .unwrap_or(FALLBACK_EXPECTED_CLOSE);
        let predicted_change = round2(expected_close - last_close);
        let predicted_percent = round2((expected_close - last_close) / last_close * 100.0);

        info!(last_close, expected_close, predicted_percent, "prediction computed");
        PredictionView {
            period: request.selection.period.clone(),
            series,
            last_close,
            expected_close,
            predicted_change,
            predicted_percent,
        }
    }

    fn extrapolate(
        &self,
        request: &PredictionRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<ForecastPoint>, MarketError> {
        let period = parse_period(&request.selection.period)?;
        self.extrapolator.extrapolate(&request.historical, period, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Selection;
    use gosense_core::market::entity::HistoricalPoint;
    use gosense_market::random::SequenceRandom;

    fn request(prices: &[f64], period: &str) -> PredictionRequest {
        PredictionRequest {
            historical: prices
                .iter()
                .map(|p| HistoricalPoint {
                    label: "Mon".to_string(),
                    price: *p,
                })
                .collect(),
            selection: Selection {
                period: period.to_string(),
                ..Selection::default()
            },
        }
    }

    #[test]
    fn test_prediction_from_last_close() {
        let mut rng = SequenceRandom::constant(0.0);
        let view = PredictionService::new().predict(&request(&[100.0, 120.0], "Week"), &mut rng);

        assert_eq!(view.series.len(), 9);
        assert_eq!(view.last_close, 120.0);
        // 120 + 7 * 1.5
        assert_eq!(view.expected_close, 130.5);
        assert_eq!(view.predicted_change, 10.5);
        assert_eq!(view.predicted_percent, 8.75);
    }

    #[test]
    fn test_empty_history_uses_fallbacks() {
        let mut rng = SequenceRandom::constant(0.0);
        let view = PredictionService::new().predict(&request(&[], "Week"), &mut rng);

        assert!(view.series.is_empty());
        assert_eq!(view.last_close, FALLBACK_LAST_CLOSE);
        assert_eq!(view.expected_close, FALLBACK_EXPECTED_CLOSE);
        assert_eq!(view.predicted_change, 11.8);
    }

    #[test]
    fn test_unknown_period_uses_fallbacks() {
        let mut rng = SequenceRandom::constant(0.0);
        let view = PredictionService::new().predict(&request(&[100.0], "Quarter"), &mut rng);
        assert!(view.series.is_empty());
        assert_eq!(view.last_close, FALLBACK_LAST_CLOSE);
    }
}
