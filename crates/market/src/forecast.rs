use gosense_core::common::{Period, round2};
use gosense_core::market::entity::{ForecastPoint, HistoricalPoint};
use gosense_core::market::error::MarketError;
use gosense_core::market::port::{Extrapolator, RandomSource};
use tracing::debug;

/// # Summary
/// 线性外推参数：每个未来槽位的斜率与随机抖动上界。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendParams {
    pub slope: f64,
    pub max_jitter: f64,
}

impl TrendParams {
    /// 周期对应的固定参数：周 (1.5, 3)，月 (2.5, 5)
    pub fn for_period(period: Period) -> Self {
        match period {
            Period::Week => Self {
                slope: 1.5,
                max_jitter: 3.0,
            },
            Period::Month => Self {
                slope: 2.5,
                max_jitter: 5.0,
            },
        }
    }
}

/// # Summary
/// 以最后一个历史价格为起点的线性外推器。
///
/// # Invariants
/// - 输出 = 全部历史点 + `period.slots()` 个预测点。
/// - 历史段只填 `historical`，预测段只填 `forecast`。
/// - 斜率与抖动是固定常量，不随历史序列的波动率变化。
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearExtrapolator;

impl LinearExtrapolator {
    pub fn new() -> Self {
        Self
    }
}

impl Extrapolator for LinearExtrapolator {
    /// # Summary
    /// 生成历史 + 预测的组合序列。
    ///
    /// # Logic
    /// 1. 空历史序列直接返回 `EmptySeries`。
    /// 2. 逐个复制历史点。
    /// 3. 对第 i 个未来槽位计算 `last + (i + 1) * slope + jitter`，取整后追加。
    ///
    /// # Arguments
    /// * `historical`: 历史序列。
    /// * `period`: 决定未来槽位的数量、标签与参数。
    /// * `rng`: 注入的随机源。
    ///
    /// # Returns
    /// 成功返回组合序列。
    fn extrapolate(
        &self,
        historical: &[HistoricalPoint],
        period: Period,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<ForecastPoint>, MarketError> {
        let last_price = historical.last().ok_or(MarketError::EmptySeries)?.price;
        let params = TrendParams::for_period(period);

        let mut combined = Vec::with_capacity(historical.len() + period.slots());
        combined.extend(
            historical
                .iter()
                .map(|p| ForecastPoint::historical(p.label.clone(), p.price)),
        );

        let mut step = 0.0;
        for label in period.labels() {
            step += 1.0;
            let predicted = last_price + step * params.slope + rng.next_below(params.max_jitter);
            combined.push(ForecastPoint::forecast(*label, round2(predicted)));
        }

        debug!(
            %period,
            last_price,
            horizon = period.slots(),
            "forecast extrapolated"
        );
        Ok(combined)
    }
}
