use crate::common::Period;
use crate::market::entity::{ForecastPoint, HistoricalPoint};
use crate::market::error::MarketError;

/// # Summary
/// 随机数来源端口，供序列生成器与外推器注入。
///
/// # Invariants
/// - `next_unit` 返回值必须落在 `[0, 1)` 区间内。
/// - 实现可以是线程本地随机数，也可以是可复现的种子随机数。
pub trait RandomSource: Send {
    /// # Summary
    /// 产出下一个 `[0, 1)` 区间的均匀随机数。
    fn next_unit(&mut self) -> f64;

    /// # Summary
    /// 产出 `[0, upper)` 区间的均匀随机增量。
    ///
    /// # Arguments
    /// * `upper`: 开区间上界。
    fn next_below(&mut self, upper: f64) -> f64 {
        self.next_unit() * upper
    }
}

/// # Summary
/// 历史序列生成器契约。
pub trait SeriesGenerator: Send + Sync {
    /// # Summary
    /// 生成指定周期的历史价格序列。
    ///
    /// # Arguments
    /// * `period`: 观察周期。
    /// * `month`: 月份序号 (0..=11)，周模式下决定起始基准价。
    /// * `year`: 年份，月模式下决定起始基准价。
    /// * `rng`: 注入的随机源。
    ///
    /// # Returns
    /// 周模式 7 个点，月模式 12 个点。
    fn generate(
        &self,
        period: Period,
        month: u32,
        year: i32,
        rng: &mut dyn RandomSource,
    ) -> Vec<HistoricalPoint>;
}

/// # Summary
/// 预测外推器契约。
pub trait Extrapolator: Send + Sync {
    /// # Summary
    /// 基于历史序列外推未来价格，返回历史 + 预测的组合序列。
    ///
    /// # Returns
    /// 成功返回组合序列；历史序列为空时返回 `MarketError::EmptySeries`。
    fn extrapolate(
        &self,
        historical: &[HistoricalPoint],
        period: Period,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<ForecastPoint>, MarketError>;
}
