use gosense_core::common::{Period, round2};
use gosense_core::market::entity::HistoricalPoint;
use gosense_core::market::error::MarketError;
use gosense_core::market::port::{RandomSource, SeriesGenerator};
use tracing::{debug, warn};

// 周模式：基准价 146.2，每个月序号抬高 0.5，单步增量 [0, 10)
const WEEK_BASE_PRICE: f64 = 146.2;
const WEEK_MONTH_STEP: f64 = 0.5;
const WEEK_MAX_INCREMENT: f64 = 10.0;

// 月模式：基准价 140，每年抬高 0.1，单步增量 [0, 15)
const MONTH_BASE_PRICE: f64 = 140.0;
const MONTH_YEAR_STEP: f64 = 0.1;
const MONTH_MAX_INCREMENT: f64 = 15.0;

/// # Summary
/// 单调非递减的随机游走历史序列生成器。
///
/// # Invariants
/// - 输出长度由周期决定：周 7 点，月 12 点。
/// - 输出价格已四舍五入到两位小数；游走内部累加的是未取整的值。
/// - 除随机源外无任何副作用。
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomWalkGenerator;

impl RandomWalkGenerator {
    pub fn new() -> Self {
        Self
    }

    /// # Summary
    /// 计算周期的起始基准价。
    ///
    /// # Arguments
    /// * `period`: 观察周期。
    /// * `month`: 月份序号，仅周模式使用。
    /// * `year`: 年份，仅月模式使用。
    pub fn base_price(period: Period, month: u32, year: i32) -> f64 {
        match period {
            Period::Week => WEEK_BASE_PRICE + f64::from(month) * WEEK_MONTH_STEP,
            Period::Month => MONTH_BASE_PRICE + f64::from(year) * MONTH_YEAR_STEP,
        }
    }

    /// 单步随机增量上界
    pub fn max_increment(period: Period) -> f64 {
        match period {
            Period::Week => WEEK_MAX_INCREMENT,
            Period::Month => MONTH_MAX_INCREMENT,
        }
    }

    /// # Summary
    /// 以界面字面量指定周期生成序列。
    ///
    /// # Logic
    /// 1. 解析周期字面量 ("Week" / "Month")。
    /// 2. 无法识别时记录告警并返回空序列，由调用方决定兜底展示值。
    /// 3. 否则委托给 `generate`。
    pub fn generate_labeled(
        &self,
        period: &str,
        month: u32,
        year: i32,
        rng: &mut dyn RandomSource,
    ) -> Vec<HistoricalPoint> {
        match parse_period(period) {
            Ok(period) => self.generate(period, month, year, rng),
            Err(e) => {
                warn!("{}, returning empty series", e);
                Vec::new()
            }
        }
    }
}

impl SeriesGenerator for RandomWalkGenerator {
    /// # Summary
    /// 生成历史价格随机游走序列。
    ///
    /// # Logic
    /// 1. 根据周期计算起始基准价。
    /// 2. 依次遍历标签，每步在上一价格基础上叠加 `[0, max)` 的随机增量。
    /// 3. 输出取整后的价格，游走继续使用未取整的值。
    fn generate(
        &self,
        period: Period,
        month: u32,
        year: i32,
        rng: &mut dyn RandomSource,
    ) -> Vec<HistoricalPoint> {
        let max_increment = Self::max_increment(period);
        let mut running = Self::base_price(period, month, year);

        let series: Vec<HistoricalPoint> = period
            .labels()
            .iter()
            .map(|label| {
                running += rng.next_below(max_increment);
                HistoricalPoint {
                    label: (*label).to_string(),
                    price: round2(running),
                }
            })
            .collect();

        debug!(
            %period,
            month,
            year,
            first = series.first().map(|p| p.price),
            last = series.last().map(|p| p.price),
            "historical series generated"
        );
        series
    }
}

/// # Summary
/// 解析界面使用的周期字面量。
///
/// # Returns
/// 合法字面量返回 `Period`，否则返回 `MarketError::UnknownPeriod`。
pub fn parse_period(literal: &str) -> Result<Period, MarketError> {
    literal
        .parse::<Period>()
        .map_err(|_| MarketError::UnknownPeriod(literal.to_string()))
}
