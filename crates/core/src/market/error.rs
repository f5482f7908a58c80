use thiserror::Error;

/// # Summary
/// 行情序列域错误枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MarketError {
    // 外推需要至少一个历史点作为起点
    #[error("Historical series is empty")]
    EmptySeries,
    // 周期字面量无法识别
    #[error("Unknown period: {0}")]
    UnknownPeriod(String),
}
