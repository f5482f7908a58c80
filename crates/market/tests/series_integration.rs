use gosense_core::common::{DAY_LABELS, MONTH_LABELS, Period};
use gosense_core::market::port::{Extrapolator, SeriesGenerator};
use gosense_market::forecast::LinearExtrapolator;
use gosense_market::generator::RandomWalkGenerator;
use gosense_market::random::StdRandom;

fn is_two_decimals(value: f64) -> bool {
    ((value * 100.0).round() / 100.0 - value).abs() < 1e-9
}

/// # Summary
/// 集成测试：周模式输出 7 个按 Mon..Sun 排列的点，价格两位小数且单调非递减。
#[test]
fn test_week_series_shape() {
    let generator = RandomWalkGenerator::new();
    for seed in 0..20 {
        let mut rng = StdRandom::seeded(seed);
        let series = generator.generate(Period::Week, 3, 2024, &mut rng);

        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, DAY_LABELS);
        assert!(series.iter().all(|p| is_two_decimals(p.price)));
        assert!(series.windows(2).all(|w| w[1].price >= w[0].price));
        // 基准价 146.2 + 3 * 0.5，首步增量 < 10
        assert!(series[0].price >= 147.7 && series[0].price <= 157.7);
    }
}

/// # Summary
/// 集成测试：月模式输出 12 个按 Jan..Dec 排列的点。
#[test]
fn test_month_series_shape() {
    let generator = RandomWalkGenerator::new();
    let mut rng = StdRandom::seeded(7);
    let series = generator.generate(Period::Month, 0, 2025, &mut rng);

    let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, MONTH_LABELS);
    assert!(series.iter().all(|p| is_two_decimals(p.price)));
    // 基准价 140 + 2025 * 0.1 = 342.5，12 步增量合计 < 180
    assert!(series[0].price >= 342.5);
    assert!(series[11].price <= 342.5 + 180.0);
}

/// # Summary
/// 集成测试：相同种子产出相同序列。
#[test]
fn test_seeded_generation_is_deterministic() {
    let generator = RandomWalkGenerator::new();
    let a = generator.generate(Period::Month, 5, 2023, &mut StdRandom::seeded(99));
    let b = generator.generate(Period::Month, 5, 2023, &mut StdRandom::seeded(99));
    assert_eq!(a, b);
}

/// # Summary
/// 集成测试：生成 -> 外推链路。
///
/// # Logic
/// 1. 生成历史序列。
/// 2. 外推得到组合序列。
/// 3. 断言长度、前后两段的字段互斥以及预测价格下界。
#[test]
fn test_generate_then_extrapolate() -> anyhow::Result<()> {
    let generator = RandomWalkGenerator::new();
    let extrapolator = LinearExtrapolator::new();

    for period in [Period::Week, Period::Month] {
        let mut rng = StdRandom::seeded(2024);
        let history = generator.generate(period, 0, 2024, &mut rng);
        let combined = extrapolator.extrapolate(&history, period, &mut rng)?;

        assert_eq!(combined.len(), history.len() + period.slots());
        let (past, future) = combined.split_at(history.len());
        assert!(past.iter().all(|p| p.historical.is_some() && p.forecast.is_none()));
        assert!(future.iter().all(|p| p.historical.is_none() && p.forecast.is_some()));

        let last = history.last().map(|p| p.price).unwrap_or_default();
        for point in future {
            let price = point.forecast.unwrap_or_default();
            assert!(price > last);
            assert!(is_two_decimals(price));
        }
        let future_labels: Vec<&str> = future.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(future_labels, period.labels());
    }
    Ok(())
}
