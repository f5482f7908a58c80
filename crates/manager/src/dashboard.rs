use crate::state::Selection;
use gosense_core::common::{MONTH_NAMES, month_index, round2};
use gosense_core::market::entity::HistoricalPoint;
use gosense_core::market::port::RandomSource;
use gosense_core::notify::entity::{AlertKind, Notification, ToneSpec};
use gosense_core::notify::error::NotifyError;
use gosense_core::notify::port::SoundCue;
use gosense_core::settings::entity::Preferences;
use gosense_market::generator::{RandomWalkGenerator, parse_period};
use gosense_notify::center::NotificationCenter;
use gosense_notify::rule::VolatilityRule;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// 序列为空时展示的当前价
pub const FALLBACK_CURRENT_PRICE: f64 = 158.45;
/// 序列为空时展示的期初价
pub const FALLBACK_FIRST_PRICE: f64 = 145.2;

/// # Summary
/// 仪表盘的只读视图，可直接交给渲染层。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub selection: Selection,
    pub series: Vec<HistoricalPoint>,
    pub current_price: f64,
    pub first_price: f64,
    pub price_change: f64,
    // 两位小数的区间涨跌幅
    pub percent_change: f64,
    // "January Week" 或 "2024"
    pub period_label: String,
    // 按偏好货币格式化的当前价，例如 "$158.45" / "¥23,688"
    pub display_price: String,
    // 按偏好货币格式化的涨跌额（不带符号）
    pub display_change: String,
    pub unread_count: usize,
}

/// # Summary
/// 仪表盘应用服务：生成序列、评估预警、维护通知中心。
///
/// # Invariants
/// - 随机源、提示音、时钟均由构造方注入。
/// - 每次选择变化都会重新生成序列，结果只受随机源影响。
pub struct DashboardService {
    generator: RandomWalkGenerator,
    rule: VolatilityRule,
    center: NotificationCenter,
    cue: Arc<dyn SoundCue>,
    rng: Box<dyn RandomSource>,
}

impl DashboardService {
    pub fn new(
        rule: VolatilityRule,
        center: NotificationCenter,
        cue: Arc<dyn SoundCue>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            generator: RandomWalkGenerator::new(),
            rule,
            center,
            cue,
            rng,
        }
    }

    /// # Summary
    /// 按当前选择刷新仪表盘。
    ///
    /// # Logic
    /// 1. 解析月份名称（未知名称按一月处理）并生成历史序列，未知周期得到空序列。
    /// 2. 计算展示用的当前价、期初价与涨跌幅，空序列使用兜底值。
    /// 3. 评估波动预警；风险预警受 `risk_alerts` 开关控制。
    /// 4. 预警写入通知中心，真正新增且开启声音时播放提示音。
    /// 5. 按偏好货币格式化展示价格。
    ///
    /// # Arguments
    /// * `selection`: 周期 / 月份 / 年份选择。
    /// * `preferences`: 用户偏好（通知开关与展示货币）。
    ///
    /// # Returns
    /// 刷新后的仪表盘视图。
    pub fn refresh(&mut self, selection: &Selection, preferences: &Preferences) -> DashboardView {
        let toggles = &preferences.toggles;
        let month = month_index(&selection.month).unwrap_or_else(|| {
            warn!(month = %selection.month, "unknown month name, using January");
            0
        });
        let series =
            self.generator
                .generate_labeled(&selection.period, month, selection.year, self.rng.as_mut());

        if let Ok(period) = parse_period(&selection.period) {
            let alert = self
                .rule
                .evaluate(&series, period)
                .filter(|a| a.kind != AlertKind::Risk || toggles.risk_alerts);
            if let Some(alert) = alert {
                if self.center.push_alert(&alert).is_some() && toggles.sound {
                    if let Err(e) = self.cue.play(&ToneSpec::ALERT) {
                        warn!("alert tone failed: {}", e);
                    }
                }
            }
        }

        let view = self.build_view(selection, month, series, preferences);
        info!(
            period = %selection.period,
            label = %view.period_label,
            current = view.current_price,
            change_pct = view.percent_change,
            "dashboard refreshed"
        );
        view
    }

    fn build_view(
        &self,
        selection: &Selection,
        month: u32,
        series: Vec<HistoricalPoint>,
        preferences: &Preferences,
    ) -> DashboardView {
        let current_price = series.last().map_or(FALLBACK_CURRENT_PRICE, |p| p.price);
        let first_price = series.first().map_or(FALLBACK_FIRST_PRICE, |p| p.price);
        let price_change = round2(current_price - first_price);
        let percent_change = round2((current_price - first_price) / first_price * 100.0);

        let period_label = if selection.period == "Week" {
            let name = usize::try_from(month)
                .ok()
                .and_then(|i| MONTH_NAMES.get(i))
                .copied()
                .unwrap_or(MONTH_NAMES[0]);
            format!("{} Week", name)
        } else {
            selection.year.to_string()
        };

        DashboardView {
            selection: selection.clone(),
            series,
            current_price,
            first_price,
            price_change,
            percent_change,
            period_label,
            display_price: preferences.currency.format_price(current_price),
            display_change: preferences.currency.format_amount(price_change),
            unread_count: self.center.unread_count(),
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        self.center.list()
    }

    pub fn unread_count(&self) -> usize {
        self.center.unread_count()
    }

    pub fn mark_read(&mut self, id: &str) -> Result<(), NotifyError> {
        self.center.mark_read(id)
    }

    pub fn mark_all_read(&mut self) {
        self.center.mark_all_read();
    }

    /// 供预测页复用同一个随机源
    pub fn rng_mut(&mut self) -> &mut dyn RandomSource {
        self.rng.as_mut()
    }
}
