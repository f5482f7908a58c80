use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 通知中心保留的最大条数。
pub const NOTIFICATION_CAPACITY: usize = 10;

/// # Summary
/// 站内通知实体。
///
/// # Invariants
/// - 创建后只有 `read` 字段允许被修改。
/// - `id` 在通知中心内唯一。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    // 唯一标识
    pub id: String,
    // 通知正文
    pub message: String,
    // 展示用时间 (HH:MM)
    pub time: String,
    // 是否已读
    pub read: bool,
}

/// # Summary
/// 波动预警类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertKind {
    // 跌幅超过阈值的风险预警
    Risk,
    // 涨跌幅绝对值超过阈值的一般波动预警
    Volatility,
}

/// # Summary
/// 波动规则的判定结果，尚未进入通知中心。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityAlert {
    pub kind: AlertKind,
    // 区间涨跌幅 (百分比，未取整)
    pub percent_change: f64,
    // 已格式化的通知正文
    pub message: String,
}

/// # Summary
/// 提示音描述：固定频率的正弦短促音，增益按指数包络衰减。
///
/// # Invariants
/// - `start_gain` 与 `end_gain` 必须为正数（指数曲线不允许经过 0）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    pub frequency_hz: f64,
    pub start_gain: f64,
    pub end_gain: f64,
    pub duration: Duration,
}

impl ToneSpec {
    /// 预警通知使用的默认提示音：800Hz 正弦波，0.2 秒内从 0.1 衰减到 0.01。
    pub const ALERT: ToneSpec = ToneSpec {
        frequency_hz: 800.0,
        start_gain: 0.1,
        end_gain: 0.01,
        duration: Duration::from_millis(200),
    };

    /// # Summary
    /// 计算 `t` 时刻的包络增益。
    ///
    /// # Logic
    /// `gain(t) = start * (end / start) ^ (t / duration)`，超出时长后保持 `end_gain`。
    pub fn gain_at(&self, t: Duration) -> f64 {
        let total = self.duration.as_secs_f64();
        if total <= 0.0 {
            return self.end_gain;
        }
        let progress = (t.as_secs_f64() / total).min(1.0);
        self.start_gain * (self.end_gain / self.start_gain).powf(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_tone_envelope() {
        let tone = ToneSpec::ALERT;
        assert!((tone.gain_at(Duration::ZERO) - 0.1).abs() < 1e-12);
        assert!((tone.gain_at(Duration::from_millis(100)) - 0.1 * 0.1_f64.sqrt()).abs() < 1e-12);
        assert!((tone.gain_at(Duration::from_millis(200)) - 0.01).abs() < 1e-12);
        assert!((tone.gain_at(Duration::from_secs(1)) - 0.01).abs() < 1e-12);
    }
}
