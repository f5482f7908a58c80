use gosense_core::notify::entity::ToneSpec;
use gosense_core::notify::error::NotifyError;
use gosense_core::notify::port::SoundCue;
use std::f64::consts::TAU;
use tracing::info;

/// 日志提示音渲染使用的采样率
pub const LOG_SAMPLE_RATE: u32 = 8_000;

/// # Summary
/// 无音频设备时使用的提示音实现：渲染采样但不输出，只记录日志。
///
/// # Invariants
/// - 参数非法的提示音返回 `NotifyError::InvalidTone`。
pub struct LogCue;

impl SoundCue for LogCue {
    fn play(&self, tone: &ToneSpec) -> Result<(), NotifyError> {
        let samples = render_samples(tone, LOG_SAMPLE_RATE)?;
        info!(
            frequency_hz = tone.frequency_hz,
            duration = ?tone.duration,
            samples = samples.len(),
            "alert tone"
        );
        Ok(())
    }
}

/// # Summary
/// 静音实现，用于关闭提示音的场景。
pub struct MutedCue;

impl SoundCue for MutedCue {
    fn play(&self, _: &ToneSpec) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// # Summary
/// 将提示音渲染为单声道 PCM 采样，供宿主环境直接写入音频设备。
///
/// # Logic
/// 1. 根据时长与采样率计算采样点数量。
/// 2. 对每个采样点计算振荡器取值，并乘以指数包络增益。
///
/// # Arguments
/// * `tone`: 提示音描述。
/// * `sample_rate`: 采样率 (Hz)。
///
/// # Returns
/// 成功返回 `[-start_gain, start_gain]` 区间内的采样序列。
pub fn render_samples(tone: &ToneSpec, sample_rate: u32) -> Result<Vec<f64>, NotifyError> {
    if sample_rate == 0 {
        return Err(NotifyError::InvalidTone("sample rate must be positive".to_string()));
    }
    if tone.start_gain <= 0.0 || tone.end_gain <= 0.0 {
        return Err(NotifyError::InvalidTone("gain must be positive".to_string()));
    }

    let total = tone.duration.as_micros() * u128::from(sample_rate) / 1_000_000;
    let count = u32::try_from(total)
        .map_err(|_| NotifyError::InvalidTone(format!("too many samples: {}", total)))?;
    let rate = f64::from(sample_rate);

    Ok((0..count)
        .map(|n| {
            let t = f64::from(n) / rate;
            let wave = (TAU * tone.frequency_hz * t).sin();
            wave * tone.gain_at(std::time::Duration::from_secs_f64(t))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_alert_tone() {
        let samples = render_samples(&ToneSpec::ALERT, 8_000).unwrap();
        // 0.2 秒 * 8000 Hz
        assert_eq!(samples.len(), 1_600);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.1 + 1e-12));
        // 尾部振幅已衰减到接近 0.01
        let tail_peak = samples[1_500..].iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
        assert!(tail_peak < 0.013);
    }

    #[test]
    fn test_log_cue_validates_tone() {
        assert!(LogCue.play(&ToneSpec::ALERT).is_ok());

        let silent = ToneSpec {
            end_gain: 0.0,
            ..ToneSpec::ALERT
        };
        assert!(matches!(LogCue.play(&silent), Err(NotifyError::InvalidTone(_))));
    }

    #[test]
    fn test_render_rejects_zero_rate() {
        assert!(matches!(
            render_samples(&ToneSpec::ALERT, 0),
            Err(NotifyError::InvalidTone(_))
        ));
    }
}
