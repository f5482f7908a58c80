use crate::notify::entity::ToneSpec;
use crate::notify::error::NotifyError;

/// # Summary
/// 提示音播放端口，由外层界面或宿主环境实现。
///
/// # Invariants
/// - 实现必须是 `Send` 和 `Sync` 以便在通知中心与新闻流之间共享。
/// - 播放为即发即忘，调用方不等待音频结束。
pub trait SoundCue: Send + Sync {
    /// # Summary
    /// 播放一次提示音。
    ///
    /// # Arguments
    /// * `tone` - 提示音描述。
    ///
    /// # Returns
    /// * 成功返回 `Ok(())`，设备不可用时返回 `Err(NotifyError)`。
    fn play(&self, tone: &ToneSpec) -> Result<(), NotifyError>;
}
