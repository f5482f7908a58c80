use thiserror::Error;

/// # Summary
/// 通知服务错误枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
#[derive(Error, Debug)]
pub enum NotifyError {
    /// 通知中心中不存在该 ID
    #[error("Notification not found: {0}")]
    NotFound(String),

    /// 提示音参数非法 (如采样率为 0)
    #[error("Invalid tone: {0}")]
    InvalidTone(String),
}
