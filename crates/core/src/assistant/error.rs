use thiserror::Error;

/// # Summary
/// 助手域错误枚举。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AssistantError {
    // 空白输入不产生任何消息
    #[error("Message is empty")]
    EmptyInput,
}
