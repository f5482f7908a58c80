use gosense_core::assistant::error::AssistantError;
use gosense_core::notify::error::NotifyError;
use thiserror::Error;

/// # Summary
/// Manager 层的统一错误类型。
#[derive(Error, Debug)]
pub enum ManagerError {
    #[error("Notify error: {0}")]
    Notify(#[from] NotifyError),
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),
}
