use serde::{Deserialize, Serialize};
use std::fmt;

/// `/app/hello` 回應的 JSON 內容，只取 `message` 欄位
#[derive(Debug, Clone, Deserialize)]
pub struct GreetingMessage {
    pub message: Option<String>,
}

/// POST `/app/hello` 的請求本體
#[derive(Debug, Clone, Serialize)]
pub struct NameRequest<'a> {
    pub name: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    AwaitingResponse,
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestState::Idle => write!(f, "idle"),
            RequestState::AwaitingResponse => write!(f, "awaiting-response"),
        }
    }
}

/// 單次動作寫入頁面的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// 名稱驗證失敗，沒有送出請求
    Rejected { output: String, content: String },
    /// 請求完成並已寫入輸出元素
    Rendered { output: String, content: String },
}

impl ActionOutcome {
    pub fn output(&self) -> &str {
        match self {
            ActionOutcome::Rejected { output, .. } | ActionOutcome::Rendered { output, .. } => {
                output
            }
        }
    }

    pub fn content(&self) -> &str {
        match self {
            ActionOutcome::Rejected { content, .. } | ActionOutcome::Rendered { content, .. } => {
                content
            }
        }
    }

    pub fn request_sent(&self) -> bool {
        matches!(self, ActionOutcome::Rendered { .. })
    }
}
