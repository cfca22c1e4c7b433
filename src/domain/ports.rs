use crate::domain::model::ActionOutcome;
use crate::utils::error::Result;
use async_trait::async_trait;

/// 頁面：以 id 定位的輸入欄位與輸出元素
pub trait Page: Send + Sync {
    fn read_input(&self, id: &str) -> Option<String>;
    fn write_output(&self, id: &str, content: &str);
}

/// 由 UI 事件觸發的單一動作
#[async_trait]
pub trait Action: Send + Sync {
    fn name(&self) -> &str;

    fn alias(&self) -> Option<&str> {
        None
    }

    fn matches(&self, name: &str) -> bool {
        self.name() == name || self.alias() == Some(name)
    }

    async fn run(&self, page: &dyn Page) -> Result<ActionOutcome>;
}
