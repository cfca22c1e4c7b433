use crate::domain::ports::Page;
use std::collections::HashMap;
use std::sync::RwLock;

/// 記憶體中的頁面，給 CLI 與測試使用
#[derive(Debug, Default)]
pub struct MemoryPage {
    inputs: RwLock<HashMap<String, String>>,
    outputs: RwLock<HashMap<String, String>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(self, id: &str, value: &str) -> Self {
        self.set_input(id, value);
        self
    }

    pub fn set_input(&self, id: &str, value: &str) {
        if let Ok(mut inputs) = self.inputs.write() {
            inputs.insert(id.to_string(), value.to_string());
        }
    }

    pub fn output(&self, id: &str) -> Option<String> {
        self.outputs.read().ok()?.get(id).cloned()
    }

    /// 依 id 排序的所有輸出元素內容
    pub fn outputs(&self) -> Vec<(String, String)> {
        let mut outputs: Vec<(String, String)> = self
            .outputs
            .read()
            .map(|o| o.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            .unwrap_or_default();
        outputs.sort();
        outputs
    }
}

impl Page for MemoryPage {
    fn read_input(&self, id: &str) -> Option<String> {
        self.inputs.read().ok()?.get(id).cloned()
    }

    fn write_output(&self, id: &str, content: &str) {
        if let Ok(mut outputs) = self.outputs.write() {
            outputs.insert(id.to_string(), content.to_string());
        }
    }
}
