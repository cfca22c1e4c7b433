use crate::adapters::http::HttpGateway;
use crate::config::page_config::PageConfig;
use crate::core::constant::ConstantRequester;
use crate::core::greeting::{GreetingMethod, GreetingRequester};
use crate::domain::model::ActionOutcome;
use crate::domain::ports::{Action, Page};
use crate::utils::error::{ClientError, Result};
use futures::future::join_all;

/// UI 動作名稱到處理器的對應表，相當於頁面上綁定按鈕的函式
pub struct ActionEngine {
    actions: Vec<Box<dyn Action>>,
}

impl ActionEngine {
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// 依頁面配置註冊兩個問候動作與所有常數動作
    pub fn from_config(config: &PageConfig) -> Result<Self> {
        let gateway = HttpGateway::new(&config.server.base_url, config.server.reject_error_status)?;
        let mut engine = Self::new();

        engine.register(Box::new(GreetingRequester::from_config(
            GreetingMethod::Get,
            &config.greeting,
            gateway.clone(),
        )))?;
        engine.register(Box::new(GreetingRequester::from_config(
            GreetingMethod::Post,
            &config.greeting,
            gateway.clone(),
        )))?;

        for constant in &config.constants {
            engine.register(Box::new(ConstantRequester::from_config(
                constant,
                gateway.clone(),
            )))?;
        }

        tracing::debug!("Registered actions: {:?}", engine.action_names());
        Ok(engine)
    }

    pub fn register(&mut self, action: Box<dyn Action>) -> Result<()> {
        let taken = |name: &str| self.actions.iter().any(|a| a.matches(name));
        if taken(action.name()) || action.alias().is_some_and(taken) {
            return Err(ClientError::Config {
                message: format!("Action '{}' is already registered", action.name()),
            });
        }

        self.actions.push(action);
        Ok(())
    }

    pub fn action_names(&self) -> Vec<String> {
        self.actions.iter().map(|a| a.name().to_string()).collect()
    }

    pub async fn dispatch(&self, name: &str, page: &dyn Page) -> Result<ActionOutcome> {
        let action = self
            .actions
            .iter()
            .find(|a| a.matches(name))
            .ok_or_else(|| ClientError::UnknownAction {
                name: name.to_string(),
            })?;

        tracing::info!("▶️ {}", action.name());
        action.run(page).await
    }

    /// 同時觸發多個動作，彼此之間不做任何協調。結果依傳入順序回傳。
    pub async fn dispatch_all(
        &self,
        names: &[String],
        page: &dyn Page,
    ) -> Vec<(String, Result<ActionOutcome>)> {
        let runs = names.iter().map(|name| async move {
            let result = self.dispatch(name, page).await;
            (name.clone(), result)
        });

        join_all(runs).await
    }
}

impl Default for ActionEngine {
    fn default() -> Self {
        Self::new()
    }
}
