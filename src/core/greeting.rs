use crate::adapters::http::HttpGateway;
use crate::config::page_config::GreetingConfig;
use crate::core::validator::is_valid_name;
use crate::domain::model::{ActionOutcome, GreetingMessage, NameRequest, RequestState};
use crate::domain::ports::{Action, Page};
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingMethod {
    /// 名稱放在 query string
    Get,
    /// 名稱放在 JSON 本體
    Post,
}

/// 讀取名稱欄位、驗證後向 `/app/hello` 發送請求，並把 `message` 寫回頁面
#[derive(Debug, Clone)]
pub struct GreetingRequester {
    name: String,
    alias: Option<String>,
    method: GreetingMethod,
    path: String,
    input: String,
    output: String,
    invalid_name_message: String,
    gateway: HttpGateway,
}

impl GreetingRequester {
    pub fn new(method: GreetingMethod, gateway: HttpGateway) -> Self {
        Self::from_config(method, &GreetingConfig::default(), gateway)
    }

    pub fn from_config(
        method: GreetingMethod,
        config: &GreetingConfig,
        gateway: HttpGateway,
    ) -> Self {
        let binding = match method {
            GreetingMethod::Get => &config.get,
            GreetingMethod::Post => &config.post,
        };

        Self {
            name: binding.action.clone(),
            alias: binding.alias.clone(),
            method,
            path: config.path.clone(),
            input: binding.input.clone(),
            output: binding.output.clone(),
            invalid_name_message: config.invalid_name_message.clone(),
            gateway,
        }
    }

    async fn request_message(&self, name: &str) -> Result<String> {
        let request = match self.method {
            GreetingMethod::Get => self.gateway.get(&self.path)?.query(&[("name", name)]),
            // json() 會設定 Content-Type: application/json
            GreetingMethod::Post => self.gateway.post(&self.path)?.json(&NameRequest { name }),
        };

        tracing::debug!(
            action = %self.name,
            state = %RequestState::AwaitingResponse,
            "Sending {:?} {}",
            self.method,
            self.path
        );
        let response = self.gateway.load(request).await?;
        let body = response.text().await?;
        tracing::debug!(action = %self.name, state = %RequestState::Idle, "Response loaded");

        let greeting: GreetingMessage = serde_json::from_str(&body)?;
        greeting.message.ok_or_else(|| ClientError::MissingField {
            field: "message".to_string(),
        })
    }
}

#[async_trait]
impl Action for GreetingRequester {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    async fn run(&self, page: &dyn Page) -> Result<ActionOutcome> {
        let raw = page
            .read_input(&self.input)
            .ok_or_else(|| ClientError::MissingInput {
                id: self.input.clone(),
            })?;
        let name = raw.trim();

        if !is_valid_name(name) {
            tracing::warn!("❌ Rejected name {:?} for {}", name, self.name);
            page.write_output(&self.output, &self.invalid_name_message);
            return Ok(ActionOutcome::Rejected {
                output: self.output.clone(),
                content: self.invalid_name_message.clone(),
            });
        }

        let message = self.request_message(name).await?;
        page.write_output(&self.output, &message);

        Ok(ActionOutcome::Rendered {
            output: self.output.clone(),
            content: message,
        })
    }
}
