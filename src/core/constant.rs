use crate::adapters::http::HttpGateway;
use crate::config::page_config::ConstantConfig;
use crate::domain::model::{ActionOutcome, RequestState};
use crate::domain::ports::{Action, Page};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 對固定端點發 GET，把標籤加上原始回應文字寫入輸出元素
#[derive(Debug, Clone)]
pub struct ConstantRequester {
    name: String,
    alias: Option<String>,
    path: String,
    output: String,
    label: String,
    gateway: HttpGateway,
}

impl ConstantRequester {
    pub fn from_config(config: &ConstantConfig, gateway: HttpGateway) -> Self {
        Self {
            name: config.action.clone(),
            alias: config.alias.clone(),
            path: config.path.clone(),
            output: config.output.clone(),
            label: config.label.clone(),
            gateway,
        }
    }

    pub fn pi(gateway: HttpGateway) -> Self {
        Self::from_config(&ConstantConfig::pi(), gateway)
    }

    pub fn e(gateway: HttpGateway) -> Self {
        Self::from_config(&ConstantConfig::e(), gateway)
    }
}

#[async_trait]
impl Action for ConstantRequester {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    async fn run(&self, page: &dyn Page) -> Result<ActionOutcome> {
        let request = self.gateway.get(&self.path)?;

        tracing::debug!(
            action = %self.name,
            state = %RequestState::AwaitingResponse,
            "Sending GET {}",
            self.path
        );
        let response = self.gateway.load(request).await?;
        let body = response.text().await?;
        tracing::debug!(action = %self.name, state = %RequestState::Idle, "Response loaded");

        let content = format!("{}{}", self.label, body);
        page.write_output(&self.output, &content);

        Ok(ActionOutcome::Rendered {
            output: self.output.clone(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::page::MemoryPage;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_custom_constant_endpoint() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/phi");
            then.status(200).body("1.618");
        });

        let config = ConstantConfig {
            action: "loadPhiMsg".to_string(),
            alias: Some("phi".to_string()),
            path: "/phi".to_string(),
            output: "phirespmsg".to_string(),
            label: "Valor de φ: ".to_string(),
        };
        let gateway = HttpGateway::new(&server.base_url(), false).unwrap();
        let requester = ConstantRequester::from_config(&config, gateway);
        let page = MemoryPage::new();

        let outcome = requester.run(&page).await.unwrap();

        mock.assert();
        assert!(requester.matches("phi"));
        assert_eq!(outcome.content(), "Valor de φ: 1.618");
        assert_eq!(page.output("phirespmsg").as_deref(), Some("Valor de φ: 1.618"));
    }

    #[tokio::test]
    async fn test_body_is_not_trimmed_or_parsed() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/e");
            then.status(200).body("2.718281828459045\n");
        });

        let gateway = HttpGateway::new(&server.base_url(), false).unwrap();
        let page = MemoryPage::new();
        ConstantRequester::e(gateway).run(&page).await.unwrap();

        assert_eq!(
            page.output("erespmsg").as_deref(),
            Some("Valor de e: 2.718281828459045\n")
        );
    }
}
