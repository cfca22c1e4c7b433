use crate::utils::error::{ClientError, Result};
use reqwest::{Client, RequestBuilder, Response};
use url::Url;

/// 對伺服器的共用 HTTP 存取。沒有逾時也沒有重試。
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
    reject_error_status: bool,
}

impl HttpGateway {
    pub fn new(base_url: &str, reject_error_status: bool) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidConfigValue {
            field: "server.base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
            reject_error_status,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidConfigValue {
                field: "endpoint".to_string(),
                value: path.to_string(),
                reason: format!("Cannot join with base URL: {}", e),
            })
    }

    pub fn get(&self, path: &str) -> Result<RequestBuilder> {
        Ok(self.client.get(self.endpoint(path)?))
    }

    pub fn post(&self, path: &str) -> Result<RequestBuilder> {
        Ok(self.client.post(self.endpoint(path)?))
    }

    /// 送出請求並等待回應載入。
    ///
    /// 非 2xx 回應預設仍當作已載入處理，與原頁面行為一致；
    /// 開啟 `reject_error_status` 時改為回傳 [`ClientError::HttpStatus`]。
    pub async fn load(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Response status {} from {}", status, response.url());

        if !status.is_success() {
            if self.reject_error_status {
                return Err(ClientError::HttpStatus {
                    status: status.as_u16(),
                    url: response.url().to_string(),
                });
            }
            tracing::warn!(
                "⚠️ {} answered {}, rendering body anyway",
                response.url(),
                status
            );
        }

        Ok(response)
    }
}
