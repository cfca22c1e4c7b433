use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{
    validate_endpoint_path, validate_non_empty_string, validate_unique_names, validate_url,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:35000";
pub const INVALID_NAME_MESSAGE: &str = "Nombre inválido. Solo letras, números y espacios.";

/// 頁面配置：伺服器位址、元素 id、端點與標籤
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub server: ServerConfig,
    pub greeting: GreetingConfig,
    pub constants: Vec<ConstantConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub base_url: String,
    /// 非 2xx 回應是否視為錯誤（預設沿用頁面行為：照樣解析）
    pub reject_error_status: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GreetingConfig {
    #[serde(default = "default_greeting_path")]
    pub path: String,
    #[serde(default = "default_invalid_name_message")]
    pub invalid_name_message: String,
    #[serde(default = "FieldBinding::get")]
    pub get: FieldBinding,
    #[serde(default = "FieldBinding::post")]
    pub post: FieldBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldBinding {
    pub action: String,
    pub alias: Option<String>,
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantConfig {
    pub action: String,
    pub alias: Option<String>,
    pub path: String,
    pub output: String,
    pub label: String,
}

fn default_greeting_path() -> String {
    "/app/hello".to_string()
}

fn default_invalid_name_message() -> String {
    INVALID_NAME_MESSAGE.to_string()
}

impl FieldBinding {
    pub fn get() -> Self {
        Self {
            action: "loadGetMsg".to_string(),
            alias: Some("get".to_string()),
            input: "name".to_string(),
            output: "getrespmsg".to_string(),
        }
    }

    pub fn post() -> Self {
        Self {
            action: "loadPostMsg".to_string(),
            alias: Some("post".to_string()),
            input: "postname".to_string(),
            output: "postrespmsg".to_string(),
        }
    }
}

impl ConstantConfig {
    pub fn pi() -> Self {
        Self {
            action: "loadPiMsg".to_string(),
            alias: Some("pi".to_string()),
            path: "/pi".to_string(),
            output: "pirespmsg".to_string(),
            label: "Valor de π: ".to_string(),
        }
    }

    pub fn e() -> Self {
        Self {
            action: "loadEMsg".to_string(),
            alias: Some("e".to_string()),
            path: "/e".to_string(),
            output: "erespmsg".to_string(),
            label: "Valor de e: ".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            reject_error_status: false,
        }
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            path: default_greeting_path(),
            invalid_name_message: default_invalid_name_message(),
            get: FieldBinding::get(),
            post: FieldBinding::post(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            greeting: GreetingConfig::default(),
            constants: vec![ConstantConfig::pi(), ConstantConfig::e()],
        }
    }
}

impl PageConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HELLO_BASE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::Config {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 所有動作名稱與別名
    fn action_names(&self) -> Vec<&str> {
        let bindings = [&self.greeting.get, &self.greeting.post];
        let greeting_names = bindings
            .into_iter()
            .flat_map(|b| std::iter::once(b.action.as_str()).chain(b.alias.as_deref()));
        let constant_names = self
            .constants
            .iter()
            .flat_map(|c| std::iter::once(c.action.as_str()).chain(c.alias.as_deref()));

        greeting_names.chain(constant_names).collect()
    }
}

impl Validate for PageConfig {
    fn validate(&self) -> Result<()> {
        validate_url("server.base_url", &self.server.base_url)?;

        validate_endpoint_path("greeting.path", &self.greeting.path)?;
        let bindings = [
            ("greeting.get", &self.greeting.get),
            ("greeting.post", &self.greeting.post),
        ];
        for (field, binding) in bindings {
            validate_non_empty_string(&format!("{}.action", field), &binding.action)?;
            validate_non_empty_string(&format!("{}.input", field), &binding.input)?;
            validate_non_empty_string(&format!("{}.output", field), &binding.output)?;
        }

        for constant in &self.constants {
            validate_non_empty_string("constants.action", &constant.action)?;
            validate_endpoint_path("constants.path", &constant.path)?;
            validate_non_empty_string("constants.output", &constant.output)?;
        }

        validate_unique_names("actions", self.action_names())
    }
}
