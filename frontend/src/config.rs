//! 运行时配置
//!
//! 构建时可通过环境变量覆盖，未设置则使用默认值：
//! - `JORNAL_API_BASE`: 后端地址
//! - `JORNAL_SESSION_KEY`: 本地存储中会话令牌的键名

const DEFAULT_API_BASE: &str = "http://localhost:5000";
const DEFAULT_SESSION_KEY: &str = "sessionId";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 后端地址（不含末尾斜杠）
    pub api_base: String,
    /// 会话令牌的存储键
    pub session_key: String,
}

impl AppConfig {
    /// 读取构建时注入的配置
    pub fn from_env() -> Self {
        Self::with_overrides(
            option_env!("JORNAL_API_BASE"),
            option_env!("JORNAL_SESSION_KEY"),
        )
    }

    fn with_overrides(api_base: Option<&str>, session_key: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let session_key = session_key
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_SESSION_KEY)
            .to_string();

        Self {
            api_base,
            session_key,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_overrides(None, None)
    }
}
