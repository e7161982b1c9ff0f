//! 错误类型
//!
//! 后端调用的失败分为两类：传输失败（网络、请求构建、响应解析）与非 2xx 状态码。
//! 读路径静默降级，写路径映射为一条状态消息，认证失败一律降级为未登录。

use std::fmt;

/// 后端调用错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 请求构建失败
    RequestBuildFailed(String),
    /// 网络请求失败
    Network(String),
    /// 非 2xx 状态码
    Status(u16),
    /// 响应解析失败
    Parse(String),
}

impl ApiError {
    /// 是否为传输层失败（请求没有得到可用的 HTTP 响应）
    pub fn is_transport(&self) -> bool {
        !matches!(self, ApiError::Status(_))
    }

    /// 是否为凭据被拒绝
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status(401 | 403))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestBuildFailed(msg) => write!(f, "falha ao montar requisição: {}", msg),
            ApiError::Network(msg) => write!(f, "erro de rede: {}", msg),
            ApiError::Status(code) => write!(f, "resposta HTTP {}", code),
            ApiError::Parse(msg) => write!(f, "resposta inválida: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
