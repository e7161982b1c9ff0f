use serde::{Deserialize, Serialize};

pub mod date;
pub mod protocol;

pub use date::Timestamp;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 首页每类内容展示的条数
pub const RECENT_LIMIT: usize = 3;

/// 文章摘要缺失时从正文截取的字符数
pub const EXCERPT_CHARS: usize = 150;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 后端分配的内容 ID
pub type ContentId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: ContentId,
    pub title: String,
    #[serde(alias = "video_url")]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ContentId,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub created_at: Timestamp,
}

impl Article {
    /// 列表卡片上展示的摘录
    ///
    /// 有摘要时直接使用摘要，否则截取正文前 `EXCERPT_CHARS` 个字符并追加 "..."。
    pub fn excerpt(&self) -> String {
        match self.summary.as_deref() {
            Some(summary) if !summary.is_empty() => summary.to_string(),
            _ => {
                let head: String = self.content.chars().take(EXCERPT_CHARS).collect();
                format!("{head}...")
            }
        }
    }
}

/// 视频的可编辑字段（创建与更新共用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInput {
    pub title: String,
    pub url: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
}

/// 文章的可编辑字段（创建与更新共用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub summary: Option<String>,
    pub content: String,
}

// =========================================================
// 认证模型 (Auth Models)
// =========================================================

/// 登录用户的展示身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// 只携带提示信息的响应（如删除成功），字段全部可缺省
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
