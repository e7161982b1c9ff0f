//! 后端 API 客户端
//!
//! 每个端点由 `jornal_shared::protocol` 中的请求类型描述，
//! 这里只负责拼接 URL、序列化请求体与解码响应。

use crate::config::AppConfig;
use crate::content::ContentBackend;
use crate::error::ApiError;
use crate::session::AuthBackend;
use crate::web::HttpClient;
use async_trait::async_trait;
use jornal_shared::protocol::{
    AdminListArticlesRequest, AdminListVideosRequest, ApiRequest, CheckAuthRequest,
    CreateArticleRequest, CreateVideoRequest, DeleteArticleRequest, DeleteVideoRequest,
    GetArticleRequest, ListArticlesRequest, ListVideosRequest, LogoutRequest,
    UpdateArticleRequest, UpdateVideoRequest,
};
use jornal_shared::{
    Article, ArticleInput, CheckAuthResponse, ContentId, Credentials, LoginResponse, Video,
    VideoInput,
};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct JornalApi {
    pub base_url: String,
}

impl JornalApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone())
    }

    fn url<T: ApiRequest>(&self, req: &T) -> String {
        let mut url = format!("{}{}", self.base_url, req.path());
        let query = req.query();
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| {
                    format!("{}={}", key, String::from(js_sys::encode_uri_component(value)))
                })
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        url
    }

    /// 发送一个类型化请求
    ///
    /// 非 2xx 状态映射为 `ApiError::Status`；空响应体按 `null` 解码。
    pub async fn send<T: ApiRequest>(&self, req: &T) -> Result<T::Response, ApiError> {
        let url = self.url(req);
        let mut builder = HttpClient::request(T::METHOD, &url);

        if let Some(body) = req.body() {
            let json = serde_json_wasm::to_string(body)
                .map_err(|e| ApiError::RequestBuildFailed(e.to_string()))?;
            builder = builder.json_body(json);
        }

        let res = builder.send().await?;
        if !res.ok() {
            return Err(ApiError::Status(res.status()));
        }

        decode_body::<T>(&res.text().await?)
    }
}

/// 解码响应体；空响应体（204）按 `null` 处理
fn decode_body<T: ApiRequest>(text: &str) -> Result<T::Response, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json_wasm::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl AuthBackend for JornalApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.send(credentials).await
    }

    async fn check_auth(&self, token: &str) -> Result<CheckAuthResponse, ApiError> {
        self.send(&CheckAuthRequest {
            session_id: token.to_string(),
        })
        .await
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.send(&LogoutRequest {
            session_id: token.to_string(),
        })
        .await
        .map(|_| ())
    }
}

#[async_trait(?Send)]
impl ContentBackend for JornalApi {
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.send(&ListVideosRequest).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.send(&ListArticlesRequest).await
    }

    async fn get_article(&self, id: ContentId) -> Result<Article, ApiError> {
        self.send(&GetArticleRequest { id }).await
    }

    async fn admin_list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.send(&AdminListVideosRequest).await
    }

    async fn admin_list_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.send(&AdminListArticlesRequest).await
    }

    async fn create_video(&self, input: VideoInput) -> Result<Video, ApiError> {
        self.send(&CreateVideoRequest { input }).await
    }

    async fn update_video(&self, id: ContentId, input: VideoInput) -> Result<Video, ApiError> {
        self.send(&UpdateVideoRequest { id, input }).await
    }

    async fn delete_video(&self, id: ContentId) -> Result<(), ApiError> {
        self.send(&DeleteVideoRequest { id }).await.map(drop)
    }

    async fn create_article(&self, input: ArticleInput) -> Result<Article, ApiError> {
        self.send(&CreateArticleRequest { input }).await
    }

    async fn update_article(
        &self,
        id: ContentId,
        input: ArticleInput,
    ) -> Result<Article, ApiError> {
        self.send(&UpdateArticleRequest { id, input }).await
    }

    async fn delete_article(&self, id: ContentId) -> Result<(), ApiError> {
        self.send(&DeleteArticleRequest { id }).await.map(drop)
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> JornalApi {
    use_context::<JornalApi>().expect("JornalApi should be provided")
}
