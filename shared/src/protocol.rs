use crate::{
    Article, ArticleInput, CheckAuthResponse, ContentId, Credentials, LoginResponse,
    LogoutResponse, MessageResponse, Video, VideoInput,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that binds an API endpoint to its method, path, body and response type.
///
/// Paths carry the resource id where the endpoint needs one, so they are
/// computed per request instead of being a constant.
pub trait ApiRequest {
    /// JSON body sent with the request. `()` for endpoints without a body.
    type Body: Serialize;
    /// The response type returned by this request. An empty body decodes as JSON `null`.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path, including any resource id.
    fn path(&self) -> String;

    /// Query parameters, unencoded.
    fn query(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    fn body(&self) -> Option<&Self::Body> {
        None
    }
}

// =========================================================
// Public content
// =========================================================

/// List published videos
#[derive(Debug)]
pub struct ListVideosRequest;

impl ApiRequest for ListVideosRequest {
    type Body = ();
    type Response = Vec<Video>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/videos".to_string()
    }
}

/// List published articles
#[derive(Debug)]
pub struct ListArticlesRequest;

impl ApiRequest for ListArticlesRequest {
    type Body = ();
    type Response = Vec<Article>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/articles".to_string()
    }
}

/// Fetch a single article
#[derive(Debug)]
pub struct GetArticleRequest {
    pub id: ContentId,
}

impl ApiRequest for GetArticleRequest {
    type Body = ();
    type Response = Article;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        format!("/api/articles/{}", self.id)
    }
}

// =========================================================
// Admin listings (include unpublished content)
// =========================================================

#[derive(Debug)]
pub struct AdminListVideosRequest;

impl ApiRequest for AdminListVideosRequest {
    type Body = ();
    type Response = Vec<Video>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/admin/videos".to_string()
    }
}

#[derive(Debug)]
pub struct AdminListArticlesRequest;

impl ApiRequest for AdminListArticlesRequest {
    type Body = ();
    type Response = Vec<Article>;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/admin/articles".to_string()
    }
}

// =========================================================
// Mutations
// =========================================================

#[derive(Debug)]
pub struct CreateVideoRequest {
    pub input: VideoInput,
}

impl ApiRequest for CreateVideoRequest {
    type Body = VideoInput;
    type Response = Video;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/videos".to_string()
    }

    fn body(&self) -> Option<&VideoInput> {
        Some(&self.input)
    }
}

#[derive(Debug)]
pub struct UpdateVideoRequest {
    pub id: ContentId,
    pub input: VideoInput,
}

impl ApiRequest for UpdateVideoRequest {
    type Body = VideoInput;
    type Response = Video;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/api/videos/{}", self.id)
    }

    fn body(&self) -> Option<&VideoInput> {
        Some(&self.input)
    }
}

#[derive(Debug)]
pub struct DeleteVideoRequest {
    pub id: ContentId,
}

impl ApiRequest for DeleteVideoRequest {
    type Body = ();
    /// `null` for 204 No Content, otherwise `{"message": ...}`
    type Response = Option<MessageResponse>;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/api/videos/{}", self.id)
    }
}

#[derive(Debug)]
pub struct CreateArticleRequest {
    pub input: ArticleInput,
}

impl ApiRequest for CreateArticleRequest {
    type Body = ArticleInput;
    type Response = Article;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/articles".to_string()
    }

    fn body(&self) -> Option<&ArticleInput> {
        Some(&self.input)
    }
}

#[derive(Debug)]
pub struct UpdateArticleRequest {
    pub id: ContentId,
    pub input: ArticleInput,
}

impl ApiRequest for UpdateArticleRequest {
    type Body = ArticleInput;
    type Response = Article;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("/api/articles/{}", self.id)
    }

    fn body(&self) -> Option<&ArticleInput> {
        Some(&self.input)
    }
}

#[derive(Debug)]
pub struct DeleteArticleRequest {
    pub id: ContentId,
}

impl ApiRequest for DeleteArticleRequest {
    type Body = ();
    type Response = Option<MessageResponse>;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("/api/articles/{}", self.id)
    }
}

// =========================================================
// Session
// =========================================================

impl ApiRequest for Credentials {
    type Body = Credentials;
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/login".to_string()
    }

    fn body(&self) -> Option<&Credentials> {
        Some(self)
    }
}

/// Validate a persisted session token
#[derive(Debug)]
pub struct CheckAuthRequest {
    pub session_id: String,
}

impl ApiRequest for CheckAuthRequest {
    type Body = ();
    type Response = CheckAuthResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/api/check-auth".to_string()
    }

    fn query(&self) -> Vec<(&'static str, &str)> {
        vec![("session_id", self.session_id.as_str())]
    }
}

/// Invalidate a session token on the server
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub session_id: String,
}

impl ApiRequest for LogoutRequest {
    type Body = LogoutRequest;
    type Response = LogoutResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/api/logout".to_string()
    }

    fn body(&self) -> Option<&LogoutRequest> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_paths_carry_id() {
        let input = ArticleInput {
            title: "t".into(),
            summary: None,
            content: "c".into(),
        };
        let req = UpdateArticleRequest { id: 7, input };
        assert_eq!(req.path(), "/api/articles/7");
        assert_eq!(UpdateArticleRequest::METHOD, HttpMethod::Put);
        assert!(req.body().is_some());
    }

    #[test]
    fn test_delete_has_no_body() {
        let req = DeleteVideoRequest { id: 2 };
        assert_eq!(req.path(), "/api/videos/2");
        assert!(req.body().is_none());
    }

    #[test]
    fn test_delete_response_accepts_message_or_empty_body() {
        let with_message: <DeleteArticleRequest as ApiRequest>::Response =
            serde_json::from_str(r#"{"message": "Artigo excluído com sucesso"}"#).unwrap();
        assert_eq!(
            with_message.and_then(|r| r.message).as_deref(),
            Some("Artigo excluído com sucesso")
        );

        let empty: <DeleteVideoRequest as ApiRequest>::Response =
            serde_json::from_str("null").unwrap();
        assert_eq!(empty, None);
    }

    #[test]
    fn test_check_auth_query() {
        let req = CheckAuthRequest {
            session_id: "abc".into(),
        };
        assert_eq!(req.query(), vec![("session_id", "abc")]);
    }

    #[test]
    fn test_video_input_serializes_missing_thumbnail_as_null() {
        let input = VideoInput {
            title: "t".into(),
            url: "u".into(),
            description: "d".into(),
            thumbnail_url: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json["thumbnail_url"].is_null());
    }
}
