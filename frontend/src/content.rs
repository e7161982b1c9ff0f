//! 内容获取与过滤
//!
//! 公开页面（首页、视频、文章）各自独立加载只读集合，读失败时降级为空集合，
//! 仅在 console 留下记录，不阻塞渲染。

use crate::error::ApiError;
use async_trait::async_trait;
use jornal_shared::{Article, ArticleInput, ContentId, Video, VideoInput};
use std::future::Future;

/// 内容相关的后端端点
#[async_trait(?Send)]
pub trait ContentBackend {
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError>;
    async fn list_articles(&self) -> Result<Vec<Article>, ApiError>;
    async fn get_article(&self, id: ContentId) -> Result<Article, ApiError>;

    /// 管理端列表（包含未发布内容）
    async fn admin_list_videos(&self) -> Result<Vec<Video>, ApiError>;
    async fn admin_list_articles(&self) -> Result<Vec<Article>, ApiError>;

    async fn create_video(&self, input: VideoInput) -> Result<Video, ApiError>;
    async fn update_video(&self, id: ContentId, input: VideoInput) -> Result<Video, ApiError>;
    async fn delete_video(&self, id: ContentId) -> Result<(), ApiError>;

    async fn create_article(&self, input: ArticleInput) -> Result<Article, ApiError>;
    async fn update_article(&self, id: ContentId, input: ArticleInput)
    -> Result<Article, ApiError>;
    async fn delete_article(&self, id: ContentId) -> Result<(), ApiError>;
}

// =========================================================
// 过滤
// =========================================================

/// 可被搜索的内容，返回参与匹配的字段
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

impl Searchable for Video {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for Article {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.content.as_str()];
        if let Some(summary) = self.summary.as_deref() {
            fields.push(summary);
        }
        fields
    }
}

/// 大小写不敏感的子串过滤
///
/// 空搜索词返回完整集合；结果保持后端返回的顺序。
pub fn filter_items<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

// =========================================================
// 加载
// =========================================================

/// 等待一次集合读取，失败时返回空集合
pub async fn load_collection<T, F>(label: &str, request: F) -> Vec<T>
where
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    match request.await {
        Ok(items) => items,
        Err(e) => {
            log_error!("Erro ao carregar {}: {}", label, e);
            Vec::new()
        }
    }
}

/// 首页使用的最新条目
pub fn recent<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    items.iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jornal_shared::Timestamp;

    fn created() -> Timestamp {
        Timestamp::parse("2025-06-01T10:00:00").unwrap()
    }

    fn video(id: ContentId, title: &str, description: &str) -> Video {
        Video {
            id,
            title: title.into(),
            url: format!("https://videos.example/{id}"),
            description: description.into(),
            thumbnail_url: None,
            created_at: created(),
        }
    }

    fn article(id: ContentId, title: &str, content: &str, summary: Option<&str>) -> Article {
        Article {
            id,
            title: title.into(),
            content: content.into(),
            summary: summary.map(Into::into),
            created_at: created(),
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let videos = vec![video(1, "Jogo de hoje", ""), video(2, "Notícias", "")];
        let filtered = filter_items(&videos, "jogo");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Jogo de hoje");
    }

    #[test]
    fn test_filter_matches_description() {
        let videos = vec![
            video(1, "Rodada", "Melhores momentos do CLÁSSICO"),
            video(2, "Clima", "Previsão"),
        ];
        let ids: Vec<_> = filter_items(&videos, "clássico")
            .iter()
            .map(|v| v.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_filter_matches_optional_summary() {
        let articles = vec![
            article(1, "Economia", "Texto", Some("Inflação em queda")),
            article(2, "Esporte", "Texto", None),
        ];
        let ids: Vec<_> = filter_items(&articles, "inflação")
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let videos = vec![video(3, "c", ""), video(1, "a", ""), video(2, "b", "")];
        assert_eq!(filter_items(&videos, ""), videos);
    }

    #[test]
    fn test_filter_is_idempotent_and_order_preserving() {
        let articles = vec![
            article(5, "Chuva forte", "a", None),
            article(2, "Sol", "chuva à tarde", None),
            article(9, "Vento", "b", Some("sem chuva")),
            article(1, "Neve", "c", None),
        ];
        for term in ["chuva", "CHUVA", "x", ""] {
            let once = filter_items(&articles, term);
            let twice = filter_items(&once, term);
            assert_eq!(once, twice, "term {term:?}");
        }
        let ids: Vec<_> = filter_items(&articles, "chuva")
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_recent_takes_prefix() {
        let videos: Vec<_> = (1..=5).map(|i| video(i, "v", "")).collect();
        let ids: Vec<_> = recent(&videos, 3).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(recent(&videos[..2], 3).len(), 2);
    }

    #[tokio::test]
    async fn test_load_collection_degrades_to_empty() {
        let loaded: Vec<Video> = load_collection("vídeos", async {
            Err(ApiError::Network("offline".into()))
        })
        .await;
        assert!(loaded.is_empty());

        let loaded = load_collection("vídeos", async { Ok(vec![video(1, "v", "")]) }).await;
        assert_eq!(loaded.len(), 1);
    }
}
