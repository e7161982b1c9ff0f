//! 管理面板模块
//!
//! `AdminPanel` 持有面板的全部状态：两个集合、两份表单、编辑目标、对话框与状态消息。
//! `AdminController` 负责“变更后重新拉取”的严格顺序：
//! 成功的变更之后总是完整刷新两个集合，从不在本地修补列表。

use crate::content::ContentBackend;
use crate::error::ApiError;
use crate::state::StateCell;
use jornal_shared::{Article, ArticleInput, ContentId, Video, VideoInput};

#[cfg(test)]
mod tests;

const MSG_REQUIRED_FIELDS: &str = "Preencha os campos obrigatórios";
const MSG_CONNECTION: &str = "Erro de conexão";

// =========================================================
// 表单
// =========================================================

/// 内容类型（同时也是对话框与列表的标签页）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentKind {
    #[default]
    Video,
    Article,
}

impl ContentKind {
    /// 删除前的确认提示
    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            ContentKind::Video => "Tem certeza que deseja excluir este vídeo?",
            ContentKind::Article => "Tem certeza que deseja excluir este artigo?",
        }
    }
}

/// 空白字符串视为未填写
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoForm {
    pub title: String,
    pub url: String,
    pub description: String,
    pub thumbnail_url: String,
}

impl VideoForm {
    pub fn from_video(video: &Video) -> Self {
        Self {
            title: video.title.clone(),
            url: video.url.clone(),
            description: video.description.clone(),
            thumbnail_url: video.thumbnail_url.clone().unwrap_or_default(),
        }
    }

    /// 必填：标题、URL、描述
    pub fn to_input(&self) -> Option<VideoInput> {
        if !(present(&self.title) && present(&self.url) && present(&self.description)) {
            return None;
        }
        Some(VideoInput {
            title: self.title.trim().to_string(),
            url: self.url.trim().to_string(),
            description: self.description.clone(),
            thumbnail_url: optional(&self.thumbnail_url),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    pub title: String,
    pub summary: String,
    pub content: String,
}

impl ArticleForm {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            summary: article.summary.clone().unwrap_or_default(),
            content: article.content.clone(),
        }
    }

    /// 必填：标题、正文
    pub fn to_input(&self) -> Option<ArticleInput> {
        if !(present(&self.title) && present(&self.content)) {
            return None;
        }
        Some(ArticleInput {
            title: self.title.trim().to_string(),
            summary: optional(&self.summary),
            content: self.content.clone(),
        })
    }
}

// =========================================================
// 变更
// =========================================================

/// 正在编辑的条目；`None` 表示创建模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Video(ContentId),
    Article(ContentId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    CreateVideo(VideoInput),
    UpdateVideo(ContentId, VideoInput),
    DeleteVideo(ContentId),
    CreateArticle(ArticleInput),
    UpdateArticle(ContentId, ArticleInput),
    DeleteArticle(ContentId),
}

impl Mutation {
    /// 删除需要显式确认；`confirm` 返回 false 时不产生任何请求
    pub fn confirmed_delete(
        kind: ContentKind,
        id: ContentId,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Option<Self> {
        if !confirm(kind.confirm_prompt()) {
            return None;
        }
        Some(match kind {
            ContentKind::Video => Mutation::DeleteVideo(id),
            ContentKind::Article => Mutation::DeleteArticle(id),
        })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Mutation::DeleteVideo(_) | Mutation::DeleteArticle(_))
    }

    fn success_message(&self) -> &'static str {
        match self {
            Mutation::CreateVideo(_) => "Vídeo criado com sucesso!",
            Mutation::UpdateVideo(..) => "Vídeo atualizado com sucesso!",
            Mutation::DeleteVideo(_) => "Vídeo excluído com sucesso!",
            Mutation::CreateArticle(_) => "Artigo criado com sucesso!",
            Mutation::UpdateArticle(..) => "Artigo atualizado com sucesso!",
            Mutation::DeleteArticle(_) => "Artigo excluído com sucesso!",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Mutation::CreateVideo(_) | Mutation::UpdateVideo(..) => "Erro ao salvar vídeo",
            Mutation::CreateArticle(_) | Mutation::UpdateArticle(..) => "Erro ao salvar artigo",
            Mutation::DeleteVideo(_) | Mutation::DeleteArticle(_) => "Erro ao excluir",
        }
    }
}

/// 面板顶部的状态消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    fn success(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: false,
        }
    }

    fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: true,
        }
    }
}

// =========================================================
// 面板状态
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct AdminPanel {
    pub videos: Vec<Video>,
    pub articles: Vec<Article>,
    pub video_form: VideoForm,
    pub article_form: ArticleForm,
    pub editing: Option<EditTarget>,
    pub dialog_open: bool,
    /// 对话框中当前的表单标签页
    pub active_tab: ContentKind,
    pub status: Option<StatusMessage>,
    /// 首次加载完成前为 true
    pub loading: bool,
    /// 有变更请求在途
    pub submitting: bool,
}

impl Default for AdminPanel {
    fn default() -> Self {
        Self {
            videos: Vec::new(),
            articles: Vec::new(),
            video_form: VideoForm::default(),
            article_form: ArticleForm::default(),
            editing: None,
            dialog_open: false,
            active_tab: ContentKind::Video,
            status: None,
            loading: true,
            submitting: false,
        }
    }
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset_forms(&mut self) {
        self.video_form = VideoForm::default();
        self.article_form = ArticleForm::default();
        self.editing = None;
    }

    /// 以创建模式打开对话框
    pub fn open_create(&mut self) {
        self.reset_forms();
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn edit_video(&mut self, video: &Video) {
        self.video_form = VideoForm::from_video(video);
        self.editing = Some(EditTarget::Video(video.id));
        self.active_tab = ContentKind::Video;
        self.dialog_open = true;
    }

    pub fn edit_article(&mut self, article: &Article) {
        self.article_form = ArticleForm::from_article(article);
        self.editing = Some(EditTarget::Article(article.id));
        self.active_tab = ContentKind::Article;
        self.dialog_open = true;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// 根据编辑目标决定创建或更新
    ///
    /// 只有编辑目标与提交的表单类型一致时才发出更新。
    /// 必填字段缺失时设置状态消息并返回 `None`。
    pub fn prepare_submit(&mut self, kind: ContentKind) -> Option<Mutation> {
        if self.submitting {
            return None;
        }

        let mutation = match kind {
            ContentKind::Video => {
                let input = self.video_form.to_input();
                match (input, self.editing) {
                    (None, _) => None,
                    (Some(input), Some(EditTarget::Video(id))) => {
                        Some(Mutation::UpdateVideo(id, input))
                    }
                    (Some(input), _) => Some(Mutation::CreateVideo(input)),
                }
            }
            ContentKind::Article => {
                let input = self.article_form.to_input();
                match (input, self.editing) {
                    (None, _) => None,
                    (Some(input), Some(EditTarget::Article(id))) => {
                        Some(Mutation::UpdateArticle(id, input))
                    }
                    (Some(input), _) => Some(Mutation::CreateArticle(input)),
                }
            }
        };

        match mutation {
            Some(mutation) => {
                self.submitting = true;
                Some(mutation)
            }
            None => {
                self.status = Some(StatusMessage::error(MSG_REQUIRED_FIELDS));
                None
            }
        }
    }

    /// 记录变更结果，返回是否需要刷新
    ///
    /// 失败时只设置一条状态消息，对话框与表单保持原样以便重新提交。
    pub fn finish_mutation(&mut self, mutation: &Mutation, result: Result<(), ApiError>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.status = Some(StatusMessage::success(mutation.success_message()));
                if !mutation.is_delete() {
                    self.dialog_open = false;
                    self.reset_forms();
                }
                true
            }
            Err(e) => {
                log_error!("Falha na operação {:?}: {}", mutation, e);
                let text = if e.is_transport() {
                    MSG_CONNECTION
                } else {
                    mutation.failure_message()
                };
                self.status = Some(StatusMessage::error(text));
                false
            }
        }
    }

    /// 用后端返回的集合替换本地副本；失败的一侧保持不变
    pub fn apply_refresh(
        &mut self,
        videos: Result<Vec<Video>, ApiError>,
        articles: Result<Vec<Article>, ApiError>,
    ) {
        match videos {
            Ok(videos) => self.videos = videos,
            Err(e) => log_error!("Erro ao carregar vídeos: {}", e),
        }
        match articles {
            Ok(articles) => self.articles = articles,
            Err(e) => log_error!("Erro ao carregar artigos: {}", e),
        }
        self.loading = false;
    }
}

// =========================================================
// 控制器
// =========================================================

#[derive(Clone)]
pub struct AdminController<C, B> {
    cell: C,
    backend: B,
}

impl<C, B> AdminController<C, B>
where
    C: StateCell<AdminPanel>,
    B: ContentBackend,
{
    pub fn new(cell: C, backend: B) -> Self {
        Self { cell, backend }
    }

    /// 并发拉取两个管理端集合
    pub async fn refresh(&self) {
        let (videos, articles) = futures::join!(
            self.backend.admin_list_videos(),
            self.backend.admin_list_articles()
        );
        self.cell.modify(|p| p.apply_refresh(videos, articles));
    }

    /// 提交当前标签页的表单
    pub async fn submit(&self, kind: ContentKind) {
        let Some(mutation) = self.cell.modify(|p| p.prepare_submit(kind)).flatten() else {
            return;
        };
        self.run(mutation).await;
    }

    /// 经确认后删除
    pub async fn delete(&self, kind: ContentKind, id: ContentId, confirm: impl FnOnce(&str) -> bool) {
        let Some(mutation) = Mutation::confirmed_delete(kind, id, confirm) else {
            log_info!("Exclusão de {:?} {} cancelada.", kind, id);
            return;
        };
        self.run(mutation).await;
    }

    async fn run(&self, mutation: Mutation) {
        let result = self.execute(&mutation).await;
        let needs_refresh = self
            .cell
            .modify(|p| p.finish_mutation(&mutation, result))
            .unwrap_or(false);
        if needs_refresh {
            self.refresh().await;
        }
    }

    async fn execute(&self, mutation: &Mutation) -> Result<(), ApiError> {
        match mutation {
            Mutation::CreateVideo(input) => self.backend.create_video(input.clone()).await.map(drop),
            Mutation::UpdateVideo(id, input) => {
                self.backend.update_video(*id, input.clone()).await.map(drop)
            }
            Mutation::DeleteVideo(id) => self.backend.delete_video(*id).await,
            Mutation::CreateArticle(input) => {
                self.backend.create_article(input.clone()).await.map(drop)
            }
            Mutation::UpdateArticle(id, input) => {
                self.backend.update_article(*id, input.clone()).await.map(drop)
            }
            Mutation::DeleteArticle(id) => self.backend.delete_article(*id).await,
        }
    }
}
