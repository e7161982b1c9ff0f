use super::*;
use crate::state::DisposableCell;
use async_trait::async_trait;
use jornal_shared::Timestamp;
use std::cell::RefCell;
use std::rc::Rc;

// =========================================================
// Shared Mock Components
// =========================================================

#[derive(Default)]
struct TestContext {
    /// Operation log to verify calling order
    log: RefCell<Vec<String>>,
    /// Server-side collections returned by the admin listings
    videos: RefCell<Vec<Video>>,
    articles: RefCell<Vec<Article>>,
    /// Error returned by the next mutation, if any
    fail_mutation: RefCell<Option<ApiError>>,
    fail_listing: RefCell<bool>,
}

impl TestContext {
    fn push_log(&self, msg: String) {
        self.log.borrow_mut().push(msg);
    }

    fn log(&self) -> Vec<String> {
        self.log.borrow().clone()
    }

    fn mutation_result(&self) -> Result<(), ApiError> {
        match self.fail_mutation.borrow_mut().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct TestBackend {
    ctx: Rc<TestContext>,
}

fn created() -> Timestamp {
    Timestamp::parse("2025-06-01T10:00:00").unwrap()
}

fn video(id: ContentId, title: &str) -> Video {
    Video {
        id,
        title: title.into(),
        url: format!("https://videos.example/{id}"),
        description: "descrição".into(),
        thumbnail_url: None,
        created_at: created(),
    }
}

fn article(id: ContentId, title: &str) -> Article {
    Article {
        id,
        title: title.into(),
        content: "conteúdo".into(),
        summary: None,
        created_at: created(),
    }
}

#[async_trait(?Send)]
impl ContentBackend for TestBackend {
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.ctx.push_log("list_videos".into());
        Ok(self.ctx.videos.borrow().clone())
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.ctx.push_log("list_articles".into());
        Ok(self.ctx.articles.borrow().clone())
    }

    async fn get_article(&self, id: ContentId) -> Result<Article, ApiError> {
        self.ctx.push_log(format!("get_article:{}", id));
        self.ctx
            .articles
            .borrow()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(ApiError::Status(404))
    }

    async fn admin_list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.ctx.push_log("admin_list_videos".into());
        if *self.ctx.fail_listing.borrow() {
            return Err(ApiError::Status(500));
        }
        Ok(self.ctx.videos.borrow().clone())
    }

    async fn admin_list_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.ctx.push_log("admin_list_articles".into());
        if *self.ctx.fail_listing.borrow() {
            return Err(ApiError::Status(500));
        }
        Ok(self.ctx.articles.borrow().clone())
    }

    async fn create_video(&self, input: VideoInput) -> Result<Video, ApiError> {
        self.ctx.push_log(format!("create_video:{}", input.title));
        self.ctx.mutation_result()?;
        let stored = Video {
            title: input.title,
            ..video(100, "")
        };
        self.ctx.videos.borrow_mut().insert(0, stored.clone());
        Ok(stored)
    }

    async fn update_video(&self, id: ContentId, input: VideoInput) -> Result<Video, ApiError> {
        self.ctx.push_log(format!("update_video:{}:{}", id, input.title));
        self.ctx.mutation_result()?;
        Ok(video(id, &input.title))
    }

    async fn delete_video(&self, id: ContentId) -> Result<(), ApiError> {
        self.ctx.push_log(format!("delete_video:{}", id));
        self.ctx.mutation_result()?;
        self.ctx.videos.borrow_mut().retain(|v| v.id != id);
        Ok(())
    }

    async fn create_article(&self, input: ArticleInput) -> Result<Article, ApiError> {
        self.ctx.push_log(format!("create_article:{}", input.title));
        self.ctx.mutation_result()?;
        Ok(article(200, &input.title))
    }

    async fn update_article(&self, id: ContentId, input: ArticleInput) -> Result<Article, ApiError> {
        self.ctx.push_log(format!("update_article:{}:{}", id, input.title));
        self.ctx.mutation_result()?;
        // The server normalizes the title; the panel must show the server's version.
        let stored = article(id, &input.title.to_uppercase());
        for a in self.ctx.articles.borrow_mut().iter_mut() {
            if a.id == id {
                *a = stored.clone();
            }
        }
        Ok(stored)
    }

    async fn delete_article(&self, id: ContentId) -> Result<(), ApiError> {
        self.ctx.push_log(format!("delete_article:{}", id));
        self.ctx.mutation_result()?;
        self.ctx.articles.borrow_mut().retain(|a| a.id != id);
        Ok(())
    }
}

type TestController = AdminController<Rc<RefCell<AdminPanel>>, TestBackend>;

fn setup_env() -> (Rc<TestContext>, Rc<RefCell<AdminPanel>>, TestController) {
    let ctx = Rc::new(TestContext::default());
    let panel = Rc::new(RefCell::new(AdminPanel::new()));
    let backend = TestBackend { ctx: ctx.clone() };
    let controller = AdminController::new(panel.clone(), backend);
    (ctx, panel, controller)
}

// =========================================================
// Forms
// =========================================================

#[test]
fn test_video_form_requires_fields() {
    let mut form = VideoForm {
        title: "Jogo".into(),
        url: "https://v".into(),
        description: "   ".into(),
        thumbnail_url: String::new(),
    };
    assert!(form.to_input().is_none());

    form.description = "Melhores momentos".into();
    let input = form.to_input().unwrap();
    assert_eq!(input.thumbnail_url, None);
}

#[test]
fn test_article_form_blank_summary_is_none() {
    let form = ArticleForm {
        title: "T".into(),
        summary: "  ".into(),
        content: "C".into(),
    };
    assert_eq!(form.to_input().unwrap().summary, None);
}

#[test]
fn test_open_create_resets_editing() {
    let mut panel = AdminPanel::new();
    panel.edit_video(&video(3, "Antigo"));
    panel.open_create();
    assert_eq!(panel.editing, None);
    assert_eq!(panel.video_form, VideoForm::default());
    assert!(panel.dialog_open);
}

#[test]
fn test_edit_prepopulates_form() {
    let mut panel = AdminPanel::new();
    let mut a = article(7, "Eleições");
    a.summary = Some("Resumo".into());
    panel.edit_article(&a);

    assert_eq!(panel.editing, Some(EditTarget::Article(7)));
    assert_eq!(panel.active_tab, ContentKind::Article);
    assert_eq!(panel.article_form.summary, "Resumo");
    assert!(panel.dialog_open);
}

#[test]
fn test_prepare_submit_missing_fields_sets_status() {
    let mut panel = AdminPanel::new();
    assert_eq!(panel.prepare_submit(ContentKind::Video), None);
    assert!(panel.status.as_ref().unwrap().is_error);
    assert!(!panel.submitting);
}

#[test]
fn test_editing_other_kind_creates_instead_of_updating() {
    let mut panel = AdminPanel::new();
    panel.edit_article(&article(7, "Artigo"));
    panel.video_form = VideoForm::from_video(&video(1, "Novo"));

    let mutation = panel.prepare_submit(ContentKind::Video).unwrap();
    assert!(matches!(mutation, Mutation::CreateVideo(_)));
}

#[test]
fn test_declined_confirmation_yields_no_mutation() {
    let mut prompt = String::new();
    let res = Mutation::confirmed_delete(ContentKind::Video, 4, |p| {
        prompt = p.to_string();
        false
    });
    assert_eq!(res, None);
    assert_eq!(prompt, "Tem certeza que deseja excluir este vídeo?");
}

// =========================================================
// Controller flows
// =========================================================

#[tokio::test]
async fn test_initial_refresh_loads_both_collections() {
    let (ctx, panel, controller) = setup_env();
    ctx.videos.borrow_mut().push(video(1, "Jogo de hoje"));
    ctx.articles.borrow_mut().push(article(2, "Notícia"));

    controller.refresh().await;

    let panel = panel.borrow();
    assert!(!panel.loading);
    assert_eq!(panel.videos.len(), 1);
    assert_eq!(panel.articles.len(), 1);
    assert_eq!(ctx.log(), vec!["admin_list_videos", "admin_list_articles"]);
}

#[tokio::test]
async fn test_refresh_failure_keeps_previous_collections() {
    let (ctx, panel, controller) = setup_env();
    panel.borrow_mut().videos = vec![video(1, "Em cache")];
    *ctx.fail_listing.borrow_mut() = true;

    controller.refresh().await;

    let panel = panel.borrow();
    assert_eq!(panel.videos.len(), 1);
    assert!(panel.status.is_none(), "read failures stay silent");
    assert!(!panel.loading);
}

#[tokio::test]
async fn test_edit_article_issues_update_then_refetches() {
    let (ctx, panel, controller) = setup_env();
    ctx.articles.borrow_mut().push(article(7, "rascunho"));
    controller.refresh().await;
    ctx.log.borrow_mut().clear();

    {
        let mut p = panel.borrow_mut();
        let target = p.articles[0].clone();
        p.edit_article(&target);
        p.article_form.title = "versão final".into();
    }
    controller.submit(ContentKind::Article).await;

    assert_eq!(
        ctx.log(),
        vec![
            "update_article:7:versão final",
            "admin_list_videos",
            "admin_list_articles"
        ]
    );
    let p = panel.borrow();
    assert!(!p.dialog_open);
    assert_eq!(p.editing, None);
    assert_eq!(p.article_form, ArticleForm::default());
    assert_eq!(p.articles[0].title, "VERSÃO FINAL", "list comes from the server");
    assert_eq!(
        p.status,
        Some(StatusMessage::success("Artigo atualizado com sucesso!"))
    );
}

#[tokio::test]
async fn test_create_video_posts_without_id() {
    let (ctx, panel, controller) = setup_env();
    {
        let mut p = panel.borrow_mut();
        p.open_create();
        p.video_form = VideoForm {
            title: "Jogo de hoje".into(),
            url: "https://v/1".into(),
            description: "Gols".into(),
            thumbnail_url: String::new(),
        };
    }

    controller.submit(ContentKind::Video).await;

    assert_eq!(ctx.log()[0], "create_video:Jogo de hoje");
    let p = panel.borrow();
    assert_eq!(p.videos.len(), 1);
    assert!(!p.dialog_open);
}

#[tokio::test]
async fn test_failed_save_keeps_dialog_open() {
    let (ctx, panel, controller) = setup_env();
    *ctx.fail_mutation.borrow_mut() = Some(ApiError::Status(422));
    {
        let mut p = panel.borrow_mut();
        p.edit_video(&video(5, "Original"));
    }

    controller.submit(ContentKind::Video).await;

    assert_eq!(ctx.log(), vec!["update_video:5:Original"]);
    let p = panel.borrow();
    assert!(p.dialog_open);
    assert_eq!(p.editing, Some(EditTarget::Video(5)));
    assert_eq!(p.status, Some(StatusMessage::error("Erro ao salvar vídeo")));
    assert!(!p.submitting);
}

#[tokio::test]
async fn test_transport_failure_reports_connection_error() {
    let (ctx, panel, controller) = setup_env();
    *ctx.fail_mutation.borrow_mut() = Some(ApiError::Network("offline".into()));
    panel.borrow_mut().edit_article(&article(1, "T"));

    controller.submit(ContentKind::Article).await;

    assert_eq!(
        panel.borrow().status,
        Some(StatusMessage::error("Erro de conexão"))
    );
}

#[tokio::test]
async fn test_delete_declined_issues_no_request() {
    let (ctx, panel, controller) = setup_env();
    ctx.videos.borrow_mut().push(video(1, "Fica"));
    controller.refresh().await;
    ctx.log.borrow_mut().clear();
    let before = panel.borrow().clone();

    controller.delete(ContentKind::Video, 1, |_| false).await;

    assert!(ctx.log().is_empty());
    assert_eq!(*panel.borrow(), before);
}

#[tokio::test]
async fn test_delete_confirmed_refetches() {
    let (ctx, panel, controller) = setup_env();
    ctx.articles.borrow_mut().push(article(3, "Sai"));
    controller.refresh().await;
    ctx.log.borrow_mut().clear();

    controller.delete(ContentKind::Article, 3, |_| true).await;

    assert_eq!(
        ctx.log(),
        vec!["delete_article:3", "admin_list_videos", "admin_list_articles"]
    );
    let p = panel.borrow();
    assert!(p.articles.is_empty());
    assert_eq!(
        p.status,
        Some(StatusMessage::success("Artigo excluído com sucesso!"))
    );
}

#[tokio::test]
async fn test_delete_failure_does_not_refetch() {
    let (ctx, panel, controller) = setup_env();
    *ctx.fail_mutation.borrow_mut() = Some(ApiError::Status(404));

    controller.delete(ContentKind::Video, 9, |_| true).await;

    assert_eq!(ctx.log(), vec!["delete_video:9"]);
    assert_eq!(
        panel.borrow().status,
        Some(StatusMessage::error("Erro ao excluir"))
    );
}

#[tokio::test]
async fn test_mutation_result_after_unmount_is_discarded() {
    let ctx = Rc::new(TestContext::default());
    ctx.videos.borrow_mut().push(video(1, "Gol"));
    let cell = DisposableCell::new(AdminPanel::new());
    let controller = AdminController::new(cell.clone(), TestBackend { ctx: ctx.clone() });
    let unmounted = RefCell::new(None);

    controller
        .delete(ContentKind::Video, 1, |_| {
            *unmounted.borrow_mut() = cell.dispose();
            true
        })
        .await;

    assert_eq!(ctx.log(), vec!["delete_video:1"]);
    let last = unmounted.into_inner().unwrap();
    assert_eq!(last.status, None);
    assert!(last.videos.is_empty());
}

#[tokio::test]
async fn test_refresh_after_unmount_is_dropped() {
    let ctx = Rc::new(TestContext::default());
    ctx.articles.borrow_mut().push(article(2, "Tarde"));
    let cell = DisposableCell::new(AdminPanel::new());
    let controller = AdminController::new(cell.clone(), TestBackend { ctx: ctx.clone() });
    cell.dispose();

    controller.refresh().await;

    assert_eq!(cell.inspect(|p| p.articles.len()), None);
}
