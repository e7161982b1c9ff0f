//! 会话模块 - 状态机与控制器
//!
//! 不依赖 DOM：`SessionMachine` 是纯状态机，`SessionController` 通过注入的
//! 后端 (`AuthBackend`) 与令牌存储 (`TokenStore`) 驱动状态迁移。
//!
//! 状态迁移：
//! - Unknown → Authenticated：恢复时令牌校验通过
//! - Unknown → Anonymous：没有持久化令牌，或校验失败
//! - Anonymous → Authenticated：登录
//! - Authenticated → Anonymous：注销，或之后的任何一次校验失败
//!
//! 每个显式操作（登录、注销）都会递增 `epoch`。校验请求发出时记录当时的 epoch，
//! 响应到达时若 epoch 已变化则丢弃，最近的显式操作始终生效。

use crate::error::ApiError;
use crate::state::StateCell;
use async_trait::async_trait;
use jornal_shared::{CheckAuthResponse, Credentials, LoginResponse, User};
use std::fmt;


const INVALID_CREDENTIALS: &str = "Credenciais inválidas";

// =========================================================
// 外部依赖接口
// =========================================================

/// 会话令牌的持久化存储
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// 认证相关的后端端点
#[async_trait(?Send)]
pub trait AuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
    async fn check_auth(&self, token: &str) -> Result<CheckAuthResponse, ApiError>;
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

// =========================================================
// 状态定义
// =========================================================

/// 已认证的会话，令牌与用户总是同时存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// 启动后、恢复完成前
    #[default]
    Unknown,
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            SessionState::Authenticated(session) => Some(&session.token),
            _ => None,
        }
    }
}

/// 一次进行中的令牌校验
#[derive(Debug)]
pub struct ValidationTicket {
    epoch: u64,
    token: String,
}

impl ValidationTicket {
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// 校验结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid(User),
    Invalid,
}

impl Verdict {
    /// 只有 `authenticated: true` 且携带用户的响应才算有效，其余（含传输失败）一律无效
    pub fn from_response(res: Result<CheckAuthResponse, ApiError>) -> Self {
        match res {
            Ok(CheckAuthResponse {
                authenticated: true,
                user: Some(user),
            }) => Verdict::Valid(user),
            Ok(_) => Verdict::Invalid,
            Err(e) => {
                log_warn!("[Session] Validation request failed: {}", e);
                Verdict::Invalid
            }
        }
    }
}

/// 状态迁移后需要对持久化令牌执行的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persist {
    Store(String),
    Clear,
}

// =========================================================
// 状态机
// =========================================================

#[derive(Debug, Clone, Default)]
pub struct SessionMachine {
    state: SessionState,
    epoch: u64,
}

impl SessionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// 没有可恢复的令牌
    pub fn settle_anonymous(&mut self) {
        if self.state == SessionState::Unknown {
            self.state = SessionState::Anonymous;
        }
    }

    pub fn begin_validation(&self, token: impl Into<String>) -> ValidationTicket {
        ValidationTicket {
            epoch: self.epoch,
            token: token.into(),
        }
    }

    /// 应用校验结果
    ///
    /// 返回 `None` 表示结果已过期（期间发生过显式登录或注销），状态与存储均不变。
    pub fn complete_validation(
        &mut self,
        ticket: ValidationTicket,
        verdict: Verdict,
    ) -> Option<Persist> {
        if ticket.epoch != self.epoch {
            log_info!(
                "[Session] Discarding stale validation (epoch {} < {}).",
                ticket.epoch,
                self.epoch
            );
            return None;
        }

        match verdict {
            Verdict::Valid(user) => {
                self.state = SessionState::Authenticated(Session {
                    token: ticket.token.clone(),
                    user,
                });
                Some(Persist::Store(ticket.token))
            }
            Verdict::Invalid => {
                self.state = SessionState::Anonymous;
                Some(Persist::Clear)
            }
        }
    }

    pub fn login(&mut self, user: User, token: impl Into<String>) {
        self.epoch += 1;
        self.state = SessionState::Authenticated(Session {
            token: token.into(),
            user,
        });
    }

    /// 注销，返回注销前的令牌（用于通知后端）
    pub fn logout(&mut self) -> Option<String> {
        self.epoch += 1;
        match std::mem::replace(&mut self.state, SessionState::Anonymous) {
            SessionState::Authenticated(session) => Some(session.token),
            _ => None,
        }
    }
}

// =========================================================
// 登录错误
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInError {
    /// 用户名或密码为空，未发出请求
    MissingFields,
    /// 后端拒绝了凭据
    Rejected(String),
    /// 请求失败或响应不完整
    Failed(ApiError),
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInError::MissingFields => write!(f, "Preencha usuário e senha"),
            SignInError::Rejected(msg) => write!(f, "{}", msg),
            SignInError::Failed(_) => write!(f, "Erro de conexão"),
        }
    }
}

impl std::error::Error for SignInError {}

// =========================================================
// 控制器
// =========================================================

/// 会话控制器
///
/// 持有唯一的会话状态容器，所有读取方（页头、路由、管理入口）都看同一份值。
#[derive(Clone)]
pub struct SessionController<C, B, S> {
    cell: C,
    backend: B,
    store: S,
}

impl<C, B, S> SessionController<C, B, S>
where
    C: StateCell<SessionMachine>,
    B: AuthBackend,
    S: TokenStore,
{
    pub fn new(cell: C, backend: B, store: S) -> Self {
        Self {
            cell,
            backend,
            store,
        }
    }

    /// 当前状态的快照
    pub fn state(&self) -> SessionState {
        self.cell
            .inspect(|m| m.state().clone())
            .unwrap_or_default()
    }

    /// 启动时从持久化存储恢复会话
    pub async fn restore(&self) {
        match self.store.load() {
            Some(token) => self.validate(token).await,
            None => {
                self.cell.modify(SessionMachine::settle_anonymous);
                log_info!("[Session] No persisted session.");
            }
        }
    }

    /// 重新校验当前会话，失败则降级为未登录
    pub async fn revalidate(&self) {
        let token = self
            .cell
            .inspect(|m| m.state().token().map(str::to_owned))
            .flatten();
        if let Some(token) = token {
            self.validate(token).await;
        }
    }

    async fn validate(&self, token: String) {
        let Some(ticket) = self.cell.inspect(|m| m.begin_validation(token)) else {
            return;
        };

        let verdict = Verdict::from_response(self.backend.check_auth(ticket.token()).await);

        match self
            .cell
            .modify(|m| m.complete_validation(ticket, verdict))
            .flatten()
        {
            Some(Persist::Store(token)) => {
                self.store.save(&token);
                log_info!("[Session] Session restored.");
            }
            Some(Persist::Clear) => {
                self.store.clear();
                log_info!("[Session] Session invalid, signed out.");
            }
            None => {}
        }
    }

    /// 以给定身份进入已认证状态并持久化令牌
    pub fn login(&self, user: User, token: String) {
        if self.cell.modify(|m| m.login(user, token.as_str())).is_some() {
            self.store.save(&token);
            log_info!("[Session] Logged in.");
        }
    }

    /// 登录表单的完整流程：提交凭据，成功后调用 `login`
    pub async fn sign_in(&self, credentials: Credentials) -> Result<User, SignInError> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(SignInError::MissingFields);
        }

        let res = match self.backend.login(&credentials).await {
            Ok(res) => res,
            Err(e) if e.is_unauthorized() => {
                return Err(SignInError::Rejected(INVALID_CREDENTIALS.to_string()));
            }
            Err(e) => {
                log_error!("[Session] Login request failed: {}", e);
                return Err(SignInError::Failed(e));
            }
        };

        if !res.success {
            let msg = res
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| INVALID_CREDENTIALS.to_string());
            return Err(SignInError::Rejected(msg));
        }

        match (res.user, res.session_id) {
            (Some(user), Some(token)) if !token.is_empty() => {
                self.login(user.clone(), token);
                Ok(user)
            }
            _ => Err(SignInError::Failed(ApiError::Parse(
                "login response without user or session_id".to_string(),
            ))),
        }
    }

    /// 注销
    ///
    /// 先无条件清除内存与持久化状态，再尽力通知后端，通知失败被忽略。
    pub async fn logout(&self) {
        let token = self.cell.modify(SessionMachine::logout).flatten();
        self.store.clear();
        log_info!("[Session] Logged out.");

        if let Some(token) = token {
            if let Err(e) = self.backend.logout(&token).await {
                log_warn!("[Session] Logout notification failed: {}", e);
            }
        }
    }
}
