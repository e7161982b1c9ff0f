//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::api::JornalApi;
use crate::config::AppConfig;
use crate::session::{SessionController, SessionMachine, SignInError};
use crate::web::PersistedToken;
use jornal_shared::{Credentials, User};
use leptos::prelude::*;
use leptos::task::spawn_local;

type BrowserSession = SessionController<RwSignal<SessionMachine>, JornalApi, PersistedToken>;

/// 认证上下文
///
/// 会话状态只有这一份信号，页头、路由守卫与登录页都从这里读取。
#[derive(Clone)]
pub struct AuthContext {
    machine: RwSignal<SessionMachine>,
    controller: BrowserSession,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new(config: &AppConfig, api: JornalApi) -> Self {
        let machine = RwSignal::new(SessionMachine::new());
        let controller = SessionController::new(
            machine,
            api,
            PersistedToken::new(config.session_key.clone()),
        );
        Self {
            machine,
            controller,
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    ///
    /// 会话恢复完成前为 `false`。
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.state().is_authenticated()))
    }

    /// 当前登录用户名，未登录时为 `None`
    pub fn username_signal(&self) -> Signal<Option<String>> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.state().user().map(|u| u.username.clone())))
    }

    /// 提交登录表单
    pub async fn sign_in(&self, credentials: Credentials) -> Result<User, SignInError> {
        self.controller.sign_in(credentials).await
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从 LocalStorage 读取令牌并向后端校验，校验期间状态保持 `Unknown`。
pub fn init_auth(ctx: &AuthContext) {
    let controller = ctx.controller.clone();
    spawn_local(async move {
        controller.restore().await;
    });
}

/// 注销并清除状态
///
/// 导航将由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    let controller = ctx.controller.clone();
    spawn_local(async move {
        controller.logout().await;
    });
}

/// 重新校验当前会话（进入管理面板时调用），失效则降级为未登录
pub fn revalidate(ctx: &AuthContext) {
    let controller = ctx.controller.clone();
    spawn_local(async move {
        controller.revalidate().await;
    });
}
