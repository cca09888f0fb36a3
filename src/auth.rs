//! 认证模块
//!
//! 管理认证状态。会话凭证保存在一个 cookie 中，
//! 携带 token 的 API 客户端在认证成功后存入状态，供后续调用复用。

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::loading::LoadingContext;
use crate::model::LoginRequest;
use crate::web::CookieJar;

/// 会话 cookie 名称
pub const TOKEN_COOKIE: &str = "react-week2-token";

/// 认证状态
#[derive(Clone)]
pub struct AuthState {
    /// API 客户端实例（认证成功后携带 token）
    pub api: ApiClient,
    /// 是否已认证
    pub is_auth: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            api: ApiClient::from_config(),
            is_auth: false,
        }
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 认证状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置认证状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 会话引导：挂载时从 cookie 恢复会话
///
/// cookie 缺失时直接视为未认证，不发起网络请求；
/// 存在时携带 token 调用会话校验端点：
/// - 非空响应体：认证成立，token 客户端存入状态
/// - 空响应体 / 网络错误 / 非 2xx：回落到登录视图，错误仅记录到控制台
pub fn bootstrap_session(ctx: AuthContext, loading: LoadingContext) {
    let Some(token) = CookieJar::get(TOKEN_COOKIE) else {
        ctx.set_state.update(|s| s.is_auth = false);
        return;
    };

    loading.begin();
    spawn_local(async move {
        let api = ApiClient::from_config().with_token(token);
        match api.check_session().await {
            Ok(true) => {
                ctx.set_state.try_update(|s| {
                    s.api = api;
                    s.is_auth = true;
                });
            }
            Ok(false) => {
                ctx.set_state.try_update(|s| s.is_auth = false);
            }
            Err(err) => {
                web_sys::console::error_1(&format!("会话校验失败: {}", err).into());
                ctx.set_state.try_update(|s| s.is_auth = false);
            }
        }
        loading.end();
    });
}

/// 提交凭证登录
///
/// 成功时写入会话 cookie（采用服务端给定的过期时间）、
/// 把携带 token 的客户端存入状态并置认证标志，
/// 由上层的效果级联触发产品拉取。
/// 失败时清除认证标志，并返回服务端消息供表单横幅展示。
pub async fn sign_in(ctx: AuthContext, username: String, password: String) -> Result<(), String> {
    let api = ApiClient::from_config();
    let credentials = LoginRequest { username, password };

    match api.sign_in(&credentials).await {
        Ok(res) => {
            CookieJar::set(TOKEN_COOKIE, &res.token, &CookieJar::expires_from(&res.expired));
            ctx.set_state.try_update(|s| {
                s.api = api.with_token(res.token);
                s.is_auth = true;
            });
            Ok(())
        }
        Err(err) => {
            ctx.set_state.try_update(|s| s.is_auth = false);
            Err(err.user_message())
        }
    }
}
