//! StoreDesk 前端应用
//!
//! 产品后台的登录门 + 双栏产品浏览器（列表 / 细节 / 灯箱）：
//! - `config`: 构建时 API 配置
//! - `model`: 领域模型（产品、登录载荷）
//! - `api`: HTTP 客户端（逐请求注入凭证）
//! - `auth`: 认证状态管理
//! - `components`: UI 组件层

pub mod api;
pub mod auth;
pub mod components {
    pub mod lightbox;
    pub mod loading;
    pub mod login;
    pub mod products;
}
pub mod config;
pub mod model;
pub mod serde_helper;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装：
// 持久化状态只有一个 cookie，不使用 LocalStorage。
pub(crate) mod web {
    mod cookie;

    pub use cookie::CookieJar;
}

use crate::auth::{AuthContext, bootstrap_session};
use crate::components::loading::{LoadingContext, LoadingOverlay};
use crate::components::login::LoginPage;
use crate::components::products::{ProductsPage, load_products};
use crate::model::Product;

use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建加载指示上下文（引用计数的在途请求计数器）
    let loading_ctx = LoadingContext::new();
    provide_context(loading_ctx);

    // 2. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 3. 初始化认证状态（读取 cookie 并校验既有会话）
    bootstrap_session(auth_ctx, loading_ctx);

    // 产品列表归根组件所有：失败时保留上一次成功的数据
    let (products, set_products) = signal(Vec::<Product>::new());

    // 4. 认证信号的上升沿触发产品拉取：
    // 利用 Effect 的前值参数，仅在 false/未设置 -> true 的跳变时拉取一次
    Effect::new(move |prev: Option<bool>| {
        let is_auth = auth_ctx.state.with(|s| s.is_auth);
        if is_auth && prev != Some(true) {
            load_products(auth_ctx, loading_ctx, set_products);
        }
        is_auth
    });

    view! {
        <LoadingOverlay />
        <Show
            when=move || auth_ctx.state.with(|s| s.is_auth)
            fallback=|| view! { <LoginPage /> }
        >
            <ProductsPage products=products />
        </Show>
    }
}
