//! HTTP 客户端
//!
//! `gloo-net` 之上的薄封装。凭证由客户端自身持有并逐请求注入，
//! 不修改任何全局默认请求头。

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::config::{ApiConfig, api_config};
use crate::model::{ErrorBody, LoginRequest, LoginResponse, Product, ProductsResponse};

/// API 调用错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 网络/传输失败（fetch 被拒绝）
    Network(String),
    /// 非 2xx 状态，携带服务端提供的消息
    Server { status: u16, message: String },
    /// 2xx 状态但响应体无法解析
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Server { status, message } => write!(f, "[{}] {}", status, message),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

impl ApiError {
    /// 展示给用户的消息：服务端消息原样透出，其余取整体描述
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// 会话校验的判定：空响应体视为未登录
pub(crate) fn session_active(body: &str) -> bool {
    !body.trim().is_empty()
}

/// 从失败响应体中提取服务端消息，解析不出时回退到状态码
pub(crate) fn server_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("HTTP {}", status))
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    api_path: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_path: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_path: api_path.into(),
            token: None,
        }
    }

    /// 从构建时配置创建未携带凭证的客户端
    pub fn from_config() -> Self {
        let ApiConfig { base_url, api_path } = api_config();
        Self::new(base_url, api_path)
    }

    /// 返回携带 bearer token 的客户端
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn products_path(&self) -> String {
        format!("/api/{}/admin/products", self.api_path)
    }

    // 凭证注入：仅当持有 token 时附加 Authorization 头
    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", token),
            None => builder,
        }
    }

    async fn error_from(&self, res: Response) -> ApiError {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        ApiError::Server {
            status,
            message: server_message(status, &body),
        }
    }

    /// 校验既有会话是否仍然有效
    ///
    /// `Ok(false)` 表示服务端以空响应体回答——视为未登录，不是错误。
    pub async fn check_session(&self) -> Result<bool, ApiError> {
        let url = self.url("/api/user/check");
        let res = self
            .authed(Request::post(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(self.error_from(res).await);
        }

        let body = res
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(session_active(&body))
    }

    /// 提交凭证换取 token 与过期时间
    pub async fn sign_in(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.url("/admin/signin");
        let res = Request::post(&url)
            .json(credentials)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(self.error_from(res).await);
        }

        res.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 获取产品列表
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.url(&self.products_path());
        let res = self
            .authed(Request::get(&url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !res.ok() {
            return Err(self.error_from(res).await);
        }

        res.json::<ProductsResponse>()
            .await
            .map(|body| body.products)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_join_handles_trailing_and_leading_slashes() {
        let client = ApiClient::new("https://api.example.com/", "week2");
        assert_eq!(
            client.url("/api/user/check"),
            "https://api.example.com/api/user/check"
        );
        assert_eq!(
            client.url("admin/signin"),
            "https://api.example.com/admin/signin"
        );
    }

    #[test]
    fn products_path_embeds_configured_prefix() {
        let client = ApiClient::new("https://api.example.com", "week2");
        assert_eq!(client.products_path(), "/api/week2/admin/products");
        assert_eq!(
            client.url(&client.products_path()),
            "https://api.example.com/api/week2/admin/products"
        );
    }

    #[test]
    fn empty_session_body_means_logged_out() {
        assert!(!session_active(""));
        assert!(!session_active("   \n"));
        assert!(session_active(r#"{"success":true}"#));
    }

    #[test]
    fn server_message_prefers_payload_message() {
        assert_eq!(
            server_message(400, r#"{"message":"帳號或密碼錯誤"}"#),
            "帳號或密碼錯誤"
        );
    }

    #[test]
    fn server_message_falls_back_to_status() {
        assert_eq!(server_message(500, "not json"), "HTTP 500");
        assert_eq!(server_message(404, r#"{"error":"x"}"#), "HTTP 404");
    }

    #[test]
    fn with_token_does_not_disturb_base_url() {
        let client = ApiClient::new("https://api.example.com", "week2").with_token("abc");
        assert_eq!(
            client.url("/api/user/check"),
            "https://api.example.com/api/user/check"
        );
    }
}
