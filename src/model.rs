//! 领域模型
//!
//! API 载荷的 serde 定义。产品数据由服务端原样返回，客户端只展示、从不修改。

use serde::{Deserialize, Serialize};

use crate::serde_helper;

// =========================================================
// 产品 (Products)
// =========================================================

/// 单一产品记录
///
/// 上游 API 的历史载荷并不规整：`id` 可能是字符串或数字，
/// `is_enabled` 可能是布尔或 0/1，次图列表可能整个缺失。
/// 这里在反序列化层面做宽容处理，渲染层拿到的始终是规整值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "serde_helper::string_from_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    pub origin_price: f64,
    pub price: f64,
    #[serde(default, deserialize_with = "serde_helper::bool_from_int_or_bool")]
    pub is_enabled: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    /// 主图
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    /// 次图（有序，可缺失）
    #[serde(default, rename = "imagesUrl")]
    pub images_url: Vec<String>,
}

/// 产品列表端点的响应：`{ "products": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

// =========================================================
// 登录 (Sign-in)
// =========================================================

/// 登录请求体
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录成功响应：token 写入 cookie，expired 作为 cookie 的过期时间
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expired: String,
}

/// 服务端失败载荷的通用形状：`{ "message": "..." }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_product_with_numeric_id_and_bool_flag() {
        let json = r#"{
            "products": [{
                "id": 1,
                "title": "A",
                "origin_price": 100,
                "price": 80,
                "is_enabled": true,
                "imagesUrl": ["x.jpg"]
            }]
        }"#;
        let res: ProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.products.len(), 1);

        let p = &res.products[0];
        assert_eq!(p.id, "1");
        assert_eq!(p.title, "A");
        assert_eq!(p.origin_price, 100.0);
        assert_eq!(p.price, 80.0);
        assert!(p.is_enabled);
        assert_eq!(p.images_url, vec!["x.jpg".to_string()]);
        // 缺失字段取默认值
        assert!(p.category.is_empty());
        assert!(p.image_url.is_empty());
    }

    #[test]
    fn decodes_product_with_string_id_and_numeric_flag() {
        let json = r#"{
            "id": "-OJabc",
            "title": "蛋黃酥",
            "category": "甜點",
            "origin_price": 120,
            "price": 99,
            "is_enabled": 0,
            "description": "d",
            "content": "c",
            "imageUrl": "main.jpg"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "-OJabc");
        assert!(!p.is_enabled);
        assert_eq!(p.image_url, "main.jpg");
        assert!(p.images_url.is_empty());
    }

    #[test]
    fn decodes_empty_products_response() {
        let res: ProductsResponse = serde_json::from_str(r#"{"products":[]}"#).unwrap();
        assert!(res.products.is_empty());
    }

    #[test]
    fn decodes_login_response_and_ignores_extras() {
        let json = r#"{
            "success": true,
            "message": "登入成功",
            "token": "abc",
            "expired": "2030-01-01T00:00:00Z"
        }"#;
        let res: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(res.token, "abc");
        assert_eq!(res.expired, "2030-01-01T00:00:00Z");
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"帳號或密碼錯誤"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("帳號或密碼錯誤"));

        let body: ErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.message.is_none());
    }
}
