//! Cookie 封装模块
//!
//! 使用 `web_sys::HtmlDocument` 读写 `document.cookie`，
//! 提供简洁的会话 cookie 存取接口。

use wasm_bindgen::JsCast;

/// Cookie 存取封装
///
/// 提供静态方法访问浏览器 cookie。
pub struct CookieJar;

impl CookieJar {
    /// 获取 HtmlDocument 实例
    fn document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    /// 读取指定名称的 cookie 值
    ///
    /// # 返回
    /// - `Some(String)` 如果存在
    /// - `None` 如果不存在或发生错误
    pub fn get(name: &str) -> Option<String> {
        let raw = Self::document()?.cookie().ok()?;
        find_cookie(&raw, name)
    }

    /// 写入 cookie
    ///
    /// # 参数
    /// - `name`: cookie 名称
    /// - `value`: cookie 值
    /// - `expires_utc`: UTC 格式的过期时间字符串
    ///
    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果操作失败
    pub fn set(name: &str, value: &str, expires_utc: &str) -> bool {
        Self::document()
            .and_then(|d| {
                d.set_cookie(&format!(
                    "{}={}; expires={}; path=/",
                    name, value, expires_utc
                ))
                .ok()
            })
            .is_some()
    }

    /// 把服务端返回的日期字符串转换为 cookie 可用的 UTC 格式
    ///
    /// 解析交给 `js_sys::Date`，无法解析时产生 "Invalid Date"，
    /// 与浏览器 `new Date(...)` 的行为一致。
    pub fn expires_from(datetime: &str) -> String {
        let date = js_sys::Date::new(&datetime.into());
        String::from(date.to_utc_string())
    }
}

/// 从 `document.cookie` 原始字符串中解析指定名称的值
pub(crate) fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim_start().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::find_cookie;

    #[test]
    fn finds_token_among_other_cookies() {
        let raw = "theme=dark; react-week2-token=abc123; lang=zh-TW";
        assert_eq!(
            find_cookie(raw, "react-week2-token").as_deref(),
            Some("abc123")
        );
    }

    #[test]
    fn returns_none_when_absent() {
        assert_eq!(find_cookie("", "react-week2-token"), None);
        assert_eq!(find_cookie("theme=dark", "react-week2-token"), None);
    }

    #[test]
    fn name_match_is_exact() {
        // 前缀相同的别名不应命中
        let raw = "react-week2-token-old=zzz; react-week2-token=abc";
        assert_eq!(
            find_cookie(raw, "react-week2-token").as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn value_may_contain_equals_sign() {
        let raw = "react-week2-token=eyJhbGci=="; // base64 padding
        assert_eq!(
            find_cookie(raw, "react-week2-token").as_deref(),
            Some("eyJhbGci==")
        );
    }
}
