//! 构建时 API 配置
//!
//! 对应部署环境的 `STOREDESK_API_BASE` / `STOREDESK_API_PATH` 环境变量，
//! 编译期通过 `option_env!` 注入；未设置时回退到课程 API 的默认值。

/// 默认 API 基地址
const DEFAULT_API_BASE: &str = "https://ec-course-api.hexschool.io/v2";

/// 默认资源路径前缀（请自行替换为自己的 API_PATH）
const DEFAULT_API_PATH: &str = "storedesk";

/// API 访问配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    /// 基地址，不含结尾斜杠
    pub base_url: &'static str,
    /// 资源路径前缀，嵌入产品列表端点
    pub api_path: &'static str,
}

/// 读取构建时注入的 API 配置
pub fn api_config() -> ApiConfig {
    ApiConfig {
        base_url: option_env!("STOREDESK_API_BASE").unwrap_or(DEFAULT_API_BASE),
        api_path: option_env!("STOREDESK_API_PATH").unwrap_or(DEFAULT_API_PATH),
    }
}
