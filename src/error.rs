//! 定义了整个 `netease-lyrics` 库的错误类型 `LyricsHelperError`。
//!
//! 匹配与合并的核心逻辑本身不会失败（找不到结果用 `None` 表示），
//! 这里的错误只出现在边界上：网络请求、时长字符串转换和配置文件读写。

use std::io;
use thiserror::Error;

/// `netease-lyrics` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum LyricsHelperError {
    /// 网络请求失败 (源自 `reqwest::Error`)
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    /// API 返回错误或空数据
    #[error("API 错误: {0}")]
    ApiError(String),

    /// 无法识别的时长字符串
    #[error("无效的时长: '{0}'")]
    InvalidDuration(String),

    /// 找不到用户配置目录
    #[error("无法找到用户配置目录")]
    ConfigDirNotFound,
}

/// `LyricsHelperError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, LyricsHelperError>;
