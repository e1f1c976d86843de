//! 提供商模块
//!
//! 该模块定义了匹配与合并逻辑所依赖的外部数据源抽象。

use async_trait::async_trait;

use crate::model::track::{RawLyrics, SearchResult};

pub mod netease;

/// 定义了歌词数据源需要实现的接口。
///
/// 实现者自行处理网络错误和重试：任何失败都应表现为空结果，
/// 匹配逻辑只会把“空结果”当作失败信号。
#[async_trait]
pub trait LyricSource: Send + Sync {
    ///
    /// 返回数据源的唯一名称。
    ///
    /// 一个全小写的静态字符串，例如 `"netease"`。
    ///
    fn name(&self) -> &'static str;

    ///
    /// 用关键词搜索歌曲。
    ///
    /// # 参数
    /// * `keyword` - 完整的搜索关键词。
    ///
    /// # 返回
    /// 搜索到的歌曲列表。网络失败或没有结果时返回空列表，而不是错误。
    ///
    async fn search(&self, keyword: &str) -> Vec<SearchResult>;

    ///
    /// 根据歌曲 ID 获取原始的原文和翻译歌词。
    ///
    /// # 参数
    /// * `song_id` - 平台上的歌曲 ID。
    ///
    /// # 返回
    /// 一个 `RawLyrics`，缺失的部分为 `None`。请求失败时两部分都为 `None`。
    ///
    async fn fetch_lyrics(&self, song_id: u64) -> RawLyrics;
}
