#![warn(missing_docs)]

//! # Netease Lyrics RS
//!
//! 为本地歌曲在网易云音乐中查找对应的曲目，并下载、合并其原文与翻译歌词。
//!
//! ## 主要功能
//!
//! - **歌曲匹配**: 清洗本地的标题和艺术家字段，多关键词搜索，按编辑距离和时长差打分选出最佳候选。
//! - **歌词合并**: 将原文 LRC 与翻译 LRC 按时间戳对齐，输出 `原文/翻译` 形式的 LRC。
//! - **旧版匹配**: 保留一个只比较标题首词的简单策略，可通过配置切换。
//!
//! ## 获取歌词
//!
//! ```rust,no_run
//! use netease_lyrics_rs::{LyricsConfig, LyricsHelper, Track};
//! use netease_lyrics_rs::providers::netease::NeteaseClient;
//!
//! async {
//!     let client = NeteaseClient::new().unwrap();
//!     let helper = LyricsHelper::new(Box::new(client), LyricsConfig::default());
//!
//!     let track = Track {
//!         title: "明天见",
//!         artist: "小蓝背心",
//!         album: "",
//!         duration_ms: 215_000,
//!     };
//!     match helper.retrieve_lyrics(&track, None).await {
//!         Some(lyrics) => println!("获取歌词成功！共 {} 行。", lyrics.lines().count()),
//!         None => println!("未找到任何可用的歌词。"),
//!     }
//! };
//! ```
//!
//! ## 合并翻译
//!
//! ```rust
//! use netease_lyrics_rs::converter::inject_translation;
//!
//! let merged = inject_translation(
//!     "[00:01.00]Hello\n[00:02.00]World",
//!     "[00:01.00]你好",
//! );
//! assert_eq!(merged, "[00:01.00]Hello/你好\n[00:02.00]World");
//! ```
pub mod config;
pub mod converter;
pub mod error;
pub mod model;
pub mod providers;
pub mod search;

use tracing::{info, warn};

pub use crate::{
    config::{LyricsConfig, MatchMode, OutputFormat},
    error::{LyricsHelperError, Result},
    model::track::{RawLyrics, SearchResult, Track},
    providers::LyricSource,
};

use crate::{converter::render_lyrics, providers::netease::parse_song_link, search::strategy_for};

// ==========================================================
//  顶层 API
// ==========================================================

/// 顶层歌词助手，封装了一个数据源和一份配置，为调用方提供统一、简单的接口。
///
/// 这是与本库交互的主要入口点。
pub struct LyricsHelper {
    source: Box<dyn LyricSource>,
    config: LyricsConfig,
}

impl LyricsHelper {
    /// 使用给定的数据源和配置创建 `LyricsHelper`。
    pub fn new(source: Box<dyn LyricSource>, config: LyricsConfig) -> Self {
        Self { source, config }
    }

    /// 当前使用的配置。
    pub fn config(&self) -> &LyricsConfig {
        &self.config
    }

    /// 按配置中的匹配模式为歌曲查找最佳匹配的 ID。
    pub async fn find_song_id(&self, track: &Track<'_>) -> Option<u64> {
        let strategy = strategy_for(&self.config);
        info!(
            "使用 '{}' 策略在 '{}' 中匹配 '{}'",
            strategy.name(),
            self.source.name(),
            track.title
        );
        strategy.find_match(self.source.as_ref(), track).await
    }

    /// 为歌曲获取最终的歌词文本。
    ///
    /// # 参数
    /// * `track` - 本地歌曲的元数据。
    /// * `specified_id` - 用户手动指定的歌曲，格式见 [`parse_song_link`]。
    ///   能解析出 ID 时跳过搜索，直接使用该 ID。
    ///
    /// # 返回
    /// 按配置的输出格式生成的歌词。找不到歌曲或歌曲没有原文歌词时返回 `None`。
    pub async fn retrieve_lyrics(
        &self,
        track: &Track<'_>,
        specified_id: Option<&str>,
    ) -> Option<String> {
        let specified = specified_id.and_then(|s| {
            let id = parse_song_link(s);
            if id.is_none() && !s.trim().is_empty() {
                warn!("无法从 '{}' 中解析出歌曲 ID，改为自动搜索。", s);
            }
            id
        });

        let song_id = match specified {
            Some(id) => {
                info!("使用手动指定的歌曲 ID: {}", id);
                id
            }
            None => {
                let Some(id) = self.find_song_id(track).await else {
                    info!("没有为 '{}' 找到匹配的歌曲。", track.title);
                    return None;
                };
                id
            }
        };

        let raw = self.source.fetch_lyrics(song_id).await;
        let lyrics = render_lyrics(&raw, self.config.format);
        if lyrics.is_none() {
            info!("歌曲 {} 没有原文歌词。", song_id);
        }
        lyrics
    }
}
