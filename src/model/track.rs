//! 定义了与歌曲搜索和匹配相关的核心数据结构，包括搜索输入、候选结果和排序用的评分。

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    error::{LyricsHelperError, Result},
    model::generic::{Album, Artist},
};

/// 代表一首本地歌曲的元数据，用作匹配的输入参数。
#[derive(Default, Debug, Clone, Copy)]
pub struct Track<'a> {
    /// 歌曲标题。
    pub title: &'a str,
    /// 艺术家字段，可能包含多个艺术家和 feat. 子句。
    pub artist: &'a str,
    /// 专辑名。
    pub album: &'a str,
    /// 歌曲时长（毫秒）。
    pub duration_ms: u64,
}

/// 代表一个搜索结果条目，即一首候选歌曲。
///
/// 候选的身份只由 `id` 决定，两个 `id` 相同的条目被视为同一首歌，
/// 因此这里刻意没有派生 `PartialEq` 和 `Hash`，去重时请显式地按 `id` 处理。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// 在平台上的唯一数字 ID。
    pub id: u64,
    /// 歌曲名。
    pub name: String,
    /// 歌曲时长（毫秒）。
    pub duration_ms: u64,
    /// 演唱者列表，保持平台返回的顺序。
    pub artists: Vec<Artist>,
    /// 所属专辑。
    pub album: Album,
}

/// 带有匹配分数的候选。
///
/// 排序键为 `(score, id)` 升序，`id` 仅用于在分数完全相同时打破平局，
/// 保证排序是全序且结果确定。
#[derive(Debug, Clone, Copy)]
pub struct ScoredCandidate<'a> {
    /// 匹配分数，0 为完美匹配，越小越差。
    pub score: f64,
    /// 候选的 ID。
    pub id: u64,
    /// 候选本身。
    pub candidate: &'a SearchResult,
}

impl PartialEq for ScoredCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredCandidate<'_> {}

impl PartialOrd for ScoredCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredCandidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // 分数由有限值计算而来，不会出现 NaN
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.id.cmp(&other.id))
    }
}

/// 代表从提供商获取的、未经处理的原始歌词。
///
/// `None` 表示平台没有提供该部分，与空字符串的歌词是不同的两种情况。
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RawLyrics {
    /// 原文 LRC 歌词。
    pub original: Option<String>,
    /// 翻译 LRC 歌词。
    pub translation: Option<String>,
}

/// 将 `h:m:s` 形式的时长字符串转换为毫秒。
///
/// 从右往左解析，每一段的值为 `part * 60^position * 1000`，
/// 因此 `"3:45"` 和 `"0:03:45"` 都是 225000。
///
/// # 错误
/// 任意一段为空或不是非负整数时返回 `LyricsHelperError::InvalidDuration`。
pub fn parse_duration_ms(duration: &str) -> Result<u64> {
    let invalid = || LyricsHelperError::InvalidDuration(duration.to_string());

    let trimmed = duration.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }

    trimmed
        .rsplit(':')
        .enumerate()
        .try_fold(0u64, |total, (position, part)| {
            let value: u64 = part.trim().parse().map_err(|_| invalid())?;
            let multiplier = u32::try_from(position)
                .ok()
                .and_then(|exp| 60u64.checked_pow(exp))
                .ok_or_else(invalid)?;
            value
                .checked_mul(multiplier)
                .and_then(|v| v.checked_mul(1000))
                .and_then(|v| total.checked_add(v))
                .ok_or_else(invalid)
        })
}
