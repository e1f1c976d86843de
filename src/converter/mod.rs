//! 歌词合并核心模块
//!
//! 把原文和翻译两份 LRC 按时间戳对齐，生成一份合并后的 LRC。

pub mod parsers;
pub mod types;
pub mod utils;

use std::collections::HashMap;

use tracing::debug;

pub use types::{LyricDocument, LyricEntry};

use crate::{config::OutputFormat, converter::parsers::lrc_parser::parse_lrc, model::track::RawLyrics};

/// 原文与翻译之间的分隔符
pub const TRANSLATION_SEPARATOR: &str = "/";

/// 将翻译注入到原文歌词中。
///
/// 对于原文中的每一条，如果翻译中有时间戳完全相同的条目，
/// 就在原文内容后面追加 `/` 和翻译内容。翻译中同一时间戳出现多次时只使用第一条；
/// 没有对应原文的翻译行会被丢弃。
///
/// # 参数
/// * `original` - 原文 LRC 文本。
/// * `translation` - 翻译 LRC 文本。
///
/// # 返回
/// 按时间排序、以换行连接的合并结果。
pub fn inject_translation(original: &str, translation: &str) -> String {
    let mut merged = parse_lrc(original);
    let translation = parse_lrc(translation);

    let mut translation_by_time: HashMap<&str, &str> = HashMap::new();
    for entry in &translation.entries {
        translation_by_time
            .entry(entry.time_label.as_str())
            .or_insert(entry.content.as_str());
    }

    let mut matched = 0usize;
    for entry in &mut merged.entries {
        if let Some(text) = translation_by_time.get(entry.time_label.as_str()) {
            entry.content.push_str(TRANSLATION_SEPARATOR);
            entry.content.push_str(text);
            matched += 1;
        }
    }

    debug!(
        "合并完成: 原文 {} 条，翻译 {} 条，其中 {} 条成功对齐。",
        merged.entries.len(),
        translation.entries.len(),
        matched
    );

    merged.sort_by_time();
    merged.to_string()
}

/// 按输出格式生成最终的歌词文本。
///
/// # 返回
/// * `None` - 没有原文歌词。即使有翻译也不会单独使用。
/// * 没有翻译或格式为 `Original` 时，原样返回原文。
/// * 格式为 `Translation` 时，原样返回翻译。
/// * 格式为 `Both` 时，返回 [`inject_translation`] 的合并结果。
pub fn render_lyrics(raw: &RawLyrics, format: OutputFormat) -> Option<String> {
    let original = raw.original.as_deref()?;

    let Some(translation) = raw.translation.as_deref() else {
        return Some(original.to_string());
    };

    match format {
        OutputFormat::Original => Some(original.to_string()),
        OutputFormat::Translation => Some(translation.to_string()),
        OutputFormat::Both => Some(inject_translation(original, translation)),
    }
}
