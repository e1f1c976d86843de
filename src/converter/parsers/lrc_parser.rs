//! # LRC 格式解析器
//!
//! 将原始 LRC 文本解析为单时间戳的 `LyricEntry` 列表。
//! 歌词源的格式经常不一致，因此无法识别的行会被直接跳过。

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::converter::{
    types::{LyricDocument, LyricEntry},
    utils::format_time_label,
};

/// 用于匹配一个完整的 LRC 歌词行，捕获开头的时间戳组和之后的文本
static LRC_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:\[[0-9]+:[0-9]+(?:[.:][0-9]+)?\])+)(.+)$")
        .expect("未能编译 LRC_LINE_REGEX")
});

/// 用于从一个时间戳组中提取出单个时间戳
static LRC_TIMESTAMP_EXTRACT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([0-9]+):([0-9]+)(?:[.:]([0-9]+))?\]")
        .expect("未能编译 LRC_TIMESTAMP_EXTRACT_REGEX")
});

/// 解析 LRC 文本。
///
/// 每一行开头的多个时间戳会被展开为多条内容相同的条目，时间戳统一转换为
/// `[mm:ss.xx]` 形式。返回的条目保持在输入中出现的顺序，尚未排序。
pub fn parse_lrc(content: &str) -> LyricDocument {
    let mut entries = Vec::new();

    for (line_num_zero_based, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let Some(line_caps) = LRC_LINE_REGEX.captures(line) else {
            trace!(
                "LRC 解析: 跳过无法识别的第 {} 行 '{}'",
                line_num_zero_based + 1,
                line
            );
            continue;
        };
        let (Some(timestamps), Some(text)) = (line_caps.get(1), line_caps.get(2)) else {
            continue;
        };

        for ts_cap in LRC_TIMESTAMP_EXTRACT_REGEX.captures_iter(timestamps.as_str()) {
            let minutes = ts_cap.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            let seconds = ts_cap.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
            let fraction = ts_cap.get(3).map_or("", |m| m.as_str());

            let label = minutes
                .zip(seconds)
                .and_then(|(min, sec)| format_time_label(min, sec, fraction));
            if let Some(label) = label {
                entries.push(LyricEntry::new(label, text.as_str()));
            } else {
                trace!(
                    "LRC 解析: 第 {} 行的时间戳 '{}' 超出范围",
                    line_num_zero_based + 1,
                    ts_cap.get(0).map_or("", |m| m.as_str())
                );
            }
        }
    }

    LyricDocument::from(entries)
}
