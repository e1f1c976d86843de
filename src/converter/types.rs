//! 定义了歌词解析与合并过程中使用的数据结构。

use std::fmt;

/// 一条只带有一个时间戳的歌词。
///
/// 输入中的一行可能带有多个时间戳，解析时会被展开为多条内容相同的 `LyricEntry`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricEntry {
    /// 规范化后的时间戳，固定为 `[mm:ss.xx]` 形式。
    pub time_label: String,
    /// 时间戳之后的歌词文本。
    pub content: String,
}

impl LyricEntry {
    /// 便捷构造函数。
    pub fn new(time_label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            time_label: time_label.into(),
            content: content.into(),
        }
    }
}

impl fmt::Display for LyricEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time_label, self.content)
    }
}

/// 一份由若干 `LyricEntry` 组成的歌词文档。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricDocument {
    /// 按出现顺序（或合并后按时间）排列的歌词条目。
    pub entries: Vec<LyricEntry>,
}

impl LyricDocument {
    /// 按时间戳的字符串序进行稳定排序。
    ///
    /// 时间戳是定宽且补零的，所以字符串序就是时间序。
    pub fn sort_by_time(&mut self) {
        self.entries.sort_by(|a, b| a.time_label.cmp(&b.time_label));
    }

    /// 文档是否为空。
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for LyricDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl From<Vec<LyricEntry>> for LyricDocument {
    fn from(entries: Vec<LyricEntry>) -> Self {
        Self { entries }
    }
}
