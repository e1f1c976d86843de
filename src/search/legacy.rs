//! 旧的匹配方式
//!
//! 用 "标题 艺术家" 和 "标题" 两种关键词搜索，只比较标题的第一个词。
//! 当时长或专辑信息缺失、错误时，新的打分方式可能会拒绝正确的结果，
//! 这个方式牺牲准确率换取召回率，需要用户在配置中主动选择。

use tracing::debug;

use crate::{
    model::track::SearchResult,
    providers::LyricSource,
    search::normalizer::{first_token, remove_feat_clause, strip_leading_number},
};

/// 先用原标题查询，找不到时去掉 feat 子句和曲目编号再查一次。
///
/// # 参数
/// * `source` - 数据源。
/// * `title` - 歌曲标题。
/// * `artist` - 艺术家字段，原样拼接进搜索关键词。
/// * `fuzzy` - 为 `true` 时不做标题校验，直接接受第一个结果。
///
/// # 返回
/// 匹配到的歌曲 ID，找不到时为 `None`。
pub async fn query_with_feat_removed(
    source: &dyn LyricSource,
    title: &str,
    artist: &str,
    fuzzy: bool,
) -> Option<u64> {
    if let Some(song) = query(source, title, artist, fuzzy).await {
        return Some(song.id);
    }

    let simplified = strip_leading_number(&remove_feat_clause(title));
    if simplified == title {
        debug!("标题 '{}' 无需简化，不再重复搜索。", title);
        return None;
    }

    debug!("使用简化后的标题 '{}' 重试。", simplified);
    query(source, &simplified, artist, fuzzy)
        .await
        .map(|song| song.id)
}

/// 依次搜索 "标题 艺术家" 和 "标题"，返回第一个通过校验的结果。
async fn query(
    source: &dyn LyricSource,
    title: &str,
    artist: &str,
    fuzzy: bool,
) -> Option<SearchResult> {
    for keyword in [format!("{title} {artist}"), title.to_string()] {
        let results = source.search(&keyword).await;
        debug!("旧匹配方式搜索 '{}' 得到 {} 个结果。", keyword, results.len());

        if let Some(hit) = results
            .into_iter()
            .find(|song| fuzzy || first_token_matches(&song.name, title))
        {
            return Some(hit);
        }
    }
    None
}

/// 比较候选名（去掉曲目编号后）和标题的第一个词，忽略大小写。
fn first_token_matches(candidate_name: &str, title: &str) -> bool {
    first_token(&strip_leading_number(candidate_name)).to_lowercase()
        == first_token(title).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::track::RawLyrics;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockSource {
        results: HashMap<String, Vec<SearchResult>>,
        queries: Mutex<Vec<String>>,
    }

    impl MockSource {
        fn with(mut self, keyword: &str, songs: &[(u64, &str)]) -> Self {
            self.results.insert(
                keyword.to_string(),
                songs
                    .iter()
                    .map(|(id, name)| SearchResult {
                        id: *id,
                        name: name.to_string(),
                        ..Default::default()
                    })
                    .collect(),
            );
            self
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LyricSource for MockSource {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn search(&self, keyword: &str) -> Vec<SearchResult> {
            self.queries.lock().unwrap().push(keyword.to_string());
            self.results.get(keyword).cloned().unwrap_or_default()
        }

        async fn fetch_lyrics(&self, _song_id: u64) -> RawLyrics {
            RawLyrics::default()
        }
    }

    #[test]
    fn test_first_token_matches() {
        assert!(first_token_matches("03. Hello World", "hello there"));
        assert!(first_token_matches("HELLO", "Hello (feat. X)"));
        assert!(!first_token_matches("Goodbye", "Hello"));
    }

    #[tokio::test]
    async fn test_fuzzy_returns_first_result() {
        let source = MockSource::default().with("Song Artist", &[(5, "Unrelated"), (6, "Song")]);
        let id = query_with_feat_removed(&source, "Song", "Artist", true).await;
        assert_eq!(id, Some(5));
    }

    #[tokio::test]
    async fn test_strict_filters_by_first_token() {
        let source = MockSource::default().with("Song Artist", &[(5, "Unrelated"), (6, "01 song")]);
        let id = query_with_feat_removed(&source, "Song", "Artist", false).await;
        assert_eq!(id, Some(6));
    }

    #[tokio::test]
    async fn test_falls_back_to_title_only_search() {
        let source = MockSource::default()
            .with("Song Artist", &[(5, "Unrelated")])
            .with("Song", &[(7, "Song")]);
        let id = query_with_feat_removed(&source, "Song", "Artist", false).await;
        assert_eq!(id, Some(7));
        assert_eq!(source.queries(), vec!["Song Artist", "Song"]);
    }

    #[tokio::test]
    async fn test_retries_with_simplified_title() {
        let source = MockSource::default().with("Song Artist", &[(9, "Song")]);
        let id = query_with_feat_removed(&source, "02. Song (feat. X)", "Artist", false).await;
        assert_eq!(id, Some(9));
        assert_eq!(
            source.queries(),
            vec![
                "02. Song (feat. X) Artist",
                "02. Song (feat. X)",
                "Song Artist"
            ]
        );
    }

    #[tokio::test]
    async fn test_no_match_returns_none_without_redundant_retry() {
        let source = MockSource::default();
        let id = query_with_feat_removed(&source, "Song", "Artist", true).await;
        assert_eq!(id, None);
        assert_eq!(source.queries(), vec!["Song Artist", "Song"]);
    }
}
