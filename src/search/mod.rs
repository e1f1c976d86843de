//! 搜索模块
//!
//! 根据本地歌曲的元数据在数据源中搜索，并从候选中选出最匹配的歌曲 ID。
//! 有两种策略可选，见 [`MatchStrategy`]。

use std::collections::HashSet;

use async_trait::async_trait;
use futures::future;
use tracing::{debug, info};

use crate::{
    config::{LyricsConfig, MatchMode},
    model::track::{ScoredCandidate, SearchResult, Track},
    providers::LyricSource,
};

pub mod legacy;
pub mod matcher;
pub mod normalizer;

use matcher::score_candidate;
use normalizer::split_title_artist;

/// 在数据源中为一首歌找到最匹配的歌曲 ID 的策略。
#[async_trait]
pub trait MatchStrategy: Send + Sync {
    /// 策略名称，用于日志。
    fn name(&self) -> &'static str;

    /// 搜索并返回最佳匹配的歌曲 ID，找不到时返回 `None`。
    async fn find_match(&self, source: &dyn LyricSource, track: &Track<'_>) -> Option<u64>;
}

/// 多次搜索、按距离公式打分的匹配策略。
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoredMatcher;

/// 旧的匹配策略，只比较标题的第一个词。
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyMatcher {
    /// 为 `true` 时直接接受第一个搜索结果。
    pub fuzzy: bool,
}

#[async_trait]
impl MatchStrategy for ScoredMatcher {
    fn name(&self) -> &'static str {
        "scored"
    }

    async fn find_match(&self, source: &dyn LyricSource, track: &Track<'_>) -> Option<u64> {
        search_and_match(source, track).await
    }
}

#[async_trait]
impl MatchStrategy for LegacyMatcher {
    fn name(&self) -> &'static str {
        "legacy"
    }

    async fn find_match(&self, source: &dyn LyricSource, track: &Track<'_>) -> Option<u64> {
        legacy::query_with_feat_removed(source, track.title, track.artist, self.fuzzy).await
    }
}

/// 根据配置创建对应的匹配策略。
pub fn strategy_for(config: &LyricsConfig) -> Box<dyn MatchStrategy> {
    match config.match_mode {
        MatchMode::Scored => Box::new(ScoredMatcher),
        MatchMode::Legacy => Box::new(LegacyMatcher {
            fuzzy: config.fuzzy,
        }),
    }
}

/// 搜索并选出与歌曲最匹配的候选。
///
/// 依次使用 "标题"、"标题 艺术家"、"标题 艺术家 专辑" 三个关键词并发搜索，
/// 按 ID 去重后逐一打分，返回分数最高者的 ID。
///
/// # 参数
/// * `source` - 数据源。
/// * `track` - 本地歌曲的元数据。
///
/// # 返回
/// 最佳匹配的歌曲 ID。三次搜索都没有结果时返回 `None`。
pub async fn search_and_match(source: &dyn LyricSource, track: &Track<'_>) -> Option<u64> {
    let (title, artists) = split_title_artist(track.title, track.artist);
    let artists = artists.join(" ");

    info!(
        "开始在 '{}' 中搜索歌曲 '{}' by '{}' (专辑: '{}', 时长: {}ms)",
        source.name(),
        title,
        artists,
        track.album,
        track.duration_ms
    );

    let keywords = [
        title.clone(),
        format!("{title} {artists}"),
        format!("{title} {artists} {}", track.album),
    ];
    let batches = future::join_all(keywords.iter().map(|k| source.search(k))).await;

    let candidates = dedup_by_id(batches);
    info!("搜索完毕，共收集到 {} 个不重复的候选。", candidates.len());

    select_best(&candidates, &title, &artists, track.album, track.duration_ms)
}

/// 合并多批搜索结果并按 ID 去重，相同 ID 时保留最先出现的那一个。
pub fn dedup_by_id(batches: impl IntoIterator<Item = Vec<SearchResult>>) -> Vec<SearchResult> {
    let mut seen_ids = HashSet::new();
    batches
        .into_iter()
        .flatten()
        .filter(|song| seen_ids.insert(song.id))
        .collect()
}

/// 对候选逐一打分并按 `(分数, ID)` 升序排列。
pub fn rank_candidates<'a>(
    candidates: &'a [SearchResult],
    title: &str,
    artists: &str,
    album: &str,
    duration_ms: u64,
) -> Vec<ScoredCandidate<'a>> {
    let mut ranked: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|candidate| ScoredCandidate {
            score: score_candidate(candidate, title, artists, album, duration_ms),
            id: candidate.id,
            candidate,
        })
        .collect();
    ranked.sort();
    ranked
}

/// 从候选中选出分数最高的一个，分数相同时取 ID 较大者。
///
/// # 参数
/// * `candidates` - 已去重的候选列表。
/// * `title` - 去掉 feat 子句后的标题。
/// * `artists` - 排好序并以空格连接的艺术家。
/// * `album` - 专辑名。
/// * `duration_ms` - 本地歌曲时长（毫秒）。
pub fn select_best(
    candidates: &[SearchResult],
    title: &str,
    artists: &str,
    album: &str,
    duration_ms: u64,
) -> Option<u64> {
    let ranked = rank_candidates(candidates, title, artists, album, duration_ms);

    debug!(
        "候选排名 (分数, ID, 名称): {:?}",
        ranked
            .iter()
            .rev()
            .map(|s| (s.score, s.id, &s.candidate.name))
            .collect::<Vec<_>>()
    );

    let best = ranked.last()?;
    info!(
        "最佳匹配: '{}' (ID: {}, 分数: {:.2})",
        best.candidate.name, best.id, best.score
    );
    Some(best.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::generic::{Album, Artist};
    use crate::model::track::RawLyrics;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tracing_test::traced_test;

    fn song(id: u64, name: &str, artist: &str, album: &str, duration_ms: u64) -> SearchResult {
        SearchResult {
            id,
            name: name.to_string(),
            duration_ms,
            artists: vec![Artist::new(id * 10, artist)],
            album: Album::new(id * 100, album),
        }
    }

    #[derive(Default)]
    struct MockSource {
        results: HashMap<String, Vec<SearchResult>>,
        queries: Mutex<Vec<String>>,
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

    fn overlapping_source() -> MockSource {
        let mut results = HashMap::new();
        results.insert(
            "Lemon".to_string(),
            vec![
                song(1, "Lemon", "米津玄師", "Lemon", 255_000),
                song(2, "Lemon (Cover)", "Someone", "Covers", 250_000),
                song(3, "Lemon Tree", "Fool's Garden", "Dish of the Day", 191_000),
            ],
        );
        results.insert(
            "Lemon 米津玄師".to_string(),
            vec![
                song(1, "Lemon", "米津玄師", "Lemon", 255_000),
                song(4, "Lemon (Live)", "米津玄師", "Live", 262_000),
            ],
        );
        results.insert(
            "Lemon 米津玄師 Lemon".to_string(),
            vec![
                song(4, "Lemon (Live)", "米津玄師", "Live", 262_000),
                song(1, "Lemon", "米津玄師", "Lemon", 255_000),
            ],
        );
        MockSource {
            results,
            ..Default::default()
        }
    }

    fn lemon() -> Track<'static> {
        Track {
            title: "Lemon",
            artist: "米津玄師",
            album: "Lemon",
            duration_ms: 255_000,
        }
    }

    #[test]
    fn test_dedup_by_id_keeps_first_seen() {
        let batches = vec![
            vec![song(1, "A", "x", "x", 0), song(2, "B", "x", "x", 0)],
            vec![song(2, "B-dup", "y", "y", 1), song(3, "C", "x", "x", 0)],
            vec![song(1, "A-dup", "y", "y", 1)],
        ];
        let unique = dedup_by_id(batches);

        let ids: Vec<u64> = unique.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(unique[1].name, "B", "相同 ID 时应保留先出现的条目");
    }

    #[test]
    fn test_select_best_empty() {
        assert_eq!(select_best(&[], "t", "a", "b", 0), None);
    }

    #[test]
    fn test_select_best_breaks_ties_by_larger_id() {
        let candidates = vec![
            song(8, "Same", "A", "B", 1000),
            song(42, "Same", "A", "B", 1000),
            song(15, "Same", "A", "B", 1000),
        ];
        assert_eq!(select_best(&candidates, "Same", "A", "B", 1000), Some(42));
    }

    #[test]
    fn test_select_best_least_bad_duration_wins() {
        let candidates = vec![
            song(1, "Song", "A", "B", 100_000),
            song(2, "Song", "A", "B", 400_000),
        ];
        assert_eq!(select_best(&candidates, "Song", "A", "B", 300_000), Some(2));
    }

    #[test]
    fn test_rank_candidates_is_sorted_ascending() {
        let candidates = vec![
            song(1, "Song", "A", "B", 200_000),
            song(2, "Sang", "A", "B", 200_000),
            song(3, "Something else", "Z", "Q", 100_000),
        ];
        let ranked = rank_candidates(&candidates, "Song", "A", "B", 200_000);
        let ids: Vec<u64> = ranked.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(ranked.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn test_search_and_match_issues_three_queries() {
        let source = overlapping_source();
        let id = search_and_match(&source, &lemon()).await;
        assert_eq!(id, Some(1));

        let mut queries = source.queries.lock().unwrap().clone();
        queries.sort();
        assert_eq!(
            queries,
            vec!["Lemon", "Lemon 米津玄師", "Lemon 米津玄師 Lemon"]
        );
    }

    #[tokio::test]
    async fn test_search_and_match_dedup_count() {
        let source = overlapping_source();
        let batches = vec![
            source.search("Lemon").await,
            source.search("Lemon 米津玄師").await,
            source.search("Lemon 米津玄師 Lemon").await,
        ];
        assert_eq!(dedup_by_id(batches).len(), 4);
    }

    #[tokio::test]
    async fn test_search_and_match_is_deterministic() {
        let source = overlapping_source();
        let first = search_and_match(&source, &lemon()).await;
        for _ in 0..5 {
            assert_eq!(search_and_match(&source, &lemon()).await, first);
        }
    }

    #[tokio::test]
    async fn test_search_and_match_no_candidates() {
        let source = MockSource::default();
        assert_eq!(search_and_match(&source, &lemon()).await, None);
    }

    #[tokio::test]
    async fn test_search_and_match_moves_feat_into_artists() {
        let mut results = HashMap::new();
        results.insert(
            "Stay A B".to_string(),
            vec![song(5, "Stay", "A", "Album", 180_000)],
        );
        let source = MockSource {
            results,
            ..Default::default()
        };
        let track = Track {
            title: "Stay (feat. B)",
            artist: "A",
            album: "Album",
            duration_ms: 180_000,
        };

        assert_eq!(search_and_match(&source, &track).await, Some(5));
        let queries = source.queries.lock().unwrap().clone();
        assert!(queries.contains(&"Stay".to_string()));
        assert!(queries.contains(&"Stay A B Album".to_string()));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_strategy_for_config() {
        let source = overlapping_source();

        let scored = strategy_for(&LyricsConfig::default());
        assert_eq!(scored.name(), "scored");
        assert_eq!(scored.find_match(&source, &lemon()).await, Some(1));
        assert!(logs_contain("最佳匹配"));

        let legacy = strategy_for(&LyricsConfig {
            match_mode: MatchMode::Legacy,
            fuzzy: true,
            ..Default::default()
        });
        assert_eq!(legacy.name(), "legacy");
        // 旧策略先搜 "Lemon 米津玄師"，模糊模式直接取第一个
        assert_eq!(legacy.find_match(&source, &lemon()).await, Some(1));
    }
}
