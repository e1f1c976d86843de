//! 匹配算法模块，计算查询与候选之间的“距离”分数

use strsim::levenshtein;

use crate::model::track::SearchResult;

/// 标题编辑距离的权重
pub const TITLE_WEIGHT: f64 = 2.0;
/// 艺术家编辑距离的权重
pub const ARTIST_WEIGHT: f64 = 0.7;
/// 专辑编辑距离的权重
pub const ALBUM_WEIGHT: f64 = 1.0;

/// 计算候选与查询之间的匹配分数。
///
/// 分数是负的“距离”：0 表示完美匹配，其余情况均为负数，越大越好。
///
/// ```text
/// 距离 = 时长差(秒)^2 + 标题距离 * 2 + 艺术家距离 * 0.7 + 专辑距离 * 1
/// ```
///
/// 时长是最不容易出错的信息，差距超过几秒时应该起到“一票否决”的效果，
/// 所以取平方；但如果所有候选的时长都对不上，差得最少的那个仍然可以胜出。
///
/// # 参数
/// * `candidate` - 待评分的候选。
/// * `title` - 去掉 feat 子句后的标题。
/// * `artists` - 排好序并以空格连接的艺术家。
/// * `album` - 专辑名。
/// * `duration_ms` - 本地歌曲时长（毫秒）。
pub fn score_candidate(
    candidate: &SearchResult,
    title: &str,
    artists: &str,
    album: &str,
    duration_ms: u64,
) -> f64 {
    let mut candidate_artists: Vec<&str> =
        candidate.artists.iter().map(|a| a.name.as_str()).collect();
    candidate_artists.sort_unstable();
    let candidate_artists = candidate_artists.join(" ");

    let duration_diff = duration_ms as f64 / 1000.0 - candidate.duration_ms as f64 / 1000.0;

    let mut score = -(duration_diff * duration_diff);
    score -= levenshtein(title, &candidate.name) as f64 * TITLE_WEIGHT;
    score -= levenshtein(artists, &candidate_artists) as f64 * ARTIST_WEIGHT;
    score -= levenshtein(album, &candidate.album.name) as f64 * ALBUM_WEIGHT;
    score
}
