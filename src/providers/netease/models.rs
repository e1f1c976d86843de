//! 此模块定义了用于反序列化网易云音乐 API 响应的 `struct` 数据结构。

use serde::Deserialize;

// =================================================================
// 搜索接口 (`/api/search/get/`) 的模型
// =================================================================

/// 搜索 API 的顶层响应结构。
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    /// API 返回码，通常 `200` 表示成功。
    pub code: i32,
    /// 包含搜索结果的容器。没有结果时可能缺失。
    #[serde(default)]
    pub result: Option<SearchResultData>,
}

/// 搜索结果的数据部分。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultData {
    /// 匹配到的歌曲对象列表。
    #[serde(default)]
    pub songs: Vec<Song>,
    /// 匹配到的歌曲总数。
    #[serde(default)]
    pub song_count: u32,
}

/// 搜索结果中的一首歌曲。
///
/// 旧接口使用 `artists`/`album`/`duration`，新接口使用 `ar`/`al`/`dt`，这里两者都接受。
#[derive(Debug, Deserialize)]
pub struct Song {
    /// 歌曲的数字 ID。
    pub id: u64,
    /// 歌曲名。
    pub name: String,
    /// 演唱者列表。
    #[serde(default, alias = "ar")]
    pub artists: Vec<Artist>,
    /// 所属专辑。
    #[serde(default, alias = "al")]
    pub album: Option<Album>,
    /// 时长（毫秒）。
    #[serde(default, alias = "dt")]
    pub duration: u64,
}

/// 艺术家信息。
#[derive(Debug, Deserialize)]
pub struct Artist {
    /// 艺术家的数字 ID。
    #[serde(default)]
    pub id: u64,
    /// 艺术家姓名，偶尔为 `null`。
    pub name: Option<String>,
}

/// 专辑信息。
#[derive(Debug, Deserialize)]
pub struct Album {
    /// 专辑的数字 ID。
    #[serde(default)]
    pub id: u64,
    /// 专辑名，偶尔为 `null`。
    pub name: Option<String>,
}

// =================================================================
// 歌词接口 (`/api/song/lyric`) 的模型
// =================================================================

/// 歌词接口的顶层响应结构。
#[derive(Debug, Deserialize)]
pub struct LyricResult {
    /// API 返回码，`200` 表示成功。
    pub code: i32,
    /// 原文 LRC 歌词。
    pub lrc: Option<LyricData>,
    /// 翻译 LRC 歌词。
    pub tlyric: Option<LyricData>,
}

/// 单一歌词内容的数据结构。
#[derive(Debug, Deserialize)]
pub struct LyricData {
    /// 歌词文本内容。
    pub lyric: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_search_response() {
        let json = r#"{
            "result": {
                "songs": [{
                    "id": 1901371647,
                    "name": "晴天",
                    "artists": [{ "id": 6452, "name": "周杰伦" }],
                    "album": { "id": 18905, "name": "叶惠美" },
                    "duration": 269000
                }],
                "songCount": 1
            },
            "code": 200
        }"#;
        let resp: SearchResult = serde_json::from_str(json).unwrap();
        let data = resp.result.unwrap();
        assert_eq!(data.song_count, 1);
        assert_eq!(data.songs[0].duration, 269000);
        assert_eq!(data.songs[0].artists[0].name.as_deref(), Some("周杰伦"));
    }

    #[test]
    fn test_deserialize_cloudsearch_style_song() {
        let json = r#"{ "id": 1, "name": "x", "ar": [{ "id": 2, "name": null }], "al": { "id": 3, "name": "y" }, "dt": 1000 }"#;
        let song: Song = serde_json::from_str(json).unwrap();
        assert_eq!(song.duration, 1000);
        assert_eq!(song.artists[0].name, None);
        assert_eq!(song.album.unwrap().name.as_deref(), Some("y"));
    }

    #[test]
    fn test_deserialize_empty_search_response() {
        let resp: SearchResult = serde_json::from_str(r#"{ "result": {}, "code": 200 }"#).unwrap();
        assert!(resp.result.unwrap().songs.is_empty());
    }

    #[test]
    fn test_deserialize_lyric_without_translation() {
        let json = r#"{ "lrc": { "version": 3, "lyric": "[00:01.00]a" }, "code": 200 }"#;
        let resp: LyricResult = serde_json::from_str(json).unwrap();
        assert!(resp.tlyric.is_none());
        assert_eq!(resp.lrc.unwrap().lyric.as_deref(), Some("[00:01.00]a"));
    }
}
