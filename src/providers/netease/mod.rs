//! 此模块实现了基于网易云音乐公开接口的 `LyricSource`。
//!
//! 只使用不需要加密参数的旧接口。所有网络和解析错误都在这里记录日志后转换为空结果。

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{
    Client,
    header::{COOKIE, HeaderMap, HeaderValue, REFERER, USER_AGENT},
};
use tracing::{debug, warn};

use crate::{
    error::{LyricsHelperError, Result},
    model::{
        generic::{Album, Artist},
        track::{RawLyrics, SearchResult},
    },
    providers::LyricSource,
};

pub mod models;

const BASE_URL_NETEASE: &str = "https://music.163.com";
const SEARCH_URL: &str = "https://music.163.com/api/search/get/";
const LYRIC_URL: &str = "https://music.163.com/api/song/lyric";

const PC_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
const LYRIC_COOKIE: &str = "appver=1.5.0.75771;";

/// 默认每次搜索返回的结果数量
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// 用于从网易云链接中提取歌曲 ID
static SONG_LINK_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"id=([0-9]+)").expect("未能编译 SONG_LINK_ID_REGEX"));

/// 网易云音乐的客户端实现。
#[derive(Debug, Clone)]
pub struct NeteaseClient {
    http_client: Client,
    search_limit: u32,
}

impl NeteaseClient {
    /// 创建一个新的 NeteaseClient 实例。
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(PC_USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(BASE_URL_NETEASE));

        let http_client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            http_client,
            search_limit: DEFAULT_SEARCH_LIMIT,
        })
    }

    /// 设置每次搜索返回的结果数量。
    #[must_use]
    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit;
        self
    }

    async fn try_search(&self, keyword: &str) -> Result<Vec<SearchResult>> {
        let limit = self.search_limit.to_string();
        let response_text = self
            .http_client
            .get(SEARCH_URL)
            .query(&[
                ("s", keyword),
                ("type", "1"), // 1 代表搜索单曲
                ("offset", "0"),
                ("total", "true"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_search_response(&response_text)
    }

    async fn try_fetch_lyrics(&self, song_id: u64) -> Result<RawLyrics> {
        let id = song_id.to_string();
        let response_text = self
            .http_client
            .get(LYRIC_URL)
            .header(COOKIE, HeaderValue::from_static(LYRIC_COOKIE))
            .query(&[
                ("os", "pc"),
                ("id", id.as_str()),
                ("lv", "-1"),
                ("kv", "-1"),
                ("tv", "-1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_lyric_response(&response_text)
    }
}

/// 解析搜索接口的响应文本。
///
/// `songCount` 为 0 时视为没有结果，即使 `songs` 字段里还有内容。
fn parse_search_response(response_text: &str) -> Result<Vec<SearchResult>> {
    if response_text.is_empty() {
        return Err(LyricsHelperError::ApiError(
            "搜索接口返回了空响应。".to_string(),
        ));
    }

    let resp: models::SearchResult = serde_json::from_str(response_text)?;
    if resp.code != 200 {
        return Err(LyricsHelperError::ApiError(format!(
            "搜索接口返回非 200 状态码: {}",
            resp.code
        )));
    }

    let Some(data) = resp.result.filter(|data| data.song_count > 0) else {
        return Ok(Vec::new());
    };
    Ok(data.songs.into_iter().map(SearchResult::from).collect())
}

/// 解析歌词接口的响应文本。
///
/// 空字符串的歌词原样保留为 `Some("")`，只有字段缺失或为 `null` 时才是 `None`。
fn parse_lyric_response(response_text: &str) -> Result<RawLyrics> {
    let resp: models::LyricResult = serde_json::from_str(response_text)?;
    if resp.code != 200 {
        return Err(LyricsHelperError::ApiError(format!(
            "歌词接口返回非 200 状态码: {}",
            resp.code
        )));
    }

    Ok(RawLyrics {
        original: resp.lrc.and_then(|d| d.lyric),
        translation: resp.tlyric.and_then(|d| d.lyric),
    })
}

#[async_trait]
impl LyricSource for NeteaseClient {
    fn name(&self) -> &'static str {
        "netease"
    }

    async fn search(&self, keyword: &str) -> Vec<SearchResult> {
        match self.try_search(keyword).await {
            Ok(results) => {
                debug!("网易云搜索 '{}' 返回 {} 个结果。", keyword, results.len());
                results
            }
            Err(e) => {
                warn!("网易云搜索 '{}' 失败: {}。按无结果处理。", keyword, e);
                Vec::new()
            }
        }
    }

    async fn fetch_lyrics(&self, song_id: u64) -> RawLyrics {
        self.try_fetch_lyrics(song_id)
            .await
            .unwrap_or_else(|e| {
                warn!("获取歌曲 {} 的歌词失败: {}。按无歌词处理。", song_id, e);
                RawLyrics::default()
            })
    }
}

impl From<models::Song> for SearchResult {
    fn from(song: models::Song) -> Self {
        SearchResult {
            id: song.id,
            name: song.name,
            duration_ms: song.duration,
            artists: song.artists.into_iter().map(Artist::from).collect(),
            album: song.album.map(Album::from).unwrap_or_default(),
        }
    }
}

impl From<models::Artist> for Artist {
    fn from(artist: models::Artist) -> Self {
        Artist {
            id: artist.id,
            name: artist.name.unwrap_or_default(),
        }
    }
}

impl From<models::Album> for Album {
    fn from(album: models::Album) -> Self {
        Album {
            id: album.id,
            name: album.name.unwrap_or_default(),
        }
    }
}

/// 从用户指定的文本中解析网易云歌曲 ID。
///
/// 支持两种写法：
/// * `netease=<id>`
/// * 任何包含 `music.163.com` 且带有 `id=<数字>` 参数的链接
///
/// 无法解析或 ID 为 0 时返回 `None`。
pub fn parse_song_link(input: &str) -> Option<u64> {
    let input = input.trim();

    let id = if let Some(rest) = input.strip_prefix("netease=") {
        rest.trim().parse::<u64>().ok()
    } else if input.contains("music.163.com") {
        SONG_LINK_ID_REGEX
            .captures(input)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
    } else {
        None
    };

    id.filter(|&id| id != 0)
}
