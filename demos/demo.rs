//! 用于演示 `netease-lyrics` 库的核心功能。
//!
//! ## 如何运行
//!
//! ```bash
//! cargo run --example demo -- "打上花火" "DAOKO / 米津玄師" "打上花火" 289000 both
//! ```
//!
//! 第六个参数可以是 `netease=<id>` 或网易云歌曲链接，用于跳过搜索。

use std::str::FromStr;

use netease_lyrics_rs::error::Result;
use netease_lyrics_rs::model::track::parse_duration_ms;
use netease_lyrics_rs::providers::netease::NeteaseClient;
use netease_lyrics_rs::{LyricsConfig, LyricsHelper, OutputFormat, Track};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg = |i: usize, default: &'static str| args.get(i).map_or(default, String::as_str);

    let title = arg(0, "有点甜");
    let artist = arg(1, "汪苏泷 / BY2");
    let album = arg(2, "万有引力");
    // 时长可以写成毫秒数，也可以写成 mm:ss
    let duration_text = arg(3, "235000");
    let duration_ms = match duration_text.parse::<u64>() {
        Ok(ms) => ms,
        Err(_) => parse_duration_ms(duration_text)?,
    };

    let mut config = LyricsConfig::load().unwrap_or_else(|e| {
        warn!("读取配置失败: {}，使用默认配置。", e);
        LyricsConfig::default()
    });
    if let Some(format) = args.get(4) {
        match OutputFormat::from_str(format) {
            Ok(format) => config.format = format,
            Err(_) => warn!("未知的输出格式 '{}'，使用 '{}'。", format, config.format),
        }
    }
    let specified_id = args.get(5).map(String::as_str);

    let track = Track {
        title,
        artist,
        album,
        duration_ms,
    };
    info!("准备搜索歌曲: '{}' - '{}'", track.title, track.artist);

    let helper = LyricsHelper::new(Box::new(NeteaseClient::new()?), config);
    match helper.retrieve_lyrics(&track, specified_id).await {
        Some(lyrics) => println!("{lyrics}"),
        None => error!("没有找到可用的歌词。"),
    }

    Ok(())
}
