//! 负责处理歌词获取流程的配置及其持久化。
//!
//! 配置总是以 `LyricsConfig` 的形式显式传入匹配器和合并入口，
//! 不存在全局的可变状态。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::info;

use crate::error::{LyricsHelperError, Result};

const CONFIG_DIR_NAME: &str = "netease-lyrics";
const CONFIG_FILENAME: &str = "config.json";

/// 最终输出的歌词内容。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    /// 只输出原文。
    Original,
    /// 输出原文，并在同一时间戳的行后追加翻译。
    #[default]
    Both,
    /// 只输出翻译，没有翻译时回退到原文。
    Translation,
}

/// 选择使用哪一种匹配策略。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
pub enum MatchMode {
    /// 多次搜索后按距离公式打分，选出最接近的一首。
    #[default]
    Scored,
    /// 旧的匹配方式：只比较标题的第一个词，或在模糊模式下直接取第一个结果。
    Legacy,
}

/// 歌词获取流程的配置项。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricsConfig {
    /// 输出格式。
    pub format: OutputFormat,
    /// 旧匹配方式下是否跳过标题校验，直接使用第一个搜索结果。
    pub fuzzy: bool,
    /// 匹配策略。
    pub match_mode: MatchMode,
}

/// 获取应用配置目录下指定文件的完整路径，必要时创建目录。
///
/// # 参数
/// * `filename` - 目标配置文件的名称，例如 "config.json"。
pub(crate) fn get_config_file_path(filename: &str) -> Result<PathBuf> {
    let mut config_dir = dirs::config_dir().ok_or(LyricsHelperError::ConfigDirNotFound)?;
    config_dir.push(CONFIG_DIR_NAME);
    fs::create_dir_all(&config_dir)?;
    config_dir.push(filename);
    Ok(config_dir)
}

impl LyricsConfig {
    /// 从用户配置目录加载配置。
    ///
    /// 配置文件不存在时返回默认配置，而不是报错。
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_file_path(CONFIG_FILENAME)?)
    }

    /// 将配置保存到用户配置目录。
    pub fn save(&self) -> Result<()> {
        self.save_to(&get_config_file_path(CONFIG_FILENAME)?)
    }

    /// 从指定路径加载配置。
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let config: Self = serde_json::from_str(&content)?;
                info!("已从 {:?} 加载配置: {:?}", path, config);
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("配置文件 {:?} 不存在，将使用默认配置。", path);
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 将配置序列化为 JSON 并保存到指定路径。
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("配置已保存到 {:?}。", path);
        Ok(())
    }
}
