//! 定义了与具体提供商无关的基础数据模型。
//!
//! 提供商在获取到各自平台的数据后，需要把艺术家和专辑转换成这里的格式。

use serde::{Deserialize, Serialize};

/// 代表一位艺术家的通用模型。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artist {
    /// 艺术家在平台上的数字 ID。
    pub id: u64,
    /// 艺术家姓名。
    pub name: String,
}

/// 代表一张专辑的通用模型。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Album {
    /// 专辑在平台上的数字 ID。
    pub id: u64,
    /// 专辑名。
    pub name: String,
}

impl Artist {
    /// 便捷构造函数。
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Album {
    /// 便捷构造函数。
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
