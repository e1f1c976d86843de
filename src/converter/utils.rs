//! 包含一些工具函数的模块。

/// 规范时间戳能表示的最大分钟数，超过后分钟字段不再是两位。
pub const MAX_LABEL_MINUTES: u32 = 99;

/// 将时间戳的各部分格式化为规范的 `[mm:ss.xx]` 形式。
///
/// 60 秒及以上的部分进位到分钟；分钟和秒补零到两位；小数部分截断或右侧补零到两位，
/// 因此 `5` 表示 0.5 秒，`345` 会被截断为 `34`。截断意味着只在毫秒上不同的时间戳
/// (例如 `01.001` 和 `01.009`) 会得到同一个标签，合并时会被视为同一时刻。
///
/// # 参数
/// * `minutes` - 分钟数。
/// * `seconds` - 秒数。
/// * `fraction` - 小数部分的原始数字串，可以为空。
///
/// # 返回
/// 定宽的时间标签。进位后超过 [`MAX_LABEL_MINUTES`] 分钟时返回 `None`，
/// 因为这样的标签无法与其它标签按字符串序正确排序。
pub fn format_time_label(minutes: u32, seconds: u32, fraction: &str) -> Option<String> {
    let minutes = minutes.checked_add(seconds / 60)?;
    let seconds = seconds % 60;
    if minutes > MAX_LABEL_MINUTES {
        return None;
    }

    let mut centis: String = fraction.chars().take(2).collect();
    while centis.len() < 2 {
        centis.push('0');
    }
    Some(format!("[{minutes:02}:{seconds:02}.{centis}]"))
}
