//! 标题与艺术家字符串的清洗和拆分。
//!
//! 这里的所有正则都假设输入已经过 [`sanitize`] 处理，即全角括号已经替换为半角。

use std::sync::LazyLock;

use regex::Regex;

/// 有多个艺术家时，用来分割各艺术家的符号，按优先级排列。
///
/// 部分圈子喜欢用比较有个性的分隔符，比如 " x "，所以这里也一并收录。
pub const DELIMITERS: [&str; 8] = ["/", "&", ",", "，", " x ", " * ", "\u{00D7}", "\u{00B7}"];

/// 由 `DELIMITERS` 构成的分隔正则。
///
/// 正则的选择分支按书写顺序优先，所以同一位置上排在前面的分隔符会先被匹配。
static DELIMITER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = DELIMITERS
        .iter()
        .map(|d| regex::escape(d))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).expect("未能编译 DELIMITER_REGEX")
});

/// 括号内的 feat 子句，例如 `Song (feat. A)`
static FEAT_WITH_PARENTHESIS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(feat(.+)\)").expect("未能编译 FEAT_WITH_PARENTHESIS_REGEX")
});

/// 不带括号的 feat 子句，例如 `Song feat. A`
static FEAT_WITHOUT_PARENTHESIS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+feat(.+)").expect("未能编译 FEAT_WITHOUT_PARENTHESIS_REGEX")
});

/// 旧匹配方式使用的 feat 子句，大小写不敏感
static LEGACY_FEAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*\(feat.+\)").expect("未能编译 LEGACY_FEAT_REGEX"));

/// 曲目编号前缀，例如 `03. Song`
static LEADING_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?\s*").expect("未能编译 LEADING_NUMBER_REGEX"));

/// 将全角括号替换为半角括号，将不换行空格替换为普通空格。
///
/// 必须在其它任何文本处理之前调用。
pub fn sanitize(s: &str) -> String {
    s.replace('（', "(")
        .replace('）', ")")
        .replace('\u{00A0}', " ")
}

/// 按 [`DELIMITERS`] 拆分艺术家字符串，去掉首尾空白并丢弃空项。
pub fn split_artists(s: &str) -> Vec<String> {
    DELIMITER_REGEX
        .split(s)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// 从字符串中提取 feat 子句。
///
/// 先尝试括号形式，再尝试不带括号的形式。
///
/// # 返回
/// `(去掉 feat 子句后的字符串, feat 的艺术家列表)`。没有 feat 子句时返回原字符串和空列表。
pub fn extract_feat(s: &str) -> (String, Vec<String>) {
    let Some(caps) = FEAT_WITH_PARENTHESIS_REGEX
        .captures(s)
        .or_else(|| FEAT_WITHOUT_PARENTHESIS_REGEX.captures(s))
    else {
        return (s.to_string(), Vec::new());
    };

    // 两个正则都必定带有一个捕获组
    let (Some(whole), Some(clause)) = (caps.get(0), caps.get(1)) else {
        return (s.to_string(), Vec::new());
    };

    let stem = format!("{}{}", &s[..whole.start()], &s[whole.end()..])
        .trim()
        .to_string();

    let clause = clause.as_str().trim_start_matches(['.', ' ']);
    let clause = clause.strip_suffix(')').unwrap_or(clause);

    (stem, split_artists(clause))
}

/// 拆分标题和艺术家。
///
/// 有些人会把 `(feat. Somebody)` 写在标题里，而网易云搜索不会对此做特殊处理，
/// 导致搜出一堆无关结果。因此先把 feat 子句从标题和艺术家字段中提出来，
/// 与艺术家列表合并。
///
/// # 返回
/// `(去掉 feat 子句的标题, 排好序的艺术家列表)`。
pub fn split_title_artist(title: &str, artist: &str) -> (String, Vec<String>) {
    let (artist_stem, feat_from_artist) = extract_feat(&sanitize(artist));

    let mut artists = split_artists(&artist_stem);
    artists.extend(feat_from_artist);

    let (title_stem, feat_from_title) = extract_feat(&sanitize(title));
    artists.extend(feat_from_title);

    artists.sort();
    (title_stem, artists)
}

/// 返回第一个空格之前的部分（已去掉首尾空白）。旧匹配方式用它做前缀比较。
pub fn first_token(s: &str) -> String {
    let s = s.replace('\u{00A0}', " ");
    let token = s.split(' ').next().unwrap_or_default();
    token.trim().to_string()
}

/// 去掉开头的曲目编号，例如 `"03. Song"` -> `"Song"`。
pub fn strip_leading_number(s: &str) -> String {
    LEADING_NUMBER_REGEX.replace(s, "").into_owned()
}

/// 去掉所有括号形式的 feat 子句（大小写不敏感）。
pub fn remove_feat_clause(s: &str) -> String {
    LEGACY_FEAT_REGEX.replace_all(s, "").into_owned()
}
