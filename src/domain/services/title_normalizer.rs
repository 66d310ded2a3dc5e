// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 标题规范化
//!
//! 清理从 DOM 中读取的标题文本，得到可直接展示的游戏名称

use once_cell::sync::Lazy;
use regex::Regex;

/// 站点注入到标题中的商标符号
static TRADEMARKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{2122}\x{00AE}\x{00A9}]").expect("Failed to compile trademark regex"));

/// 任意位置的推广标签，例如 "(Prime Gaming)"、"[Free game]"
static BRACKETED_TAGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[\(\[]\s*(?:prime\s+gaming|free\s+with\s+prime|free\s+game|free)\s*[\)\]]")
        .expect("Failed to compile tag regex")
});

/// 以分隔符连接在末尾的推广后缀，例如 " - Prime Gaming"
static TRAILING_TAGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*[-|\x{2013}\x{2014}]\s*(?:prime\s+gaming|free\s+with\s+prime|free\s+game)\s*$")
        .expect("Failed to compile suffix regex")
});

/// 标题前的标签，例如 "NEW: "、"Free game - "
static LEADING_LABELS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:new|free\s+game|free\s+with\s+prime)\s*[:!|\-\x{2013}\x{2014}]\s*")
        .expect("Failed to compile label regex")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// 规范化标题
///
/// 去除换行和多余空白、站点附加的推广标签与商标符号，合并连续空白并去掉首尾空白。
/// 输入为空时返回空字符串，由调用方决定如何处理。
///
/// 对已经规范化的标题再次调用得到相同结果。
pub fn normalize_title(raw: &str) -> String {
    let mut current = clean_once(raw);
    // Removing one tag can expose another, so run to a fixpoint.
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn clean_once(input: &str) -> String {
    let text = TRADEMARKS.replace_all(input, "");
    let text = BRACKETED_TAGS.replace_all(&text, " ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = TRAILING_TAGS.replace(text.trim(), "");
    let text = LEADING_LABELS.replace(&text, "");
    text.trim().to_string()
}
