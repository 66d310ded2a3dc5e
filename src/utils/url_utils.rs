// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 将抓取到的链接转换为绝对地址
///
/// 已经是 http(s) 绝对地址的链接原样返回，相对路径拼接到站点根地址上。
/// 空链接、无法解析的链接以及其他协议（`javascript:`、`data:` 等）返回 `None`。
pub fn absolutize(base_url: &Url, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(url) = Url::parse(raw) {
        return is_web_url(&url).then(|| raw.to_string());
    }
    resolve_url(base_url, raw)
        .ok()
        .filter(is_web_url)
        .map(String::from)
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
