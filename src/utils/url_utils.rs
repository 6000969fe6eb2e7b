// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 将列表页中的链接解析为绝对地址
///
/// 只接受 http/https 结果；空链接、纯锚点、`javascript:`、`mailto:` 返回 `None`
pub fn resolve_link(base_url: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let resolved = base_url.join(href).ok()?;
    match resolved.scheme() {
        "http" | "https" => Some(resolved.to_string()),
        _ => None,
    }
}

/// 数据源的站点根地址（scheme + host + port）
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}
