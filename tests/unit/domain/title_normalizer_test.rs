// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 标题规范化测试
///
/// 针对站点上出现过的标题形式验证清理结果和幂等性

#[cfg(test)]
mod tests {
    use prime_gaming_rss::domain::services::title_normalizer::normalize_title;

    const OBSERVED_TITLES: &[(&str, &str)] = &[
        ("\n        Star Wars: Battlefront II\n      ", "Star Wars: Battlefront II"),
        ("Fallout 76\u{2122}", "Fallout 76"),
        ("Dead Island\u{00AE} 2 - Prime Gaming", "Dead Island 2"),
        ("  Thief   Simulator  ", "Thief Simulator"),
        ("NEW! Legacy of Kain: Soul Reaver", "Legacy of Kain: Soul Reaver"),
        ("Free Fire", "Free Fire"),
        ("Brotato [Free with Prime]", "Brotato"),
    ];

    #[test]
    fn test_observed_titles() {
        for (raw, expected) in OBSERVED_TITLES {
            assert_eq!(normalize_title(raw), *expected, "raw title {:?}", raw);
        }
    }

    #[test]
    fn test_normalizing_twice_changes_nothing() {
        for (raw, _) in OBSERVED_TITLES {
            let once = normalize_title(raw);
            let twice = normalize_title(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_output_has_no_outer_or_repeated_whitespace() {
        for (raw, _) in OBSERVED_TITLES {
            let title = normalize_title(raw);
            assert_eq!(title.trim(), title);
            assert!(!title.contains("  "));
            assert!(!title.contains('\n'));
        }
    }
}
