use copymanga_lib::models::{ChapterKind, ParsedTitle};
use fancy_regex::{Captures, Regex};
use once_cell::sync::Lazy;

use crate::numeral::parse_number;

// volume marker, chapter marker (a range is kept in the title) and part
// marker, all optional, anchored at the start and followed by a separator
static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?P<volume>第?(?P<volume_num>[0-9零〇一二两兩三四五六七八九十百千]+(?:\.[0-9])?)[卷部季冊册]完?)?",
        r"\s*",
        r"(?P<chapter>(?:第|连载|連載|CH)?(?P<chapter_num>[0-9零〇一二两兩三四五六七八九十百千]+(?:\.[0-9]+)?)(?P<more_chapters>-[0-9]+(?:\.[0-9]+)?)?[話话回]?)?",
        r"(?:\s*(?P<part>[(（](?P<part_mark>[上中下前後后]|[0-9])[)）]))?",
        r"(?:[ +]|$)",
    ))
    .expect("title pattern")
});

fn markers(title: &str) -> Option<Captures<'_>> {
    MARKER_RE.captures(title).ok().flatten()
}

/// Fraction added to the chapter number for a part marker.
///
/// 上/前 -> .0, 中 -> .25, 下/後/后 -> .5, a digit `d` -> `d / 10`.
pub fn part_fraction(mark: &str) -> Option<f64> {
    match mark {
        "上" | "前" => Some(0.0),
        "中" => Some(0.25),
        "下" | "後" | "后" => Some(0.5),
        digit => digit.parse::<u8>().ok().map(|d| f64::from(d) / 10.0),
    }
}

// 全一卷 / 全1冊 is a single volume, 全一話 / 全1回 a single chapter
fn complete_in_one(trimmed: &str, raw: &str) -> Option<ParsedTitle> {
    let mut chars = trimmed.chars();
    if chars.next() != Some('全') || !matches!(chars.next(), Some('一' | '1')) {
        return None;
    }

    let (volume, chapter) = match chars.next()? {
        '卷' | '冊' | '册' => (Some(1.0), 0.0),
        '話' | '话' | '回' => (None, 1.0),
        _ => return None,
    };

    Some(ParsedTitle {
        volume,
        chapter,
        part: None,
        title: raw.to_string(),
    })
}

fn strip_once(title: &str) -> String {
    let Some(caps) = markers(title) else {
        return title.to_string();
    };

    let mut ranges = vec![];
    if let Some(volume) = caps.name("volume") {
        ranges.push(volume.range());
    }
    if let Some(chapter) = caps.name("chapter") {
        if caps.name("more_chapters").is_none() {
            ranges.push(chapter.range());
        }
    }
    if let Some(part) = caps.name("part") {
        ranges.push(part.range());
    }

    let mut stripped = String::with_capacity(title.len());
    let mut pos = 0;
    for range in ranges {
        stripped.push_str(&title[pos..range.start]);
        pos = range.end;
    }
    stripped.push_str(&title[pos..]);

    stripped.trim().to_string()
}

// strip until nothing is left to strip, so a title is stable under normalize
fn strip_markers(title: &str) -> String {
    let mut current = title.to_string();
    loop {
        let next = strip_once(&current);
        if next == current || next.is_empty() {
            return next;
        }
        current = next;
    }
}

/// Parses volume, chapter and part numbers out of a raw chapter title.
///
/// Never fails: titles without recognizable numbers give chapter `0` and the
/// raw title. `Special` chapters are not parsed at all.
pub fn normalize(raw: &str, kind: ChapterKind) -> ParsedTitle {
    if kind == ChapterKind::Special {
        return ParsedTitle::unparsed(raw);
    }

    let trimmed = raw.trim();
    if let Some(parsed) = complete_in_one(trimmed, raw) {
        return parsed;
    }

    let Some(caps) = markers(trimmed) else {
        return ParsedTitle::unparsed(raw);
    };

    let volume = caps
        .name("volume_num")
        .and_then(|m| parse_number(m.as_str()));
    let mut chapter = caps
        .name("chapter_num")
        .and_then(|m| parse_number(m.as_str()))
        .unwrap_or(0.0);
    let part = caps
        .name("part_mark")
        .and_then(|m| part_fraction(m.as_str()));
    if let Some(fraction) = part {
        chapter = chapter.trunc() + fraction;
    }

    let title = strip_markers(trimmed);
    let title = if title.is_empty() {
        raw.to_string()
    } else {
        title
    };

    ParsedTitle {
        volume,
        chapter,
        part,
        title,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parsed(volume: Option<f64>, chapter: f64, part: Option<f64>, title: &str) -> ParsedTitle {
        ParsedTitle {
            volume,
            chapter,
            part,
            title: title.to_string(),
        }
    }

    #[test]
    fn test_complete_in_one_volume() {
        assert_eq!(
            normalize("全一卷", ChapterKind::Normal),
            parsed(Some(1.0), 0.0, None, "全一卷")
        );
        assert_eq!(
            normalize("全1冊", ChapterKind::OneShot),
            parsed(Some(1.0), 0.0, None, "全1冊")
        );
    }

    #[test]
    fn test_complete_in_one_chapter() {
        assert_eq!(
            normalize("全一話", ChapterKind::Normal),
            parsed(None, 1.0, None, "全一話")
        );
        assert_eq!(
            normalize("全1回", ChapterKind::Normal),
            parsed(None, 1.0, None, "全1回")
        );
    }

    #[test]
    fn test_chinese_chapter_number() {
        assert_eq!(
            normalize("第十話", ChapterKind::Normal),
            parsed(None, 10.0, None, "第十話")
        );
        assert_eq!(normalize("第二十五话", ChapterKind::Normal).chapter, 25.0);
        assert_eq!(normalize("第一百零五回", ChapterKind::Normal).chapter, 105.0);
    }

    #[test]
    fn test_chapter_with_title() {
        assert_eq!(
            normalize("第01話 出發", ChapterKind::Normal),
            parsed(None, 1.0, None, "出發")
        );
        assert_eq!(
            normalize("CH12.5 Extra", ChapterKind::Normal),
            parsed(None, 12.5, None, "Extra")
        );
        assert_eq!(normalize("连载10", ChapterKind::Normal).chapter, 10.0);
        assert_eq!(normalize("10.5話", ChapterKind::Normal).chapter, 10.5);
    }

    #[test]
    fn test_volume() {
        assert_eq!(
            normalize("第1卷", ChapterKind::OneShot),
            parsed(Some(1.0), 0.0, None, "第1卷")
        );
        assert_eq!(
            normalize("第三冊完", ChapterKind::OneShot),
            parsed(Some(3.0), 0.0, None, "第三冊完")
        );
    }

    #[test]
    fn test_volume_and_chapter() {
        assert_eq!(
            normalize("第2卷第15話 最終決戰", ChapterKind::Normal),
            parsed(Some(2.0), 15.0, None, "最終決戰")
        );
        assert_eq!(
            normalize("第1卷 第2話 再會", ChapterKind::Normal),
            parsed(Some(1.0), 2.0, None, "再會")
        );
    }

    #[test]
    fn test_chapter_range_stays_in_title() {
        assert_eq!(
            normalize("第1-3話", ChapterKind::Normal),
            parsed(None, 1.0, None, "第1-3話")
        );
    }

    #[test]
    fn test_part_markers() {
        assert_eq!(
            normalize("第10話(上)", ChapterKind::Normal),
            parsed(None, 10.0, Some(0.0), "第10話(上)")
        );
        assert_eq!(normalize("第10話(中)", ChapterKind::Normal).chapter, 10.25);
        assert_eq!(normalize("第10話(下)", ChapterKind::Normal).chapter, 10.5);
        assert_eq!(normalize("第10話（後）", ChapterKind::Normal).chapter, 10.5);
        assert_eq!(normalize("第10話（前）", ChapterKind::Normal).chapter, 10.0);
        assert_eq!(
            normalize("第10話 (2) 約定", ChapterKind::Normal),
            parsed(None, 10.2, Some(0.2), "約定")
        );
    }

    #[test]
    fn test_part_replaces_fraction() {
        assert_eq!(normalize("第3.2話(下)", ChapterKind::Normal).chapter, 3.5);
    }

    #[test]
    fn test_special_is_not_parsed() {
        assert_eq!(
            normalize("第5話 番外", ChapterKind::Special),
            parsed(None, 0.0, None, "第5話 番外")
        );
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(
            normalize("番外篇", ChapterKind::Normal),
            parsed(None, 0.0, None, "番外篇")
        );
        assert_eq!(
            normalize("第10話後記", ChapterKind::Normal),
            parsed(None, 0.0, None, "第10話後記")
        );
        assert_eq!(normalize("", ChapterKind::Normal), parsed(None, 0.0, None, ""));
    }

    #[test]
    fn test_oversized_numeral_is_chapter_zero() {
        let raw = format!("第{}話", "九千".repeat(500_000));

        let parsed = normalize(&raw, ChapterKind::Normal);

        assert_eq!(parsed.chapter, 0.0);
        assert_eq!(parsed.volume, None);
    }

    #[test]
    fn test_raw_title_kept_on_fallback() {
        assert_eq!(
            normalize("  第3話  ", ChapterKind::Normal),
            parsed(None, 3.0, None, "  第3話  ")
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let titles = [
            "全一卷",
            "第十話",
            "第01話 出發",
            "第2卷第15話 最終決戰",
            "第1卷 第2話 再會",
            "第1話 第2話 第3話 重複",
            "第1-3話",
            "第1卷第1-3話",
            "第10話(上)",
            "第10話 (2) 約定",
            "第3話 全一卷",
            "番外篇",
            "+番外",
            "CH12.5 Extra",
        ];

        for kind in [ChapterKind::Normal, ChapterKind::OneShot, ChapterKind::Special] {
            for raw in titles {
                let once = normalize(raw, kind).title;
                let twice = normalize(&once, kind).title;
                assert_eq!(once, twice, "{raw}");
            }
        }
    }

    #[test]
    fn test_part_fraction() {
        assert_eq!(part_fraction("上"), Some(0.0));
        assert_eq!(part_fraction("中"), Some(0.25));
        assert_eq!(part_fraction("下"), Some(0.5));
        assert_eq!(part_fraction("7"), Some(0.7));
        assert_eq!(part_fraction("x"), None);
    }
}
