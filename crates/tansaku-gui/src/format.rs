//! Display formatting helpers for anime metadata values.
//!
//! AniList returns enum-like fields as SCREAMING_SNAKE strings and the
//! synopsis as HTML; everything here turns those into display text.

use tansaku_api::traits::AirDate;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Render a fuzzy date: "Apr 3, 1998", degrading gracefully when
/// components are unknown.
pub fn air_date(date: Option<&AirDate>) -> String {
    let Some(date) = date else {
        return "N/A".into();
    };
    let Some(year) = date.year else {
        return "N/A".into();
    };
    match (date.month, date.day) {
        (Some(m @ 1..=12), Some(d)) => format!("{} {d}, {year}", MONTHS[(m - 1) as usize]),
        (Some(m @ 1..=12), None) => format!("{} {year}", MONTHS[(m - 1) as usize]),
        _ => year.to_string(),
    }
}

pub fn media_format(s: &str) -> String {
    match s {
        "TV" => "TV".into(),
        "TV_SHORT" => "TV Short".into(),
        "MOVIE" => "Movie".into(),
        "SPECIAL" => "Special".into(),
        "OVA" => "OVA".into(),
        "ONA" => "ONA".into(),
        "MUSIC" => "Music".into(),
        other => other.to_string(),
    }
}

pub fn airing_status(s: &str) -> String {
    match s {
        "FINISHED" => "Finished".into(),
        "RELEASING" => "Airing".into(),
        "NOT_YET_RELEASED" => "Not Yet Aired".into(),
        "CANCELLED" => "Cancelled".into(),
        "HIATUS" => "On Hiatus".into(),
        other => other.to_string(),
    }
}

pub fn season(s: &str) -> String {
    match s {
        "WINTER" => "Winter".into(),
        "SPRING" => "Spring".into(),
        "SUMMER" => "Summer".into(),
        "FALL" => "Fall".into(),
        other => other.to_string(),
    }
}

/// Season + year line, or "N/A" when both are missing.
pub fn season_year(s: Option<&str>, year: Option<u32>) -> String {
    match (s, year) {
        (Some(s), Some(y)) => format!("{} {y}", season(s)),
        (Some(s), None) => season(s),
        (None, Some(y)) => y.to_string(),
        (None, None) => "N/A".into(),
    }
}

pub fn score_percent(score: Option<u32>) -> String {
    match score {
        Some(s) => format!("{s}%"),
        None => "N/A".into(),
    }
}

pub fn episodes(count: Option<u32>) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "N/A".into(),
    }
}

pub fn duration(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{m} min"),
        None => "N/A".into(),
    }
}

/// Strip the HTML markup AniList embeds in synopses.
///
/// `<br>` variants become newlines, every other tag is dropped, and the
/// handful of entities AniList actually emits are decoded.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '<' => {
                let rest = &input[i..];
                let Some(end) = rest.find('>') else {
                    // Unterminated tag: keep the text as-is.
                    out.push(c);
                    continue;
                };
                let tag = rest[1..end].trim().to_ascii_lowercase();
                if tag == "br" || tag == "br/" || tag == "br /" {
                    out.push('\n');
                }
                // Skip to the closing '>'.
                while let Some(&(j, _)) = chars.peek() {
                    if j > i + end {
                        break;
                    }
                    chars.next();
                }
            }
            '&' => {
                let rest = &input[i..];
                let (entity, len) = match rest {
                    _ if rest.starts_with("&amp;") => ("&", 5),
                    _ if rest.starts_with("&lt;") => ("<", 4),
                    _ if rest.starts_with("&gt;") => (">", 4),
                    _ if rest.starts_with("&quot;") => ("\"", 6),
                    _ if rest.starts_with("&#039;") => ("'", 6),
                    _ if rest.starts_with("&apos;") => ("'", 6),
                    _ if rest.starts_with("&hellip;") => ("\u{2026}", 8),
                    _ => ("&", 1),
                };
                out.push_str(entity);
                for _ in 1..len {
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Truncate to at most `max_chars`, appending an ellipsis when clipped.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let flat = strip_markup(text).replace('\n', " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let clipped: String = flat.chars().take(max_chars).collect();
    format!("{}\u{2026}", clipped.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Option<u32>, m: Option<u32>, d: Option<u32>) -> AirDate {
        AirDate {
            year: y,
            month: m,
            day: d,
        }
    }

    #[test]
    fn test_air_date_full() {
        let d = date(Some(1998), Some(4), Some(3));
        assert_eq!(air_date(Some(&d)), "Apr 3, 1998");
    }

    #[test]
    fn test_air_date_partial() {
        assert_eq!(air_date(Some(&date(Some(1998), Some(4), None))), "Apr 1998");
        assert_eq!(air_date(Some(&date(Some(1998), None, None))), "1998");
        assert_eq!(air_date(Some(&date(None, Some(4), Some(3)))), "N/A");
        assert_eq!(air_date(None), "N/A");
    }

    #[test]
    fn test_air_date_out_of_range_month() {
        assert_eq!(air_date(Some(&date(Some(2020), Some(13), Some(1)))), "2020");
    }

    #[test]
    fn test_strip_markup_br_and_tags() {
        let html = "First line.<br>Second <i>emphasized</i> line.<br /><b>Bold.</b>";
        assert_eq!(
            strip_markup(html),
            "First line.\nSecond emphasized line.\nBold."
        );
    }

    #[test]
    fn test_strip_markup_entities() {
        assert_eq!(strip_markup("Fish &amp; chips &#039;89"), "Fish & chips '89");
        assert_eq!(strip_markup("a &lt; b &gt; c"), "a < b > c");
    }

    #[test]
    fn test_strip_markup_plain_text_unchanged() {
        assert_eq!(strip_markup("no markup here"), "no markup here");
    }

    #[test]
    fn test_strip_markup_unterminated_tag() {
        assert_eq!(strip_markup("oops <br"), "oops <br");
    }

    #[test]
    fn test_snippet_clips_long_text() {
        let s = snippet("abcdefghij", 4);
        assert_eq!(s, "abcd\u{2026}");
        assert_eq!(snippet("short", 10), "short");
    }

    #[test]
    fn test_display_mappings() {
        assert_eq!(media_format("TV_SHORT"), "TV Short");
        assert_eq!(media_format("OVA"), "OVA");
        assert_eq!(airing_status("RELEASING"), "Airing");
        assert_eq!(season_year(Some("FALL"), Some(2023)), "Fall 2023");
        assert_eq!(season_year(None, None), "N/A");
        assert_eq!(score_percent(Some(86)), "86%");
        assert_eq!(score_percent(None), "N/A");
        assert_eq!(duration(Some(24)), "24 min");
    }
}
