//! Profile card rendering.
//!
//! A card is a fixed-width, two-column SVG: ASCII art on the left and
//! dot-aligned `key: value` rows on the right.

use crate::ascii::ASCII;
use crate::profile::CatProfile;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const GAP_BETWEEN_COLUMNS: f32 = 10.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_RIGHT_COL_CHARS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#fffaf3",
                text: "#24292f",
                key: "#d9480f",
                value: "#1c7ed6",
                cc: "#868e96",
            },
        }
    }

    /// Output file name for this theme.
    pub fn file_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark_mode.svg",
            Theme::Light => "light_mode.svg",
        }
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// East Asian wide and full-width blocks, plus the emoji planes.
const WIDE_RANGES: [(u32, u32); 14] = [
    (0x1100, 0x115F),   // Hangul Jamo
    (0x2E80, 0x303E),   // CJK radicals, punctuation
    (0x3041, 0x33FF),   // kana, CJK compatibility
    (0x3400, 0x4DBF),   // CJK extension A
    (0x4E00, 0x9FFF),   // CJK unified ideographs
    (0xA000, 0xA4CF),   // Yi
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE4F),   // CJK compatibility forms
    (0xFF00, 0xFF60),   // full-width forms
    (0xFFE0, 0xFFE6),   // full-width signs
    (0x1F300, 0x1F64F), // pictographs, emoticons
    (0x1F900, 0x1F9FF), // supplemental symbols
    (0x20000, 0x3FFFD), // CJK extensions B and later
];

fn char_width(c: char) -> usize {
    let cp = c as u32;
    if WIDE_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp)) {
        2
    } else {
        1
    }
}

/// Width in monospace cells.
fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Splits a row into `(key, dots, value)` padded to `align_width` cells.
pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = display_width(&key_part) + display_width(value);
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(display_width(&base)) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

fn build_ascii_tspans() -> (String, usize, usize) {
    let mut out = String::new();
    let mut max_width = 0;
    let mut count = 0;

    for (i, line) in ASCII.lines().skip_while(|l| l.is_empty()).enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;
        max_width = max_width.max(line.len());
        count += 1;
        out.push_str(&format!(
            "<tspan x=\"{LEFT_PADDING}\" y=\"{y}\">{}</tspan>\n",
            escape_xml(line)
        ));
    }

    (out, max_width, count)
}

enum Line {
    Header(String),
    Blank,
    Stat(&'static str, String),
}

fn profile_lines(profile: &CatProfile, age: &str) -> Vec<Line> {
    let mut lines = vec![
        Line::Header(profile.name.clone()),
        Line::Stat("Age", age.to_string()),
        Line::Stat("Birthday", profile.birthdate.trim().to_string()),
    ];

    let optional = [
        ("Breed", &profile.breed),
        ("Sex", &profile.sex),
        ("Color", &profile.color),
        ("Personality", &profile.personality),
        ("Favorite food", &profile.favorite_food),
    ];
    lines.extend(
        optional
            .into_iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| Line::Stat(k, v.clone()))),
    );

    if let Some(owner) = &profile.owner {
        lines.push(Line::Blank);
        lines.push(Line::Header("- Family".to_string()));
        lines.push(Line::Stat("Owner", owner.clone()));
    }

    if !profile.hashtags.is_empty() {
        let tags = profile
            .hashtags
            .iter()
            .map(|t| format!("#{}", t.trim_start_matches('#')))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::Blank);
        lines.push(Line::Stat("Tags", tags));
    }

    lines
}

// Builds the right column content and returns (tspans, width, height)
fn build_right_column(
    profile: &CatProfile,
    age: &str,
    ascii_width_px: f32,
    ascii_height_px: f32,
) -> (String, f32, f32) {
    let lines = profile_lines(profile, age);

    let align_width = lines
        .iter()
        .map(|line| match line {
            Line::Stat(k, v) => display_width(k) + 2 + display_width(v),
            Line::Header(h) => display_width(h) + 1,
            Line::Blank => 0,
        })
        .max()
        .unwrap_or(0)
        .max(MIN_RIGHT_COL_CHARS);

    let right_height_px = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32;
    let right_x = ascii_width_px + GAP_BETWEEN_COLUMNS;

    let mut right_tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(label) => {
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}">{}</tspan>
"#,
                    escape_xml(&build_header_line(label, align_width))
                ));
            }
            Line::Stat(key, value) => {
                let (k, d, v) = build_stat_row(key, value, align_width);
                right_tspans.push_str(&format!(
                    r#"<tspan x="{right_x}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(&k),
                    escape_xml(&d),
                    escape_xml(&v)
                ));
            }
        }
    }

    let content_width = right_x + (align_width as f32) * CHAR_WIDTH + RIGHT_PADDING;
    let content_height = ascii_height_px.max(right_height_px) + 30.0;

    (right_tspans, content_width, content_height)
}

/// Renders `profile` as a profile card, with `age` already formatted.
pub fn generate_svg(profile: &CatProfile, age: &str, theme: Theme) -> String {
    let colors = theme.colors();

    let (ascii_tspans, ascii_chars_wide, ascii_lines) = build_ascii_tspans();
    let ascii_width_px = ascii_chars_wide as f32 * CHAR_WIDTH + LEFT_PADDING;
    let ascii_height_px = ascii_lines as f32 * LINE_HEIGHT as f32 + START_Y as f32;

    let (right_tspans, w, h) = build_right_column(profile, age, ascii_width_px, ascii_height_px);

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key      {{ fill: {key}; }}
.value    {{ fill: {value}; }}
.cc       {{ fill: {cc}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<!-- LEFT ASCII -->
<text fill="{text}" xml:space="preserve">
{ascii}
</text>

<!-- RIGHT COLUMN -->
<text fill="{text}">
{right}
</text>

</svg>
"#,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        ascii = ascii_tspans,
        right = right_tspans
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CatProfile {
        CatProfile {
            name: "Tama".into(),
            birthdate: "2020-01-20".into(),
            breed: Some("Scottish Fold".into()),
            sex: None,
            color: None,
            personality: Some("Shy <but> curious & \"bold\"".into()),
            favorite_food: None,
            owner: Some("Hanako".into()),
            hashtags: vec!["#calico".into(), "nap".into()],
        }
    }

    #[test]
    fn stat_row_pads_with_dots() {
        let (k, d, v) = build_stat_row("Age", "3歳", 20);
        assert_eq!(k, "Age: ");
        assert_eq!(v, "3歳");
        // "Age: " is 5 cells, "3歳" is 3
        assert_eq!(d, ".".repeat(12));
    }

    #[test]
    fn stat_row_short_padding() {
        assert_eq!(build_stat_row("Sex", "F", 7).1, " ");
        assert_eq!(build_stat_row("Sex", "F", 8).1, ". ");
        assert_eq!(build_stat_row("Sex", "F", 3).1, "");
    }

    #[test]
    fn narrow_symbols_take_one_cell() {
        assert_eq!(display_width("♀"), 1);
        assert_eq!(display_width("★★"), 2);
        assert_eq!(display_width("メス"), 4);
        assert_eq!(display_width("ＡＢ"), 4);
        assert_eq!(display_width("🐈"), 2);
        // "Sex: " is 5 cells, "♀" is 1
        assert_eq!(build_stat_row("Sex", "♀", 10).1, ".".repeat(4));
    }

    #[test]
    fn header_line_is_dashed() {
        assert_eq!(build_header_line("Tama", 8), "Tama -----");
    }

    #[test]
    fn card_contains_profile_fields() {
        let svg = generate_svg(&profile(), "2歳11ヶ月", Theme::Dark);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("Tama"));
        assert!(svg.contains("2歳11ヶ月"));
        assert!(svg.contains("Scottish Fold"));
        assert!(svg.contains("- Family"));
        assert!(svg.contains("#calico #nap"));
        assert!(!svg.contains("Sex: "));
        assert!(svg.contains(Theme::Dark.colors().bg));
    }

    #[test]
    fn card_escapes_text() {
        let svg = generate_svg(&profile(), "0歳", Theme::Light);
        assert!(svg.contains("Shy &lt;but&gt; curious &amp; &quot;bold&quot;"));
        assert!(!svg.contains("<but>"));
        assert!(svg.contains(Theme::Light.colors().bg));
    }

    #[test]
    fn optional_sections_are_omitted() {
        let mut p = profile();
        p.owner = None;
        p.hashtags.clear();
        let svg = generate_svg(&p, "0歳", Theme::Dark);
        assert!(!svg.contains("- Family"));
        assert!(!svg.contains("Tags: "));
    }
}
