use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::model::{Stat, UserRecord};

use self::{escape::Escaped, paths::DECORATION};

mod escape;
mod paths;

pub const WIDTH: u32 = 551;
pub const HEIGHT: u32 = 217;

const FONT_FAMILY: &str = "-apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, \
    sans-serif, Apple Color Emoji, Segoe UI Emoji";

const TITLE_FILL: &str = "#0078ff";
const VALUE_FILL: &str = "#000000";
const UNIT_FILL: &str = "#434343";

/// Statistics shown on the badge, one per panel.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Badge {
    pub level: Box<str>,
    pub score: Box<str>,
    pub solved: Box<str>,
    pub rank: Box<str>,
}

impl Badge {
    /// Render the full SVG document.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn panels(&self) -> [Panel<'_>; 4] {
        [
            Panel {
                title: "정복 중인 레벨",
                title_pos: (80, 45),
                value: &self.level,
                value_pos: (60, 85),
                unit: "레벨",
                unit_x: 100,
            },
            Panel {
                title: "현재 점수",
                title_pos: (340, 45),
                value: &self.score,
                value_pos: (360, 85),
                unit: "점",
                unit_x: 450,
            },
            Panel {
                title: "해결한 코딩 테스트",
                title_pos: (100, 150),
                value: &self.solved,
                value_pos: (65, 190),
                unit: "문제",
                unit_x: 120,
            },
            Panel {
                title: "나의 랭킹",
                title_pos: (340, 150),
                value: &self.rank,
                value_pos: (370, 190),
                unit: "위",
                unit_x: 450,
            },
        ]
    }
}

impl From<&UserRecord> for Badge {
    fn from(record: &UserRecord) -> Self {
        fn text(stat: &Option<Stat>) -> Box<str> {
            stat.as_ref().map_or_else(Box::default, |stat| stat.as_str().into())
        }

        Self {
            level: text(&record.skill_check.level),
            score: text(&record.ranking.score),
            solved: text(&record.coding_test.solved),
            rank: text(&record.ranking.rank),
        }
    }
}

impl Display for Badge {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        f.write_str("\n")?;
        f.write_str(
            r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#,
        )?;
        f.write_str("\n")?;

        write!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" \
            width=\"{WIDTH}px\" height=\"{HEIGHT}px\" \
            style=\"shape-rendering:geometricPrecision; text-rendering:geometricPrecision; \
            image-rendering:optimizeQuality; fill-rule:evenodd; clip-rule:evenodd\" \
            xmlns:xlink=\"http://www.w3.org/1999/xlink\">"
        )?;

        write_style(f)?;
        f.write_str(DECORATION)?;

        for panel in self.panels() {
            write!(f, "{panel}")?;
        }

        f.write_str("</svg>\n")
    }
}

fn write_style(f: &mut Formatter<'_>) -> FmtResult {
    f.write_str("<style>")?;

    for (class, size) in [("title", "1rem"), ("desc", "2.5rem"), ("desc-2", "1rem")] {
        write!(
            f,
            ".{class} {{fill: {UNIT_FILL};font-size: {size};line-height: 1.5rem;\
            font-weight: bold;font-family: {FONT_FAMILY};}}"
        )?;
    }

    f.write_str(
        ".text, .desc {animation: twinkling 4s ease-in-out infinite;}\
        @keyframes twinkling {\
        40% { opacity: 1; }\
        50% { opacity: 0.5; }\
        60% { opacity: 1; }\
        70% { opacity: 0.5; }\
        80% { opacity: 1; }\
        }",
    )?;

    f.write_str("</style>")
}

struct Panel<'b> {
    title: &'static str,
    title_pos: (u32, u32),
    value: &'b str,
    value_pos: (u32, u32),
    unit: &'static str,
    unit_x: u32,
}

impl Display for Panel<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let (title_x, title_y) = self.title_pos;
        let (value_x, value_y) = self.value_pos;

        Text::new(title_x, title_y, "title", TITLE_FILL).fmt_content(f, self.title)?;
        Text::new(value_x, value_y, "desc", VALUE_FILL).fmt_content(f, self.value)?;
        Text::new(self.unit_x, value_y, "desc-2", UNIT_FILL).fmt_content(f, self.unit)?;

        f.write_str("\n")
    }
}

struct Text {
    x: u32,
    y: u32,
    class: &'static str,
    fill: &'static str,
}

impl Text {
    fn new(x: u32, y: u32, class: &'static str, fill: &'static str) -> Self {
        Self { x, y, class, fill }
    }

    fn fmt_content(&self, f: &mut Formatter<'_>, content: &str) -> FmtResult {
        let Self { x, y, class, fill } = self;

        write!(
            f,
            "<text text-anchor=\"middle\" x=\"{x}\" y=\"{y}\" class=\"{class}\" \
            style=\"fill:{fill};\" stroke=\"none\" stroke-width=\"1\">{}</text>",
            Escaped(content)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(level: &str, score: &str, solved: &str, rank: &str) -> Badge {
        Badge {
            level: level.into(),
            score: score.into(),
            solved: solved.into(),
            rank: rank.into(),
        }
    }

    fn value_slot(x: u32, y: u32, value: &str) -> String {
        format!(
            "x=\"{x}\" y=\"{y}\" class=\"desc\" style=\"fill:{VALUE_FILL};\" \
            stroke=\"none\" stroke-width=\"1\">{value}</text>"
        )
    }

    fn parse(svg: &str) -> usvg::Tree {
        usvg::Tree::from_str(svg, &usvg::Options::default()).unwrap()
    }

    #[test]
    fn values_land_in_their_slots() {
        let svg = badge("4", "1500", "37", "120").render();

        assert!(svg.contains(&value_slot(60, 85, "4")));
        assert!(svg.contains(&value_slot(360, 85, "1500")));
        assert!(svg.contains(&value_slot(65, 190, "37")));
        assert!(svg.contains(&value_slot(370, 190, "120")));

        for label in ["정복 중인 레벨", "현재 점수", "해결한 코딩 테스트", "나의 랭킹"] {
            assert!(svg.contains(label), "missing label {label}");
        }
    }

    #[test]
    fn well_formed_svg() {
        let svg = badge("4", "1500", "37", "120").render();
        let tree = parse(&svg);

        assert_eq!(tree.size().width(), WIDTH as f32);
        assert_eq!(tree.size().height(), HEIGHT as f32);
    }

    #[test]
    fn empty_slot_stays_well_formed() {
        let svg = badge("4", "", "37", "120").render();

        assert!(svg.contains(&value_slot(360, 85, "")));
        parse(&svg);
    }

    #[test]
    fn all_empty_stays_well_formed() {
        parse(&Badge::default().render());
    }

    #[test]
    fn markup_in_values_is_escaped() {
        let svg = badge("<b>", "1 & 2", "\"37\"", "</svg>").render();

        assert!(svg.contains(&value_slot(60, 85, "&lt;b&gt;")));
        assert!(svg.contains(&value_slot(360, 85, "1 &amp; 2")));
        assert!(svg.contains(&value_slot(65, 190, "&quot;37&quot;")));
        assert!(svg.contains(&value_slot(370, 190, "&lt;/svg&gt;")));
        parse(&svg);
    }

    #[test]
    fn control_characters_stay_well_formed() {
        let json = br#"{
            "skillCheck": { "level": "a\u0001b" },
            "ranking": { "score": "\u0000", "rank": "1\u001f2" },
            "codingTest": { "solved": "\uffff" }
        }"#;

        let record = UserRecord::from_slice(json).unwrap();
        let svg = Badge::from(&record).render();

        assert!(svg.contains(&value_slot(60, 85, "a\u{FFFD}b")));
        assert!(svg.contains(&value_slot(370, 190, "1\u{FFFD}2")));
        assert!(svg.contains(&value_slot(65, 190, "\u{FFFD}")));
        assert!(!svg.contains('\u{1}'));
        parse(&svg);
    }

    #[test]
    fn from_record() {
        let json = br#"{
            "skillCheck": { "level": 2 },
            "ranking": { "score": null, "rank": 9876 },
            "codingTest": { "solved": 41 }
        }"#;

        let record = UserRecord::from_slice(json).unwrap();

        assert_eq!(Badge::from(&record), badge("2", "", "41", "9876"));
    }

    #[test]
    fn keeps_decoration_and_animation() {
        let svg = Badge::default().render();

        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(svg.contains(DECORATION));
        assert!(svg.contains("@keyframes twinkling"));
        assert!(svg.ends_with("</svg>\n"));
    }
}
