//! Serializer for the long (labeled) text layout
//!
//! The output follows Praat's own long layout — label names, bracketed
//! markers and four-space indentation steps — so that written files
//! reopen in Praat itself. Point elements use Praat's `number`/`mark`
//! labels.

use crate::error::GridError;
use crate::formats::{
    ensure_single_line, format_time, quote, FILE_TYPE_HEADER, OBJECT_CLASS_HEADER,
};
use crate::model::{TextGrid, TierElement};

pub(crate) struct LongSerializer {
    out: String,
}

impl LongSerializer {
    pub(crate) fn new() -> Self {
        LongSerializer { out: String::new() }
    }

    fn line(&mut self, level: usize, text: &str) {
        for _ in 0..level {
            self.out.push_str("    ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub(crate) fn serialize(mut self, grid: &TextGrid) -> Result<String, GridError> {
        self.line(0, FILE_TYPE_HEADER);
        self.line(0, OBJECT_CLASS_HEADER);
        self.out.push('\n');
        self.line(0, &format!("xmin = {}", format_time(grid.xmin())));
        self.line(0, &format!("xmax = {}", format_time(grid.xmax())));
        self.line(0, "tiers? <exists>");
        self.line(0, &format!("size = {}", grid.len()));
        self.line(0, "item []:");

        for (index, (name, tier)) in grid.iter().enumerate() {
            ensure_single_line(name, "tier name")?;
            let element_label = if tier.is_point_tier() {
                "points"
            } else {
                "intervals"
            };
            self.line(1, &format!("item [{}]:", index + 1));
            self.line(2, &format!("class = {}", quote(tier.tier_type())));
            self.line(2, &format!("name = {}", quote(name)));
            self.line(2, &format!("xmin = {}", format_time(grid.xmin())));
            self.line(2, &format!("xmax = {}", format_time(grid.xmax())));
            self.line(2, &format!("{element_label}: size = {}", tier.len()));

            for (j, element) in tier.iter().enumerate() {
                ensure_single_line(element.text(), "label")?;
                self.line(2, &format!("{element_label} [{}]:", j + 1));
                match element {
                    TierElement::Interval(interval) => {
                        self.line(3, &format!("xmin = {}", format_time(interval.xmin())));
                        self.line(3, &format!("xmax = {}", format_time(interval.xmax())));
                        self.line(3, &format!("text = {}", quote(interval.text())));
                    }
                    TierElement::Point(point) => {
                        self.line(3, &format!("number = {}", format_time(point.xpos())));
                        self.line(3, &format!("mark = {}", quote(point.text())));
                    }
                }
            }
        }
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Interval, Point, TextGrid, Tier};
    use insta::assert_snapshot;

    fn sample_grid() -> TextGrid {
        let mut grid = TextGrid::new(0.0, 1.0).unwrap();
        grid.insert_tier(
            "syllables",
            Tier::from_intervals(vec![
                Interval::new("a", 0.0, 0.5).unwrap(),
                Interval::new("b", 0.5, 1.0).unwrap(),
            ]),
        )
        .unwrap();
        grid.insert_tier("events", Tier::from_points(vec![Point::new("click", 0.25)]))
            .unwrap();
        grid
    }

    #[test]
    fn long_layout_matches_praat() {
        let text = LongSerializer::new().serialize(&sample_grid()).unwrap();
        assert_snapshot!(text, @r#"
        File type = "ooTextFile"
        Object class = "TextGrid"

        xmin = 0
        xmax = 1
        tiers? <exists>
        size = 2
        item []:
            item [1]:
                class = "IntervalTier"
                name = "syllables"
                xmin = 0
                xmax = 1
                intervals: size = 2
                intervals [1]:
                    xmin = 0
                    xmax = 0.5
                    text = "a"
                intervals [2]:
                    xmin = 0.5
                    xmax = 1
                    text = "b"
            item [2]:
                class = "TextTier"
                name = "events"
                xmin = 0
                xmax = 1
                points: size = 1
                points [1]:
                    number = 0.25
                    mark = "click"
        "#);
    }

    #[test]
    fn round_trips_through_the_parser() {
        let grid = sample_grid();
        let text = LongSerializer::new().serialize(&grid).unwrap();
        let reparsed = super::super::parser::parse(text.as_bytes()).unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn labels_with_quotes_survive() {
        let mut grid = TextGrid::new(0.0, 1.0).unwrap();
        grid.insert_tier(
            "words",
            Tier::from_intervals(vec![Interval::new("say \"ah\"", 0.0, 1.0).unwrap()]),
        )
        .unwrap();
        let text = LongSerializer::new().serialize(&grid).unwrap();
        assert!(text.contains("text = \"say \"\"ah\"\"\""));
        let reparsed = super::super::parser::parse(text.as_bytes()).unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn multiline_label_is_an_encode_error() {
        let mut grid = TextGrid::new(0.0, 1.0).unwrap();
        grid.insert_tier(
            "words",
            Tier::from_intervals(vec![Interval::new("two\nlines", 0.0, 1.0).unwrap()]),
        )
        .unwrap();
        let err = LongSerializer::new().serialize(&grid).unwrap_err();
        assert!(matches!(err, GridError::Encode(_)));
    }
}
