//! Parser for the short (positional) text layout
//!
//! The short layout has no labels at all: after the two header lines it
//! is a fixed sequence of bare values, one per line, in exactly the
//! order the binary layout uses. Parsing is strictly positional.

use crate::error::GridError;
use crate::formats::{
    decode_text, parse_count, parse_time, text_err, tier_kind_from_class, unquote,
    FILE_TYPE_HEADER, OBJECT_CLASS_HEADER,
};
use crate::model::{Interval, Point, TextGrid, Tier, TierKind};
use crate::transcript::Transcript;

/// Cursor over the non-empty lines of a short-format file.
struct Lines<'a> {
    lines: Vec<(usize, &'a str)>,
    pos: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();
        Lines { lines, pos: 0 }
    }

    fn next(&mut self, what: &str) -> Result<(usize, &'a str), GridError> {
        let Some(&entry) = self.lines.get(self.pos) else {
            let line = self.lines.last().map(|&(no, _)| no).unwrap_or(0);
            return Err(text_err(
                line,
                format!("input ends before {what}"),
            ));
        };
        self.pos += 1;
        Ok(entry)
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(|&(_, l)| l)
    }

    /// Line number of the line `next` would return.
    fn line_no(&self) -> usize {
        self.lines.get(self.pos).map(|&(no, _)| no).unwrap_or(0)
    }

    fn remaining(&self) -> usize {
        self.lines.len() - self.pos
    }

    fn time(&mut self, what: &str) -> Result<f64, GridError> {
        let (no, value) = self.next(what)?;
        parse_time(value, no)
    }

    fn count(&mut self, what: &str) -> Result<usize, GridError> {
        let (no, value) = self.next(what)?;
        parse_count(value, no)
    }

    fn string(&mut self, what: &str) -> Result<String, GridError> {
        let (no, value) = self.next(what)?;
        unquote(value, no)
    }

    fn expect(&mut self, literal: &str) -> Result<(), GridError> {
        let (no, value) = self.next(literal)?;
        if value != literal {
            return Err(text_err(no, format!("expected `{literal}`, got `{value}`")));
        }
        Ok(())
    }
}

pub(crate) fn parse(data: &[u8]) -> Result<TextGrid, GridError> {
    let text = decode_text(data)?;
    let mut lines = Lines::new(&text);

    lines.expect(FILE_TYPE_HEADER)?;
    lines.expect(OBJECT_CLASS_HEADER)?;

    let xmin = lines.time("the grid xmin")?;
    let xmax = lines.time("the grid xmax")?;
    let mut grid = TextGrid::new(xmin, xmax)?;

    if lines.peek() != Some("<exists>") {
        return Ok(grid);
    }
    lines.next("the tiers flag")?;

    let tier_count = lines.count("the tier count")?;
    for _ in 0..tier_count {
        let class_line = lines.line_no();
        let class = lines.string("a tier class")?;
        let kind = tier_kind_from_class(&class)
            .ok_or_else(|| text_err(class_line, format!("unrecognized tier class \"{class}\"")))?;
        let name = lines.string("a tier name")?;
        // Tier extents are read but not kept: the grid-level extent is
        // authoritative.
        lines.time("a tier xmin")?;
        lines.time("a tier xmax")?;

        let element_count = lines.count("an element count")?;
        let mut tier = Tier::new(kind);
        for _ in 0..element_count {
            match kind {
                TierKind::Interval => {
                    let xmin = lines.time("an interval xmin")?;
                    let xmax = lines.time("an interval xmax")?;
                    let text = lines.string("an interval label")?;
                    tier.push_interval(Interval::new(Transcript::new(text), xmin, xmax)?)?;
                }
                TierKind::Point => {
                    let xpos = lines.time("a point time")?;
                    let text = lines.string("a point label")?;
                    tier.push_point(Point::new(Transcript::new(text), xpos))?;
                }
            }
        }
        grid.insert_tier(name, tier)?;
    }

    if lines.remaining() > 0 {
        log::warn!("{} trailing lines after the last tier", lines.remaining());
    }
    grid.validate()?;
    Ok(grid)
}
