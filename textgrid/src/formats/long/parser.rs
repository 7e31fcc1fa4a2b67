//! Parser for the long (labeled) text layout
//!
//! The long layout is line oriented: `key = value` lines plus bracketed
//! markers (`item [1]:`, `intervals [2]:`). Nesting is tracked through the
//! markers, not through indentation. Unrecognized lines are skipped so
//! that minor layout variation between Praat versions does not break the
//! parse; missing or unparsable fields are hard errors.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GridError;
use crate::formats::{
    decode_text, parse_count, parse_time, text_err, tier_kind_from_class, unquote,
    FILE_TYPE_HEADER, OBJECT_CLASS_HEADER,
};
use crate::model::{Interval, Point, TextGrid, Tier, TierElement, TierKind};
use crate::transcript::Transcript;

static KEY_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]+) = (.*)$").unwrap());
static ITEM_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^item \[\d+\]:$").unwrap());
static ELEMENT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(intervals|points) \[\d+\]:$").unwrap());
static SIZE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(intervals|points): size = (.*)$").unwrap());

#[derive(Default)]
struct ElementDraft {
    line: usize,
    xmin: Option<f64>,
    xmax: Option<f64>,
    xpos: Option<f64>,
    text: Option<Transcript>,
}

struct TierDraft {
    line: usize,
    name: Option<String>,
    kind: Option<TierKind>,
    declared: Option<usize>,
    elements: Vec<TierElement>,
    current: Option<ElementDraft>,
}

impl TierDraft {
    fn new(line: usize) -> Self {
        TierDraft {
            line,
            name: None,
            kind: None,
            declared: None,
            elements: Vec::new(),
            current: None,
        }
    }

    fn set_kind(&mut self, kind: TierKind, line: usize) -> Result<(), GridError> {
        match self.kind {
            None => {
                self.kind = Some(kind);
                Ok(())
            }
            Some(existing) if existing == kind => Ok(()),
            Some(existing) => Err(text_err(
                line,
                format!("tier declared as {existing:?} but its elements are {kind:?}"),
            )),
        }
    }

    fn finish_element(&mut self) -> Result<(), GridError> {
        let Some(draft) = self.current.take() else {
            return Ok(());
        };
        let kind = self
            .kind
            .ok_or_else(|| text_err(draft.line, "element before tier class"))?;
        let element = match kind {
            TierKind::Interval => {
                let xmin = draft
                    .xmin
                    .ok_or_else(|| text_err(draft.line, "interval is missing xmin"))?;
                let xmax = draft
                    .xmax
                    .ok_or_else(|| text_err(draft.line, "interval is missing xmax"))?;
                let text = draft
                    .text
                    .ok_or_else(|| text_err(draft.line, "interval is missing text"))?;
                TierElement::Interval(Interval::new(text, xmin, xmax)?)
            }
            TierKind::Point => {
                let xpos = draft
                    .xpos
                    .ok_or_else(|| text_err(draft.line, "point is missing its time"))?;
                let text = draft
                    .text
                    .ok_or_else(|| text_err(draft.line, "point is missing text"))?;
                TierElement::Point(Point::new(text, xpos))
            }
        };
        self.elements.push(element);
        Ok(())
    }

    fn finish(mut self) -> Result<(String, Tier), GridError> {
        self.finish_element()?;
        let name = self
            .name
            .ok_or_else(|| text_err(self.line, "tier is missing a name"))?;
        let kind = self
            .kind
            .ok_or_else(|| text_err(self.line, "tier is missing a class"))?;
        if let Some(declared) = self.declared {
            if declared != self.elements.len() {
                log::warn!(
                    "tier \"{name}\": declared {declared} elements, found {}",
                    self.elements.len()
                );
            }
        }
        let mut tier = Tier::new(kind);
        for element in self.elements {
            tier.push(element)?;
        }
        Ok((name, tier))
    }
}

pub(crate) fn parse(data: &[u8]) -> Result<TextGrid, GridError> {
    let text = decode_text(data)?;
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    for header in [FILE_TYPE_HEADER, OBJECT_CLASS_HEADER] {
        match lines.next() {
            Some((_, line)) if line == header => {}
            Some((no, line)) => {
                return Err(text_err(no, format!("expected `{header}`, got `{line}`")))
            }
            None => return Err(text_err(1, "input ends before the file header")),
        }
    }

    let mut grid_xmin: Option<f64> = None;
    let mut grid_xmax: Option<f64> = None;
    let mut declared_tiers: Option<usize> = None;
    let mut tiers: Vec<(String, Tier)> = Vec::new();
    let mut current: Option<TierDraft> = None;

    for (no, line) in lines {
        if line == "tiers? <exists>" || line == "item []:" {
            continue;
        }
        if ITEM_MARKER.is_match(line) {
            if let Some(draft) = current.take() {
                tiers.push(draft.finish()?);
            }
            current = Some(TierDraft::new(no));
            continue;
        }
        if let Some(caps) = ELEMENT_MARKER.captures(line) {
            let Some(tier) = current.as_mut() else {
                return Err(text_err(no, "element marker outside of a tier"));
            };
            tier.finish_element()?;
            let kind = marker_kind(&caps[1]);
            tier.set_kind(kind, no)?;
            tier.current = Some(ElementDraft {
                line: no,
                ..ElementDraft::default()
            });
            continue;
        }
        if let Some(caps) = SIZE_MARKER.captures(line) {
            let Some(tier) = current.as_mut() else {
                log::warn!("line {no}: size marker outside of a tier");
                continue;
            };
            tier.set_kind(marker_kind(&caps[1]), no)?;
            tier.declared = Some(parse_count(&caps[2], no)?);
            continue;
        }
        if let Some(caps) = KEY_VALUE.captures(line) {
            let key = caps.get(1).unwrap().as_str();
            let value = caps.get(2).unwrap().as_str();
            match current.as_mut() {
                Some(tier) => match tier.current.as_mut() {
                    Some(element) => match key {
                        "xmin" => element.xmin = Some(parse_time(value, no)?),
                        "xmax" => element.xmax = Some(parse_time(value, no)?),
                        // Praat labels point times `number`; other tools
                        // write `xpos`. Accept both.
                        "number" | "xpos" => element.xpos = Some(parse_time(value, no)?),
                        "text" | "mark" => {
                            element.text = Some(Transcript::new(unquote(value, no)?))
                        }
                        _ => log::debug!("line {no}: ignoring key `{key}` inside an element"),
                    },
                    None => match key {
                        "class" => {
                            let class = unquote(value, no)?;
                            let kind = tier_kind_from_class(&class).ok_or_else(|| {
                                text_err(no, format!("unrecognized tier class \"{class}\""))
                            })?;
                            tier.set_kind(kind, no)?;
                        }
                        "name" => tier.name = Some(unquote(value, no)?),
                        // Tier extents are read but not kept: the
                        // grid-level extent is authoritative.
                        "xmin" | "xmax" => {
                            parse_time(value, no)?;
                        }
                        _ => log::debug!("line {no}: ignoring key `{key}` inside a tier"),
                    },
                },
                None => match key {
                    "xmin" => grid_xmin = Some(parse_time(value, no)?),
                    "xmax" => grid_xmax = Some(parse_time(value, no)?),
                    "size" => declared_tiers = Some(parse_count(value, no)?),
                    _ => log::debug!("line {no}: ignoring key `{key}` in the file header"),
                },
            }
            continue;
        }
        log::debug!("line {no}: ignoring unrecognized line `{line}`");
    }

    if let Some(draft) = current.take() {
        tiers.push(draft.finish()?);
    }

    let xmin = grid_xmin.ok_or_else(|| text_err(0, "file is missing its xmin"))?;
    let xmax = grid_xmax.ok_or_else(|| text_err(0, "file is missing its xmax"))?;
    if let Some(declared) = declared_tiers {
        if declared != tiers.len() {
            log::warn!("declared {declared} tiers, found {}", tiers.len());
        }
    }

    let mut grid = TextGrid::new(xmin, xmax)?;
    for (name, tier) in tiers {
        grid.insert_tier(name, tier)?;
    }
    grid.validate()?;
    Ok(grid)
}

fn marker_kind(marker: &str) -> TierKind {
    if marker == "intervals" {
        TierKind::Interval
    } else {
        TierKind::Point
    }
}
