//! Tiers and their elements
//!
//! A tier is an ordered, homogeneous sequence: either labeled spans
//! ([`Interval`]) or labeled instants ([`Point`]). The kind is fixed when
//! the tier is created and every insertion is checked against it — mixing
//! kinds is an invariant violation, never a silent coercion.

use serde::Serialize;

use crate::error::GridError;
use crate::transcript::{Transcript, VowelSet};

/// Absolute tolerance for comparing time values that may have passed
/// through a text representation.
pub const TIME_TOLERANCE: f64 = 1e-6;

/// The two element kinds a tier can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TierKind {
    Interval,
    Point,
}

/// A labeled timespan `xmin..xmax`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval {
    xmin: f64,
    xmax: f64,
    text: Transcript,
}

impl Interval {
    pub fn new(text: impl Into<Transcript>, xmin: f64, xmax: f64) -> Result<Self, GridError> {
        if !(xmin <= xmax) {
            return Err(GridError::Invariant(format!(
                "interval xmin {xmin} > xmax {xmax}"
            )));
        }
        Ok(Interval {
            xmin,
            xmax,
            text: text.into(),
        })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn text(&self) -> &Transcript {
        &self.text
    }

    /// Duration of the interval.
    pub fn dur(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Temporal midpoint of the interval.
    pub fn mid(&self) -> f64 {
        self.xmin + self.dur() / 2.0
    }

    /// An evenly spaced grid of `num + 1` timepoints from `xmin` to `xmax`.
    pub fn timegrid(&self, num: usize) -> Result<Vec<f64>, GridError> {
        if num <= 1 {
            return Err(GridError::Invariant(format!(
                "timegrid needs at least 2 spans, got {num}"
            )));
        }
        let step = self.dur() / num as f64;
        Ok((0..=num).map(|i| self.xmin + step * i as f64).collect())
    }

    /// Move both boundaries by `delta`.
    pub fn offset(&mut self, delta: f64) {
        self.xmin += delta;
        self.xmax += delta;
    }

    pub fn contains_vowel(&self, vowels: &VowelSet) -> bool {
        self.text.contains_vowel(vowels)
    }

    pub fn starts_with_vowel(&self, vowels: &VowelSet) -> bool {
        self.text.starts_with_vowel(vowels)
    }

    pub fn ends_with_vowel(&self, vowels: &VowelSet) -> bool {
        self.text.ends_with_vowel(vowels)
    }
}

/// A labeled instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    xpos: f64,
    text: Transcript,
}

impl Point {
    pub fn new(text: impl Into<Transcript>, xpos: f64) -> Self {
        Point {
            xpos,
            text: text.into(),
        }
    }

    pub fn xpos(&self) -> f64 {
        self.xpos
    }

    pub fn text(&self) -> &Transcript {
        &self.text
    }

    /// Move the instant by `delta`.
    pub fn offset(&mut self, delta: f64) {
        self.xpos += delta;
    }
}

/// A tier element: a span or an instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TierElement {
    Interval(Interval),
    Point(Point),
}

impl TierElement {
    pub fn kind(&self) -> TierKind {
        match self {
            TierElement::Interval(_) => TierKind::Interval,
            TierElement::Point(_) => TierKind::Point,
        }
    }

    pub fn text(&self) -> &Transcript {
        match self {
            TierElement::Interval(i) => i.text(),
            TierElement::Point(p) => p.text(),
        }
    }

    /// Where the element starts (for a point, the instant itself).
    pub fn start(&self) -> f64 {
        match self {
            TierElement::Interval(i) => i.xmin(),
            TierElement::Point(p) => p.xpos(),
        }
    }

    /// Where the element ends (for a point, the instant itself).
    pub fn end(&self) -> f64 {
        match self {
            TierElement::Interval(i) => i.xmax(),
            TierElement::Point(p) => p.xpos(),
        }
    }
}

/// An ordered, homogeneous sequence of intervals or points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tier {
    kind: TierKind,
    elements: Vec<TierElement>,
}

impl Tier {
    pub fn new(kind: TierKind) -> Self {
        Tier {
            kind,
            elements: Vec::new(),
        }
    }

    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        Tier {
            kind: TierKind::Interval,
            elements: intervals.into_iter().map(TierElement::Interval).collect(),
        }
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Tier {
            kind: TierKind::Point,
            elements: points.into_iter().map(TierElement::Point).collect(),
        }
    }

    pub fn kind(&self) -> TierKind {
        self.kind
    }

    pub fn is_point_tier(&self) -> bool {
        self.kind == TierKind::Point
    }

    /// The class name Praat uses on disk for this tier kind.
    pub fn tier_type(&self) -> &'static str {
        match self.kind {
            TierKind::Interval => "IntervalTier",
            TierKind::Point => "TextTier",
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TierElement> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierElement> {
        self.elements.iter()
    }

    /// The intervals of an interval tier (empty iterator on a point tier).
    pub fn intervals(&self) -> impl Iterator<Item = &Interval> {
        self.elements.iter().filter_map(|e| match e {
            TierElement::Interval(i) => Some(i),
            TierElement::Point(_) => None,
        })
    }

    /// The points of a point tier (empty iterator on an interval tier).
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.elements.iter().filter_map(|e| match e {
            TierElement::Point(p) => Some(p),
            TierElement::Interval(_) => None,
        })
    }

    /// Where the tier's first element starts.
    pub fn xmin(&self) -> Option<f64> {
        self.elements.first().map(TierElement::start)
    }

    /// Where the tier's last element ends.
    pub fn xmax(&self) -> Option<f64> {
        self.elements.last().map(TierElement::end)
    }

    /// Append an element, enforcing kind homogeneity.
    pub fn push(&mut self, element: TierElement) -> Result<(), GridError> {
        if element.kind() != self.kind {
            return Err(GridError::Invariant(format!(
                "cannot insert a {:?} element into a {:?} tier",
                element.kind(),
                self.kind
            )));
        }
        self.elements.push(element);
        Ok(())
    }

    pub fn push_interval(&mut self, interval: Interval) -> Result<(), GridError> {
        self.push(TierElement::Interval(interval))
    }

    pub fn push_point(&mut self, point: Point) -> Result<(), GridError> {
        self.push(TierElement::Point(point))
    }

    /// Merge intervals `first..=last` into a single interval whose label is
    /// the concatenation of the merged labels. Only defined for interval
    /// tiers.
    pub fn merge(&mut self, first: usize, last: usize) -> Result<(), GridError> {
        if self.is_point_tier() {
            return Err(GridError::Invariant(
                "merge is only defined for interval tiers".to_string(),
            ));
        }
        if first > last || last >= self.elements.len() {
            return Err(GridError::Invariant(format!(
                "merge range {first}..={last} is out of bounds for a tier of {} elements",
                self.elements.len()
            )));
        }
        let merged: Vec<&Interval> = self.elements[first..=last]
            .iter()
            .filter_map(|e| match e {
                TierElement::Interval(i) => Some(i),
                TierElement::Point(_) => None,
            })
            .collect();
        let text: String = merged.iter().map(|i| i.text().as_str()).collect();
        let interval = Interval::new(text, merged[0].xmin(), merged[merged.len() - 1].xmax())?;
        self.elements
            .splice(first..=last, [TierElement::Interval(interval)]);
        Ok(())
    }

    /// Concatenate two tiers of the same kind; `other` must not begin
    /// before this tier ends.
    pub fn concat(&self, other: &Tier) -> Result<Tier, GridError> {
        if self.kind != other.kind {
            return Err(GridError::Invariant(
                "cannot concatenate tiers of different kinds".to_string(),
            ));
        }
        if let (Some(end), Some(start)) = (self.xmax(), other.xmin()) {
            if end - start > TIME_TOLERANCE {
                return Err(GridError::Invariant(format!(
                    "cannot extend a tier with one that begins before it ends: {end} > {start}"
                )));
            }
        }
        let mut elements = self.elements.clone();
        elements.extend(other.elements.iter().cloned());
        Ok(Tier {
            kind: self.kind,
            elements,
        })
    }

    /// Move every element by `delta`.
    pub fn offset(&mut self, delta: f64) {
        for element in &mut self.elements {
            match element {
                TierElement::Interval(i) => i.offset(delta),
                TierElement::Point(p) => p.offset(delta),
            }
        }
    }

    /// Check the ordering invariants against the enclosing grid's extent.
    ///
    /// Interval tiers must be contiguous and span the grid; point tiers
    /// must be ordered by non-decreasing time. Empty tiers are valid.
    pub fn validate(&self, grid_xmin: f64, grid_xmax: f64) -> Result<(), GridError> {
        if self.elements.is_empty() {
            return Ok(());
        }
        match self.kind {
            TierKind::Interval => {
                let intervals: Vec<&Interval> = self.intervals().collect();
                if (intervals[0].xmin() - grid_xmin).abs() > TIME_TOLERANCE {
                    return Err(GridError::Invariant(format!(
                        "first interval starts at {} but the grid starts at {grid_xmin}",
                        intervals[0].xmin()
                    )));
                }
                if (intervals[intervals.len() - 1].xmax() - grid_xmax).abs() > TIME_TOLERANCE {
                    return Err(GridError::Invariant(format!(
                        "last interval ends at {} but the grid ends at {grid_xmax}",
                        intervals[intervals.len() - 1].xmax()
                    )));
                }
                for (i, pair) in intervals.windows(2).enumerate() {
                    if (pair[0].xmax() - pair[1].xmin()).abs() > TIME_TOLERANCE {
                        return Err(GridError::Invariant(format!(
                            "interval {} ends at {} but interval {} starts at {}",
                            i,
                            pair[0].xmax(),
                            i + 1,
                            pair[1].xmin()
                        )));
                    }
                }
            }
            TierKind::Point => {
                let points: Vec<&Point> = self.points().collect();
                for (i, pair) in points.windows(2).enumerate() {
                    if pair[0].xpos() - pair[1].xpos() > TIME_TOLERANCE {
                        return Err(GridError::Invariant(format!(
                            "point {} at {} comes after point {} at {}",
                            i,
                            pair[0].xpos(),
                            i + 1,
                            pair[1].xpos()
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
