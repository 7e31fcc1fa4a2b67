//! Round-trip and cross-format equivalence tests
//!
//! The round-trip law: for any valid grid and any of the three encodings,
//! decoding an encoding of the grid yields an equal grid. Equality can be
//! exact — binary carries doubles bit for bit, and Rust's float formatting
//! round-trips through the text encodings.

use proptest::prelude::*;
use textgrid::{Direction, FormatRegistry, Interval, Point, TextGrid, Tier};

const FORMATS: [&str; 3] = ["long", "short", "binary"];

fn sample_grid() -> TextGrid {
    let mut grid = TextGrid::new(0.0, 2.3).unwrap();
    grid.insert_tier(
        "syllables",
        Tier::from_intervals(vec![
            Interval::new("jə", 0.0, 0.7).unwrap(),
            Interval::new("say \"ah\"", 0.7, 1.6).unwrap(),
            Interval::new("", 1.6, 2.3).unwrap(),
        ]),
    )
    .unwrap();
    grid.insert_tier(
        "events",
        Tier::from_points(vec![Point::new("click", 0.5), Point::new("ə", 1.9)]),
    )
    .unwrap();
    grid
}

#[test]
fn every_format_round_trips() {
    let registry = FormatRegistry::default();
    let grid = sample_grid();
    for format in FORMATS {
        let encoded = registry.encode(&grid, format).unwrap().into_bytes();
        let decoded = registry.decode(&encoded, format).unwrap();
        assert_eq!(decoded, grid, "round trip via {format}");
    }
}

#[test]
fn cross_format_equivalence() {
    let registry = FormatRegistry::default();
    let grid = sample_grid();
    let decoded: Vec<TextGrid> = FORMATS
        .iter()
        .map(|format| {
            let encoded = registry.encode(&grid, format).unwrap().into_bytes();
            registry.decode_auto(&encoded).unwrap()
        })
        .collect();
    assert_eq!(decoded[0], decoded[1]);
    assert_eq!(decoded[1], decoded[2]);
}

/// The concrete scenario from the format documentation: a binary stream
/// with one interval tier named "syllables" re-encoded as long text.
#[test]
fn binary_to_long_scenario() {
    let mut bytes: Vec<u8> = Vec::new();
    bytes.extend_from_slice(b"ooBinaryFile\x08TextGrid");
    bytes.extend_from_slice(&0.0f64.to_be_bytes());
    bytes.extend_from_slice(&1.0f64.to_be_bytes());
    bytes.push(1);
    bytes.extend_from_slice(&1i32.to_be_bytes());
    bytes.push(12);
    bytes.extend_from_slice(b"IntervalTier");
    bytes.extend_from_slice(&9i16.to_be_bytes());
    bytes.extend_from_slice(b"syllables");
    bytes.extend_from_slice(&0.0f64.to_be_bytes());
    bytes.extend_from_slice(&1.0f64.to_be_bytes());
    bytes.extend_from_slice(&2i32.to_be_bytes());
    for (xmin, xmax, label) in [(0.0f64, 0.5f64, b"a"), (0.5, 1.0, b"b")] {
        bytes.extend_from_slice(&xmin.to_be_bytes());
        bytes.extend_from_slice(&xmax.to_be_bytes());
        bytes.extend_from_slice(&1i16.to_be_bytes());
        bytes.extend_from_slice(label);
    }

    let registry = FormatRegistry::default();
    assert_eq!(registry.detect(&bytes).unwrap().name(), "binary");

    let grid = registry.decode_auto(&bytes).unwrap();
    let long = registry.encode(&grid, "long").unwrap().into_bytes();
    let reparsed = registry.decode_auto(&long).unwrap();

    let tier = reparsed.tier("syllables").unwrap();
    let spans: Vec<(f64, f64, &str)> = tier
        .intervals()
        .map(|i| (i.xmin(), i.xmax(), i.text().as_str()))
        .collect();
    assert_eq!(spans, vec![(0.0, 0.5, "a"), (0.5, 1.0, "b")]);

    // No notation tokens present, so transcoding is the identity
    assert_eq!(textgrid::transcode("a", Direction::ToUnicode, false), "a");
}

fn label() -> impl Strategy<Value = String> {
    prop_oneof![
        // Printable ASCII, quotes and backslashes included
        "[ -~]{0,10}",
        // Forces the UTF-16 escape in the binary encoding
        "[əæøŋ\u{0303}]{1,6}",
    ]
}

fn boundaries() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(0.001f64..10.0, 1..5).prop_map(|deltas| {
        let mut bounds = vec![0.0];
        let mut acc = 0.0;
        for delta in deltas {
            acc += delta;
            bounds.push(acc);
        }
        bounds
    })
}

fn grid_strategy() -> impl Strategy<Value = TextGrid> {
    boundaries()
        .prop_flat_map(|bounds| {
            let intervals = bounds.len() - 1;
            (
                Just(bounds),
                proptest::collection::vec(label(), intervals),
                proptest::collection::vec((0.0f64..1.0, label()), 0..4),
            )
        })
        .prop_map(|(bounds, labels, raw_points)| {
            let xmax = *bounds.last().unwrap();
            let mut grid = TextGrid::new(0.0, xmax).unwrap();

            let intervals: Vec<Interval> = labels
                .into_iter()
                .enumerate()
                .map(|(i, text)| Interval::new(text, bounds[i], bounds[i + 1]).unwrap())
                .collect();
            grid.insert_tier("words", Tier::from_intervals(intervals))
                .unwrap();

            let mut positions: Vec<f64> = raw_points.iter().map(|(at, _)| at * xmax).collect();
            positions.sort_by(f64::total_cmp);
            let points: Vec<Point> = positions
                .into_iter()
                .zip(raw_points)
                .map(|(xpos, (_, text))| Point::new(text, xpos))
                .collect();
            grid.insert_tier("events", Tier::from_points(points))
                .unwrap();
            grid
        })
}

proptest! {
    #[test]
    fn arbitrary_grids_round_trip(grid in grid_strategy()) {
        let registry = FormatRegistry::default();
        for format in FORMATS {
            let encoded = registry.encode(&grid, format).unwrap().into_bytes();
            let decoded = registry.decode_auto(&encoded).unwrap();
            prop_assert_eq!(&decoded, &grid, "round trip via {}", format);
        }
    }

    #[test]
    fn transcode_is_invertible_on_praat_labels(label in r"[a-z]{0,4}(\\sw|\\ae|\\ng|\\:f)[a-z]{0,4}") {
        let unicode = textgrid::transcode(&label, Direction::ToUnicode, true);
        let back = textgrid::transcode(&unicode, Direction::ToPraat, true);
        prop_assert_eq!(back, label);
    }
}
