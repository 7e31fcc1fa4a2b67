//! CSV tier import/export
//!
//! A convenience layer over the public model: one row per element,
//! `"label";xmin;xmax` for intervals and `"label";time` for points.
//! Interval labels are transcoded to Unicode on export, the usual form
//! for spreadsheet work. On import the first row fixes the tier kind.

use textgrid::{Direction, Interval, Point, TextGrid, Tier};

/// Render one tier as CSV rows.
pub fn export_tier(grid: &TextGrid, name: &str, delimiter: char) -> Result<String, String> {
    let tier = grid
        .tier(name)
        .ok_or_else(|| format!("no tier named \"{name}\""))?;
    let mut out = String::new();
    if tier.is_point_tier() {
        for point in tier.points() {
            out.push_str(&format!(
                "\"{}\"{delimiter}{}\n",
                point.text(),
                point.xpos()
            ));
        }
    } else {
        for interval in tier.intervals() {
            let label = interval.text().transcode(Direction::ToUnicode, false);
            out.push_str(&format!(
                "\"{label}\"{delimiter}{}{delimiter}{}\n",
                interval.xmin(),
                interval.xmax()
            ));
        }
    }
    Ok(out)
}

/// Parse CSV rows into a new tier.
///
/// Rows with two columns build a point tier, rows with three an interval
/// tier. Numeric columns are split off from the right, so labels may
/// contain the delimiter.
pub fn import_tier(content: &str, delimiter: char) -> Result<Tier, String> {
    let mut intervals: Vec<Interval> = Vec::new();
    let mut points: Vec<Point> = Vec::new();
    let mut columns: Option<usize> = None;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = index + 1;

        let expected = *columns.get_or_insert_with(|| detect_columns(line, delimiter));
        let mut fields = line.rsplitn(expected, delimiter);
        if expected == 2 {
            let xpos = parse_number(fields.next(), lineno)?;
            let label = unquote_label(fields.next().unwrap_or(""));
            points.push(Point::new(label, xpos));
        } else {
            let xmax = parse_number(fields.next(), lineno)?;
            let xmin = parse_number(fields.next(), lineno)?;
            let label = unquote_label(fields.next().unwrap_or(""));
            intervals.push(
                Interval::new(label, xmin, xmax).map_err(|e| format!("line {lineno}: {e}"))?,
            );
        }
    }

    match columns {
        Some(2) => Ok(Tier::from_points(points)),
        Some(3) => Ok(Tier::from_intervals(intervals)),
        _ => Err("no rows to import".to_string()),
    }
}

/// Interval rows end in two numeric columns, point rows in one. Counting
/// from the right keeps labels containing the delimiter intact.
fn detect_columns(line: &str, delimiter: char) -> usize {
    let fields: Vec<&str> = line.rsplitn(3, delimiter).collect();
    if fields.len() == 3
        && fields[0].trim().parse::<f64>().is_ok()
        && fields[1].trim().parse::<f64>().is_ok()
    {
        3
    } else {
        2
    }
}

fn parse_number(field: Option<&str>, lineno: usize) -> Result<f64, String> {
    let field = field.ok_or_else(|| format!("line {lineno}: missing column"))?;
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("line {lineno}: `{field}` is not a number"))
}

fn unquote_label(field: &str) -> String {
    let field = field.trim();
    field
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(field)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use textgrid::TextGrid;

    fn sample_grid() -> TextGrid {
        let mut grid = TextGrid::new(0.0, 1.0).unwrap();
        grid.insert_tier(
            "phones",
            Tier::from_intervals(vec![
                Interval::new("\\sw", 0.0, 0.5).unwrap(),
                Interval::new("b", 0.5, 1.0).unwrap(),
            ]),
        )
        .unwrap();
        grid.insert_tier("events", Tier::from_points(vec![Point::new("click", 0.25)]))
            .unwrap();
        grid
    }

    #[test]
    fn exports_intervals_transcoded() {
        let rows = export_tier(&sample_grid(), "phones", ';').unwrap();
        assert_eq!(rows, "\"ə\";0;0.5\n\"b\";0.5;1\n");
    }

    #[test]
    fn exports_points_verbatim() {
        let rows = export_tier(&sample_grid(), "events", ';').unwrap();
        assert_eq!(rows, "\"click\";0.25\n");
    }

    #[test]
    fn export_unknown_tier_fails() {
        assert!(export_tier(&sample_grid(), "missing", ';').is_err());
    }

    #[test]
    fn imports_interval_rows() {
        let tier = import_tier("\"a\";0;0.5\n\"b\";0.5;1\n", ';').unwrap();
        assert!(!tier.is_point_tier());
        assert_eq!(tier.len(), 2);
    }

    #[test]
    fn imports_point_rows() {
        let tier = import_tier("\"click\";0.25\n", ';').unwrap();
        assert!(tier.is_point_tier());
    }

    #[test]
    fn labels_may_contain_the_delimiter() {
        let tier = import_tier("\"a;b\";0;1\n", ';').unwrap();
        let label = tier.intervals().next().unwrap().text().as_str().to_string();
        assert_eq!(label, "a;b");
    }

    #[test]
    fn rejects_unusable_rows() {
        assert!(import_tier("", ';').is_err());
        assert!(import_tier("\"a\";zero\n", ';').is_err());
        assert!(import_tier("justalabel\n", ';').is_err());
    }
}
