//! Serializer for the short (positional) text layout

use crate::error::GridError;
use crate::formats::{
    ensure_single_line, format_time, quote, FILE_TYPE_HEADER, OBJECT_CLASS_HEADER,
};
use crate::model::{TextGrid, TierElement};

pub(crate) fn serialize(grid: &TextGrid) -> Result<String, GridError> {
    let mut out = String::new();
    out.push_str(FILE_TYPE_HEADER);
    out.push('\n');
    out.push_str(OBJECT_CLASS_HEADER);
    out.push_str("\n\n");
    out.push_str(&format_time(grid.xmin()));
    out.push('\n');
    out.push_str(&format_time(grid.xmax()));
    out.push('\n');
    out.push_str("<exists>\n");
    out.push_str(&grid.len().to_string());
    out.push('\n');

    for (name, tier) in grid.iter() {
        ensure_single_line(name, "tier name")?;
        out.push_str(&quote(tier.tier_type()));
        out.push('\n');
        out.push_str(&quote(name));
        out.push('\n');
        out.push_str(&format_time(grid.xmin()));
        out.push('\n');
        out.push_str(&format_time(grid.xmax()));
        out.push('\n');
        out.push_str(&tier.len().to_string());
        out.push('\n');

        for element in tier.iter() {
            ensure_single_line(element.text(), "label")?;
            match element {
                TierElement::Interval(interval) => {
                    out.push_str(&format_time(interval.xmin()));
                    out.push('\n');
                    out.push_str(&format_time(interval.xmax()));
                    out.push('\n');
                    out.push_str(&quote(interval.text()));
                    out.push('\n');
                }
                TierElement::Point(point) => {
                    out.push_str(&format_time(point.xpos()));
                    out.push('\n');
                    out.push_str(&quote(point.text()));
                    out.push('\n');
                }
            }
        }
    }
    Ok(out)
}
