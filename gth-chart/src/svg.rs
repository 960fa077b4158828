//! Static SVG rendering of a `HeatmapLayout`.
//!
//! Element ids and attributes match the interactive page: `#x-axis`,
//! `#y-axis`, `#legend`, and `rect.cell` carrying `data-month`, `data-year`
//! and `data-temp`.

use crate::error::Result;
use crate::layout::{Axis, AxisOrientation, Cell, HeatmapLayout, Legend};
use std::fmt::{self, Write};

/// Standalone SVG document. Each cell carries a `<title>` so static viewers
/// still show the tooltip text on hover.
pub fn render_svg(layout: &HeatmapLayout) -> Result<String> {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    write_svg(&mut out, layout, true)?;
    Ok(out)
}

/// The `<svg>` element alone, for embedding in a page.
pub fn render_svg_element(layout: &HeatmapLayout, with_titles: bool) -> Result<String> {
    let mut out = String::new();
    write_svg(&mut out, layout, with_titles)?;
    Ok(out)
}

fn write_svg(out: &mut String, layout: &HeatmapLayout, with_titles: bool) -> fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="10">"#,
        w = layout.width,
        h = layout.height,
    )?;

    write_axis(out, &layout.x_axis, Some("x-axis"))?;
    write_axis(out, &layout.y_axis, Some("y-axis"))?;
    for cell in &layout.cells {
        write_cell(out, cell, with_titles)?;
    }
    write_legend(out, &layout.legend)?;
    out.push_str("</svg>\n");
    Ok(())
}

fn write_cell(out: &mut String, cell: &Cell, with_title: bool) -> fmt::Result {
    write!(
        out,
        r#"<rect class="cell" data-month="{}" data-year="{}" data-temp="{}" x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        cell.month_index,
        cell.year,
        cell.data_temp(),
        cell.x,
        cell.y,
        cell.width,
        cell.height,
        cell.fill,
    )?;
    if with_title {
        writeln!(out, "><title>{}</title></rect>", escape_xml(&cell.tooltip_text()))
    } else {
        writeln!(out, "/>")
    }
}

fn write_legend(out: &mut String, legend: &Legend) -> fmt::Result {
    writeln!(out, r#"<g id="legend" transform="{}">"#, legend.transform())?;
    for swatch in &legend.swatches {
        writeln!(
            out,
            r#"<rect x="{}" y="0" width="{}" height="{}" fill="{}"/>"#,
            swatch.x, swatch.width, legend.height, swatch.fill
        )?;
    }
    write_axis(out, &legend.axis, None)?;
    writeln!(out, "</g>")
}

fn write_axis(out: &mut String, axis: &Axis, id: Option<&str>) -> fmt::Result {
    let id_attr = id.map(|id| format!(r#" id="{}""#, id)).unwrap_or_default();
    let ts = axis.tick_size;
    let offset = axis.label_offset();
    writeln!(
        out,
        r#"<g{} transform="{}" fill="none">"#,
        id_attr,
        axis.transform()
    )?;
    writeln!(
        out,
        r#"<path class="domain" stroke="currentColor" d="{}"/>"#,
        axis.domain_path()
    )?;

    for tick in &axis.ticks {
        let label = escape_xml(&tick.label);
        let transform = axis.tick_transform(tick);
        match axis.orientation {
            AxisOrientation::Bottom => writeln!(
                out,
                r#"<g class="tick" transform="{}"><line stroke="currentColor" y2="{}"/><text fill="currentColor" y="{}" dy="0.71em" text-anchor="middle">{}</text></g>"#,
                transform, ts, offset, label
            )?,
            AxisOrientation::Left => writeln!(
                out,
                r#"<g class="tick" transform="{}"><line stroke="currentColor" x2="-{}"/><text fill="currentColor" x="-{}" dy="0.32em" text-anchor="end">{}</text></g>"#,
                transform, ts, offset, label
            )?,
        }
    }
    writeln!(out, "</g>")
}

/// Escape text for XML/HTML content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
