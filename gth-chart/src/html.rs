//! Self-contained HTML page for a heatmap.
//!
//! Embeds the SVG, a `#tooltip` div, CSS and a small script applying the same
//! show/hide rules as `TooltipState`, so the page works offline.

use crate::error::Result;
use crate::layout::HeatmapLayout;
use crate::svg::{escape_xml, render_svg_element};
use crate::tooltip::{TOOLTIP_OFFSET_X, TOOLTIP_OFFSET_Y, TOOLTIP_OPACITY};

pub const DEFAULT_TITLE: &str = "Monthly Global Land-Surface Temperature";

/// Subtitle naming the year span and base temperature.
pub fn default_description(layout: &HeatmapLayout) -> String {
    format!(
        "{} - {}: base temperature {}°C",
        layout.first_year, layout.last_year, layout.base_temperature
    )
}

/// Render a complete HTML document.
pub fn render_html(layout: &HeatmapLayout, title: &str, description: &str) -> Result<String> {
    let svg = render_svg_element(layout, false)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <h1 id="title">{title}</h1>
    <h3 id="description">{description}</h3>
    <div id="heatmap">
{svg}    </div>
    <div id="tooltip" style="opacity: 0;"></div>
    <script>{js}</script>
</body>
</html>
"#,
        title = escape_xml(title),
        description = escape_xml(description),
        css = inline_css(),
        svg = svg,
        js = inline_javascript(),
    ))
}

fn inline_css() -> &'static str {
    r#"
body { font-family: system-ui, -apple-system, sans-serif; text-align: center; margin: 0 auto; max-width: 1240px; }
#title { margin: 16px 0 4px 0; font-size: 24px; }
#description { margin: 0 0 8px 0; font-size: 14px; font-weight: normal; color: #666; }
#heatmap { display: inline-block; }
.cell:hover { stroke: black; stroke-width: 1px; }
#tooltip { position: absolute; pointer-events: none; background-color: white; border: solid; border-width: 1px; border-radius: 5px; padding: 5px; font-size: 12px; text-align: left; }
"#
}

fn inline_javascript() -> String {
    format!(
        r#"
(function () {{
    var tooltip = document.getElementById('tooltip');
    document.querySelectorAll('#heatmap .cell').forEach(function (cell) {{
        cell.addEventListener('mouseover', function (event) {{
            tooltip.style.opacity = {opacity};
            tooltip.innerHTML = 'Year: ' + cell.dataset.year + '<br>Temperature: ' + cell.dataset.temp + '°C';
            tooltip.setAttribute('data-year', cell.dataset.year);
            tooltip.style.left = (event.pageX + {dx}) + 'px';
            tooltip.style.top = (event.pageY + {dy}) + 'px';
        }});
        cell.addEventListener('mouseout', function () {{
            tooltip.style.opacity = 0;
        }});
    }});
}})();
"#,
        opacity = TOOLTIP_OPACITY,
        dx = TOOLTIP_OFFSET_X,
        dy = TOOLTIP_OFFSET_Y,
    )
}
