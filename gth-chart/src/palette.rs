//! Diverging color palette for temperature variance, coldest to warmest.

/// Eleven fixed hue steps used by the quantized color scale.
pub const TEMPERATURE_PALETTE: [&str; 11] = [
    "#313695", // Dark blue
    "#4575b4",
    "#74add1",
    "#abd9e9",
    "#e0f3f8",
    "#ffffbf", // Pale yellow in the middle
    "#fee090",
    "#fdae61",
    "#f46d43",
    "#d73027",
    "#a50026", // Dark red
];

/// True when `color` is one of the palette entries.
pub fn is_palette_color(color: &str) -> bool {
    TEMPERATURE_PALETTE.contains(&color)
}
