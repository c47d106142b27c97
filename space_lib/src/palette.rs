//! Fixed display colors for the 21 HS sections.

/// Color for a section id, `"gray"` when the section is missing or outside
/// the known 1..=21 range. Sections 6/14 and 4/19 intentionally share a hue,
/// matching the published palette.
pub fn section_color(section: Option<u32>) -> &'static str {
    match section {
        Some(1) => "#FFC0CB",
        Some(2) => "#FFFF00",
        Some(3) => "#D2B48C",
        Some(4) => "#90EE90",
        Some(5) => "#FF1493",
        Some(6) => "#800080",
        Some(7) => "#C8A2C8",
        Some(8) => "#FFB6C1",
        Some(9) => "#FF0000",
        Some(10) => "#FFFACD",
        Some(11) => "#008000",
        Some(12) => "#006400",
        Some(13) => "#A52A2A",
        Some(14) => "#800080",
        Some(15) => "#D4AF37",
        Some(16) => "#ADD8E6",
        Some(17) => "#0000FF",
        Some(18) => "#800000",
        Some(19) => "#90EE90",
        Some(20) => "#808080",
        Some(21) => "#F5F5DC",
        _ => "gray",
    }
}
