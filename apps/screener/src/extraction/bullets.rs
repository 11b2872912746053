//! Bullet glyph recognition shared by the work-experience and project parsers.

/// Closed set of glyphs the extraction output may use to open a bullet line.
pub const BULLET_GLYPHS: &[char] = &['•', '-', '*', '○', '·', '►', '▪', '▸', '➢'];

/// True when the (already trimmed) line opens with a bullet glyph.
pub fn is_bulleted(line: &str) -> bool {
    line.chars().next().is_some_and(|c| BULLET_GLYPHS.contains(&c))
}

/// Removes exactly one leading bullet glyph, then trims.
pub fn strip_one_bullet(line: &str) -> &str {
    let mut chars = line.chars();
    match chars.next() {
        Some(c) if BULLET_GLYPHS.contains(&c) => chars.as_str().trim(),
        _ => line.trim(),
    }
}

/// Removes every leading glyph and space, e.g. `"• - Built X"` → `"Built X"`.
pub fn strip_bullets(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == ' ' || BULLET_GLYPHS.contains(&c))
        .trim()
}
