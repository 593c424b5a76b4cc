//! Line-clear scoring and leveling.

/// Points awarded per simultaneous line clear, indexed by line count.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points for clearing `lines` rows at `level`.
///
/// A single piece cannot complete more than four rows; counts beyond four
/// are clamped to the four-line award rather than left undefined.
pub fn line_clear_points(lines: u32, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let capped = lines.min(4) as usize;
    LINE_SCORES[capped] * (level + 1)
}

/// Level for a cleared-lines total.
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    total_lines / lines_per_level
}
