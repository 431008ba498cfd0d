use crate::render::is_marker_line;

/// Expand plain text back into the content dialect.
///
/// The result is a single paragraph. Headings, quotes and lists from the
/// source are not reconstructed, so previews read as prose. Text that would
/// itself parse as a marker line (`# x`, `> x`, `* x`) loses the whitespace
/// after its leading marker run.
pub fn to_markup(plain: &str) -> String {
    let mut line = plain
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    while is_marker_line(&line) {
        unmark(&mut line);
    }
    line
}

/// Remove the whitespace that follows the leading marker run.
fn unmark(line: &mut String) {
    let Some(marker) = line.chars().next() else {
        return;
    };
    let run = line.len() - line.trim_start_matches(marker).len();
    let gap = line[run..].len() - line[run..].trim_start().len();
    line.replace_range(run..run + gap, "");
}
