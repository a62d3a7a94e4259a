//! Indentation normalisation for code blocks lifted out of doc comments.

/// Normalise the indentation of a code block.
///
/// Tabs become two spaces. The first line loses all leading whitespace (it
/// usually follows the opening fence directly). Every other line loses the
/// common minimum indent of the non-blank lines after the first, and what
/// is left is rounded down to an even number of spaces.
pub fn normalize_tabs(input: &str) -> String {
    let expanded = input.replace('\t', "  ");
    let lines: Vec<&str> = expanded.split('\n').collect();

    let min = lines
        .iter()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_ws(line))
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(expanded.len());
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            out.push_str(line.trim_start());
            continue;
        }
        out.push('\n');
        let rest = strip_ws(line, min);
        let indent = leading_ws(rest);
        let even = indent - indent % 2;
        out.extend(std::iter::repeat(' ').take(even));
        out.push_str(strip_ws(rest, indent));
    }
    out
}

/// Number of leading whitespace characters. A trailing `\r` on a blank
/// line counts as whitespace, which only matters for blank lines.
fn leading_ws(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Drop up to `n` leading whitespace characters.
fn strip_ws(line: &str, n: usize) -> &str {
    let cut = line
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .nth(n)
        .map(|(idx, _)| idx)
        .unwrap_or_else(|| line.len() - line.trim_start().len());
    &line[cut..]
}
