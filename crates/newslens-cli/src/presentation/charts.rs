// Text chart primitives for the console view. Pure string building so the
// layout can be tested without a terminal.

pub const DEFAULT_WIDTH: usize = 80;
const MIN_BAR_WIDTH: usize = 10;
const BAR: &str = "█";

/// One labelled line of a bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub count: usize,
    pub marked: bool,
}

impl Row {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
            marked: false,
        }
    }

    pub fn marked(mut self, marked: bool) -> Self {
        self.marked = marked;
        self
    }
}

/// Bar proportional to `count / max` scaled to `width` cells. Non-zero counts
/// always get at least one cell.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || width == 0 || count == 0 {
        return String::new();
    }
    let cells = ((count as f64 / max as f64) * width as f64).round() as usize;
    BAR.repeat(cells.clamp(1, width))
}

/// Cells left for bars once labels and counts are laid out
pub fn bar_width(total_width: usize, label_width: usize, count_width: usize) -> usize {
    total_width
        .saturating_sub(label_width + count_width + 4)
        .max(MIN_BAR_WIDTH)
}

/// Merge consecutive rows so that at most `max_rows` remain.
///
/// Merged rows sum their counts, span their first and last labels, and are
/// marked if any member was.
pub fn condense(rows: Vec<Row>, max_rows: usize) -> Vec<Row> {
    if max_rows == 0 || rows.len() <= max_rows {
        return rows;
    }

    let chunk = rows.len().div_ceil(max_rows);
    rows.chunks(chunk)
        .map(|group| {
            let first = &group[0];
            let last = &group[group.len() - 1];
            let label = if group.len() == 1 {
                first.label.clone()
            } else {
                format!("{} .. {}", first.label, last.label)
            };
            Row {
                label,
                count: group.iter().map(|r| r.count).sum(),
                marked: group.iter().any(|r| r.marked),
            }
        })
        .collect()
}

/// Shorten `text` to `max` characters, ending with "..." when cut
pub fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{}...", kept)
}
