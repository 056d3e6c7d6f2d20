//! Text rendering of boards and run progress.

/// Draws a board: one line per row, `Q` where a queen stands, `.` elsewhere.
///
/// Gene index is the column and gene value the row, so each column holds
/// exactly one `Q`.
///
/// ```
/// use nqueens_ga::render;
///
/// assert_eq!(render::board(&[1, 0]), ". Q\nQ .");
/// ```
pub fn board(genes: &[usize]) -> String {
    let n = genes.len();
    (0..n)
        .map(|row| {
            genes
                .iter()
                .map(|&r| if r == row { "Q" } else { "." })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plots best fitness per generation as a text scatter chart.
///
/// The y axis is the conflict count (at most `height` rows), the x axis the
/// generation. Histories longer than `width` are bucketed, each column
/// showing the best (lowest) value of its bucket.
pub fn progress_chart(history: &[usize], width: usize, height: usize) -> String {
    if history.is_empty() || width == 0 || height == 0 {
        return String::new();
    }

    let columns = bucket_min(history, width);
    let max = columns.iter().copied().max().unwrap_or(0);
    let rows = height.min(max + 1);
    let row_of = |v: usize| {
        if rows == 1 {
            0
        } else {
            (v * (rows - 1) + max / 2) / max
        }
    };
    let label_width = max.to_string().len();

    let mut out = String::new();
    for row in (0..rows).rev() {
        let label = if rows == 1 { 0 } else { row * max / (rows - 1) };
        let line: String = columns
            .iter()
            .map(|&v| if row_of(v) == row { '*' } else { ' ' })
            .collect();
        out.push_str(&format!("{label:>label_width$} |{}\n", line.trim_end()));
    }
    out.push_str(&format!(
        "{:>label_width$} +{}\n",
        "",
        "-".repeat(columns.len())
    ));
    out.push_str(&format!(
        "{:>label_width$}  {} generations",
        "",
        history.len()
    ));
    out
}

/// Shrinks `values` to at most `width` entries, keeping each bucket's minimum.
fn bucket_min(values: &[usize], width: usize) -> Vec<usize> {
    let len = values.len();
    if len <= width {
        return values.to_vec();
    }
    (0..width)
        .map(|x| {
            let start = x * len / width;
            let end = (x + 1) * len / width;
            values[start..end].iter().copied().min().unwrap_or(0)
        })
        .collect()
}
