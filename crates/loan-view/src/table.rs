//! Aligned text tables for overview cards and search listings.

use crate::palette::Color;

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// One table cell; `tone` is applied only when color is enabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Option<Color>,
    pub align: Align,
}

impl Cell {
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
            align: Align::Left,
        }
    }

    #[must_use]
    pub fn toned(text: impl Into<String>, tone: Color) -> Self {
        Self {
            tone: Some(tone),
            ..Self::plain(text)
        }
    }

    /// Right-aligned cell for counts and durations.
    #[must_use]
    pub fn numeric(text: impl Into<String>) -> Self {
        Self {
            align: Align::Right,
            ..Self::plain(text)
        }
    }
}

/// Render an aligned table: header line, dashed divider, one line per row.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<Cell>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.text.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, Align::Left))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).cloned().unwrap_or_else(|| Cell::plain("-"));
                let truncated = truncate_text(&cell.text, *width);
                let padded = pad(&truncated, *width, cell.align);
                match cell.tone {
                    Some(tone) if options.color => tone_preserving_padding(&padded, tone),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].chars().count().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, align: Align) -> String {
    let pad = " ".repeat(width.saturating_sub(value.chars().count()));
    match align {
        Align::Left => format!("{value}{pad}"),
        Align::Right => format!("{pad}{value}"),
    }
}

/// Color the text but not the alignment padding around it.
fn tone_preserving_padding(padded: &str, tone: Color) -> String {
    let start = padded.len() - padded.trim_start().len();
    let trimmed = padded.trim();
    if trimmed.is_empty() {
        return padded.to_string();
    }
    let end = start + trimmed.len();
    format!("{}{}{}", &padded[..start], tone.paint(trimmed), &padded[end..])
}
