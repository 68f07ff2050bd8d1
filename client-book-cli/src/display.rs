//! Table rendering for client rows.

use client_book_db::ClientRow;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

const HEADERS: [&str; 5] = ["ID", "First name", "Last name", "Email", "Phone"];

/// Placeholder for a client without a phone number.
const NO_PHONE: &str = "-";

/// Log rows as an aligned table, or a dimmed notice when there are none.
pub(crate) fn log_rows(rows: &[ClientRow]) {
    if rows.is_empty() {
        log::info!(
            "  {}",
            "No matching clients.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }

    let lines = table_lines(rows);
    if let Some((header, body)) = lines.split_first() {
        log::info!("  {}", header.if_supports_color(Stdout, |t| t.bold()));
        for line in body {
            log::info!("  {}", line);
        }
    }
}

/// Render rows as plain, space-aligned lines; the first line is the header.
pub(crate) fn table_lines(rows: &[ClientRow]) -> Vec<String> {
    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|r| {
            [
                r.client_id.to_string(),
                r.first_name.clone(),
                r.last_name.clone(),
                r.email.clone(),
                r.phone.clone().unwrap_or_else(|| NO_PHONE.to_string()),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(str::to_string);
    std::iter::once(&header)
        .chain(cells.iter())
        .map(|row| format_line(row, &widths))
        .collect()
}

fn format_line(row: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(cell);
        // Pad by characters, not bytes, so non-ASCII names line up
        let pad = width.saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat_n(' ', pad));
    }
    line.trim_end().to_string()
}
