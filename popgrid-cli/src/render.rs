//! Plain-text rendering of a table view.

use popgrid_lib::model::Alignment;
use popgrid_lib::table::{HeaderChrome, PagerView, SortIndicator, TableView};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = " │ ";
const RULE_GAP: &str = "─┼─";

fn display_width(s: &str) -> usize {
    s.width()
}

/// Cut `s` to `max_width` display cells, marking the cut with an ellipsis.
fn truncate(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

/// Pad `s` to exactly `width` display cells.
fn pad(s: &str, width: usize, align: Alignment) -> String {
    let text = truncate(s, width);
    let gap = width.saturating_sub(display_width(&text));
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(gap)),
        Alignment::Right => format!("{}{text}", " ".repeat(gap)),
        Alignment::Center => {
            let left = gap / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(gap - left))
        }
    }
}

fn indicator_suffix(indicator: SortIndicator) -> &'static str {
    match indicator {
        SortIndicator::None => "",
        SortIndicator::Asc => " ▲",
        SortIndicator::Desc => " ▼",
    }
}

fn render_header(header: &HeaderChrome, out: &mut Vec<String>) {
    if header.hidden {
        return;
    }
    if let Some(title) = &header.title {
        out.push(title.clone());
    }
    if let Some(subtitle) = &header.subtitle {
        out.push(subtitle.clone());
    }
    if header.searchable {
        if header.search_query.is_empty() {
            out.push(format!("Search: ({})", header.search_placeholder));
        } else {
            out.push(format!("Search: {}", header.search_query));
        }
    }
    if !out.is_empty() {
        out.push(String::new());
    }
}

fn render_pager(pager: &PagerView, out: &mut Vec<String>) {
    let mut line = Vec::with_capacity(pager.tokens.len() + 2);
    line.push(if pager.has_previous { "‹ Prev" } else { "      " }.to_string());
    for token in &pager.tokens {
        if token.is_current(pager.current_page) {
            line.push(format!("[{token}]"));
        } else {
            line.push(token.to_string());
        }
    }
    if pager.has_next {
        line.push("Next ›".to_string());
    }
    out.push(String::new());
    out.push(line.join(" ").trim_end().to_string());
    if let Some(summary) = &pager.summary {
        out.push(summary.to_string());
    }
}

/// Draw `view` as lines of text.
pub fn render(view: &TableView) -> String {
    let mut out = Vec::new();
    render_header(&view.header, &mut out);

    if !view.is_populated() {
        out.push(view.message.clone().unwrap_or_default());
        return out.join("\n");
    }

    let mut headers: Vec<String> = view
        .columns
        .iter()
        .map(|c| format!("{}{}", c.header, indicator_suffix(c.indicator)))
        .collect();
    let mut aligns: Vec<Alignment> = view.columns.iter().map(|c| c.align).collect();
    let mut limits: Vec<Option<usize>> = view
        .columns
        .iter()
        .map(|c| c.width.map(usize::from))
        .collect();
    let mut body: Vec<Vec<String>> = view.rows.iter().map(|r| r.cells.clone()).collect();

    if view.has_actions {
        headers.push("Actions".to_string());
        aligns.push(Alignment::Left);
        limits.push(None);
        for (cells, row) in body.iter_mut().zip(&view.rows) {
            let labels: Vec<&str> = row.actions.iter().map(|a| a.label.as_str()).collect();
            cells.push(labels.join(" | "));
        }
    }

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let natural = body
                .iter()
                .filter_map(|cells| cells.get(i))
                .map(|cell| display_width(cell))
                .fold(display_width(header), usize::max);
            limits[i].unwrap_or(natural)
        })
        .collect();

    let line = |cells: &[String]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                pad(cell, width, aligns[i])
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP)
            .trim_end()
            .to_string()
    };

    out.push(line(&headers));
    out.push(
        widths
            .iter()
            .map(|&w| "─".repeat(w))
            .collect::<Vec<_>>()
            .join(RULE_GAP),
    );
    for cells in &body {
        out.push(line(cells));
    }

    if let Some(pager) = &view.pager {
        render_pager(pager, &mut out);
    }

    out.join("\n")
}
