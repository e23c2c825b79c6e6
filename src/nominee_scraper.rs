//! Nominee title extraction from the awards page tables.

use log::info;
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|err| format!("invalid selector '{}': {}", css, err))
}

fn span_count(cell: ElementRef, attribute: &str) -> usize {
    cell.value()
        .attr(attribute)
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|count| *count > 0)
        .unwrap_or(1)
}

/// Collects the title-column text of one table.
///
/// The year header cell spans all of a ceremony's nominee rows via
/// `rowspan`, so rows after the first in a group start with the film
/// cell. Spanned cells are tracked per column so the second logical
/// column resolves to the film for every row, the way the original
/// table reads once spans are expanded.
fn table_titles(
    table: ElementRef,
    row_selector: &Selector,
    cell_selector: &Selector,
) -> Vec<String> {
    const TITLE_COLUMN: usize = 1;

    // Remaining rows each logical column is still covered for.
    let mut carry: Vec<usize> = Vec::new();
    let mut titles = Vec::new();
    for (row_index, row) in table.select(row_selector).enumerate() {
        let mut cells = row.select(cell_selector).peekable();
        let mut column = 0;
        let mut title_text: Option<String> = None;
        while cells.peek().is_some() || column < carry.len() {
            if column < carry.len() && carry[column] > 0 {
                carry[column] -= 1;
                column += 1;
                continue;
            }
            let Some(cell) = cells.next() else {
                column += 1;
                continue;
            };
            let rowspan = span_count(cell, "rowspan");
            let colspan = span_count(cell, "colspan");
            if carry.len() < column + colspan {
                carry.resize(column + colspan, 0);
            }
            for spanned in carry.iter_mut().skip(column).take(colspan) {
                *spanned = rowspan - 1;
            }
            if column <= TITLE_COLUMN && TITLE_COLUMN < column + colspan {
                title_text = Some(cell.text().collect::<String>());
            }
            column += colspan;
        }
        // Header row: spans are recorded above, the text is not a title.
        if row_index == 0 {
            continue;
        }
        let Some(text) = title_text else {
            continue;
        };
        let title = text.trim();
        if title.is_empty() {
            continue;
        }
        titles.push(title.to_string());
    }
    titles
}

/// Fetches the awards page and returns every nominee title in source order.
///
/// Network failure propagates; there is no retry.
pub fn fetch_nominee_titles(agent: &ureq::Agent, url: &str) -> Result<Vec<String>, String> {
    let response = agent
        .get(url)
        .call()
        .map_err(|err| format!("nominee page request failed: {}", err))?;
    let html = response
        .into_string()
        .map_err(|err| format!("nominee page read failed: {}", err))?;
    let titles = extract_titles(&html)?;
    info!("Scraped {} nominee rows from {}", titles.len(), url);
    Ok(titles)
}

/// Parses nominee titles out of the page's wikitable elements.
///
/// The last wikitable on the page is a statistics table rather than a
/// nominee listing and is skipped. Within each remaining table the second
/// logical column holds the film title; the header row, empty cells, and
/// rows with no title column are dropped. Titles repeated across tables
/// survive here and are deduplicated later, per classification leaf.
pub fn extract_titles(html: &str) -> Result<Vec<String>, String> {
    let document = Html::parse_document(html);
    let table_selector = selector("table.wikitable")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("th, td")?;

    let tables: Vec<_> = document.select(&table_selector).collect();
    let nominee_table_count = tables.len().saturating_sub(1);

    let mut titles = Vec::new();
    for table in tables.into_iter().take(nominee_table_count) {
        titles.extend(table_titles(table, &row_selector, &cell_selector));
    }
    Ok(titles)
}
