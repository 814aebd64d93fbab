use super::model::{Row, RowIssue, RowIssueKind};

/// First-column value that marks a header line.
pub const HEADER_TOKEN: &str = "Year";

/// Number of fields a data row must carry.
pub const ROW_WIDTH: usize = 5;

/// Rows parsed from one source, plus every line that was dropped.
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub rows: Vec<Row>,
    pub issues: Vec<RowIssue>,
}

/// Parse `Year,Month,Days,Usage,CO2` text into rows.
///
/// * Lines are split on `,` only; quotes are ordinary characters.
/// * Any line whose first field is exactly `Year` is a header and skipped,
///   wherever it appears.
/// * Blank lines (including the final newline) are skipped silently.
/// * Fields past the fifth are ignored.
/// * Short lines and lines with an empty year are dropped and reported.
pub fn parse_table(text: &str) -> ParsedTable {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut table = ParsedTable::default();

    for (idx, result) in reader.records().enumerate() {
        let fallback_line = idx as u64 + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                // Only reachable on invalid UTF-8, which `&str` input rules out.
                log::warn!("skipping unreadable record {fallback_line}: {e}");
                continue;
            }
        };
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);

        if record.get(0) == Some(HEADER_TOKEN) {
            continue;
        }

        if record.len() < ROW_WIDTH {
            table.issues.push(RowIssue {
                line,
                kind: RowIssueKind::MissingFields {
                    found: record.len(),
                },
            });
            continue;
        }

        let field = |i: usize| record.get(i).unwrap_or_default().to_string();
        let row = Row {
            year: field(0),
            month: field(1),
            days: field(2),
            usage: field(3),
            co2: field(4),
            line,
        };

        if row.year.is_empty() {
            table.issues.push(RowIssue {
                line,
                kind: RowIssueKind::EmptyYear,
            });
            continue;
        }

        table.rows.push(row);
    }

    table
}
