use serde::Deserialize;

use super::model::{Row, RowIssue, RowIssueKind, Series, ValueColumn};

/// What to do with a row whose numeric column does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Keep the row with a `NaN` value (drawn as a gap).
    #[default]
    Keep,
    /// Leave the row out of the series.
    Drop,
}

/// Map parsed rows to a label/value series for one numeric column.
///
/// Rows keep their input order. Every unparseable value is reported in the
/// returned issue list regardless of `policy`.
pub fn extract_series(
    rows: &[Row],
    column: ValueColumn,
    policy: MalformedPolicy,
) -> (Series, Vec<RowIssue>) {
    let mut series = Series::with_capacity(rows.len());
    let mut issues = Vec::new();

    for row in rows {
        let raw = row.field(column);
        let value = match parse_value(raw) {
            Some(v) => v,
            None => {
                issues.push(RowIssue {
                    line: row.line,
                    kind: RowIssueKind::InvalidNumber {
                        column,
                        value: raw.to_string(),
                    },
                });
                match policy {
                    MalformedPolicy::Keep => f64::NAN,
                    MalformedPolicy::Drop => continue,
                }
            }
        };
        series.push(row.label(), value);
    }

    (series, issues)
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
