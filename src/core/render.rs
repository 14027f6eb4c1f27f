//! Output formatting: aligned table (default) and JSON lines.

use std::io::{self, Write};

use crate::core::extract::SearchResult;
use crate::core::util::{char_width, ellipsis};

/// Minimum width of an aligned column, padding included.
pub const MIN_WIDTH: usize = 10;
/// Spaces added after the widest cell of a column.
pub const PADDING: usize = 5;
const PAD_CHAR: char = ' ';

/// Joins capabilities in the second column.
pub const CAPABILITY_SEPARATOR: &str = " + ";
/// Descriptions longer than this many characters are cut and get an ellipsis.
pub const DESCRIPTION_MAX: usize = 80;

/// Table cells for one result: name, joined capabilities, truncated description.
pub fn row_cells(result: &SearchResult) -> [String; 3] {
    [
        result.name.clone(),
        result.capabilities.join(CAPABILITY_SEPARATOR),
        ellipsis(&result.description, DESCRIPTION_MAX),
    ]
}

/// Buffers tab-separated rows and writes them with elastic column alignment.
///
/// Every cell except the last of its row is padded to `max(MIN_WIDTH, widest + PADDING)`
/// for its column; the last cell is written as-is. Rows are written and `out` flushed by
/// [`finish`](Self::finish), or on drop if `finish` was never reached.
pub struct TableWriter<W: Write> {
    out: W,
    rows: Vec<Vec<String>>,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            rows: Vec::new(),
        }
    }

    /// Buffer one row. Tabs and line breaks inside a cell become spaces so a cell
    /// can never end its row or column early.
    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.rows
            .push(cells.into_iter().map(|cell| flatten_cell(&cell)).collect());
    }

    /// Write all buffered rows and flush.
    pub fn finish(mut self) -> io::Result<()> {
        self.write_rows()
    }

    fn write_rows(&mut self) -> io::Result<()> {
        let rows = std::mem::take(&mut self.rows);
        let widths = column_widths(&rows);
        for row in &rows {
            let mut line = String::new();
            let last = row.len().saturating_sub(1);
            for (i, cell) in row.iter().enumerate() {
                line.push_str(cell);
                if i < last {
                    let pad = widths[i].saturating_sub(char_width(cell));
                    line.extend(std::iter::repeat_n(PAD_CHAR, pad));
                }
            }
            line.push('\n');
            self.out.write_all(line.as_bytes())?;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for TableWriter<W> {
    fn drop(&mut self) {
        if !self.rows.is_empty() {
            let _ = self.write_rows();
        }
    }
}

fn flatten_cell(cell: &str) -> String {
    cell.replace(['\t', '\r', '\n'], " ")
}

fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![MIN_WIDTH; columns];
    for row in rows {
        let aligned = row.len().saturating_sub(1);
        for (width, cell) in widths.iter_mut().zip(&row[..aligned]) {
            *width = (*width).max(char_width(cell) + PADDING);
        }
    }
    widths
}

/// Write results as an aligned table. Returns the number of rows written.
pub fn write_table<W, I>(out: W, entries: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = SearchResult>,
{
    let mut table = TableWriter::new(out);
    let mut count = 0;
    for entry in entries {
        table.push_row(row_cells(&entry));
        count += 1;
    }
    table.finish()?;
    Ok(count)
}

/// Write results as one JSON object per line, description untruncated.
/// Returns the number of lines written.
pub fn write_json_lines<W, I>(mut out: W, entries: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = SearchResult>,
{
    let mut count = 0;
    for entry in entries {
        serde_json::to_writer(&mut out, &entry)?;
        out.write_all(b"\n")?;
        count += 1;
    }
    out.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, caps: &[&str], desc: &str) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            capabilities: caps.iter().map(|c| c.to_string()).collect(),
            description: desc.to_string(),
        }
    }

    fn table(entries: Vec<SearchResult>) -> String {
        let mut out = Vec::new();
        write_table(&mut out, entries).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn capabilities_joined_with_plus() {
        let cells = row_cells(&result("m", &["tools", "vision"], "d"));
        assert_eq!(cells[1], "tools + vision");
        let cells = row_cells(&result("m", &[], "d"));
        assert_eq!(cells[1], "");
    }

    #[test]
    fn long_description_truncated_in_row() {
        let desc = "x".repeat(100);
        let cells = row_cells(&result("m", &[], &desc));
        assert_eq!(cells[2], format!("{}...", "x".repeat(80)));
    }

    #[test]
    fn short_columns_use_min_width() {
        let out = table(vec![result("a", &["b"], "c")]);
        assert_eq!(out, "a         b         c\n");
    }

    #[test]
    fn wide_columns_get_padding() {
        let out = table(vec![
            result("granite3.2-vision", &["tools", "vision"], "first"),
            result("qwen3", &["thinking"], "second"),
        ]);
        let expected = concat!(
            "granite3.2-vision     tools + vision     first\n",
            "qwen3                 thinking           second\n",
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn alignment_counts_characters() {
        let out = table(vec![
            result("ñandú-12345", &[], "x"),
            result("abcdefghijk", &[], "y"),
        ]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines[0].chars().position(|c| c == 'x'),
            lines[1].chars().position(|c| c == 'y')
        );
    }

    #[test]
    fn embedded_line_breaks_stay_on_one_row() {
        let out = table(vec![
            result("a", &[], "line one\nline two"),
            result("averyveryverylongname", &[], "x"),
        ]);
        let expected = concat!(
            "a                                   line one line two\n",
            "averyveryverylongname               x\n",
        );
        assert_eq!(out, expected);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn embedded_tabs_do_not_add_columns() {
        let out = table(vec![result("na\tme", &["to\tols"], "d")]);
        assert_eq!(out, "na me     to ols     d\n");
    }

    #[test]
    fn empty_input_writes_nothing() {
        let mut out = Vec::new();
        let rows = write_table(&mut out, Vec::new()).unwrap();
        assert_eq!(rows, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn drop_flushes_unfinished_table() {
        let mut out = Vec::new();
        {
            let mut table = TableWriter::new(&mut out);
            table.push_row(["a".to_string(), "b".to_string()]);
        }
        assert_eq!(String::from_utf8(out).unwrap(), "a         b\n");
    }

    #[test]
    fn json_lines_one_object_per_entry() {
        let mut out = Vec::new();
        let long = "y".repeat(90);
        let n = write_json_lines(
            &mut out,
            vec![result("a", &["tools"], &long), result("b", &[], "")],
        )
        .unwrap();
        assert_eq!(n, 2);
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines[0]["name"], "a");
        assert_eq!(lines[0]["capabilities"], serde_json::json!(["tools"]));
        assert_eq!(lines[0]["description"], long.as_str());
        assert_eq!(lines[1]["capabilities"], serde_json::json!([]));
    }
}
