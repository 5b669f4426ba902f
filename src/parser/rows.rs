const ROW_START: &str = r#"<a class="b" href=""#;
const NAME_CLOSE: &str = "</a>";
const ROW_END: &str = "</tr>";
const VALUE_MARKER: &str = r#"data-sort=""#;

const APP_PREFIX: &str = "/app/";
const HREF_TAIL: &str = "/\"";

/// One game row before any field conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub id: String,
    pub title: String,
    pub values: Vec<&'a str>,
}

/// Walks a document forward from `cursor`, yielding one [`RawRow`] per
/// `<a class="b" href="…">…</a> … </tr>` block.
///
/// Stops at the first missing row start, name close or row terminator. The
/// cursor only ever moves forward.
pub struct RowScanner<'a> {
    doc: &'a str,
    cursor: usize,
}

impl<'a> RowScanner<'a> {
    pub fn new(doc: &'a str, cursor: usize) -> Self {
        Self {
            doc,
            cursor: cursor.min(doc.len()),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for RowScanner<'a> {
    type Item = RawRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let doc = self.doc;
        let rest = doc.get(self.cursor..)?;

        let row_start = self.cursor + rest.find(ROW_START)?;
        let chunk_start = row_start + ROW_START.len();

        // ── Name chunk: /app/ID/">TITLE ──
        let Some(name_close) = doc[chunk_start..].find(NAME_CLOSE).map(|i| chunk_start + i) else {
            self.cursor = doc.len();
            return None;
        };
        let (id, title) = split_id_title(&doc[chunk_start..name_close]);

        // ── Data span up to </tr> ──
        let span_start = name_close + NAME_CLOSE.len();
        let Some(row_end) = doc[span_start..].find(ROW_END).map(|i| span_start + i) else {
            self.cursor = doc.len();
            return None;
        };

        self.cursor = row_end + ROW_END.len();
        Some(RawRow {
            id,
            title,
            values: collect_values(&doc[span_start..row_end]),
        })
    }
}

/// Every `data-sort="…"` value in `span`, left to right.
pub fn collect_values(span: &str) -> Vec<&str> {
    let mut values = Vec::new();
    let mut pos = 0;

    while let Some(rel) = span[pos..].find(VALUE_MARKER) {
        let start = pos + rel + VALUE_MARKER.len();
        let Some(len) = span[start..].find('"') else {
            break;
        };
        values.push(&span[start..start + len]);
        pos = start + len + 1;
    }

    values
}

/// `/app/730/">Counter-Strike 2` → (`730`, `Counter-Strike 2`).
pub fn split_id_title(chunk: &str) -> (String, String) {
    let cleaned = clean_chunk(chunk);
    match cleaned.split_once('>') {
        Some((id, title)) => (id.to_string(), title.to_string()),
        None => (cleaned, String::new()),
    }
}

fn clean_chunk(chunk: &str) -> String {
    let chunk = chunk.strip_prefix(APP_PREFIX).unwrap_or(chunk);
    chunk
        .replacen(HREF_TAIL, "", 1)
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
}
