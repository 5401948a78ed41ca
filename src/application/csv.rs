//! CSV rendering for admin exports.
//!
//! The header row is written bare; every data field is wrapped in double
//! quotes with embedded quotes doubled. Rows are separated by `\n` and there
//! is no trailing newline.

pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub fn render<I, R, F>(columns: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = F>,
    F: AsRef<str>,
{
    let mut lines = vec![columns.join(",")];
    lines.extend(rows.into_iter().map(|row| {
        row.into_iter()
            .map(|field| quote_field(field.as_ref()))
            .collect::<Vec<_>>()
            .join(",")
    }));
    lines.join("\n")
}
