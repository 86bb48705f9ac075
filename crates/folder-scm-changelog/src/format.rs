use crate::record::ChangeLogRecord;

/// Serializes a record into the fixed change-log schema.
///
/// The downstream parser consumes this document verbatim, so element
/// nesting, tag names, and the one-tag-per-line layout must not change.
#[must_use]
pub fn format_change_log(record: &ChangeLogRecord) -> String {
    let mut output = String::new();

    output.push_str("<?xml version='1.0' encoding='UTF-8'?>\n");
    output.push_str("<extractChanges>\n");
    output.push_str("<entry>\n");

    let label = record.label.as_deref().unwrap_or("");
    output.push_str("<zipFile>");
    output.push_str(&escape_xml(label));
    output.push_str("</zipFile>\n");

    for file in &record.files {
        output.push_str("<file>\n");
        output.push_str("<fileName>");
        output.push_str(&escape_xml(file));
        output.push_str("</fileName>\n");
        output.push_str("</file>\n");
    }

    output.push_str("</entry>\n");
    output.push_str("</extractChanges>\n");

    output
}

/// Replaces `&`, `<`, `>`, `"`, and `'` with their entity forms. Everything
/// else, control characters included, passes through untouched.
#[must_use]
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
