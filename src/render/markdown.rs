//! Markdown text builders.
//!
//! Stateless helpers used by the composer. Block builders return the lines
//! they occupy, trailing blank line included, so callers can splice them into
//! a document's line list directly.

/// Language tag of fenced signature blocks.
const CODE_LANGUAGE: &str = "gdscript";

/// `## Title` followed by a blank line.
pub fn heading(text: &str, level: usize) -> Vec<String> {
    vec![format!("{} {}", "#".repeat(level), text), String::new()]
}

pub fn bold(text: &str) -> String {
    format!("**{}**", text)
}

pub fn italic(text: &str) -> String {
    format!("*{}*", text)
}

/// Inline `<small>` span, used for markers like "(abstract)" or "static".
pub fn small(text: &str) -> String {
    surround_with_html(text, "small")
}

pub fn surround_with_html(text: &str, tag: &str) -> String {
    format!("<{tag}>{}</{tag}>", text)
}

/// Fenced code block as a single (multi-line) entry.
pub fn code_block(text: &str) -> String {
    format!("```{}\n{}\n```", CODE_LANGUAGE, text)
}

pub fn link(text: &str, target: &str) -> String {
    format!("[{}]({})", text, target)
}

pub fn table_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Header row plus the `| --- |` separator.
pub fn table_header(cells: &[&str]) -> Vec<String> {
    let owned: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
    let separator: Vec<String> = cells.iter().map(|_| "---".to_string()).collect();
    vec![table_row(&owned), table_row(&separator)]
}

/// YAML front matter wrapping `key: value` lines.
pub fn front_matter(entries: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(entries.len() + 3);
    lines.push("---".to_string());
    lines.extend(entries.iter().cloned());
    lines.push("---".to_string());
    lines.push(String::new());
    lines
}

/// Surround a list block with blank lines so it renders as its own paragraph.
pub fn wrap_in_newlines(lines: Vec<String>) -> Vec<String> {
    let mut wrapped = Vec::with_capacity(lines.len() + 2);
    wrapped.push(String::new());
    wrapped.extend(lines);
    wrapped.push(String::new());
    wrapped
}

/// Heading, content, then a blank separator line.
pub fn section(title: &str, level: usize, content: Vec<String>) -> Vec<String> {
    let mut lines = heading(title, level);
    lines.extend(content);
    lines.push(String::new());
    lines
}
