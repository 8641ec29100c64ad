//! Static LaTeX markup shared by the document and list writers

/// Fixed preamble written at the start of every document
///
/// KOMA-Script article class with German hyphenation, T1 fonts and the
/// `enumerate` package (required for labelled lists). Ends with
/// `\begin{document}` and a blank separator line.
pub const LATEX_HEADER: &str = r"\documentclass[
	fontsize=11pt,
	paper=a4,
	pagesize=auto,
	parskip=false,
	ngerman
]{scrartcl}

\usepackage[T1]{fontenc}
\usepackage[utf8]{inputenc}
\usepackage{graphicx}
\usepackage{enumerate}
\usepackage{babel}
\usepackage{lmodern}
\usepackage{microtype}

\begin{document}

";

/// Text ending the document body, written once when the writer is released
pub const CLOSING_MARKER: &str = "\n\\end{document}";

/// Closes an `enumerate` environment
pub const END_ENUMERATE: &str = r"\end{enumerate}";

/// Date value that lets LaTeX insert the compilation date
pub const TODAY: &str = r"\today";

/// Renders the title block
pub const MAKETITLE: &str = r"\maketitle";

/// Returns the fixed preamble text without touching the filesystem
pub fn latex_header() -> &'static str {
    LATEX_HEADER
}

/// Opening marker of an `enumerate` environment
///
/// With a label such as `(a)` or `i.` the `enumerate` package renders items
/// in that style; without one LaTeX falls back to default numbering.
pub fn begin_enumerate(enumerator: Option<&str>) -> String {
    match enumerator {
        Some(label) => format!(r"\begin{{enumerate}}[{}]", label),
        None => r"\begin{enumerate}".to_string(),
    }
}

pub fn item_line(text: &str) -> String {
    format!(r"\item {}", text)
}

pub fn title_line(title: &str) -> String {
    format!(r"\title{{{}}}", title)
}

pub fn author_line(author: &str) -> String {
    format!(r"\author{{{}}}", author)
}

pub fn date_line(date: &str) -> String {
    format!(r"\date{{{}}}", date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_stable_across_calls() {
        let first = latex_header().to_string();
        assert_eq!(first, latex_header());
        assert_eq!(first, LATEX_HEADER);
    }

    #[test]
    fn test_header_structure() {
        let header = latex_header();
        assert!(header.starts_with("\\documentclass[\n\tfontsize=11pt,\n"));
        assert!(header.contains("]{scrartcl}\n"));
        assert!(header.contains("\\usepackage{enumerate}\n"));
        assert!(header.ends_with("\\begin{document}\n\n"));
    }

    #[test]
    fn test_begin_enumerate_with_and_without_label() {
        assert_eq!(begin_enumerate(None), "\\begin{enumerate}");
        assert_eq!(begin_enumerate(Some("(a)")), "\\begin{enumerate}[(a)]");
    }

    #[test]
    fn test_item_and_title_commands() {
        assert_eq!(item_line("Dies ist ein Test."), "\\item Dies ist ein Test.");
        assert_eq!(title_line("Ein Test"), "\\title{Ein Test}");
        assert_eq!(author_line("Michael Entrup"), "\\author{Michael Entrup}");
        assert_eq!(date_line(TODAY), "\\date{\\today}");
    }

    #[test]
    fn test_closing_marker_has_no_trailing_newline() {
        assert_eq!(CLOSING_MARKER, "\n\\end{document}");
    }
}
