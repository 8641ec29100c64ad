//! Title block (`\title`, `\author`, `\date`, `\maketitle`)

use crate::template::{self, MAKETITLE, TODAY};
use chrono::NaiveDate;

/// What to emit for `\date{..}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateSpec {
    /// `\date{\today}`, the compilation date
    #[default]
    Today,
    /// A literal date string
    Literal(String),
    /// No `\date` line at all
    Omitted,
}

/// Title block metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub title: String,
    pub author: Option<String>,
    pub date: DateSpec,
}

impl Default for Title {
    fn default() -> Self {
        Self::new("Dokument")
    }
}

impl Title {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            date: DateSpec::Today,
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = DateSpec::Literal(date.into());
        self
    }

    /// Use a calendar date, rendered as `YYYY-MM-DD`
    pub fn dated(self, date: NaiveDate) -> Self {
        let formatted = date.format("%Y-%m-%d").to_string();
        self.date(formatted)
    }

    pub fn no_date(mut self) -> Self {
        self.date = DateSpec::Omitted;
        self
    }

    /// Lines written by [`crate::DocumentWriter::write_title`]
    ///
    /// An empty author or literal date counts as absent. The last line is
    /// `\maketitle` followed by a blank separator.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = vec![template::title_line(&self.title)];

        if let Some(author) = self.author.as_deref().filter(|a| !a.is_empty()) {
            lines.push(template::author_line(author));
        }

        match &self.date {
            DateSpec::Today => lines.push(template::date_line(TODAY)),
            DateSpec::Literal(date) if !date.is_empty() => lines.push(template::date_line(date)),
            DateSpec::Literal(_) | DateSpec::Omitted => {}
        }

        lines.push(format!("{}\n", MAKETITLE));
        lines
    }
}
