//! A line-based checker for the nesting of XML-like tags.
//!
//! The checker does not parse XML. It only splits each line on `<` and `>`
//! and matches opening fragments against closing ones with a [`Stack`],
//! collecting every problem in a [`Queue`] on the way.

use std::fmt;

use crate::adt::{Collection, StackAdt};
use crate::queue::Queue;
use crate::stack::Stack;

/// A problem found while checking tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// A closing tag that does not match the innermost open tag, or that
    /// appears while no tag is open.
    MismatchedClosingTag(String),
    /// A tag still open when the input ended.
    UnclosedTag(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MismatchedClosingTag(name) => {
                write!(f, "Mismatched or unexpected closing tag: </{name}>")
            }
            Diagnostic::UnclosedTag(name) => write!(f, "Unclosed tag: <{name}>"),
        }
    }
}

/// Outcome of [`TagValidator::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Valid,
    /// Every diagnostic, mismatched closing tags first in the order they
    /// were met, then unclosed tags from the innermost outwards.
    Invalid(Vec<Diagnostic>),
}

impl Report {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Report::Valid)
    }

    /// The diagnostics of the report; empty for a valid document.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Report::Valid => &[],
            Report::Invalid(diagnostics) => diagnostics,
        }
    }
}

/// Writes one line per diagnostic, or `The XML is valid.`.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Valid => f.write_str("The XML is valid."),
            Report::Invalid(diagnostics) => {
                for (i, diagnostic) in diagnostics.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{diagnostic}")?;
                }
                Ok(())
            }
        }
    }
}

/// Checks tag nesting one line at a time.
///
/// Each line is trimmed and split on `<` and `>`. Every non-empty fragment
/// is then read as follows:
///
/// - `/name` closes `name`. It must match the innermost open tag, which is
///   then popped. Otherwise a [`Diagnostic::MismatchedClosingTag`] is
///   queued and the open tags stay as they are.
/// - a fragment ending with `/` is a self-closing tag and is skipped.
/// - a fragment starting with `?` is a processing instruction and is
///   skipped.
/// - anything else opens a tag. Text between tags is not told apart from
///   tag names, so it opens a tag too.
///
/// # Examples
///
/// ```
/// use linear_collections::tag_validator::{Diagnostic, Report, TagValidator};
///
/// let mut validator = TagValidator::new();
/// validator.feed_lines(["<?xml version=\"1.0\"?>", "<a>", "<br/>", "</a>"]);
/// assert_eq!(validator.finish(), Report::Valid);
///
/// let mut validator = TagValidator::new();
/// validator.feed_lines(["<a>", "</b>"]);
/// let report = validator.finish();
/// assert_eq!(
///     report.diagnostics(),
///     &[
///         Diagnostic::MismatchedClosingTag("b".into()),
///         Diagnostic::UnclosedTag("a".into()),
///     ]
/// );
/// ```
#[derive(Debug, Default)]
pub struct TagValidator {
    tags: Stack<String>,
    diagnostics: Queue<Diagnostic>,
}

impl TagValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &str) {
        line.trim()
            .split(['<', '>'])
            .filter(|fragment| !fragment.is_empty())
            .for_each(|fragment| self.feed_fragment(fragment));
    }

    pub fn feed_lines<I>(&mut self, lines: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.feed_line(line.as_ref());
        }
    }

    /// Number of tags currently open.
    #[inline]
    pub fn depth(&self) -> usize {
        self.tags.size()
    }

    /// Ends the input and reports what was found.
    pub fn finish(mut self) -> Report {
        if self.tags.is_empty() && self.diagnostics.is_empty() {
            return Report::Valid;
        }
        let mut diagnostics = Vec::with_capacity(self.diagnostics.size() + self.tags.size());
        diagnostics.extend(self.diagnostics);
        while let Ok(name) = self.tags.pop() {
            diagnostics.push(Diagnostic::UnclosedTag(name));
        }
        Report::Invalid(diagnostics)
    }

    fn feed_fragment(&mut self, fragment: &str) {
        if let Some(name) = fragment.strip_prefix('/') {
            match self.tags.pop() {
                Ok(top) if top == name => {}
                popped => {
                    self.tags.extend(popped.ok());
                    self.report(Diagnostic::MismatchedClosingTag(name.to_owned()));
                }
            }
        } else if !fragment.ends_with('/') && !fragment.starts_with('?') {
            self.open(fragment);
        }
    }

    fn open(&mut self, name: &str) {
        self.tags.extend(Some(name.to_owned()));
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.extend(Some(diagnostic));
    }
}
