//! Contains the common [`ErrorKind`] trait used by the errors of the exact arithmetic engine to
//! display user-facing error messages.
//!
//! Errors raised by the engine do not know where in the user's input they came from; the
//! interpreter attaches source spans with [`Error::new`] before a report is rendered.

// lets `#[derive(ErrorKind)]` refer to this crate by name from within its own tests
extern crate self as cas_error;

use ariadne::{Color, Report, Source};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from. May be empty if the error
    /// was raised outside of any source text.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report of this error against the given source text, including terminal color
    /// codes.
    pub fn render(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();
        // writing into a `Vec` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(input)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use cas_attrs::ErrorKind;
    use super::*;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("cannot take the square root of `{}`", value),
        labels = ["this value is negative"],
        help = "the radicand must be non-negative",
    )]
    struct NegativeRadicand {
        value: String,
    }

    #[derive(Debug, ErrorKind)]
    #[error(message = "division by zero", labels = ["divisor"])]
    struct DivisionByZero;

    #[test]
    fn render_with_span() {
        let input = "sqrt(-4)";
        let error = Error::new(vec![5..7], NegativeRadicand { value: "-4".to_string() });
        let rendered = strip_ansi_escapes::strip_str(error.render("input", input));

        assert!(rendered.contains("cannot take the square root of `-4`"));
        assert!(rendered.contains("this value is negative"));
        assert!(rendered.contains("the radicand must be non-negative"));
    }

    #[test]
    fn render_without_spans() {
        let error = Error::new(Vec::new(), DivisionByZero);
        let rendered = strip_ansi_escapes::strip_str(error.render("input", "1 / 0"));

        assert!(rendered.contains("division by zero"));
        assert!(!rendered.contains("divisor"));
    }
}
