//! Text output sink.
//!
//! A [`PrintSink`] is what the module runtime calls for every line of standard output.
//! It mirrors each line to a [`DiagnosticLog`] and appends it to a [`TextDisplay`].

use std::fmt;
use std::rc::Rc;

/// A page element that shows accumulated text.
///
/// DOM handles are shared references with interior mutability, so every method takes `&self`.
pub trait TextDisplay {
    /// Remove all displayed text.
    fn clear(&self);

    /// Append `text` verbatim to the end of the displayed content.
    fn append(&self, text: &str);

    /// Scroll the element's view so the last line is visible.
    fn scroll_to_bottom(&self);
}

/// The general-purpose diagnostic log every printed line is mirrored to.
pub trait DiagnosticLog {
    fn log(&self, line: &str);
}

/// Forwards printed lines to `tracing` at info level.
///
/// Useful on native hosts where no browser console exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DiagnosticLog for TracingLog {
    fn log(&self, line: &str) {
        tracing::info!(target: "hostbind::print", "{line}");
    }
}

/// Joins sink arguments in order with `separator`. No deduplication, no trimming.
pub fn join_args<I, S>(args: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, a) in args.into_iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(a.as_ref());
    }
    out
}

/// Append-only writer bound to one display element.
///
/// Clones share the same element and log.
#[derive(Clone)]
pub struct PrintSink {
    display: Rc<dyn TextDisplay>,
    log: Rc<dyn DiagnosticLog>,
    separator: Rc<str>,
}

impl PrintSink {
    /// Bind a sink to `display`, clearing whatever it currently shows.
    pub fn bind(
        display: Rc<dyn TextDisplay>,
        log: Rc<dyn DiagnosticLog>,
        separator: &str,
    ) -> Self {
        display.clear();
        Self {
            display,
            log,
            separator: Rc::from(separator),
        }
    }

    /// Variadic form: joins `args` and writes them as one line.
    pub fn print<I, S>(&self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = join_args(args, &self.separator);
        self.print_line(&line);
    }

    /// Writes one already-joined line.
    pub fn print_line(&self, line: &str) {
        tracing::trace!(len = line.len(), "print");
        self.log.log(line);

        let mut text = String::with_capacity(line.len() + 1);
        text.push_str(line);
        text.push('\n');
        self.display.append(&text);
        self.display.scroll_to_bottom();
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl fmt::Debug for PrintSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintSink")
            .field("separator", &self.separator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryDisplay, RecordingLog};

    fn sink_over(display: &MemoryDisplay, log: &RecordingLog) -> PrintSink {
        PrintSink::bind(Rc::new(display.clone()), Rc::new(log.clone()), " ")
    }

    #[test]
    fn join_preserves_order_and_duplicates() {
        assert_eq!(join_args(["b", "a", "b"], " "), "b a b");
        assert_eq!(join_args(Vec::<String>::new(), " "), "");
        assert_eq!(join_args(["", ""], " "), " ");
    }

    #[test]
    fn bind_clears_existing_content() {
        let display = MemoryDisplay::with_content("stale boot text");
        let _sink = sink_over(&display, &RecordingLog::default());
        assert_eq!(display.content(), "");
    }

    #[test]
    fn calls_append_joined_lines() {
        let display = MemoryDisplay::default();
        let sink = sink_over(&display, &RecordingLog::default());

        sink.print(["a", "b"]);
        assert_eq!(display.content(), "a b\n");
        sink.print(["c"]);
        assert_eq!(display.content(), "a b\nc\n");
    }

    #[test]
    fn every_line_is_logged_and_scrolled() {
        let display = MemoryDisplay::default();
        let log = RecordingLog::default();
        let sink = sink_over(&display, &log);

        sink.print(["hello", "world"]);
        sink.print_line("second");

        assert_eq!(log.lines(), vec!["hello world".to_string(), "second".to_string()]);
        assert_eq!(display.scrolls(), 2);
    }

    #[test]
    fn empty_call_still_writes_a_newline() {
        let display = MemoryDisplay::default();
        let sink = sink_over(&display, &RecordingLog::default());

        sink.print(Vec::<&str>::new());
        assert_eq!(display.content(), "\n");
    }

    #[test]
    fn clones_share_the_element() {
        let display = MemoryDisplay::default();
        let sink = sink_over(&display, &RecordingLog::default());
        let other = sink.clone();

        sink.print_line("one");
        other.print_line("two");
        assert_eq!(display.content(), "one\ntwo\n");
    }

    #[test]
    fn custom_separator_is_used() {
        let display = MemoryDisplay::default();
        let sink = PrintSink::bind(
            Rc::new(display.clone()),
            Rc::new(RecordingLog::default()),
            ", ",
        );
        sink.print(["x", "y"]);
        assert_eq!(display.content(), "x, y\n");
        assert_eq!(sink.separator(), ", ");
    }
}
