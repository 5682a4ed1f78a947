use std::io::{IsTerminal, Stderr, Stdout, Write};

use super::{Reporter, Severity};

/// Fixed-width line framing every console message.
pub const SEPARATOR: &str = "==============================================================";

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Frame a message between two separator lines.
#[must_use]
pub fn frame(message: &str) -> String {
    format!("{SEPARATOR}\n{message}\n{SEPARATOR}\n")
}

/// Writes framed messages: info to `out`, errors to `err`.
pub struct ConsoleReporter<O: Write = Stdout, E: Write = Stderr> {
    out: O,
    err: E,
    out_colors: bool,
    err_colors: bool,
    quiet: bool,
}

impl ConsoleReporter {
    /// Reporter on the process's stdout/stderr.
    ///
    /// In auto mode each stream is colored only when it is a terminal.
    #[must_use]
    pub fn stdio(mode: ColorMode) -> Self {
        let out = std::io::stdout();
        let err = std::io::stderr();
        let out_colors = should_use_colors(mode, &out);
        let err_colors = should_use_colors(mode, &err);
        Self::new(out, err, false).with_stream_colors(out_colors, err_colors)
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    #[must_use]
    pub const fn new(out: O, err: E, use_colors: bool) -> Self {
        Self {
            out,
            err,
            out_colors: use_colors,
            err_colors: use_colors,
            quiet: false,
        }
    }

    /// Enable colors separately for the info and error streams.
    #[must_use]
    pub const fn with_stream_colors(mut self, out_colors: bool, err_colors: bool) -> Self {
        self.out_colors = out_colors;
        self.err_colors = err_colors;
        self
    }

    /// Drop info messages; errors are still written.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    fn colorize(&self, text: &str, severity: Severity) -> String {
        let (enabled, color) = match severity {
            Severity::Info => (self.out_colors, ansi::GREEN),
            Severity::Error => (self.err_colors, ansi::RED),
        };
        if !enabled {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn emit(&mut self, severity: Severity, message: &str) {
        if self.quiet && severity == Severity::Info {
            return;
        }
        let framed = frame(&self.colorize(message, severity));
        let stream: &mut dyn Write = match severity {
            Severity::Info => &mut self.out,
            Severity::Error => &mut self.err,
        };
        if let Err(e) = stream.write_all(framed.as_bytes()).and_then(|()| stream.flush()) {
            tracing::debug!(?severity, error = %e, "failed to write console report");
        }
    }
}

fn should_use_colors(mode: ColorMode, stream: &impl IsTerminal) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && stream.is_terminal(),
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
