//! Pattern-based log formatter
//!
//! A pattern string is compiled once into an ordered list of directives and is
//! then safe to share read-only across loggers and threads. Recognized keys:
//!
//! | key  | output                                   |
//! |------|------------------------------------------|
//! | `%d` | timestamp, subformat `%d{...}` (default `%H:%M:%S`) |
//! | `%t` | thread id                                |
//! | `%c` | logger name                              |
//! | `%f` | source file                              |
//! | `%l` | source line (decimal)                    |
//! | `%p` | level name (`DEBUG`..`OFF`)              |
//! | `%T` | tab                                      |
//! | `%m` | message payload                          |
//! | `%n` | newline                                  |
//!
//! `%%` is a literal percent. Any other `%<key>` (optionally with a `{...}`
//! body) emits its bracketed text verbatim. Malformed patterns (a trailing
//! `%`, an unterminated `{...}`) fail at construction, never at render time.

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

/// Pattern used when a logger is built without an explicit one.
pub const DEFAULT_PATTERN: &str = "[%d{%H:%M:%S}][%t][%c][%f:%l][%p]%T%m%n";

/// Default timestamp subformat for a bare `%d`.
const DEFAULT_TIME_SUBFORMAT: &str = "%H:%M:%S";

/// One compiled rendering step.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Directive {
    Literal(String),
    Timestamp(String),
    ThreadId,
    LoggerName,
    File,
    Line,
    Level,
    Tab,
    Message,
    Newline,
}

impl Directive {
    fn from_key(key: char, body: Option<String>, position: usize) -> Result<Self> {
        let directive = match key {
            'd' => {
                let subformat = body.unwrap_or_else(|| DEFAULT_TIME_SUBFORMAT.to_string());
                validate_strftime(&subformat, position)?;
                Directive::Timestamp(subformat)
            }
            't' => Directive::ThreadId,
            'c' => Directive::LoggerName,
            'f' => Directive::File,
            'l' => Directive::Line,
            'p' => Directive::Level,
            'T' => Directive::Tab,
            'm' => Directive::Message,
            'n' => Directive::Newline,
            // Unrecognized key: emit the bracketed text verbatim.
            _ => Directive::Literal(body.unwrap_or_default()),
        };
        Ok(directive)
    }

    fn render(&self, out: &mut String, record: &LogRecord<'_>) {
        match self {
            Directive::Literal(text) => out.push_str(text),
            Directive::Timestamp(subformat) => {
                // Subformat was validated at construction; formatting a
                // validated strftime string cannot fail.
                let _ = write!(out, "{}", record.timestamp.format(subformat));
            }
            Directive::ThreadId => out.push_str(&record.thread_id),
            Directive::LoggerName => out.push_str(record.logger),
            Directive::File => out.push_str(record.file),
            Directive::Line => {
                let _ = write!(out, "{}", record.line);
            }
            Directive::Level => out.push_str(record.level.to_str()),
            Directive::Tab => out.push('\t'),
            Directive::Message => out.push_str(record.message),
            Directive::Newline => out.push('\n'),
        }
    }
}

/// Reject subformats chrono would refuse to format, so `render` stays
/// infallible.
fn validate_strftime(subformat: &str, position: usize) -> Result<()> {
    if StrftimeItems::new(subformat).any(|item| matches!(item, Item::Error)) {
        return Err(LoggerError::pattern(
            position,
            format!("invalid timestamp subformat '{}'", subformat),
        ));
    }
    Ok(())
}

/// A compiled, immutable pattern.
///
/// `render` is pure and safe for concurrent calls against one shared instance.
#[derive(Debug, Clone)]
pub struct PatternFormatter {
    directives: Vec<Directive>,
}

impl PatternFormatter {
    /// Compile `pattern` into a directive list.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::PatternParse`] for a trailing unmatched `%`, an
    /// unterminated `{...}` subformat, or a timestamp subformat chrono cannot
    /// format.
    pub fn new(pattern: &str) -> Result<Self> {
        let chars: Vec<char> = pattern.chars().collect();
        let mut directives = Vec::new();
        let mut literal = String::new();
        let mut pos = 0;

        while pos < chars.len() {
            if chars[pos] != '%' {
                literal.push(chars[pos]);
                pos += 1;
                continue;
            }
            // %% escapes a literal percent.
            if pos + 1 < chars.len() && chars[pos + 1] == '%' {
                literal.push('%');
                pos += 2;
                continue;
            }
            if !literal.is_empty() {
                directives.push(Directive::Literal(std::mem::take(&mut literal)));
            }
            let key_pos = pos;
            pos += 1;
            if pos == chars.len() {
                return Err(LoggerError::pattern(
                    key_pos,
                    "trailing '%' with no directive key",
                ));
            }
            let key = chars[pos];
            pos += 1;

            let mut body = None;
            if pos < chars.len() && chars[pos] == '{' {
                pos += 1;
                let mut text = String::new();
                while pos < chars.len() && chars[pos] != '}' {
                    text.push(chars[pos]);
                    pos += 1;
                }
                if pos == chars.len() {
                    return Err(LoggerError::pattern(
                        key_pos,
                        format!("unterminated '{{' subformat for '%{}'", key),
                    ));
                }
                pos += 1; // skip '}'
                body = Some(text);
            }
            directives.push(Directive::from_key(key, body, key_pos)?);
        }
        if !literal.is_empty() {
            directives.push(Directive::Literal(literal));
        }

        Ok(Self { directives })
    }

    /// Render `record` by invoking each directive in order.
    pub fn render(&self, record: &LogRecord<'_>) -> String {
        let mut out = String::with_capacity(64 + record.message.len());
        for directive in &self.directives {
            directive.render(&mut out, record);
        }
        out
    }
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN).expect("default pattern is well formed")
    }
}
