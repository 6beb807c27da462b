//! Collect message text from stdin and trailing arguments

use std::borrow::Cow;
use std::io::{BufRead, Read};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::MAX_SIZE;
use crate::{Error, Result};

/// SGR color sequences such as `\x1b[1;31m`.
static ANSI_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]+m").expect("ANSI color pattern is valid")
});

/// Remove ANSI color escape sequences.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    ANSI_COLOR_RE.replace_all(text, "")
}

/// Read `reader` to EOF line by line, terminating every line with `\n`.
///
/// CRLF endings collapse to `\n`; invalid UTF-8 is replaced rather than rejected.
pub fn read_lines<R: BufRead>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }
        text.push_str(&String::from_utf8_lossy(&line));
        text.push('\n');
    }

    Ok(text)
}

/// Build the message text from an optional piped stream and the positional args.
///
/// Color codes are stripped from the stream portion only. The stream is read
/// at most [`MAX_SIZE`] bytes deep; anything longer fails as too big to send.
pub fn collect<R: BufRead>(stdin: Option<R>, args: &[String]) -> Result<String> {
    let mut text = match stdin {
        Some(reader) => {
            let mut limited = reader.take(MAX_SIZE as u64 + 1);
            let raw = read_lines(&mut limited)?;
            if limited.limit() == 0 {
                return Err(Error::MessageTooBig {
                    bytes: MAX_SIZE + 1,
                    limit: MAX_SIZE,
                });
            }
            debug!(bytes = raw.len(), "read piped input");
            strip_ansi(&raw).into_owned()
        }
        None => String::new(),
    };

    text.push_str(&args.join(" "));
    Ok(text)
}
