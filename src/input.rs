use itertools::Itertools;
use std::io::{self, BufRead, IsTerminal};

/// Read the phrase piped into standard input, if any.
///
/// Nothing is read when stdin is a terminal. Read errors are reported and treated as "no input"
/// so the positional argument can take over.
pub(crate) fn read_piped_stdin() -> Option<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return None;
    }
    match read_lines(stdin.lock()) {
        Ok(phrase) => phrase,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read phrase from stdin");
            eprintln!("[scram] error reading from stdin: {e}");
            None
        }
    }
}

/// Read every line and join them with `\n`. Empty input yields `None`.
pub(crate) fn read_lines<R: BufRead>(reader: R) -> io::Result<Option<String>> {
    let joined = itertools::process_results(reader.lines(), |mut lines| lines.join("\n"))?;
    Ok((!joined.is_empty()).then_some(joined))
}
