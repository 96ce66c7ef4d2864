use std::io::BufRead;
use tasklist_core::error::AppError;

/// Builds a task description from the trailing arguments, or from one line
/// of `reader` when there are none.
pub fn read_description<R: BufRead>(reader: &mut R, words: &[String]) -> Result<String, AppError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|err| AppError::invalid_input(format!("failed to read stdin: {err}")))?;

    let text = line.trim_end_matches(['\n', '\r']);
    if text.is_empty() {
        return Err(AppError::invalid_input("no value specified"));
    }

    Ok(text.to_string())
}
