use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

/// Ask for a key and read one line of input.
///
/// The prompt goes to `output` rather than stdout so it stays visible when stdout is
/// captured by command substitution. End of input yields an empty key.
///
/// # Errors
///
/// Returns an error if writing the prompt or reading the line fails.
pub fn prompt(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
