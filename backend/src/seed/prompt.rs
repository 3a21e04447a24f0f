use std::io::{self, BufRead, Write};

pub const CONFIRM_PROMPT: &str = "This operation will delete any data currently in the database.\n\
Are you sure you want to do this? Input y/n (yes/no) to confirm. ";
pub const RETRY_PROMPT: &str = "Invalid input. Please input y/n to confirm the seed operation. ";

/// Asks before the destructive reset. Only an exact `y` or `n` line is
/// accepted; anything else re-prompts until input runs out.
pub fn confirm<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<bool> {
    write!(output, "{}", CONFIRM_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the seed operation was confirmed",
            ));
        }

        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        match answer {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => {
                write!(output, "{}", RETRY_PROMPT)?;
                output.flush()?;
            }
        }
    }
}
