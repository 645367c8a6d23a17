//! Yes/no confirmation for destructive commands

use crate::error::Result;
use std::io::{self, BufRead, Write};

/// Ask on stdout, read the answer from stdin. End of input counts as "no".
pub fn confirm(question: &str) -> Result<bool> {
    let stdin = io::stdin();
    confirm_with(question, &mut stdin.lock(), &mut io::stdout())
}

pub fn confirm_with<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> bool {
        let mut output = Vec::new();
        let result = confirm_with("Delete?", &mut answer.as_bytes(), &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Delete? [y/N] ");
        result
    }

    #[test]
    fn test_yes_answers() {
        assert!(ask("y\n"));
        assert!(ask("YES\n"));
        assert!(ask("  yes  "));
    }

    #[test]
    fn test_other_answers_decline() {
        assert!(!ask("n\n"));
        assert!(!ask("\n"));
        assert!(!ask(""));
        assert!(!ask("yep\n"));
    }
}
