use std::io::{self, BufRead, Write};

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// Asks a yes/no question. Anything but an explicit yes, including end of
/// input, is a no.
pub fn ask(question: &str, mut input: impl BufRead, mut output: impl Write) -> io::Result<bool> {
    write!(output, "{} (yes/no): ", question)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub fn confirm(question: &str, assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    let result = ask(question, stdin.lock(), stdout.lock());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("yes\n"));
        assert!(is_yes("  YES "));
        assert!(is_yes("y"));
        assert!(!is_yes("no"));
        assert!(!is_yes("yess"));
        assert!(!is_yes(""));
    }

    #[test]
    fn test_ask() {
        let mut output = Vec::new();
        assert!(ask("Overwrite?", &b"yes\n"[..], &mut output).unwrap());
        assert_eq!(output, b"Overwrite? (yes/no): ");
        assert!(!ask("Overwrite?", &b"nope\n"[..], io::sink()).unwrap());
        assert!(!ask("Overwrite?", &b""[..], io::sink()).unwrap());
    }

    #[test]
    fn test_confirm_assume_yes() {
        assert!(confirm("Delete?", true).unwrap());
    }
}
