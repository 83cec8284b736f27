use std::io::{self, BufRead, Write};

/// How a single confirmation point resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    /// Non-interactive mode forced a yes without reading input.
    AutoAccepted,
    UserAccepted,
    UserDeclined,
    /// No input given; treated as a decline.
    EmptyDefaulted,
    /// Unrecognized input; treated as a decline.
    InvalidDefaulted,
}

impl ConfirmationOutcome {
    /// True only for the two outcomes that permit destructive work.
    pub fn accepted(self) -> bool {
        matches!(self, Self::AutoAccepted | Self::UserAccepted)
    }
}

/// Present `prompt`, read one line, reduce it to an outcome.
///
/// A single empty or malformed response is a decline; there is no
/// retry loop. The declining default for empty input is announced so
/// the decision stays visible.
pub fn confirm_from<R: BufRead>(input: &mut R, prompt: &str, auto_yes: bool) -> ConfirmationOutcome {
    if auto_yes {
        return ConfirmationOutcome::AutoAccepted;
    }

    {
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "{prompt} [y/N] ");
        let _ = stderr.flush();
    }

    let mut line = String::new();
    let read = input.read_line(&mut line).unwrap_or(0);
    let answer = line.trim();
    if read == 0 || answer.is_empty() {
        eprintln!("no answer, defaulting to No");
        return ConfirmationOutcome::EmptyDefaulted;
    }
    match answer.to_ascii_lowercase().as_str() {
        "y" | "yes" => ConfirmationOutcome::UserAccepted,
        "n" | "no" => ConfirmationOutcome::UserDeclined,
        _ => ConfirmationOutcome::InvalidDefaulted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn outcome_for(input: &str) -> ConfirmationOutcome {
        confirm_from(&mut Cursor::new(input), "Proceed?", false)
    }

    #[test]
    fn affirmative_tokens_accept() {
        assert_eq!(outcome_for("y\n"), ConfirmationOutcome::UserAccepted);
        assert_eq!(outcome_for("YES\n"), ConfirmationOutcome::UserAccepted);
        assert_eq!(outcome_for("  yes  \n"), ConfirmationOutcome::UserAccepted);
    }

    #[test]
    fn negative_tokens_decline() {
        assert_eq!(outcome_for("n\n"), ConfirmationOutcome::UserDeclined);
        assert_eq!(outcome_for("No\n"), ConfirmationOutcome::UserDeclined);
    }

    #[test]
    fn empty_input_defaults_to_declining() {
        assert_eq!(outcome_for("\n"), ConfirmationOutcome::EmptyDefaulted);
        assert_eq!(outcome_for(""), ConfirmationOutcome::EmptyDefaulted);
    }

    #[test]
    fn unrecognized_input_defaults_to_declining() {
        assert_eq!(outcome_for("banana\n"), ConfirmationOutcome::InvalidDefaulted);
        assert_eq!(outcome_for("yess\n"), ConfirmationOutcome::InvalidDefaulted);
    }

    #[test]
    fn auto_yes_never_touches_the_input() {
        let mut input = Cursor::new("n\n");
        let outcome = confirm_from(&mut input, "Proceed?", true);
        assert_eq!(outcome, ConfirmationOutcome::AutoAccepted);
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn only_accepting_outcomes_permit_work() {
        assert!(ConfirmationOutcome::AutoAccepted.accepted());
        assert!(ConfirmationOutcome::UserAccepted.accepted());
        assert!(!ConfirmationOutcome::UserDeclined.accepted());
        assert!(!ConfirmationOutcome::EmptyDefaulted.accepted());
        assert!(!ConfirmationOutcome::InvalidDefaulted.accepted());
    }
}
