//! Confirmation port
//!
//! Destructive actions ask a [`ConfirmPort`] before touching the network.
//! The terminal implementation blocks on stdin; [`AlwaysConfirm`] backs
//! `--yes` and tests.

use std::io::{self, BufRead, Write};

/// Blocking yes/no question
pub trait ConfirmPort {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<T: ConfirmPort + ?Sized> ConfirmPort for Box<T> {
    fn confirm(&mut self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// Asks on stdout and reads the answer from stdin
#[derive(Debug, Default)]
pub struct StdinConfirm;

impl ConfirmPort for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

/// Answers yes without asking
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl ConfirmPort for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn test_always_confirm_through_box() {
        let mut port: Box<dyn ConfirmPort> = Box::new(AlwaysConfirm);
        assert!(port.confirm("Delete?"));
    }
}
