use std::io::{self, BufRead, Write};

/// Asks the user before destructive actions.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<C: Confirmer + ?Sized> Confirmer for Box<C> {
    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }
}

/// Reads a y/N answer from stdin. Anything but "y"/"yes" declines.
pub struct PromptConfirmer;

impl Confirmer for PromptConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{prompt} [y/N] ");
        if io::stderr().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(_) => is_yes(&input),
            Err(_) => false,
        }
    }
}

/// Skips the prompt (`--yes`).
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::Confirmer;

    /// Answers with a fixed value and records the prompts it saw.
    pub struct ScriptedConfirmer {
        pub answer: bool,
        pub prompts: RefCell<Vec<String>>,
    }

    impl ScriptedConfirmer {
        pub fn new(answer: bool) -> Self {
            Self {
                answer,
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer
        }
    }
}
