use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Environment variable that marks a continuous-integration run.
pub const CI_VAR: &str = "CI";

/// Process environment as seen by the resolver.
///
/// The real implementation is [`SystemEnvironment`]; tests substitute their
/// own so no PATH, variable or terminal of the test process leaks in.
pub trait Environment {
    /// Search the executable search path for `name`.
    fn lookup_path(&self, name: &str) -> Option<PathBuf>;

    fn var(&self, key: &str) -> Option<String>;

    /// Whether a user is attached to standard input.
    fn is_interactive(&self) -> bool;

    fn home_dir(&self) -> Option<PathBuf>;
}

/// Asks the operator a question and reads a single line back.
pub trait Prompt {
    fn ask(&self, question: &str) -> io::Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn lookup_path(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }
}

/// Prompt on stdout, answer from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", question)?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(answer)
    }
}

/// Whether `value` is an affirmative environment flag.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}

/// Whether the process runs under continuous integration.
pub fn is_ci(env: &dyn Environment) -> bool {
    env.var(CI_VAR).is_some_and(|value| is_truthy(&value))
}

/// Interpret a `[Y/n]` answer. Empty input accepts.
pub fn accepts(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "" | "y" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct VarsOnly(HashMap<&'static str, &'static str>);

    impl Environment for VarsOnly {
        fn lookup_path(&self, _name: &str) -> Option<PathBuf> {
            None
        }

        fn var(&self, key: &str) -> Option<String> {
            self.0.get(key).map(|v| v.to_string())
        }

        fn is_interactive(&self) -> bool {
            true
        }

        fn home_dir(&self) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn test_accepts_default_yes() {
        assert!(accepts(""));
        assert!(accepts("\n"));
        assert!(accepts("y"));
        assert!(accepts("Y\n"));
        assert!(accepts("  yes  "));
        assert!(accepts("YES"));
    }

    #[test]
    fn test_accepts_rejects_everything_else() {
        assert!(!accepts("n"));
        assert!(!accepts("no"));
        assert!(!accepts("yep"));
        assert!(!accepts("sure"));
    }

    #[test]
    fn test_is_ci() {
        let env = VarsOnly(HashMap::from([("CI", "true")]));
        assert!(is_ci(&env));

        let env = VarsOnly(HashMap::from([("CI", "1")]));
        assert!(is_ci(&env));

        let env = VarsOnly(HashMap::from([("CI", "false")]));
        assert!(!is_ci(&env));

        let env = VarsOnly(HashMap::new());
        assert!(!is_ci(&env));
    }
}
