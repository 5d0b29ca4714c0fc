//! The coding mini-game that stands between the player and each arrow.

pub const PROMPT: &str = "Write a function that returns the sum of two numbers:";
pub const EXPECTED_OUTPUT: &str = "function add(a, b) { return a + b; }";
pub const REJECTION_FEEDBACK: &str = "Your code doesn't work yet. Try again!";

/// An open challenge and the code typed so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodingChallenge {
    pub prompt: &'static str,
    /// A reference answer for display. Submissions are not compared against it.
    pub expected_output: &'static str,
    pub user_code: String,
}

impl Default for CodingChallenge {
    fn default() -> Self {
        Self {
            prompt: PROMPT,
            expected_output: EXPECTED_OUTPUT,
            user_code: String::new(),
        }
    }
}

impl CodingChallenge {
    pub fn push(&mut self, c: char) {
        self.user_code.push(c);
    }

    pub fn backspace(&mut self) -> Option<char> {
        self.user_code.pop()
    }

    pub fn is_solved(&self) -> bool {
        validate(&self.user_code)
    }
}

/// Accepts any code that returns something and adds something.
///
/// This is a substring check. Nothing is parsed or executed.
pub fn validate(code: &str) -> bool {
    code.contains("return") && code.contains('+')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_sum() {
        assert!(validate("function add(a,b){return a+b;}"));
        assert!(validate("return+"));
    }

    #[test]
    fn test_validate_rejects_missing_parts() {
        assert!(!validate("no op"));
        assert!(!validate("return a - b"));
        assert!(!validate("a + b"));
        assert!(!validate(""));
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let mut challenge = CodingChallenge::default();
        assert_eq!(challenge.backspace(), None);
        challenge.push('x');
        assert_eq!(challenge.backspace(), Some('x'));
        assert!(challenge.user_code.is_empty());
    }
}
