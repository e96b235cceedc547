//! Boundary checks applied to prompts arriving over HTTP or the CLI.
//!
//! The scoring engine accepts any string; these limits only guard the service surface.

pub const DEFAULT_MAX_PROMPT_CHARS: usize = 10_000;

/// Validation errors raised before a prompt reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("prompt is required")]
    EmptyPrompt,
    #[error("prompt too long ({actual} characters, maximum {max})")]
    PromptTooLong { max: usize, actual: usize },
    #[error("challengeId is required")]
    MissingChallengeId,
    #[error("unknown difficulty '{0}'")]
    UnknownDifficulty(String),
}

/// Length bounds for submitted prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptLimits {
    max_chars: usize,
}

impl Default for PromptLimits {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

impl PromptLimits {
    pub fn new(max_chars: usize) -> Self {
        if max_chars == 0 {
            return Self::default();
        }
        Self { max_chars }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn validate<'a>(&self, prompt: &'a str) -> Result<&'a str, RequestError> {
        if prompt.is_empty() {
            return Err(RequestError::EmptyPrompt);
        }

        let actual = prompt.chars().count();
        if actual > self.max_chars {
            return Err(RequestError::PromptTooLong {
                max: self.max_chars,
                actual,
            });
        }

        Ok(prompt)
    }
}
