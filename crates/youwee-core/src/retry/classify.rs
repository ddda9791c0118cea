//! Classify download error messages for retry decisions.
//!
//! The policy is a plain, ordered rule table. Non-retryable rules come first
//! and win: a message that mentions both a terminal condition and a transient
//! one ("Private video ... connection reset") is never retried.

use regex::Regex;
use std::sync::OnceLock;

/// Result of classifying one error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationOutcome {
    /// Transient failure; a bounded retry is appropriate.
    Retryable,
    /// Terminal failure; retrying cannot help.
    NonRetryable,
    /// Blank or unrecognized. Treated as non-retryable.
    Unknown,
}

impl ClassificationOutcome {
    pub fn should_retry(self) -> bool {
        matches!(self, ClassificationOutcome::Retryable)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClassificationOutcome::Retryable => "retryable",
            ClassificationOutcome::NonRetryable => "non-retryable",
            ClassificationOutcome::Unknown => "unknown",
        }
    }
}

/// One row of the policy: a regex over the lowercased message and its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub pattern: &'static str,
    pub outcome: ClassificationOutcome,
}

const fn terminal(pattern: &'static str) -> ClassificationRule {
    ClassificationRule {
        pattern,
        outcome: ClassificationOutcome::NonRetryable,
    }
}

const fn transient(pattern: &'static str) -> ClassificationRule {
    ClassificationRule {
        pattern,
        outcome: ClassificationOutcome::Retryable,
    }
}

/// Built-in policy, evaluated top to bottom.
pub const RULES: &[ClassificationRule] = &[
    // Terminal: content state.
    terminal(r"private video|video is private|this video is private"),
    terminal(r"video unavailable|this video is unavailable|video (has been|was) removed|content (is )?not available|no longer available"),
    terminal(r"available in your (country|region)|geo[- ]?(restrict|block)|region[- ]?(restrict|lock|block)"),
    // Terminal: access.
    terminal(r"sign in to confirm|sign[- ]?in required|login required|requires? (authentication|login|sign[- ]?in)|authentication (required|failed)|members[- ]only|confirm your age"),
    terminal(r"\bdrm\b|drm[- ]protected"),
    terminal(r"permission denied|access (is )?denied|operation not permitted|\beacces\b|\beperm\b"),
    terminal(r"no such file|file not found|\benoent\b"),
    terminal(r"unsupported url|unsupported site|no suitable extractor|is not a valid url"),
    // Transient: network.
    transient(r"timed? ?out|timeout"),
    transient(r"connection (was )?(reset|aborted|refused|closed)|\beconn(reset|aborted|refused)\b|broken pipe"),
    transient(r"network (is )?unreachable|\benetunreach\b|temporary failure in name resolution|name or service not known|getaddrinfo"),
    // Transient: server.
    transient(r"\b429\b|too many requests"),
    transient(r"http error 5\d\d|\b5\d\d\b.*(error|server|gateway|unavailable)|bad gateway|service unavailable|gateway time-?out|internal server error"),
    transient(r"\bssl\b|\btls\b|handshake"),
    transient(r"fragment"),
    transient(r"temporar(il)?y unavailable|temporary failure"),
    transient(r"try again"),
];

/// Compiled rule table.
#[derive(Debug, Clone, Default)]
pub struct ErrorClassifier {
    rules: Vec<(Regex, ClassificationOutcome)>,
}

impl ErrorClassifier {
    /// Compiles `rules`. Non-retryable rules are moved ahead of the others
    /// (keeping relative order) so they always take precedence.
    pub fn new(rules: &[ClassificationRule]) -> Result<Self, regex::Error> {
        let (terminal, rest): (Vec<&ClassificationRule>, Vec<&ClassificationRule>) = rules
            .iter()
            .partition(|rule| rule.outcome == ClassificationOutcome::NonRetryable);
        let rules = terminal
            .into_iter()
            .chain(rest)
            .map(|rule| Ok((Regex::new(rule.pattern)?, rule.outcome)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    /// The shared classifier for [`RULES`].
    ///
    /// Should the table ever fail to compile, the classifier is empty and
    /// every message is `Unknown`, so nothing is retried.
    pub fn builtin() -> &'static ErrorClassifier {
        static BUILTIN: OnceLock<ErrorClassifier> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            ErrorClassifier::new(RULES).unwrap_or_else(|err| {
                tracing::error!(%err, "retry rules failed to compile");
                ErrorClassifier::default()
            })
        })
    }

    /// Outcome of the first matching rule, `Unknown` for blank or unmatched messages.
    pub fn classify(&self, message: &str) -> ClassificationOutcome {
        let normalized = message.trim().to_lowercase();
        if normalized.is_empty() {
            return ClassificationOutcome::Unknown;
        }
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(&normalized))
            .map_or(ClassificationOutcome::Unknown, |(_, outcome)| *outcome)
    }

    pub fn is_non_retryable(&self, message: &str) -> bool {
        self.classify(message) == ClassificationOutcome::NonRetryable
    }

    /// Transient and not terminal. Blank messages are never retryable.
    pub fn is_retryable(&self, message: &str) -> bool {
        self.classify(message) == ClassificationOutcome::Retryable
    }
}

pub fn is_non_retryable_error(message: &str) -> bool {
    ErrorClassifier::builtin().is_non_retryable(message)
}

pub fn is_retryable_error(message: &str) -> bool {
    ErrorClassifier::builtin().is_retryable(message)
}

pub fn classify_error(message: &str) -> ClassificationOutcome {
    let outcome = ErrorClassifier::builtin().classify(message);
    tracing::debug!(outcome = outcome.as_str(), "classified download error");
    outcome
}
