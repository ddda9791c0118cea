//! `youwee classify <message>` – retry classification.

use youwee_core::retry::{classify_error, ClassificationOutcome};

pub fn run_classify(message: &str) -> i32 {
    let outcome = classify_error(message);
    match outcome {
        ClassificationOutcome::Unknown => println!("unknown (not retried)"),
        other => println!("{}", other.as_str()),
    }
    if outcome.should_retry() {
        0
    } else {
        1
    }
}
