//! Log-line context for reporting calls.

use std::fmt;

use uuid::Uuid;

/// Context prefixed to every reporter log line.
///
/// The session id identifies one reporter instance; campaigns span
/// process restarts, so the id distinguishes which process reported
/// which attempt.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub session_id: String,
    pub attempt_number: Option<i32>,
}

impl ReportContext {
    pub fn new() -> Self {
        Self {
            session_id: format!("reporter-{}", &Uuid::new_v4().to_string()[..8]),
            attempt_number: None,
        }
    }

    pub fn with_attempt(&self, attempt_number: i32) -> Self {
        Self {
            session_id: self.session_id.clone(),
            attempt_number: Some(attempt_number),
        }
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.attempt_number {
            Some(n) => write!(f, "[session={}] [attempt={}]", self.session_id, n),
            None => write!(f, "[session={}]", self.session_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let ctx = ReportContext {
            session_id: "reporter-abcd1234".to_string(),
            attempt_number: None,
        };
        assert_eq!(format!("{}", ctx), "[session=reporter-abcd1234]");

        let ctx = ctx.with_attempt(2);
        assert_eq!(format!("{}", ctx), "[session=reporter-abcd1234] [attempt=2]");
    }

    #[test]
    fn test_sessions_are_distinct() {
        assert_ne!(ReportContext::new().session_id, ReportContext::new().session_id);
    }
}
