//! Check report types: per-document results, severity levels, and the
//! aggregated report printed by `streams check`.

use std::fmt;

/// Severity level of a document check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The document decoded and round-tripped cleanly.
    Pass,
    /// The document round-tripped but carries opaque content.
    Warning,
    /// The document failed to decode, encode, or round-trip.
    Failure,
}

impl Severity {
    /// Returns the tag printed in front of a result.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// The outcome of checking one document.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The document checked, usually its path.
    pub subject: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Additional detail lines.
    pub details: Vec<String>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(subject, message, Severity::Pass, Vec::new())
    }

    /// Creates a warning result with detail lines.
    pub fn warn(subject: impl Into<String>, message: impl Into<String>, details: Vec<String>) -> Self {
        Self::new(subject, message, Severity::Warning, details)
    }

    /// Creates a failure result.
    pub fn fail(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(subject, message, Severity::Failure, Vec::new())
    }

    /// Creates a failure result with detail lines.
    pub fn fail_with_details(
        subject: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self::new(subject, message, Severity::Failure, details)
    }

    fn new(
        subject: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// Returns true if this result represents a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated results of a `streams check` run.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// All individual results, in the order the documents were given.
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Returns the number of results of `severity`.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Returns true if no document failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.count(Severity::Failure) == 0
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Document Check Report")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        for result in &self.results {
            writeln!(
                f,
                "[{}] {}: {}",
                result.severity.label(),
                result.subject,
                result.message
            )?;
            for detail in &result.details {
                writeln!(f, "       {detail}")?;
            }
        }
        writeln!(f)?;
        write!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.count(Severity::Pass),
            self.count(Severity::Warning),
            self.count(Severity::Failure)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_severity() {
        let mut report = CheckReport::new();
        report.push(CheckResult::pass("a.json", "ok"));
        report.push(CheckResult::warn("b.json", "opaque", vec!["ex:x".into()]));
        assert!(report.all_passed());
        report.push(CheckResult::fail("c.json", "bad"));
        assert!(!report.all_passed());
        assert_eq!(report.count(Severity::Warning), 1);
    }

    #[test]
    fn renders_details_under_their_result() {
        let mut report = CheckReport::new();
        report.push(CheckResult::fail_with_details(
            "c.json",
            "round trip changed the document",
            vec!["first: {}".into()],
        ));
        let text = report.to_string();
        assert!(text.contains("[FAIL] c.json: round trip changed the document\n       first: {}"));
        assert!(text.ends_with("Summary: 0 passed, 0 warnings, 1 failed"));
    }
}
