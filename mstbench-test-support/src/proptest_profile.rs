//! Environment overrides for property-test case counts.
//!
//! Suites call [`ProptestRunProfile::load`] with their local default so CI can
//! scale every property run from one variable.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const PROPTEST_CASES_ENV_KEY: &str = "MSTBENCH_PROPTEST_CASES";

/// Resolved case count for a property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Reads [`PROPTEST_CASES_ENV_KEY`], falling back to `default_cases` when
    /// the variable is unset or invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use mstbench_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(32);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = match env::var(PROPTEST_CASES_ENV_KEY) {
            Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
                tracing::warn!(
                    env = PROPTEST_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "ignoring invalid proptest case override",
                );
                default_cases
            }),
            Err(_) => default_cases,
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    #[rustfmt::skip]
    pub fn cases(&self) -> u32 { self.cases }
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("case count must be positive".to_owned()),
        Ok(cases) => Ok(cases),
        Err(error) => Err(format!("parse error: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Ok(1))]
    #[case(" 250 ", Ok(250))]
    #[case("25000", Ok(25_000))]
    fn parse_cases_accepts_positive_counts(
        #[case] raw: &str,
        #[case] expected: Result<u32, String>,
    ) {
        assert_eq!(parse_cases(raw), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("many")]
    #[case("")]
    fn parse_cases_rejects_invalid_counts(#[case] raw: &str) {
        assert!(parse_cases(raw).is_err());
    }
}
