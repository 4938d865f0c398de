//! Case evaluation and reporting

use log::{debug, info, warn};

use crate::error::ProbeError;
use crate::scenario::{Outcome, ProbeCase, Scenario};

/// Tally of a scenario run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Cases evaluated
    pub total: usize,
    /// Cases with an expectation that held
    pub passed: usize,
    /// Names of cases whose result differed from the expectation
    pub mismatches: Vec<String>,
}

impl Report {
    /// Cases that had no expectation
    pub fn unchecked(&self) -> usize {
        self.total - self.passed - self.mismatches.len()
    }

    /// Turn mismatches into an error when `fail_on_mismatch` is set
    pub fn into_result(self, fail_on_mismatch: bool) -> Result<Self, ProbeError> {
        if fail_on_mismatch && !self.mismatches.is_empty() {
            return Err(ProbeError::Mismatch {
                count: self.mismatches.len(),
                total: self.total,
            });
        }
        Ok(self)
    }
}

/// Evaluate every case, logging each result
pub fn run(scenario: &Scenario) -> Report {
    let mut report = Report::default();

    for case in &scenario.cases {
        report.total += 1;
        let outcome = case.query.evaluate();
        log_outcome(case, &outcome);

        match case.expect {
            Some(expected) if expected == outcome.is_hit() => report.passed += 1,
            Some(expected) => {
                warn!(
                    "{}: expected {}, got {}",
                    case.name,
                    hit_word(expected),
                    hit_word(outcome.is_hit())
                );
                report.mismatches.push(case.name.clone());
            }
            None => debug!("{}: no expectation", case.name),
        }
    }

    info!(
        "{} cases: {} passed, {} mismatched, {} unchecked",
        report.total,
        report.passed,
        report.mismatches.len(),
        report.unchecked()
    );
    report
}

fn log_outcome(case: &ProbeCase, outcome: &Outcome) {
    match outcome {
        Outcome::Hit(hit) => info!("{}: {}", case.name, hit_word(*hit)),
        Outcome::Ray(result) if result.is_intersect => info!(
            "{}: hit at {:?} normal {:?}",
            case.name,
            result.intersection.as_slice(),
            result.normal.as_slice()
        ),
        Outcome::Ray(_) => info!("{}: miss", case.name),
    }
}

const fn hit_word(hit: bool) -> &'static str {
    if hit {
        "hit"
    } else {
        "miss"
    }
}
