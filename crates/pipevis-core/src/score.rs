//! Security score derivation.
//!
//! The score is fully derived from the secure flag and stage progress; it is
//! never stored or incrementally updated. Stage-progress points are granted
//! regardless of the secure flag, the security bonus is additive, and the
//! total is clamped to 100.

use serde::Serialize;

/// Points granted once the fix action has been applied.
pub const SECURE_BONUS: u32 = 40;

/// Points granted per stage index reached beyond the first.
pub const STAGE_POINTS: u32 = 15;

/// Upper clamp for the score.
pub const MAX_SCORE: u32 = 100;

/// Compute the security score for a given secure flag and stage index.
///
/// Pure and deterministic: `f(false, 0) == 0`, `f(true, 0) == 40`,
/// `f(true, 4) == 100`, `f(false, 4) == 60`.
pub fn compute_security_score(is_secure: bool, stage_index: usize) -> u8 {
    let bonus = if is_secure { SECURE_BONUS } else { 0 };
    let progress = STAGE_POINTS.saturating_mul(stage_index as u32);
    bonus.saturating_add(progress).min(MAX_SCORE) as u8
}

/// Banded maturity label derived from the score.
///
/// Bands are monotonic in score and gap-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Maturity {
    Vulnerable,
    Improving,
    Secure,
}

impl Maturity {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Maturity::Secure
        } else if score >= 40 {
            Maturity::Improving
        } else {
            Maturity::Vulnerable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Maturity::Vulnerable => "Vulnerable",
            Maturity::Improving => "Improving",
            Maturity::Secure => "Secure",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values() {
        assert_eq!(compute_security_score(false, 0), 0);
        assert_eq!(compute_security_score(true, 0), 40);
        assert_eq!(compute_security_score(true, 4), 100);
        assert_eq!(compute_security_score(false, 4), 60);
    }

    #[test]
    fn score_is_clamped() {
        for index in 0..32 {
            for secure in [false, true] {
                assert!(compute_security_score(secure, index) <= 100);
            }
        }
    }

    #[test]
    fn score_is_monotonic_in_progress() {
        for index in 0..4 {
            assert!(compute_security_score(false, index) <= compute_security_score(false, index + 1));
            assert!(compute_security_score(true, index) <= compute_security_score(true, index + 1));
        }
    }

    #[test]
    fn maturity_bands_have_no_gaps() {
        for score in 0u8..=100 {
            let m = Maturity::from_score(score);
            match score {
                0..=39 => assert_eq!(m, Maturity::Vulnerable),
                40..=79 => assert_eq!(m, Maturity::Improving),
                _ => assert_eq!(m, Maturity::Secure),
            }
        }
    }

    #[test]
    fn maturity_labels() {
        assert_eq!(Maturity::from_score(0).label(), "Vulnerable");
        assert_eq!(Maturity::from_score(55).label(), "Improving");
        assert_eq!(Maturity::from_score(100).label(), "Secure");
    }
}
