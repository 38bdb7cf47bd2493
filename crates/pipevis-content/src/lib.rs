//! Static content for the pipevis pipeline simulation.
//!
//! Everything in this crate is immutable reference data: the ordered stage
//! table and the two code samples the simulation swaps between. The simulator
//! treats this crate as an injected read-only collaborator; nothing here
//! performs I/O or holds mutable state.

pub mod samples;
pub mod stages;

pub use samples::{CodeSample, Severity, Vulnerability};
pub use stages::Stage;

/// The full content bundle handed to a simulator at construction.
#[derive(Debug, Clone, Copy)]
pub struct Content {
    /// Ordered stage table. Index order is the progression axis.
    pub stages: &'static [Stage],
    /// Sample shown while the simulated vulnerability is present.
    pub vulnerable: &'static CodeSample,
    /// Sample shown after the fix action is applied.
    pub secure: &'static CodeSample,
}

impl Content {
    /// The built-in catalogue used by the demo.
    pub fn builtin() -> Self {
        Self {
            stages: stages::STAGES,
            vulnerable: &samples::VULNERABLE,
            secure: &samples::SECURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_content_is_consistent() {
        let content = Content::builtin();
        assert_eq!(content.stages.len(), 5);
        assert!(!content.vulnerable.source.is_empty());
        assert!(!content.secure.source.is_empty());
        assert_eq!(content.vulnerable.file_name, content.secure.file_name);
    }
}
