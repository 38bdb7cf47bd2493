//! Per-stage outcome scripts.
//!
//! Every stage resolves to a canned script of log lines plus a terminal
//! status. Stages that inspect the application code (`code`, `test`) branch on
//! the secure flag; infrastructure-only stages (`build`, `deploy`) always pass
//! because the planted vulnerability lives purely in application code;
//! `monitor` degrades to a warning, not a failure, while the code is still
//! vulnerable.

use pipevis_content::{CodeSample, Stage};

use crate::errors::{SimError, SimResult};
use crate::log::LogLevel;
use crate::status::Status;

/// Resolved script for one simulated run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Log lines to append, in order.
    pub entries: Vec<(LogLevel, String)>,
    /// Terminal status for the stage.
    pub status: Status,
}

/// Resolve the outcome script for a stage.
///
/// Unknown stage ids indicate a corrupted static table and fail loudly.
pub fn script_for(stage: &Stage, is_secure: bool, sample: &CodeSample) -> SimResult<Outcome> {
    match stage.id {
        "code" => Ok(code_stage(is_secure)),
        "build" => Ok(build_stage()),
        "test" => Ok(test_stage(is_secure, sample)),
        "deploy" => Ok(deploy_stage()),
        "monitor" => Ok(monitor_stage(is_secure)),
        other => Err(SimError::invariant(format!(
            "unknown stage id in static table: {other}"
        ))),
    }
}

fn code_stage(is_secure: bool) -> Outcome {
    let mut entries = vec![
        (LogLevel::Info, "Scanning for secrets and credentials...".to_string()),
        (
            LogLevel::Info,
            "Analyzing code patterns for security issues...".to_string(),
        ),
    ];

    if is_secure {
        entries.push((LogLevel::Success, "No secrets found in codebase".to_string()));
        entries.push((
            LogLevel::Success,
            "Input validation properly implemented".to_string(),
        ));
        entries.push((
            LogLevel::Success,
            "Secure authentication patterns detected".to_string(),
        ));
        Outcome {
            entries,
            status: Status::Success,
        }
    } else {
        entries.push((
            LogLevel::Error,
            "CRITICAL: Hardcoded JWT secret detected!".to_string(),
        ));
        entries.push((
            LogLevel::Error,
            "CRITICAL: SQL Injection vulnerability found!".to_string(),
        ));
        entries.push((
            LogLevel::Warning,
            "Insecure cookie configuration detected".to_string(),
        ));
        Outcome {
            entries,
            status: Status::Error,
        }
    }
}

fn build_stage() -> Outcome {
    Outcome {
        entries: vec![
            (LogLevel::Info, "Installing dependencies...".to_string()),
            (
                LogLevel::Info,
                "Scanning third-party libraries for vulnerabilities...".to_string(),
            ),
            (
                LogLevel::Info,
                "Generating Software Bill of Materials (SBOM)...".to_string(),
            ),
            (
                LogLevel::Success,
                "All dependencies comply with security policy".to_string(),
            ),
            (
                LogLevel::Success,
                "No critical vulnerabilities found in dependencies".to_string(),
            ),
        ],
        status: Status::Success,
    }
}

fn test_stage(is_secure: bool, sample: &CodeSample) -> Outcome {
    let mut entries = vec![
        (LogLevel::Info, "Executing security test suite...".to_string()),
        (
            LogLevel::Info,
            "Running Static Application Security Testing (SAST)...".to_string(),
        ),
    ];

    if is_secure {
        entries.push((
            LogLevel::Success,
            "SAST passed: no security vulnerabilities found".to_string(),
        ));
        entries.push((
            LogLevel::Success,
            "Dynamic analysis completed successfully".to_string(),
        ));
        entries.push((LogLevel::Success, "Security unit tests passed".to_string()));
        Outcome {
            entries,
            status: Status::Success,
        }
    } else {
        entries.push((
            LogLevel::Error,
            "SAST failed: multiple critical vulnerabilities detected".to_string(),
        ));
        // Report the planted findings against the file under scan.
        for v in sample.vulnerabilities {
            entries.push((
                LogLevel::Error,
                format!("{} at {}:{}", v.description, sample.file_name, v.line),
            ));
        }
        Outcome {
            entries,
            status: Status::Error,
        }
    }
}

fn deploy_stage() -> Outcome {
    Outcome {
        entries: vec![
            (
                LogLevel::Info,
                "Validating Infrastructure as Code...".to_string(),
            ),
            (LogLevel::Info, "Applying security policies...".to_string()),
            (
                LogLevel::Info,
                "Configuring network security groups...".to_string(),
            ),
            (
                LogLevel::Success,
                "Infrastructure security validation passed".to_string(),
            ),
            (
                LogLevel::Success,
                "Container security scan completed".to_string(),
            ),
            (
                LogLevel::Success,
                "Deployment to secure environment successful".to_string(),
            ),
        ],
        status: Status::Success,
    }
}

fn monitor_stage(is_secure: bool) -> Outcome {
    let mut entries = vec![
        (
            LogLevel::Info,
            "Starting runtime security monitoring...".to_string(),
        ),
        (
            LogLevel::Info,
            "Initializing Web Application Firewall...".to_string(),
        ),
    ];

    if is_secure {
        entries.push((LogLevel::Success, "Runtime protection active".to_string()));
        entries.push((LogLevel::Success, "No security events detected".to_string()));
        entries.push((
            LogLevel::Success,
            "System operating within secure parameters".to_string(),
        ));
        Outcome {
            entries,
            status: Status::Success,
        }
    } else {
        entries.push((
            LogLevel::Warning,
            "ALERT: SQL Injection attempt blocked by WAF".to_string(),
        ));
        entries.push((
            LogLevel::Warning,
            "ALERT: Suspicious user agent detected".to_string(),
        ));
        entries.push((
            LogLevel::Warning,
            "Multiple security events requiring review".to_string(),
        ));
        Outcome {
            entries,
            status: Status::Warning,
        }
    }
}
