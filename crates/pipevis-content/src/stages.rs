//! The ordered pipeline stage table.
//!
//! Stage ids are stable identifiers the simulator dispatches on; display
//! fields (name, description, tools, risks) are pass-through metadata for
//! whatever renders the pipeline.

use serde::Serialize;

/// One named phase of the simulated pipeline.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Stable identifier ("code", "build", "test", "deploy", "monitor").
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description of what happens in this phase.
    pub description: &'static str,
    /// Ordered security-check labels, echoed into the run log.
    pub security_checks: &'static [&'static str],
    /// Representative tooling for this phase.
    pub tools: &'static [&'static str],
    /// Representative risks this phase guards against.
    pub risks: &'static [&'static str],
}

/// The fixed, linear stage sequence. Index order is significant.
pub static STAGES: &[Stage] = &[
    Stage {
        id: "code",
        name: "Code & Commit",
        description: "Developer commits code. Pre-commit hooks run secret scanning and SAST analysis.",
        security_checks: &["Secret Detection", "SAST", "Code Quality"],
        tools: &["Git Hooks", "SonarQube", "Semgrep"],
        risks: &["Hardcoded Secrets", "SQL Injection", "XSS"],
    },
    Stage {
        id: "build",
        name: "Build & SCA",
        description: "Compile artifacts. Software Composition Analysis checks dependencies for vulnerabilities.",
        security_checks: &[
            "Dependency Scanning",
            "Software Bill of Materials",
            "License Compliance",
        ],
        tools: &["OWASP Dependency Check", "Snyk", "WhiteSource"],
        risks: &["Known Vulnerabilities", "License Violations", "Outdated Dependencies"],
    },
    Stage {
        id: "test",
        name: "Test (SAST/DAST)",
        description: "Static and Dynamic Application Security Testing scans for security flaws.",
        security_checks: &["Static Analysis", "Dynamic Analysis", "Security Unit Tests"],
        tools: &["Checkmarx", "Veracode", "Burp Suite"],
        risks: &["Business Logic Flaws", "Authentication Bypass", "Data Exposure"],
    },
    Stage {
        id: "deploy",
        name: "Deploy (IaC)",
        description: "Infrastructure as Code deployment with security scanning and policy enforcement.",
        security_checks: &["Infrastructure Scanning", "Policy as Code", "Container Security"],
        tools: &["Terraform", "Kubernetes", "OpenPolicyAgent"],
        risks: &["Misconfigured Services", "Exposed Ports", "Insecure Network Policies"],
    },
    Stage {
        id: "monitor",
        name: "Monitor (RASP)",
        description: "Runtime Application Self-Protection and continuous security monitoring.",
        security_checks: &["Runtime Protection", "Threat Detection", "Compliance Monitoring"],
        tools: &["WAF", "SIEM", "Threat Intelligence"],
        risks: &["Zero-day Attacks", "Data Breaches", "Compliance Violations"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = STAGES.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["code", "build", "test", "deploy", "monitor"]);
    }

    #[test]
    fn every_stage_has_checks() {
        for stage in STAGES {
            assert!(!stage.security_checks.is_empty(), "stage {} has no checks", stage.id);
        }
    }
}
