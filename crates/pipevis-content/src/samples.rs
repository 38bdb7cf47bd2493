//! The two code samples the simulation swaps between.
//!
//! Both render the same fictional `auth_service.js` endpoint; the vulnerable
//! variant carries a catalogue of its planted OWASP findings so views can
//! annotate specific lines.

use serde::Serialize;

/// Severity grade for a catalogued vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

/// One planted finding in the vulnerable sample.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    /// OWASP Top 10 category (e.g. "A03").
    pub owasp_id: &'static str,
    pub severity: Severity,
    /// 1-based line in the sample source.
    pub line: u32,
    pub description: &'static str,
}

/// A displayable code sample.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSample {
    pub title: &'static str,
    pub file_name: &'static str,
    pub source: &'static str,
    /// Findings planted in this sample (empty for the secure variant).
    pub vulnerabilities: &'static [Vulnerability],
    /// Hardening measures this sample demonstrates (empty for the vulnerable variant).
    pub security_features: &'static [&'static str],
}

pub static VULNERABLE: CodeSample = CodeSample {
    title: "Vulnerable Authentication Endpoint",
    file_name: "auth_service.js",
    source: r#"// INSECURE IMPLEMENTATION - Multiple OWASP Violations
app.post('/login', async (req, res) => {
    const { username, password } = req.body;

    // A03:2021 - SQL Injection Vulnerability
    const query = `SELECT * FROM users WHERE username = '${username}' AND password = '${password}'`;
    const user = await db.query(query);

    if (user) {
        // A07:2021 - Hardcoded Secret
        const JWT_SECRET = "my-super-secret-key-12345";

        // A02:2021 - Cryptographic Failures
        const token = jwt.sign({ userId: user.id }, JWT_SECRET);

        // A05:2021 - Security Misconfiguration
        res.cookie('session', token, { httpOnly: false, secure: false });

        res.json({ success: true, token });
    } else {
        res.status(401).json({ error: "Invalid credentials" });
    }
});"#,
    vulnerabilities: &[
        Vulnerability {
            owasp_id: "A03",
            severity: Severity::Critical,
            line: 6,
            description: "SQL Injection via string concatenation",
        },
        Vulnerability {
            owasp_id: "A07",
            severity: Severity::High,
            line: 11,
            description: "Hardcoded JWT secret in source code",
        },
        Vulnerability {
            owasp_id: "A02",
            severity: Severity::High,
            line: 14,
            description: "Weak cryptographic implementation",
        },
        Vulnerability {
            owasp_id: "A05",
            severity: Severity::Medium,
            line: 17,
            description: "Insecure cookie configuration",
        },
    ],
    security_features: &[],
};

pub static SECURE: CodeSample = CodeSample {
    title: "Secure Authentication Implementation",
    file_name: "auth_service.js",
    source: r#"// SECURE IMPLEMENTATION - OWASP Compliant
app.post('/login', async (req, res) => {
    const { username, password } = req.body;

    // Input validation and sanitization
    const validationResult = loginSchema.safeParse({ username, password });
    if (!validationResult.success) {
        return res.status(400).json({ error: "Invalid input format" });
    }

    // A03:2021 - Parameterized Query Prevention
    const query = 'SELECT * FROM users WHERE username = $1';
    const user = await db.query(query, [username]);

    if (user && await bcrypt.compare(password, user.password_hash)) {
        // A07:2021 - Environment-based Secrets
        const JWT_SECRET = process.env.JWT_SECRET;
        const token = jwt.sign({ userId: user.id, role: user.role }, JWT_SECRET, {
            expiresIn: '1h',
            issuer: 'my-app'
        });

        // A05:2021 - Secure Cookie Configuration
        res.cookie('session', token, {
            httpOnly: true,
            secure: process.env.NODE_ENV === 'production',
            sameSite: 'strict',
            maxAge: 3600000
        });

        res.setHeader('X-Content-Type-Options', 'nosniff');
        res.setHeader('X-Frame-Options', 'DENY');

        res.json({ success: true });
    } else {
        // Generic error message to prevent user enumeration
        res.status(401).json({ error: "Invalid credentials" });
    }
});"#,
    vulnerabilities: &[],
    security_features: &[
        "Input Validation & Sanitization",
        "Parameterized Queries",
        "Environment-based Secrets",
        "Secure Password Hashing",
        "Proper JWT Configuration",
        "Security Headers",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vulnerable_sample_catalogues_findings() {
        assert!(VULNERABLE.vulnerabilities.len() >= 2);
        assert!(VULNERABLE
            .vulnerabilities
            .iter()
            .any(|v| v.severity == Severity::Critical));
        assert!(VULNERABLE.security_features.is_empty());
    }

    #[test]
    fn secure_sample_is_clean() {
        assert!(SECURE.vulnerabilities.is_empty());
        assert!(!SECURE.security_features.is_empty());
    }

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Critical.as_str(), "CRITICAL");
        assert_eq!(Severity::Low.as_str(), "LOW");
    }
}
