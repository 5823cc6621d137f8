//! Environment module - where the gate believes it is running

/// Runtime environment for a gate mount
///
/// Development forces an immediate human classification and reveal, bypassing
/// every heuristic. It covers non-production builds, loopback hosts, and the
/// explicit disable override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Local development or explicitly disabled gate
    Development,

    /// Deployed site, heuristics active
    Production,
}

impl Environment {
    /// Get the environment name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Parse an environment from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" => Some(Environment::Development),
            "production" => Some(Environment::Production),
            _ => None,
        }
    }

    /// Whether this is a development mount
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// Resolve the environment for a mount
    ///
    /// Development wins when the build is non-production, when the gate is
    /// explicitly disabled, or when the request host is a loopback address.
    pub fn resolve(development_build: bool, gate_disabled: bool, hostname: Option<&str>) -> Self {
        if development_build || gate_disabled || hostname.is_some_and(is_loopback_host) {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid environment: {}", s))
    }
}

/// Whether a host name refers to the local machine
pub fn is_loopback_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_build_wins() {
        let env = Environment::resolve(true, false, Some("example.org"));
        assert_eq!(env, Environment::Development);
    }

    #[test]
    fn test_disable_override_wins() {
        let env = Environment::resolve(false, true, Some("example.org"));
        assert_eq!(env, Environment::Development);
    }

    #[test]
    fn test_loopback_hosts() {
        assert!(is_loopback_host("localhost"));
        assert!(is_loopback_host("127.0.0.1"));
        assert!(!is_loopback_host("example.org"));
        assert!(!is_loopback_host("localhost.example.org"));

        let env = Environment::resolve(false, false, Some("localhost"));
        assert_eq!(env, Environment::Development);
    }

    #[test]
    fn test_production_default() {
        assert_eq!(
            Environment::resolve(false, false, Some("example.org")),
            Environment::Production
        );
        // An unknown host is not a reason to bypass the gate.
        assert_eq!(
            Environment::resolve(false, false, None),
            Environment::Production
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        for env in [Environment::Development, Environment::Production] {
            assert_eq!(Environment::parse(env.as_str()), Some(env));
        }
        assert_eq!(Environment::parse("staging"), None);
    }
}
