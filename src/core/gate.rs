//! Route protection by cookie presence.
//!
//! A path is either public (matched by the allow-list) or protected. A
//! protected path passes only when the auth cookie is present with a
//! non-empty value; otherwise the caller is sent to the login page with the
//! original location in a query parameter. The token itself is not checked
//! here.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateRules {
    pub cookie_name: String,
    pub login_path: String,
    pub redirect_param: String,
    pub public_exact: Vec<String>,
    pub public_prefixes: Vec<String>,
}

impl Default for GateRules {
    fn default() -> Self {
        Self {
            cookie_name: "auth_token".to_string(),
            login_path: "/auth/login".to_string(),
            redirect_param: "redirect".to_string(),
            public_exact: vec!["/favicon.ico".to_string(), "/robots.txt".to_string()],
            public_prefixes: vec![
                "/auth".to_string(),
                "/_next".to_string(),
                "/static".to_string(),
                "/images".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    Redirect { location: String },
}

#[derive(Debug, Clone)]
pub struct RouteGate {
    rules: GateRules,
}

impl Default for RouteGate {
    fn default() -> Self {
        Self::new(GateRules::default())
    }
}

impl RouteGate {
    pub fn new(rules: GateRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &GateRules {
        &self.rules
    }

    pub fn access(&self, path: &str) -> Access {
        let path = strip_query(path);

        // The login page can never be protected or the redirect would loop.
        if path == self.rules.login_path
            || self.rules.public_exact.iter().any(|p| p == path)
            || self
                .rules
                .public_prefixes
                .iter()
                .any(|prefix| matches_prefix(path, prefix))
        {
            Access::Public
        } else {
            Access::Protected
        }
    }

    /// Presence check over a raw `Cookie` header value.
    pub fn has_auth_cookie(&self, cookie_header: Option<&str>) -> bool {
        let Some(header) = cookie_header else {
            return false;
        };

        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .any(|(name, value)| name.trim() == self.rules.cookie_name && !is_blank(value))
    }

    /// `path` may carry a query string; it is kept in the redirect target.
    pub fn check(&self, path: &str, cookie_header: Option<&str>) -> GateDecision {
        match self.access(path) {
            Access::Public => GateDecision::Pass,
            Access::Protected if self.has_auth_cookie(cookie_header) => GateDecision::Pass,
            Access::Protected => {
                let location = self.login_redirect(path);
                tracing::debug!("No '{}' cookie for {}, redirecting", self.rules.cookie_name, path);
                GateDecision::Redirect { location }
            }
        }
    }

    pub fn login_redirect(&self, original: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(&self.rules.redirect_param, original)
            .finish();
        format!("{}?{}", self.rules.login_path, query)
    }
}

// `auth_token=""` is as empty as `auth_token=`.
fn is_blank(value: &str) -> bool {
    value.trim().trim_matches('"').trim().is_empty()
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

// `/auth` matches `/auth` and `/auth/login` but not `/authors`.
fn matches_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_without_cookie_redirects() {
        let gate = RouteGate::default();
        assert_eq!(
            gate.check("/dashboard", None),
            GateDecision::Redirect {
                location: "/auth/login?redirect=%2Fdashboard".to_string()
            }
        );
    }

    #[test]
    fn test_login_always_passes() {
        let gate = RouteGate::default();
        assert_eq!(gate.check("/auth/login", None), GateDecision::Pass);
        assert_eq!(
            gate.check("/auth/login", Some("auth_token=abc")),
            GateDecision::Pass
        );
    }

    #[test]
    fn test_cookie_presence_passes() {
        let gate = RouteGate::default();
        assert_eq!(
            gate.check("/contacts/42", Some("theme=dark; auth_token=eyJhbGciOi")),
            GateDecision::Pass
        );
    }

    #[test]
    fn test_empty_or_other_cookie_is_absent() {
        let gate = RouteGate::default();
        assert!(!gate.has_auth_cookie(Some("auth_token=")));
        assert!(!gate.has_auth_cookie(Some("auth_token=\"\"")));
        assert!(!gate.has_auth_cookie(Some("theme=dark; auth_token=\" \"")));
        assert!(gate.has_auth_cookie(Some("auth_token=\"abc\"")));
        assert!(!gate.has_auth_cookie(Some("auth_token_old=abc")));
        assert!(!gate.has_auth_cookie(Some("")));
        assert!(!gate.has_auth_cookie(None));
        assert!(gate.has_auth_cookie(Some(" auth_token = x ")));
    }

    #[test]
    fn test_prefix_is_segment_aware() {
        let gate = RouteGate::default();
        assert_eq!(gate.access("/auth"), Access::Public);
        assert_eq!(gate.access("/auth/register"), Access::Public);
        assert_eq!(gate.access("/_next/static/chunk.js"), Access::Public);
        assert_eq!(gate.access("/authors"), Access::Protected);
        assert_eq!(gate.access("/"), Access::Protected);
    }

    #[test]
    fn test_exact_match() {
        let gate = RouteGate::default();
        assert_eq!(gate.access("/favicon.ico"), Access::Public);
        assert_eq!(gate.access("/favicon.ico/x"), Access::Protected);
    }

    #[test]
    fn test_query_kept_in_redirect() {
        let gate = RouteGate::default();
        assert_eq!(
            gate.check("/finance/transactions?page=2", None),
            GateDecision::Redirect {
                location: "/auth/login?redirect=%2Ffinance%2Ftransactions%3Fpage%3D2".to_string()
            }
        );
        assert_eq!(gate.access("/auth/login?redirect=%2Fx"), Access::Public);
    }

    #[test]
    fn test_custom_rules() {
        let gate = RouteGate::new(GateRules {
            cookie_name: "session".to_string(),
            login_path: "/entrar".to_string(),
            redirect_param: "next".to_string(),
            public_exact: vec!["/".to_string()],
            public_prefixes: vec![],
        });
        assert_eq!(gate.check("/", None), GateDecision::Pass);
        assert_eq!(gate.check("/entrar", None), GateDecision::Pass);
        assert_eq!(
            gate.check("/orders", Some("auth_token=abc")),
            GateDecision::Redirect {
                location: "/entrar?next=%2Forders".to_string()
            }
        );
        assert_eq!(gate.check("/orders", Some("session=abc")), GateDecision::Pass);
    }
}
