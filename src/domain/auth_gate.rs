//! Presence-only routing gate for session cookies.
//!
//! The gate never validates tokens; it only decides where a request may go
//! based on whether a session cookie is present. Real authorization happens
//! in the session resolver on dashboard routes.

/// Outcome of the gate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Pass,
    /// Unauthenticated request to a protected page.
    RedirectToLanding,
    /// Authenticated request to a login/registration page.
    RedirectToDashboard,
}

const PROTECTED_PREFIXES: &[&str] = &["/dashboard"];
const AUTH_PAGE_PREFIXES: &[&str] = &["/login", "/register"];

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decides what to do with a request.
pub fn decide(path: &str, has_session: bool) -> GateDecision {
    if !has_session && PROTECTED_PREFIXES.iter().any(|p| matches_prefix(path, p)) {
        return GateDecision::RedirectToLanding;
    }

    if has_session && AUTH_PAGE_PREFIXES.iter().any(|p| matches_prefix(path, p)) {
        return GateDecision::RedirectToDashboard;
    }

    GateDecision::Pass
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_dashboard_redirects_to_landing() {
        assert_eq!(decide("/dashboard", false), GateDecision::RedirectToLanding);
        assert_eq!(
            decide("/dashboard/candidates/3", false),
            GateDecision::RedirectToLanding
        );
    }

    #[test]
    fn test_authenticated_auth_pages_redirect_to_dashboard() {
        assert_eq!(decide("/login", true), GateDecision::RedirectToDashboard);
        assert_eq!(decide("/register", true), GateDecision::RedirectToDashboard);
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(decide("/dashboard/jobs", true), GateDecision::Pass);
        assert_eq!(decide("/login", false), GateDecision::Pass);
        assert_eq!(decide("/jobs", false), GateDecision::Pass);
        assert_eq!(decide("/jobs/1", true), GateDecision::Pass);
        assert_eq!(decide("/", true), GateDecision::Pass);
    }

    #[test]
    fn test_prefix_respects_segments() {
        assert_eq!(decide("/dashboards", false), GateDecision::Pass);
        assert_eq!(decide("/login-help", true), GateDecision::Pass);
    }
}
