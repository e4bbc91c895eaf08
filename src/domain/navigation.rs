//! Dashboard navigation derived from the user's role.

use crate::domain::entities::Role;

/// A sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const BASE_LINKS: [NavLink; 3] = [
    NavLink {
        href: "/dashboard",
        label: "Overview",
    },
    NavLink {
        href: "/dashboard/jobs",
        label: "Jobs",
    },
    NavLink {
        href: "/dashboard/candidates",
        label: "Candidates",
    },
];

const ADMIN_LINKS: [NavLink; 2] = [
    NavLink {
        href: "/dashboard/team",
        label: "Team",
    },
    NavLink {
        href: "/dashboard/company",
        label: "Company",
    },
];

/// Link set for a role.
pub fn links_for(role: Role) -> Vec<NavLink> {
    match role {
        Role::Admin => BASE_LINKS.iter().chain(ADMIN_LINKS.iter()).copied().collect(),
        Role::Hr => BASE_LINKS.to_vec(),
    }
}

/// Header title for a dashboard path.
pub fn page_title(path: &str) -> &'static str {
    if path.contains("jobs") {
        "Jobs"
    } else if path.contains("candidates") {
        "Candidates"
    } else if path.contains("company") {
        "Company"
    } else if path.contains("team") {
        "Team"
    } else if path.contains("profile") {
        "Profile"
    } else {
        "Dashboard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(role: Role) -> Vec<&'static str> {
        links_for(role).iter().map(|l| l.href).collect()
    }

    #[test]
    fn test_hr_gets_base_links() {
        assert_eq!(
            hrefs(Role::Hr),
            vec!["/dashboard", "/dashboard/jobs", "/dashboard/candidates"]
        );
    }

    #[test]
    fn test_admin_gets_extended_links() {
        assert_eq!(
            hrefs(Role::Admin),
            vec![
                "/dashboard",
                "/dashboard/jobs",
                "/dashboard/candidates",
                "/dashboard/team",
                "/dashboard/company"
            ]
        );
    }

    #[test]
    fn test_page_title() {
        assert_eq!(page_title("/dashboard/jobs"), "Jobs");
        assert_eq!(page_title("/dashboard/candidates/4"), "Candidates");
        assert_eq!(page_title("/dashboard"), "Dashboard");
    }
}
