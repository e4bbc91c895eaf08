//! Data shared by every dashboard page template.

use crate::application::services::CurrentHr;
use crate::domain::navigation::{NavLink, page_title};
use crate::state::WebSettings;
use crate::utils::image_host::allowed_image_url;

/// Sidebar, header and banner data for the dashboard layout.
#[derive(Debug, Clone)]
pub struct Shell {
    pub nav: Vec<NavLink>,
    pub path: String,
    pub title: &'static str,
    pub user_name: String,
    pub first_name: String,
    pub initials: String,
    pub email: String,
    pub role: &'static str,
    pub is_admin: bool,
    /// Only set when the avatar host is allowlisted.
    pub avatar_url: Option<String>,
    pub notice: Option<&'static str>,
}

impl Shell {
    pub fn new(current: &CurrentHr, path: &str, settings: &WebSettings) -> Self {
        let user = &current.user;
        Self {
            nav: current.nav.clone(),
            path: path.to_string(),
            title: page_title(path),
            user_name: user.name.clone().unwrap_or_else(|| user.email.clone()),
            first_name: user.first_name().to_string(),
            initials: user.initials(),
            email: user.email.clone(),
            role: current.role.as_str(),
            is_admin: current.is_admin(),
            avatar_url: allowed_image_url(
                user.avatar_url.as_deref(),
                &settings.image_allowed_hosts,
            ),
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<&'static str>) -> Self {
        self.notice = notice;
        self
    }

    /// Whether a sidebar link points at the current page.
    pub fn is_active(&self, href: &str) -> bool {
        if href == "/dashboard" {
            self.path == href
        } else {
            self.path == href || self.path.starts_with(&format!("{href}/"))
        }
    }
}

/// An `<option>` of a select input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl SelectOption {
    /// Options whose label equals their value.
    pub fn plain(values: &[&'static str], current: &str) -> Vec<Self> {
        values
            .iter()
            .map(|&value| Self {
                value,
                label: value,
                selected: value == current,
            })
            .collect()
    }

    /// Options from `(value, label)` pairs.
    pub fn labeled(pairs: &[(&'static str, &'static str)], current: &str) -> Vec<Self> {
        pairs
            .iter()
            .map(|&(value, label)| Self {
                value,
                label,
                selected: value == current,
            })
            .collect()
    }
}
