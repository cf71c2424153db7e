use fir_core::hierarchy::Crumb;
use serde::Serialize;

/// Breadcrumb output: a display string plus the crumbs themselves.
#[derive(Debug, Serialize)]
pub struct PathResponse {
    pub path: String,
    pub crumbs: Vec<Crumb>,
}

impl From<Vec<Crumb>> for PathResponse {
    fn from(crumbs: Vec<Crumb>) -> Self {
        Self {
            path: crumbs
                .iter()
                .map(|crumb| crumb.name.as_str())
                .collect::<Vec<_>>()
                .join(" / "),
            crumbs,
        }
    }
}
