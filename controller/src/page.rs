use std::str::FromStr;

use shared::constants::{ROUTE_HOME, ROUTE_LOGIN, ROUTE_ROOT, ROUTE_SIGNUP};

use crate::error::PageError;

/// The page a document declares itself to be. Exactly one controller is mounted per page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Login,
    Signup,
    Entries,
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Page::Login),
            "signup" => Ok(Page::Signup),
            "entries" | "home" => Ok(Page::Entries),
            other => Err(PageError::UnknownPage(other.to_string())),
        }
    }
}

impl Page {
    /// `data-page` wins over the location path.
    pub fn resolve(declared: Option<&str>, path: &str) -> Result<Self, PageError> {
        match declared {
            Some(name) => name.parse(),
            None => Self::from_path(path),
        }
    }

    pub fn from_path(path: &str) -> Result<Self, PageError> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { ROUTE_ROOT } else { trimmed };
        if path == ROUTE_ROOT || path == ROUTE_LOGIN {
            Ok(Page::Login)
        } else if path == ROUTE_SIGNUP {
            Ok(Page::Signup)
        } else if path == ROUTE_HOME {
            Ok(Page::Entries)
        } else {
            Err(PageError::UnknownPath(path.to_string()))
        }
    }
}
