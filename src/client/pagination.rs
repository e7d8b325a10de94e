//! Pagination helpers for the repository listing endpoints
//!
//! GitHub pages are 1-indexed and hold at most [`MAX_PER_PAGE`] records.

/// Maximum page size supported by the GitHub REST API.
pub const MAX_PER_PAGE: usize = 100;

/// Whether the analyzed account is a user or an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    User,
    Organization,
}

impl AccountKind {
    pub fn from_is_org(is_org: bool) -> Self {
        if is_org {
            AccountKind::Organization
        } else {
            AccountKind::User
        }
    }

    /// Label used in titles and log messages
    pub fn label(self) -> &'static str {
        match self {
            AccountKind::User => "User",
            AccountKind::Organization => "Organization",
        }
    }

    /// URL of the repository listing for `account` under `base_url`.
    pub fn repos_url(self, base_url: &str, account: &str) -> String {
        let segment = match self {
            AccountKind::User => "users",
            AccountKind::Organization => "orgs",
        };
        let base_url = base_url.trim_end_matches('/');
        format!("{}/{}/{}/repos", base_url, segment, account)
    }
}

/// Query parameters for one page of a repository listing.
///
/// Results are always ordered by last update, newest first.
///
/// # Example
/// ```ignore
/// let params = PageParams::new(50).page(2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    /// Records per page, capped at [`MAX_PER_PAGE`]
    pub per_page: usize,
    /// 1-indexed page number
    pub page: usize,
}

impl PageParams {
    /// First page with the given page size.
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page: per_page.clamp(1, MAX_PER_PAGE),
            page: 1,
        }
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// The following page with the same size.
    pub fn next(self) -> Self {
        self.page(self.page + 1)
    }

    /// Convert to query string parameters.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
        ]
    }
}
