//! User record served by the directory and profile pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Profiles on other sites.
    #[serde(default)]
    pub social: Vec<String>,
    /// Join date, `YYYY-MM-DD`.
    pub joined: String,
}

impl User {
    /// Value of an optional text field, unless it is blank. Returned verbatim.
    fn present(field: Option<&String>) -> Option<&str> {
        field.map(String::as_str).filter(|s| !s.trim().is_empty())
    }

    pub fn job_title(&self) -> Option<&str> {
        Self::present(self.job_title.as_ref())
    }

    pub fn company(&self) -> Option<&str> {
        Self::present(self.company.as_ref())
    }

    pub fn location(&self) -> Option<&str> {
        Self::present(self.location.as_ref())
    }

    pub fn bio(&self) -> Option<&str> {
        Self::present(self.bio.as_ref())
    }

    pub fn avatar(&self) -> Option<&str> {
        Self::present(self.avatar.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            name: "Test".into(),
            username: "test".into(),
            email: "test@example.com".into(),
            job_title: Some("  ".into()),
            company: Some("Acme".into()),
            location: None,
            bio: Some(String::new()),
            avatar: None,
            website: None,
            skills: Vec::new(),
            social: Vec::new(),
            joined: "2024-01-01".into(),
        }
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let user = user();
        assert_eq!(user.job_title(), None);
        assert_eq!(user.bio(), None);
        assert_eq!(user.location(), None);
        assert_eq!(user.company(), Some("Acme"));
    }

    #[test]
    fn test_present_fields_are_verbatim() {
        let user = User {
            bio: Some("  Builds things. ".into()),
            ..user()
        };
        assert_eq!(user.bio(), Some("  Builds things. "));
    }
}
