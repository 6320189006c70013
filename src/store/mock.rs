//! In-memory user records.

use std::time::Duration;

use rustc_hash::FxHashMap;

use super::{EntityStore, StoreError, User};

/// Fixed set of demo users with optional simulated latency.
#[derive(Debug, Clone)]
pub struct MockUserStore {
    users: Vec<User>,
    by_id: FxHashMap<u64, usize>,
    latency: Duration,
}

impl Default for MockUserStore {
    fn default() -> Self {
        Self::from_users(seed_users())
    }
}

impl MockUserStore {
    pub fn from_users(mut users: Vec<User>) -> Self {
        users.sort_by_key(|u| u.id);
        let by_id = users.iter().enumerate().map(|(i, u)| (u.id, i)).collect();
        Self {
            users,
            by_id,
            latency: Duration::ZERO,
        }
    }

    /// Delay every lookup by `latency`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Synchronous view of the records.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl EntityStore for MockUserStore {
    async fn get_by_id(&self, id: u64) -> Result<User, StoreError> {
        self.simulate_latency().await;
        self.by_id
            .get(&id)
            .map(|&i| self.users[i].clone())
            .ok_or(StoreError::NotFound(id))
    }

    async fn list(&self) -> Vec<User> {
        self.simulate_latency().await;
        self.users.clone()
    }
}

fn seed_users() -> Vec<User> {
    fn user(id: u64, name: &str, username: &str) -> User {
        User {
            id,
            name: name.into(),
            username: username.into(),
            email: format!("{username}@example.com"),
            job_title: None,
            company: None,
            location: None,
            bio: None,
            avatar: None,
            website: None,
            skills: Vec::new(),
            social: Vec::new(),
            joined: "2024-01-15".into(),
        }
    }

    let strings = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect::<Vec<_>>();

    vec![
        User {
            job_title: Some("Senior Software Engineer".into()),
            company: Some("TechCorp".into()),
            location: Some("San Francisco, CA".into()),
            bio: Some(
                "Full-stack developer with a passion for fast, accessible web applications \
                 and server-side rendering."
                    .into(),
            ),
            avatar: Some("https://i.pravatar.cc/300?img=1".into()),
            website: Some("https://alice.dev".into()),
            skills: strings(&["Rust", "TypeScript", "SSR", "SEO"]),
            social: strings(&[
                "https://github.com/alicejohnson",
                "https://twitter.com/alicejohnson",
            ]),
            joined: "2023-03-12".into(),
            ..user(1, "Alice Johnson", "alicej")
        },
        User {
            job_title: Some("Product Designer".into()),
            company: Some("DesignHub".into()),
            location: Some("New York, NY".into()),
            bio: Some("Designer focused on design systems and user research.".into()),
            avatar: Some("https://i.pravatar.cc/300?img=12".into()),
            skills: strings(&["Figma", "Design Systems", "User Research"]),
            joined: "2023-06-02".into(),
            ..user(2, "Bob Smith", "bobsmith")
        },
        User {
            job_title: Some("DevOps Engineer".into()),
            company: Some("CloudScale".into()),
            location: Some("Austin, TX".into()),
            bio: Some("Keeps the pipelines green and the servers humming.".into()),
            avatar: Some("https://i.pravatar.cc/300?img=5".into()),
            skills: strings(&["Kubernetes", "Terraform", "CI/CD"]),
            joined: "2023-09-21".into(),
            ..user(3, "Carol Williams", "carolw")
        },
        // No bio or avatar: exercises the templated description and default image
        User {
            job_title: Some("Data Scientist".into()),
            company: Some("DataWorks".into()),
            location: Some("Seattle, WA".into()),
            skills: strings(&["Python", "Machine Learning"]),
            ..user(4, "David Kim", "dkim")
        },
        User {
            location: Some("Berlin, Germany".into()),
            ..user(5, "Eva Martinez", "evam")
        },
    ]
}
