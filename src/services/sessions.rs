use crate::models::Organization;
use moka::future::Cache;
use std::time::Duration;

/// Bearer-token sessions for signed-in organizations
///
/// Sessions expire after `idle_secs` without use and vanish on restart.
pub struct SessionStore {
    sessions: Cache<String, Organization>,
}

impl SessionStore {
    pub fn new(capacity: u64, idle_secs: u64) -> Self {
        let sessions = moka::future::CacheBuilder::new(capacity)
            .time_to_idle(Duration::from_secs(idle_secs))
            .build();

        Self { sessions }
    }

    /// Start a session and return its token
    pub async fn create(&self, organization: Organization) -> String {
        let token = uuid::Uuid::new_v4().simple().to_string();
        tracing::debug!("Session opened for {}", organization.id);
        self.sessions.insert(token.clone(), organization).await;
        token
    }

    pub async fn get(&self, token: &str) -> Option<Organization> {
        self.sessions.get(token).await
    }

    /// End a session; returns whether it existed
    pub async fn revoke(&self, token: &str) -> bool {
        let removed = self.sessions.remove(token).await;
        if let Some(organization) = &removed {
            tracing::debug!("Session closed for {}", organization.id);
        }
        removed.is_some()
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::demo_organization;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = SessionStore::new(100, 60);
        let token = store.create(demo_organization("demo@organization.com")).await;

        let organization = store.get(&token).await.unwrap();
        assert_eq!(organization.id, "org-demo-123");

        assert!(store.revoke(&token).await);
        assert!(store.get(&token).await.is_none());
        assert!(!store.revoke(&token).await);
    }

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Basic abc123"), None);
    }
}
