use crate::models::{LoginRequest, Organization, SignupRequest};
use chrono::Utc;
use std::collections::HashMap;
use std::future::Future;
use thiserror::Error;
use tokio::sync::RwLock;
use validator::Validate;

/// Demo account advertised on the sign-in form
pub const DEMO_EMAIL: &str = "demo@organization.com";
pub const DEMO_PASSWORD: &str = "password123";

/// Errors that can occur during organization sign-in and sign-up
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("Please enter both email and password.")]
    MissingCredentials,

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Please fill in all required fields.")]
    MissingRequiredFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("An organization is already registered with {0}.")]
    EmailTaken(String),

    #[error("Session expired or invalid. Please sign in again.")]
    InvalidSession,
}

/// Organization authentication collaborator
///
/// Implementations decide which organization a set of credentials maps to.
/// Session bookkeeping lives in [`crate::services::SessionStore`].
pub trait AuthProvider: Send + Sync {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<Organization, AuthError>> + Send;

    fn signup(
        &self,
        request: &SignupRequest,
    ) -> impl Future<Output = Result<Organization, AuthError>> + Send;
}

/// Profile returned for any sign-in that does not match a registered organization
pub fn demo_organization(email: &str) -> Organization {
    Organization {
        id: "org-demo-123".to_string(),
        name: "Adventure Co.".to_string(),
        email: email.to_string(),
        phone: "(555) 123-4567".to_string(),
        website: Some("https://adventureco.com".to_string()),
        description: "Premier team building and adventure experiences for corporate groups."
            .to_string(),
        logo: None,
        address: "123 Adventure Ave".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        zip_code: "94105".to_string(),
        contact_person: "Sarah Johnson".to_string(),
        created_at: Utc::now(),
        is_verified: true,
    }
}

/// Mock provider: passwords are accepted but never stored or checked
#[derive(Default)]
pub struct MockAuthProvider {
    // Keyed by lowercased email
    organizations: RwLock<HashMap<String, Organization>>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn registered_count(&self) -> usize {
        self.organizations.read().await.len()
    }
}

impl AuthProvider for MockAuthProvider {
    async fn login(&self, request: &LoginRequest) -> Result<Organization, AuthError> {
        request
            .validate()
            .map_err(|_| AuthError::MissingCredentials)?;

        let key = request.email.to_lowercase();
        if let Some(organization) = self.organizations.read().await.get(&key) {
            tracing::info!("Organization {} signed in", organization.id);
            return Ok(organization.clone());
        }

        tracing::info!("Unregistered email signed in with the demo profile");
        Ok(demo_organization(&request.email))
    }

    async fn signup(&self, request: &SignupRequest) -> Result<Organization, AuthError> {
        if request.password != request.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        if request.name.is_empty() || request.email.is_empty() || request.password.is_empty() {
            return Err(AuthError::MissingRequiredFields);
        }

        request.validate().map_err(|_| AuthError::InvalidEmail)?;

        let key = request.email.to_lowercase();
        let mut organizations = self.organizations.write().await;
        if organizations.contains_key(&key) {
            return Err(AuthError::EmailTaken(request.email.clone()));
        }

        let organization = Organization {
            id: format!("org-{}", uuid::Uuid::new_v4().simple()),
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            website: request.website.clone().filter(|w| !w.is_empty()),
            description: request.description.clone(),
            logo: None,
            address: request.address.clone(),
            city: request.city.clone(),
            state: request.state.clone(),
            zip_code: request.zip_code.clone(),
            contact_person: request.contact_person.clone(),
            created_at: Utc::now(),
            is_verified: false,
        };

        organizations.insert(key, organization.clone());
        tracing::info!("Registered organization {} ({})", organization.id, organization.name);

        Ok(organization)
    }
}
