// SPDX-License-Identifier: MIT

//! Session store: identity lifecycle for signed-in users.
//!
//! Sessions are keyed by the email the user authenticated with; that key is
//! also the JWT subject, so a profile edit never moves a session. Logging out
//! removes the entry, which invalidates still-unexpired tokens at the
//! middleware.

use dashmap::DashMap;

use crate::config::AuthPolicy;
use crate::models::{ProfilePatch, UserProfile};

/// Owner of all active sessions.
pub struct SessionStore {
    sessions: DashMap<String, UserProfile>,
    policy: AuthPolicy,
    default_organization: String,
    login_role: String,
    signup_role: String,
}

impl SessionStore {
    pub fn new(
        policy: AuthPolicy,
        default_organization: impl Into<String>,
        login_role: impl Into<String>,
        signup_role: impl Into<String>,
    ) -> Self {
        Self {
            sessions: DashMap::new(),
            policy,
            default_organization: default_organization.into(),
            login_role: login_role.into(),
            signup_role: signup_role.into(),
        }
    }

    /// Validate credentials per the configured policy and establish a
    /// session. Returns `None` on failure, with no partial state retained.
    pub fn login(&self, email: &str, password: &str) -> Option<UserProfile> {
        let accepted = match &self.policy {
            AuthPolicy::Open => !email.is_empty() && !password.is_empty(),
            AuthPolicy::Fixed {
                email: expected_email,
                password: expected_password,
            } => email == expected_email && password == expected_password,
        };

        if !accepted {
            tracing::debug!(email = %email, "Login rejected");
            return None;
        }

        // Display name defaults to the local part of the address
        let name = email.split('@').next().filter(|s| !s.is_empty()).unwrap_or("User");

        let profile = UserProfile {
            email: email.to_string(),
            name: name.to_string(),
            profile_picture: None,
            organization: Some(self.default_organization.clone()),
            role: Some(self.login_role.clone()),
        };

        self.sessions.insert(email.to_string(), profile.clone());
        tracing::info!(email = %email, "Session established");
        Some(profile)
    }

    /// Establish a session for a newly signed-up user. No account record is
    /// persisted anywhere beyond the session itself.
    pub fn signup(&self, email: &str, password: &str, name: &str) -> Option<UserProfile> {
        if email.is_empty() || password.is_empty() || name.is_empty() {
            return None;
        }

        let profile = UserProfile {
            email: email.to_string(),
            name: name.to_string(),
            profile_picture: None,
            organization: Some(self.default_organization.clone()),
            role: Some(self.signup_role.clone()),
        };

        self.sessions.insert(email.to_string(), profile.clone());
        tracing::info!(email = %email, "Session established via signup");
        Some(profile)
    }

    /// Merge a partial update into the active session for `subject`.
    ///
    /// Reports failure when no such session exists; it never creates one.
    pub fn update_profile(&self, subject: &str, patch: &ProfilePatch) -> Option<UserProfile> {
        let mut entry = self.sessions.get_mut(subject)?;
        patch.apply(entry.value_mut());
        Some(entry.value().clone())
    }

    /// Clear the session for `subject` unconditionally.
    pub fn logout(&self, subject: &str) {
        self.sessions.remove(subject);
        tracing::info!(email = %subject, "Session cleared");
    }

    /// A session exists for `subject`.
    pub fn is_authenticated(&self, subject: &str) -> bool {
        self.sessions.contains_key(subject)
    }

    /// Current profile for `subject`, if signed in.
    pub fn profile(&self, subject: &str) -> Option<UserProfile> {
        self.sessions.get(subject).map(|e| e.value().clone())
    }
}
