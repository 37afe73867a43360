//! Identity platform admin API settings.
//!
//! Both values are optional at construction so a misconfigured deployment
//! still starts; absence is reported per request as a configuration error.

use std::fmt;

use zeroize::Zeroizing;

use crate::domain::ports::AccountDeletionError;

/// Name of the environment variable holding the service credential.
pub const SERVICE_ROLE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";
/// Name of the environment variable holding the platform base URL.
pub const BASE_URL_ENV: &str = "SUPABASE_URL";

/// Possibly incomplete admin API configuration handed to the service at
/// construction.
///
/// # Examples
/// ```
/// use delete_user_service::domain::AdminApiConfig;
///
/// let config = AdminApiConfig::new(Some("service-key".to_owned()), None);
/// assert!(config.credentials().is_err());
/// ```
#[derive(Clone, Default)]
pub struct AdminApiConfig {
    service_role_key: Option<Zeroizing<String>>,
    base_url: Option<String>,
}

impl AdminApiConfig {
    /// Build a configuration; empty strings are treated as absent.
    pub fn new(service_role_key: Option<String>, base_url: Option<String>) -> Self {
        Self {
            service_role_key: service_role_key
                .filter(|key| !key.is_empty())
                .map(Zeroizing::new),
            base_url: base_url.filter(|url| !url.is_empty()),
        }
    }

    /// Service credential, when configured.
    pub fn service_role_key(&self) -> Option<&str> {
        self.service_role_key.as_deref().map(String::as_str)
    }

    /// Platform base URL, when configured.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Names of the settings that are absent, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.service_role_key.is_none() {
            missing.push(SERVICE_ROLE_KEY_ENV);
        }
        if self.base_url.is_none() {
            missing.push(BASE_URL_ENV);
        }
        missing
    }

    /// Resolve complete credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDeletionError::MissingConfiguration`] naming every
    /// absent setting.
    pub fn credentials(&self) -> Result<AdminApiCredentials, AccountDeletionError> {
        match (&self.service_role_key, &self.base_url) {
            (Some(service_role_key), Some(base_url)) => Ok(AdminApiCredentials {
                service_role_key: service_role_key.clone(),
                base_url: base_url.clone(),
            }),
            _ => Err(AccountDeletionError::missing_configuration(self.missing())),
        }
    }
}

impl fmt::Debug for AdminApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminApiConfig")
            .field(
                "service_role_key",
                &self.service_role_key.as_ref().map(|_| "<redacted>"),
            )
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Complete credentials for one admin API call.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminApiCredentials {
    service_role_key: Zeroizing<String>,
    base_url: String,
}

impl AdminApiCredentials {
    /// Service credential sent as both `apikey` and bearer token.
    pub fn service_role_key(&self) -> &str {
        self.service_role_key.as_str()
    }

    /// Platform base URL, without any normalisation.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

impl fmt::Debug for AdminApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminApiCredentials")
            .field("service_role_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
