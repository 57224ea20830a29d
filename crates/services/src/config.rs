use std::env;
use std::path::PathBuf;

use url::Url;

use crate::error::ConfigError;
use crate::progress::DEFAULT_NAMESPACE;

pub const BASE_URL_VAR: &str = "KQL_LEARN_BASE_URL";
pub const CONTENT_DIR_VAR: &str = "KQL_LEARN_CONTENT_DIR";
pub const NAMESPACE_VAR: &str = "KQL_LEARN_NAMESPACE";
pub const DATABASE_URL_VAR: &str = "KQL_LEARN_DATABASE_URL";

/// Where the catalog and authored topic documents are served from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentRoot {
    Http(Url),
    Directory(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentConfig {
    pub root: ContentRoot,
    pub namespace: String,
    /// `SQLite` URL for progress; an in-memory store is used when unset.
    pub database_url: Option<String>,
}

impl ContentConfig {
    #[must_use]
    pub fn new(root: ContentRoot) -> Self {
        Self {
            root,
            namespace: DEFAULT_NAMESPACE.to_owned(),
            database_url: None,
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_database_url(mut self, database_url: impl Into<String>) -> Self {
        self.database_url = Some(database_url.into());
        self
    }

    /// Read configuration from `KQL_LEARN_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the base URL does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ContentConfig::from_env`] with an explicit variable lookup.
    ///
    /// A base URL takes precedence over a content directory; with neither
    /// set, content is read from the working directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if the base URL does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let root = if let Some(raw) = non_empty(BASE_URL_VAR) {
            let url = Url::parse(&raw).map_err(|_| ConfigError::InvalidBaseUrl(raw.clone()))?;
            ContentRoot::Http(url)
        } else {
            let dir = non_empty(CONTENT_DIR_VAR).unwrap_or_else(|| ".".to_owned());
            ContentRoot::Directory(PathBuf::from(dir))
        };

        let mut config = Self::new(root);
        if let Some(namespace) = non_empty(NAMESPACE_VAR) {
            config.namespace = namespace;
        }
        config.database_url = non_empty(DATABASE_URL_VAR);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_to_working_directory_and_kql_namespace() {
        let config = ContentConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.root, ContentRoot::Directory(PathBuf::from(".")));
        assert_eq!(config.namespace, "kql");
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn base_url_wins_over_directory() {
        let config = ContentConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://learn.example.com/"),
            (CONTENT_DIR_VAR, "/srv/site"),
            (NAMESPACE_VAR, "adx"),
            (DATABASE_URL_VAR, "sqlite://progress.db"),
        ]))
        .unwrap();
        assert_eq!(
            config.root,
            ContentRoot::Http(Url::parse("https://learn.example.com/").unwrap())
        );
        assert_eq!(config.namespace, "adx");
        assert_eq!(config.database_url.as_deref(), Some("sqlite://progress.db"));
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = ContentConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "  "),
            (CONTENT_DIR_VAR, "/srv/site"),
            (NAMESPACE_VAR, ""),
        ]))
        .unwrap();
        assert_eq!(config.root, ContentRoot::Directory(PathBuf::from("/srv/site")));
        assert_eq!(config.namespace, "kql");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = ContentConfig::from_lookup(lookup(&[(BASE_URL_VAR, "not a url")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("not a url".into()));
    }
}
