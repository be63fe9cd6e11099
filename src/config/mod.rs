use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub catalog: CatalogConfig,
    pub matching: MatchingConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    pub max_results: usize,
    /// Similarity scores must be strictly greater than this to count
    pub similarity_threshold: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_max_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            catalog: CatalogConfig {
                path: PathBuf::from("mini_recipes.csv"),
            },
            matching: MatchingConfig {
                max_results: 5,
                similarity_threshold: crate::matcher::DEFAULT_THRESHOLD,
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                api_max_limit: 50,
            },
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let catalog_path = std::env::var("CATALOG_PATH")
            .unwrap_or_else(|_| "mini_recipes.csv".to_string())
            .into();

        let max_results = std::env::var("MAX_RESULTS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_RESULTS value".to_string()))?;

        let similarity_threshold = std::env::var("SIMILARITY_THRESHOLD")
            .unwrap_or_else(|_| crate::matcher::DEFAULT_THRESHOLD.to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid SIMILARITY_THRESHOLD value".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let api_max_limit = std::env::var("API_MAX_LIMIT")
            .unwrap_or_else(|_| "50".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid API_MAX_LIMIT value".to_string()))?;

        Ok(Settings {
            catalog: CatalogConfig { path: catalog_path },
            matching: MatchingConfig {
                max_results,
                similarity_threshold,
            },
            server: ServerConfig {
                host,
                port,
                api_max_limit,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.matching.max_results == 0 {
            return Err(Error::Config("MAX_RESULTS must be non-zero".to_string()));
        }

        if self.matching.similarity_threshold > 100 {
            return Err(Error::Config(
                "SIMILARITY_THRESHOLD must be between 0 and 100".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.server.api_max_limit == 0 {
            return Err(Error::Config("API_MAX_LIMIT must be non-zero".to_string()));
        }

        Ok(())
    }
}
