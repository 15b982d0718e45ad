use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Mainland mirror, the default
pub const DOMAIN_CHINA: &str = "mangacopy.com";
/// Mirror reachable from outside mainland China
pub const DOMAIN_GLOBAL: &str = "copymanga.tv";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.5 Safari/605.1.15";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default = "default_domain")]
    pub domain: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: copymanga_home().join("config.yml"),
            domain: default_domain(),
            user_agent: default_user_agent(),
        }
    }
}

fn copymanga_home() -> PathBuf {
    match std::env::var("COPYMANGA_HOME") {
        Ok(path) => PathBuf::from(path),
        Err(_) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".copymanga"),
    }
}

fn default_domain() -> String {
    DOMAIN_CHINA.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Config {
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Config, anyhow::Error> {
        let config_path = match path {
            Some(p) => PathBuf::new().join(p),
            None => copymanga_home().join("config.yml"),
        };

        match std::fs::File::open(&config_path) {
            Ok(file) => {
                info!("Open config from {:?}", config_path);
                let mut cfg: Self = serde_yml::from_reader(file)?;
                cfg.path = config_path;
                Ok(cfg)
            }
            Err(_) => {
                let cfg = Config {
                    path: config_path,
                    ..Default::default()
                };
                cfg.save()?;
                info!("Write default config at {:?}", cfg.path);
                Ok(cfg)
            }
        }
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_yml::to_string(&self)?)?;

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Website root, e.g. `https://www.mangacopy.com`
    pub fn base_url(&self) -> String {
        format!("https://www.{}", self.domain)
    }

    pub fn api_base_url(&self) -> String {
        format!("https://api.{}", self.domain)
    }

    pub fn comic_url(&self, content_id: &str) -> String {
        format!("{}/comic/{content_id}", self.base_url())
    }

    pub fn chapter_list_url(&self, content_id: &str) -> String {
        format!("{}/comicdetail/{content_id}/chapters", self.base_url())
    }

    pub fn chapter_page_url(&self, content_id: &str, chapter_id: &str) -> String {
        crate::assembler::chapter_url(&self.base_url(), content_id, chapter_id)
    }
}
