use serde::{Deserialize, Serialize};

/// File name of the optional per-project configuration.
pub const CONFIG_FILE: &str = "dockerize.toml";

/// dockerize.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DockerizeConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Environment variable holding the module root (defaults to GOPATH)
    #[serde(default = "default_root_env")]
    pub root_env: String,
    /// Port exposed when `--expose` is not given
    #[serde(default = "default_expose")]
    pub expose: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Go toolchain image for the standard template
    #[serde(default = "default_base_image")]
    pub base_image: String,
    /// Directory the standard template installs the binary into
    #[serde(default = "default_install_dir")]
    pub install_dir: String,
    /// Optional MAINTAINER line for the standard template
    #[serde(default)]
    pub maintainer: Option<String>,
    /// Program invoked for the scratch cross-compile
    #[serde(default = "default_toolchain")]
    pub toolchain: String,
    /// GOOS passed to the scratch cross-compile
    #[serde(default = "default_target_os")]
    pub target_os: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root_env: default_root_env(),
            expose: default_expose(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            base_image: default_base_image(),
            install_dir: default_install_dir(),
            maintainer: None,
            toolchain: default_toolchain(),
            target_os: default_target_os(),
        }
    }
}

impl DockerizeConfig {
    /// Load from dockerize.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_root_env() -> String {
    "GOPATH".to_owned()
}

fn default_expose() -> String {
    "3000".to_owned()
}

fn default_base_image() -> String {
    "google/golang:stable".to_owned()
}

fn default_install_dir() -> String {
    "/opt/app".to_owned()
}

fn default_toolchain() -> String {
    "go".to_owned()
}

fn default_target_os() -> String {
    "linux".to_owned()
}
