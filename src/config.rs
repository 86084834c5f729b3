use std::{
    env,
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use thiserror::Error;

pub const BIND_ADDR: Ipv4Addr = Ipv4Addr::LOCALHOST;
pub const BIND_PORT: u16 = 7600;
pub const HTML_FILE: &str = "split-view.html";
pub const SCRIPTS_DIR: &str = "scripts";
pub const CHECK_SCRIPT: &str = "check-bedrock.sh";
pub const CONFIGURE_SCRIPT: &str = "configure-bedrock.sh";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_socket: SocketAddr,
    pub html_path: PathBuf,
    pub scripts_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to locate the running executable: {0}")]
    ExecutableDir(#[source] std::io::Error),
    #[error("running executable has no parent directory")]
    NoParentDir,
}

impl Config {
    /// Resolves the page and scripts next to the running binary.
    pub fn from_exe_dir() -> Result<Self, ConfigError> {
        let exe = env::current_exe().map_err(ConfigError::ExecutableDir)?;
        let base = exe.parent().ok_or(ConfigError::NoParentDir)?;

        Ok(Self::with_base_dir(base))
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            bind_socket: SocketAddr::from((BIND_ADDR, BIND_PORT)),
            html_path: base.join(HTML_FILE),
            scripts_dir: base.join(SCRIPTS_DIR),
        }
    }

    pub fn check_script(&self) -> PathBuf {
        self.scripts_dir.join(CHECK_SCRIPT)
    }

    pub fn configure_script(&self) -> PathBuf {
        self.scripts_dir.join(CONFIGURE_SCRIPT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listens_on_fixed_local_port() {
        let config = Config::with_base_dir("/opt/flutterly");

        assert_eq!(
            config.bind_socket,
            "127.0.0.1:7600".parse::<SocketAddr>().expect("valid socket")
        );
    }

    #[test]
    fn resources_live_under_base_dir() {
        let config = Config::with_base_dir("/opt/flutterly");

        assert_eq!(
            config.html_path,
            PathBuf::from("/opt/flutterly/split-view.html")
        );
        assert_eq!(
            config.check_script(),
            PathBuf::from("/opt/flutterly/scripts/check-bedrock.sh")
        );
        assert_eq!(
            config.configure_script(),
            PathBuf::from("/opt/flutterly/scripts/configure-bedrock.sh")
        );
    }

    #[test]
    fn exe_dir_config_points_next_to_binary() {
        let config = Config::from_exe_dir().expect("config should resolve");
        let exe_dir = env::current_exe()
            .expect("current exe")
            .parent()
            .expect("exe parent")
            .to_path_buf();

        assert_eq!(config.html_path, exe_dir.join(HTML_FILE));
        assert_eq!(config.scripts_dir, exe_dir.join(SCRIPTS_DIR));
    }
}
