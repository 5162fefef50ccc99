use std::fmt;
use std::path;

use super::*;

/// Name of the project configuration file, looked up from the working directory upwards.
pub const CONFIG_FILE: &str = "_kenblog.yml";

impl SiteConfig {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteConfig> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let config = if content.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse config")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };

        Ok(config)
    }

    /// Project configuration file governing `cwd`, if any.
    pub fn find<P: Into<path::PathBuf>>(cwd: P) -> Option<path::PathBuf> {
        find_project_file(cwd, CONFIG_FILE)
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", converted.trim_end())
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
