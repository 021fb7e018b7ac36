use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub input_dir: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

/// Effective settings after merging CLI flags over the config file over the
/// built-in exe-relative defaults.
#[derive(Debug)]
pub struct Resolved {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub verbose: bool,
}

/// Merge precedence: CLI flag wins, then config file, then default.
pub fn resolve(
    cli_input: Option<PathBuf>,
    cli_output: Option<PathBuf>,
    cli_verbose: bool,
    file_config: Option<&FileConfig>,
) -> Resolved {
    Resolved {
        input_dir: cli_input
            .or_else(|| file_config.and_then(|c| c.input_dir.clone()))
            .unwrap_or_else(default_input_dir),
        output_dir: cli_output
            .or_else(|| file_config.and_then(|c| c.output_dir.clone()))
            .unwrap_or_else(default_output_dir),
        verbose: cli_verbose || file_config.map(|c| c.verbose).unwrap_or(false),
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("distrikml.toml"));
    paths.push(PathBuf::from(".distrikml.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("distrikml").join("config.toml"));
        paths.push(config_dir.join("distrikml.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".distrikml.toml"));
        paths.push(home.join(".config").join("distrikml").join("config.toml"));
    }

    paths
}

/// Directory the running executable lives in, falling back to the current
/// directory when the executable path cannot be resolved.
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default input directory: `data/distritos` next to the executable.
pub fn default_input_dir() -> PathBuf {
    exe_dir().join("data").join("distritos")
}

/// Default output directory: `web/kml` next to the executable.
pub fn default_output_dir() -> PathBuf {
    exe_dir().join("web").join("kml")
}
