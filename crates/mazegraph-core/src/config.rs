//! Maze generation configuration
//!
//! Configuration is read from `mazegraph.toml`. Every field is optional and
//! falls back to the defaults below; CLI flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "mazegraph.toml";

/// Grid and output settings for the `grid` and `maze` commands
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MazeConfig {
    /// Number of grid rows
    pub rows: usize,

    /// Number of grid columns
    pub cols: usize,

    /// Cell the maze is carved from
    pub start: String,

    /// Where the grid graph DOT file is written
    pub grid_output: PathBuf,

    /// Where the maze DOT file is written
    pub maze_output: PathBuf,

    /// Graphviz graph name for the grid
    pub grid_name: String,

    /// Graphviz graph name for the maze
    pub maze_name: String,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            start: "r0c0".to_string(),
            grid_output: PathBuf::from("files/grid.dot"),
            maze_output: PathBuf::from("files/maze.dot"),
            grid_name: "grid1".to_string(),
            maze_name: "maze1".to_string(),
        }
    }
}

impl MazeConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GraphError::ConfigNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                GraphError::io_operation("read config", path.display(), e)
            }
        })?;
        let config: MazeConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Path of the config file to load: the explicit path if given,
    /// otherwise the default file when it exists in `dir`
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(dir.join(CONFIG_FILE_NAME)).filter(|p| p.is_file()),
        }
    }

    /// Load an explicit config file, or the default file if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just means defaults. Also returns the path that was loaded.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<(Self, Option<PathBuf>)> {
        match Self::locate(explicit, dir) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// Reject settings no maze can be built from
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            bail_invalid!("rows", self.rows);
        }
        if self.cols == 0 {
            bail_invalid!("cols", self.cols);
        }
        if self.start.trim().is_empty() {
            bail_invalid!("start", "(empty)");
        }
        Ok(())
    }
}
