//! # Persistence
//!
//! One flat JSON file holds the whole list. Loads are forgiving: a missing,
//! unreadable or malformed file just means "no saved state" and the caller
//! seeds a starter list instead. Saves go through a temp file and rename so
//! a crash mid-write cannot leave a half-document behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::state::{Todo, TodoList};

/// On-disk document shape. The cursor is deliberately not part of it; the
/// selection resets to the top on every load.
#[derive(Serialize, Deserialize, Debug)]
struct SaveFile {
    todos: Vec<Todo>,
}

/// Returns `~/.tuido/todos.json`, creating the directory if needed.
pub fn default_data_file() -> io::Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    let dir = home.join(".tuido");
    fs::create_dir_all(&dir)?;
    Ok(dir.join("todos.json"))
}

/// Loads the saved list from `path`.
///
/// `None` covers every way the file can be unusable, so callers fall back
/// to the seed without branching on the reason.
pub fn load(path: &Path) -> Option<TodoList> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            info!("no saved list at {} ({e}); starting fresh", path.display());
            return None;
        }
    };
    match serde_json::from_str::<SaveFile>(&json) {
        Ok(saved) => {
            debug!("loaded {} todos from {}", saved.todos.len(), path.display());
            Some(TodoList {
                items: saved.todos,
                cursor: 0,
            })
        }
        Err(e) => {
            warn!("ignoring malformed todo file {}: {e}", path.display());
            None
        }
    }
}

/// Serializes `list` to `path`, replacing whatever was there.
pub fn save(list: &TodoList, path: &Path) -> io::Result<()> {
    let saved = SaveFile {
        todos: list.items.clone(),
    };
    atomic_write_json(path, &saved)?;
    debug!("saved {} todos to {}", saved.todos.len(), path.display());
    Ok(())
}

/// Atomically writes `data` as pretty JSON to `path` (write temp, rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
