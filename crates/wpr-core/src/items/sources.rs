//! Line files and directories of `.txt` items.

use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{with_suffix, ItemsError};

/// Loads every item from `path`, resolving it as described in the module docs.
/// Items are trimmed; blank ones are skipped. Invalid UTF-8 is replaced.
pub fn open_items(path: &Path) -> Result<Vec<String>, ItemsError> {
    if path.is_dir() {
        return dir_items(path);
    }
    if path.is_file() {
        return file_items(path);
    }

    let d_path = with_suffix(path, ".d");
    if d_path.is_dir() {
        return dir_items(&d_path);
    }
    let txt_path = with_suffix(path, ".txt");
    if txt_path.is_file() {
        return file_items(&txt_path);
    }

    Err(ItemsError::NotFound(path.to_path_buf()))
}

/// All items from `path` in random order. Each item appears exactly once.
pub fn random_finite_items<R: Rng + ?Sized>(
    path: &Path,
    rng: &mut R,
) -> Result<Vec<String>, ItemsError> {
    let mut items = open_items(path)?;
    items.shuffle(rng);
    Ok(items)
}

fn read_lossy(path: &Path) -> Result<String, ItemsError> {
    let bytes = fs::read(path).map_err(|e| ItemsError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn file_items(path: &Path) -> Result<Vec<String>, ItemsError> {
    let data = read_lossy(path)?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn dir_items(path: &Path) -> Result<Vec<String>, ItemsError> {
    let mut files: Vec<_> = fs::read_dir(path)
        .map_err(|e| ItemsError::io(path, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt") && p.is_file())
        .collect();
    files.sort();

    let mut items = Vec::with_capacity(files.len());
    for file in files {
        let data = read_lossy(&file)?;
        let item = data.trim();
        if !item.is_empty() {
            items.push(item.to_string());
        }
    }
    Ok(items)
}
