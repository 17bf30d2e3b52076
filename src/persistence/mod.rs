use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

use crate::core::SheetError;

const APP_NAME: &str = "hanja_sheets";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            log::warn!("Could not create data directory {}: {}", app_dir.display(), e);
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

/// Reads and parses a JSON file, naming the file in any error.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, SheetError> {
    let content = fs::read_to_string(path).map_err(|e| SheetError::FailedToLoadFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| SheetError::FailedToLoadFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

pub fn save_json_at<T: Serialize>(data: &T, path: &Path) -> Result<(), SheetError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    log::info!("Data saved to: {}", path.display());
    Ok(())
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), SheetError> {
    save_json_at(data, &get_data_file_path(filename))
}

/// A missing file is not an error: it yields `T::default()`.
pub fn load_json_at<T: DeserializeOwned + Default>(path: &Path) -> Result<T, SheetError> {
    if !path.exists() {
        return Ok(T::default());
    }

    let data = read_json_file(path)?;
    log::debug!("Data loaded from: {}", path.display());
    Ok(data)
}

pub fn load_json_at_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json_at::<T>(path) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Failed to load {}: {}. Using defaults.", path.display(), e);
            T::default()
        }
    }
}

pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    load_json_at_or_default(&get_data_file_path(filename))
}
