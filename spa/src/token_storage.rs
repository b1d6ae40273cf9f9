use shared::{PATH_STORAGE_KEY, TOKEN_STORAGE_KEY};
use web_sys::Storage;

// Not yew_hooks::use_local_storage: the validator's interval callback reads storage outside hooks.

fn local_storage() -> Option<Storage> {
    let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
    if storage.is_none() {
        log::warn!("Local storage is not available");
    }
    storage
}

fn session_storage() -> Option<Storage> {
    let storage = web_sys::window().and_then(|window| window.session_storage().ok().flatten());
    if storage.is_none() {
        log::warn!("Session storage is not available");
    }
    storage
}

pub fn read_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_STORAGE_KEY).ok().flatten())
        .filter(|token| !token.trim().is_empty())
}

pub fn has_token() -> bool {
    read_token().is_some()
}

pub fn write_token(token: &str) {
    if let Some(storage) = local_storage() {
        if let Err(error) = storage.set_item(TOKEN_STORAGE_KEY, token) {
            log::warn!("Fail to persist token, error={error:?}");
        }
    }
}

pub fn remove_token() {
    if let Some(storage) = local_storage() {
        if let Err(error) = storage.remove_item(TOKEN_STORAGE_KEY) {
            log::warn!("Fail to remove token, error={error:?}");
        }
    }
}

/// Remembers the page being shown so a reload can come back to it.
pub fn save_path(path: &str) {
    if let Some(storage) = session_storage() {
        if let Err(error) = storage.set_item(PATH_STORAGE_KEY, path) {
            log::warn!("Fail to save path={path}, error={error:?}");
        }
    }
}

pub fn saved_path() -> Option<String> {
    session_storage().and_then(|storage| storage.get_item(PATH_STORAGE_KEY).ok().flatten())
}
