use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

use crate::stores::selection_store;

/// Signed-in mentor session
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub mentor_id: Option<String>,
    pub token: Option<String>,
}

/// Global authentication state
pub static AUTH_STATE: GlobalSignal<AuthState> = Signal::global(AuthState::default);

const STORAGE_KEY_MENTOR_ID: &str = "menteeboard_mentor_id";
const STORAGE_KEY_TOKEN: &str = "menteeboard_token";

/// Restore the mentor session from localStorage
pub fn init_auth() {
    log::info!("Initializing authentication...");

    let mentor_id = LocalStorage::get::<String>(STORAGE_KEY_MENTOR_ID)
        .ok()
        .and_then(|id| normalize_mentor_id(&id).ok());

    let Some(mentor_id) = mentor_id else {
        log::info!("No stored mentor session");
        return;
    };

    let token = LocalStorage::get::<String>(STORAGE_KEY_TOKEN)
        .ok()
        .filter(|t| !t.trim().is_empty());

    log::info!("Restored session for mentor {}", mentor_id);
    *AUTH_STATE.write() = AuthState {
        mentor_id: Some(mentor_id),
        token,
    };
}

/// Trimmed mentor id, rejecting blanks
pub fn normalize_mentor_id(raw: &str) -> Result<String, String> {
    let id = raw.trim();
    if id.is_empty() {
        return Err("Mentor ID is required".to_string());
    }
    if id.chars().any(char::is_whitespace) {
        return Err("Mentor ID cannot contain spaces".to_string());
    }
    Ok(id.to_string())
}

/// Sign in as `mentor_id`, optionally with an API bearer token
pub fn sign_in(mentor_id: &str, token: Option<String>) -> Result<(), String> {
    let mentor_id = normalize_mentor_id(mentor_id)?;
    let token = token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    if let Err(e) = LocalStorage::set(STORAGE_KEY_MENTOR_ID, &mentor_id) {
        log::warn!("Failed to persist mentor id: {}", e);
    }
    match &token {
        Some(t) => {
            if let Err(e) = LocalStorage::set(STORAGE_KEY_TOKEN, t) {
                log::warn!("Failed to persist API token: {}", e);
            }
        }
        None => LocalStorage::delete(STORAGE_KEY_TOKEN),
    }

    log::info!("Signed in as mentor {}", mentor_id);
    *AUTH_STATE.write() = AuthState {
        mentor_id: Some(mentor_id),
        token,
    };
    Ok(())
}

/// Forget the session and any selected mentee
pub fn sign_out() {
    LocalStorage::delete(STORAGE_KEY_MENTOR_ID);
    LocalStorage::delete(STORAGE_KEY_TOKEN);
    *AUTH_STATE.write() = AuthState::default();
    selection_store::clear_selection();
    log::info!("Signed out");
}

pub fn get_mentor_id() -> Option<String> {
    AUTH_STATE.read().mentor_id.clone()
}

pub fn get_token() -> Option<String> {
    AUTH_STATE.read().token.clone()
}
