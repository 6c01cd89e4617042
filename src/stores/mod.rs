// Global state management
// Stores provide shared state across the application

pub mod auth_store;
pub mod mentee_list;
pub mod selection_store;
pub mod settings_store;
