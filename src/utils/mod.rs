// Utility functions
// Helper types shared by stores and views

pub mod load_state;

pub use load_state::LoadState;
