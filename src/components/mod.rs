// UI Components
// This module contains all reusable UI components

pub mod loading_indicator;
pub mod mentee_card;

pub use loading_indicator::{CenteredNotice, LoadingIndicator};
pub use mentee_card::MenteeCard;
