pub mod cards;
pub mod common;
pub mod empty_state;
pub mod icons;
pub mod layout;
