pub mod home;
pub mod not_found;

pub use home::*;
pub use not_found::*;
