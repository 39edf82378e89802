//! Page components, one per route

pub mod add_formation;
pub mod formations;
pub mod not_found;

pub use add_formation::AddFormation;
pub use formations::Formations;
pub use not_found::NotFound;
