//! Reusable UI components

pub mod formation_card;
pub mod formation_form;
pub mod formation_image;
pub mod nav;

pub use formation_card::FormationCard;
pub use formation_form::FormationForm;
pub use formation_image::FormationImage;
pub use nav::NavBar;
