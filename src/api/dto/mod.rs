pub mod health;
pub mod links;
pub mod orders;
pub mod vendors;
