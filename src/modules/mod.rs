pub mod accessory;
pub mod auth;
pub mod classroom;
pub mod corporate;
pub mod email;
pub mod location;
pub mod role;
pub mod status;
pub mod user;
