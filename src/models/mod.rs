pub mod appointments;
pub mod availabilities;
pub mod providers;
pub mod specialties;
pub mod users;
