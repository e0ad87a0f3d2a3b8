pub mod users;
pub mod vitals;
