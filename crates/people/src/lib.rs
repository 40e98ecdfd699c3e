//! People domain module (person, user, user settings).
//!
//! Each record owns the one below it instead of extending it:
//! `UserSettings` holds a `User`, which holds a `Person`.

pub mod person;
pub mod role;
pub mod settings;
pub mod user;

pub use person::{Birthdate, Gender, Person};
pub use role::Role;
pub use settings::UserSettings;
pub use user::User;
