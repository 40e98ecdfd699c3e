//! Per-user preferences (working directory, last opened folder).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Birthdate, Gender, Person, Role, User};

/// User preferences, owning the `User` they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(flatten)]
    user: User,
    working_directory: String,
    last_open_folder: String,
}

impl UserSettings {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        working_directory: impl Into<String>,
        last_open_folder: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<Role>,
        name: impl Into<String>,
        gender: Gender,
        birthdate: Birthdate,
    ) -> Self {
        Self::from_user(
            User::new(email, role, name, gender, birthdate),
            working_directory,
            last_open_folder,
        )
    }

    pub fn from_user(
        user: User,
        working_directory: impl Into<String>,
        last_open_folder: impl Into<String>,
    ) -> Self {
        Self {
            user,
            working_directory: working_directory.into(),
            last_open_folder: last_open_folder.into(),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn last_open_folder(&self) -> &str {
        &self.last_open_folder
    }

    pub fn set_working_directory(&mut self, dir: impl Into<String>) {
        self.working_directory = dir.into();
        tracing::debug!(dir = %self.working_directory, "working directory updated");
    }

    pub fn set_last_open_folder(&mut self, folder: impl Into<String>) {
        self.last_open_folder = folder.into();
        tracing::debug!(folder = %self.last_open_folder, "last open folder updated");
    }

    pub fn check_credentials(&self) -> bool {
        self.user.check_credentials()
    }

    pub fn person(&self) -> &Person {
        self.user.person()
    }

    pub fn email(&self) -> &str {
        self.user.email()
    }

    pub fn role(&self) -> &Role {
        self.user.role()
    }

    pub fn last_access(&self) -> DateTime<Utc> {
        self.user.last_access()
    }

    pub fn name(&self) -> &str {
        self.user.name()
    }

    pub fn gender(&self) -> Gender {
        self.user.gender()
    }

    pub fn birthdate(&self) -> Birthdate {
        self.user.birthdate()
    }
}
