//! `identikit-demo` — builds the sample person and user settings and logs them.

use anyhow::Context;
use serde_json::{json, Value};

use identikit_people::{Birthdate, Gender, Person, UserSettings};

const SAMPLE_NAME: &str = "Juan";
const SAMPLE_GENDER: &str = "M";
const SAMPLE_BIRTHDATE: &str = "1985-10-21";
const SAMPLE_EMAIL: &str = "juan@mail.com";
const SAMPLE_ROLE: &str = "Admin";
const SAMPLE_WORKING_DIRECTORY: &str = "/usr/home";
const SAMPLE_LAST_OPEN_FOLDER: &str = "/home";

/// Everything the demo constructed, in the order it was logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub new_person: Person,
    pub user_settings: UserSettings,
    pub are_credentials_valid: bool,
}

impl DemoReport {
    /// `{ newPerson }`
    pub fn person_snapshot(&self) -> Value {
        json!({ "newPerson": self.new_person })
    }

    /// `{ userSettings, areCredentialsValid }`
    pub fn settings_snapshot(&self) -> Value {
        json!({
            "userSettings": self.user_settings,
            "areCredentialsValid": self.are_credentials_valid,
        })
    }
}

/// Construct the sample entities and log a snapshot of each at `info`.
pub fn run() -> anyhow::Result<DemoReport> {
    let gender: Gender = SAMPLE_GENDER.parse().context("parsing sample gender")?;
    let birthdate = Birthdate::parse(SAMPLE_BIRTHDATE).context("parsing sample birthdate")?;

    let new_person = Person::new(SAMPLE_NAME, gender, birthdate);
    let user_settings = UserSettings::new(
        SAMPLE_WORKING_DIRECTORY,
        SAMPLE_LAST_OPEN_FOLDER,
        SAMPLE_EMAIL,
        SAMPLE_ROLE,
        SAMPLE_NAME,
        gender,
        birthdate,
    );
    let are_credentials_valid = user_settings.check_credentials();

    let report = DemoReport {
        new_person,
        user_settings,
        are_credentials_valid,
    };
    tracing::info!(snapshot = %report.person_snapshot(), "person created");
    tracing::info!(snapshot = %report.settings_snapshot(), "user settings created");

    Ok(report)
}
