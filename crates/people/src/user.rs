//! User record: a person plus authentication-adjacent attributes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use identikit_core::{DomainError, DomainResult};

use crate::{Birthdate, Gender, Person, Role};

/// A user of the system.
///
/// Holds its `Person` instead of extending it. Identity accessors delegate to
/// the inner record.
///
/// # Invariants
/// - `new`/`from_person` stamp `last_access` during construction, so it is
///   never earlier than the moment construction started.
/// - Rebuilt users (`with_last_access`, deserialization) keep their recorded
///   timestamp, which must not lie in the future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserRecord")]
pub struct User {
    #[serde(flatten)]
    person: Person,
    email: String,
    role: Role,
    last_access: DateTime<Utc>,
}

/// Wire shape of a `User`, checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    #[serde(flatten)]
    person: Person,
    email: String,
    role: Role,
    last_access: DateTime<Utc>,
}

impl TryFrom<UserRecord> for User {
    type Error = DomainError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        User::with_last_access(record.person, record.email, record.role, record.last_access)
    }
}

impl User {
    pub fn new(
        email: impl Into<String>,
        role: impl Into<Role>,
        name: impl Into<String>,
        gender: Gender,
        birthdate: Birthdate,
    ) -> Self {
        Self::from_person(Person::new(name, gender, birthdate), email, role)
    }

    /// Build a user around an existing person, stamping `last_access` now.
    pub fn from_person(person: Person, email: impl Into<String>, role: impl Into<Role>) -> Self {
        Self::assemble(person, email.into(), role.into(), Utc::now())
    }

    /// Rebuild a user with its recorded access timestamp.
    ///
    /// Fails with an invariant violation if `last_access` is in the future.
    pub fn with_last_access(
        person: Person,
        email: impl Into<String>,
        role: impl Into<Role>,
        last_access: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        if last_access > now {
            return Err(DomainError::invariant(format!(
                "last access {last_access} is later than now ({now})"
            )));
        }
        Ok(Self::assemble(person, email.into(), role.into(), last_access))
    }

    fn assemble(person: Person, email: String, role: Role, last_access: DateTime<Utc>) -> Self {
        let user = Self {
            person,
            email,
            role,
            last_access,
        };
        tracing::debug!(email = %user.email, role = %user.role, "user constructed");
        user
    }

    /// Placeholder credential check; there is no authentication behind it.
    pub fn check_credentials(&self) -> bool {
        true
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn last_access(&self) -> DateTime<Utc> {
        self.last_access
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn gender(&self) -> Gender {
        self.person.gender()
    }

    pub fn birthdate(&self) -> Birthdate {
        self.person.birthdate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn juan_birthdate() -> Birthdate {
        Birthdate::parse("1985-10-21").unwrap()
    }

    fn juan() -> User {
        User::new("juan@mail.com", "Admin", "Juan", Gender::M, juan_birthdate())
    }

    #[test]
    fn new_user_delegates_identity_to_person() {
        let user = juan();

        assert_eq!(user.email(), "juan@mail.com");
        assert_eq!(user.role().as_str(), "Admin");
        assert_eq!(user.person(), &Person::new("Juan", Gender::M, juan_birthdate()));
        assert_eq!(user.name(), "Juan");
        assert_eq!(user.gender(), Gender::M);
        assert_eq!(user.birthdate(), juan_birthdate());
    }

    #[test]
    fn last_access_is_stamped_during_construction() {
        let before = Utc::now();
        let user = juan();
        let after = Utc::now();

        assert!(user.last_access() >= before);
        assert!(user.last_access() <= after);
    }

    #[test]
    fn check_credentials_always_succeeds() {
        let mut user = User::new("", "", "", Gender::F, juan_birthdate());
        assert!(user.check_credentials());

        user.person_mut().name = "changed".to_string();
        assert!(user.check_credentials());
    }

    #[test]
    fn with_last_access_keeps_given_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let person = Person::new("Ana", Gender::F, juan_birthdate());
        let user =
            User::with_last_access(person, "ana@mail.com", Role::new("Viewer"), at).unwrap();

        assert_eq!(user.last_access(), at);
        assert_eq!(user.role().to_string(), "Viewer");
    }

    #[test]
    fn rebuilt_user_keeps_past_timestamp() {
        let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let person = Person::new("Ana", Gender::F, juan_birthdate());
        let user = User::with_last_access(person, "a@b.c", "Admin", epoch).unwrap();

        // recorded, not restamped
        assert_eq!(user.last_access(), epoch);
    }

    #[test]
    fn rebuild_rejects_future_last_access() {
        let future = Utc::now() + chrono::Duration::days(1);
        let person = Person::new("Ana", Gender::F, juan_birthdate());

        let err = User::with_last_access(person, "a@b.c", "Admin", future).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert!(err.to_string().contains("later than now"));
    }

    #[test]
    fn deserialize_keeps_recorded_timestamp() {
        let user: User = serde_json::from_value(serde_json::json!({
            "name": "Juan",
            "gender": "M",
            "birthdate": "1985-10-21",
            "email": "juan@mail.com",
            "role": "Admin",
            "lastAccess": "1970-01-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(
            user.last_access(),
            Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn deserialize_rejects_future_last_access() {
        let result = serde_json::from_value::<User>(serde_json::json!({
            "name": "Juan",
            "gender": "M",
            "birthdate": "1985-10-21",
            "email": "juan@mail.com",
            "role": "Admin",
            "lastAccess": "2999-01-01T00:00:00Z",
        }));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("invariant violated"));
    }

    #[test]
    fn serializes_flat_with_camel_case_keys() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let person = Person::new("Juan", Gender::M, juan_birthdate());
        let user = User::with_last_access(person, "juan@mail.com", "Admin", at).unwrap();

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Juan",
                "gender": "M",
                "birthdate": "1985-10-21",
                "email": "juan@mail.com",
                "role": "Admin",
                "lastAccess": "2024-01-02T03:04:05Z",
            })
        );

        let back: User = serde_json::from_value(value).unwrap();
        assert_eq!(back, user);
    }
}
