//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values. Two people with the
/// same name, gender and birthdate are equal; there is no hidden identity.
///
/// The trait requires:
/// - **Clone**: value objects are copied, not shared
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: usable in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Folder(String);
///
/// impl ValueObject for Folder {}
///
/// assert_eq!(Folder("/home".into()), Folder("/home".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
