//! Form fields and their per-field state.

use crate::error::FieldError;

/// One of the eight named inputs of the feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Surname,
    Email,
    Address,
    Phone,
    Rating1,
    Rating2,
    Rating3,
}

impl FieldName {
    /// All fields in form order.
    pub const ALL: [FieldName; 8] = [
        FieldName::Name,
        FieldName::Surname,
        FieldName::Email,
        FieldName::Address,
        FieldName::Phone,
        FieldName::Rating1,
        FieldName::Rating2,
        FieldName::Rating3,
    ];

    pub const RATINGS: [FieldName; 3] = [FieldName::Rating1, FieldName::Rating2, FieldName::Rating3];

    /// The `name` attribute of the input element.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Surname => "surname",
            FieldName::Email => "email",
            FieldName::Address => "address",
            FieldName::Phone => "phone",
            FieldName::Rating1 => "rating1",
            FieldName::Rating2 => "rating2",
            FieldName::Rating3 => "rating3",
        }
    }

    /// Position in [`FieldName::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived validity of a field.
///
/// `Untouched` only exists before the first validation pass and after a reset;
/// every pass moves each field to `Valid` or `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

impl FieldState {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldState::Valid)
    }

    /// The message to attach next to the field, if any.
    pub fn error(&self) -> Option<FieldError> {
        match self {
            FieldState::Invalid(err) => Some(*err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FieldError>> for FieldState {
    fn from(result: Result<T, FieldError>) -> Self {
        match result {
            Ok(_) => FieldState::Valid,
            Err(err) => FieldState::Invalid(err),
        }
    }
}
