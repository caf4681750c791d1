//! Field-level validation results shared by the shipping and payment steps.

use std::collections::BTreeMap;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

/// A form field that can carry a [`FieldError`].
pub trait FormField: Copy + Ord {
    /// Stable identifier used for message keys and DOM ids (`first-name`).
    fn slug(self) -> &'static str;
}

impl FieldError {
    /// Translation key for this error on `field`.
    pub fn message_key<F: FormField>(self, field: F) -> String {
        match self {
            Self::Required => format!("error-{}-required", field.slug()),
            Self::InvalidEmail => "error-email-invalid".to_string(),
        }
    }
}

/// Map from field to its current error. Empty means the step is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: FormField> {
    errors: BTreeMap<F, FieldError>,
}

impl<F: FormField> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: F) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Drop the error on `field`; returns whether one was present.
    pub fn clear(&mut self, field: F) -> bool {
        self.errors.remove(&field).is_some()
    }

    pub fn clear_all(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// Record `Required` for `field` when `value` is blank after trimming.
    pub(crate) fn require(&mut self, field: F, value: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, FieldError::Required);
            false
        } else {
            true
        }
    }
}

/// How strictly e-mail addresses are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmailPolicy {
    /// Anything containing `@`.
    #[default]
    ContainsAt,
    /// Non-empty local part and a domain with an inner dot.
    LocalAndDomain,
}

impl EmailPolicy {
    pub fn accepts(self, email: &str) -> bool {
        let email = email.trim();
        match self {
            Self::ContainsAt => email.contains('@'),
            Self::LocalAndDomain => {
                let Some((local, domain)) = email.rsplit_once('@') else {
                    return false;
                };
                !local.is_empty()
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && domain.contains('.')
                    && !domain.contains(char::is_whitespace)
            }
        }
    }
}
