/// The fields of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactField {
    /// All fields in form order.
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// Fields that must pass validation before a submit is accepted.
    pub const REQUIRED: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// Input label, with a trailing `*` on required fields.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    /// Name used when the field is referenced in a validation message.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Self::Message)
    }

    /// Position of the field within [`ContactField::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`ContactField::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// The in-progress values of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Returns the current value of `field`.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::FirstName => &mut self.first_name,
            ContactField::LastName => &mut self.last_name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

/// One addressable region of the submitted-values panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayRegion {
    FirstName,
    LastName,
    Email,
    Message,
}

impl DisplayRegion {
    /// Stable identifier of the region.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstnameDisplay",
            Self::LastName => "lastnameDisplay",
            Self::Email => "emailDisplay",
            Self::Message => "messageDisplay",
        }
    }

    /// Caption rendered in front of the submitted value.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Snapshot of a draft that passed validation.
///
/// Only built by a successful submit; the next successful submit replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedRecord {
    first_name: String,
    last_name: String,
    email: String,
    message: String,
}

impl SubmittedRecord {
    /// Captures the current values of `draft`.
    pub fn capture(draft: &ContactDraft) -> Self {
        Self {
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// The submitted message, or `None` when it was left empty.
    pub fn message(&self) -> Option<&str> {
        (!self.message.is_empty()).then_some(self.message.as_str())
    }

    /// Returns the value shown in `region`, or `None` if the region is not rendered.
    pub fn region(&self, region: DisplayRegion) -> Option<&str> {
        match region {
            DisplayRegion::FirstName => Some(&self.first_name),
            DisplayRegion::LastName => Some(&self.last_name),
            DisplayRegion::Email => Some(&self.email),
            DisplayRegion::Message => self.message(),
        }
    }

    /// The regions to render, in order, with their values.
    pub fn display_regions(&self) -> Vec<(DisplayRegion, &str)> {
        [
            DisplayRegion::FirstName,
            DisplayRegion::LastName,
            DisplayRegion::Email,
            DisplayRegion::Message,
        ]
        .into_iter()
        .filter_map(|region| self.region(region).map(|value| (region, value)))
        .collect()
    }
}
