use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of the client intake schema.
///
/// The set is closed: an import can populate these ten fields and nothing
/// else. Wire names (the serde representation) are the camelCase keys the
/// record-creation service expects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ClientField {
    FirstName,
    LastName,
    Email,
    Phone,
    ClientType,
    Status,
    Source,
    PreferredContact,
    Notes,
    CurrentAddress,
}

impl ClientField {
    /// All fields, in display order.
    pub const ALL: [ClientField; 10] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::ClientType,
        Self::Status,
        Self::Source,
        Self::PreferredContact,
        Self::Notes,
        Self::CurrentAddress,
    ];

    /// Wire name used in record JSON and saved mapping files.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ClientType => "clientType",
            Self::Status => "status",
            Self::Source => "source",
            Self::PreferredContact => "preferredContact",
            Self::Notes => "notes",
            Self::CurrentAddress => "currentAddress",
        }
    }

    /// Human display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::ClientType => "Client Type",
            Self::Status => "Status",
            Self::Source => "Lead Source",
            Self::PreferredContact => "Preferred Contact",
            Self::Notes => "Notes",
            Self::CurrentAddress => "Current Address",
        }
    }

    /// Looks up a field by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for ClientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
