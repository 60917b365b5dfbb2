//! Header classification against the client intake schema.

use pulse_model::{ClientField, ColumnMapping};
use tracing::debug;

/// Normalizes a raw header for synonym lookup: lowercased, with
/// underscores, hyphens, and whitespace removed.
#[must_use]
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, '_' | '-') && !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Proposes a target field for a raw column header.
///
/// Lookup is an exact match over the normalized form; an unrecognized
/// header returns `None` and the column defaults to "skip". Pure and
/// deterministic.
#[must_use]
pub fn classify(header: &str) -> Option<ClientField> {
    let field = match normalize_header(header).as_str() {
        "firstname" | "first" | "fname" => ClientField::FirstName,
        "lastname" | "last" | "lname" | "surname" => ClientField::LastName,
        "email" | "emailaddress" | "mail" => ClientField::Email,
        "phone" | "phonenumber" | "mobile" | "cell" | "telephone" => ClientField::Phone,
        "clienttype" | "type" => ClientField::ClientType,
        "status" => ClientField::Status,
        "source" | "leadsource" | "referral" => ClientField::Source,
        "preferredcontact" | "contactmethod" => ClientField::PreferredContact,
        "notes" | "note" | "comments" => ClientField::Notes,
        "address" | "currentaddress" => ClientField::CurrentAddress,
        _ => return None,
    };
    Some(field)
}

/// Normalized header spellings that classify to a field, for help output.
#[must_use]
pub fn synonyms(field: ClientField) -> &'static [&'static str] {
    match field {
        ClientField::FirstName => &["firstname", "first", "fname"],
        ClientField::LastName => &["lastname", "last", "lname", "surname"],
        ClientField::Email => &["email", "emailaddress", "mail"],
        ClientField::Phone => &["phone", "phonenumber", "mobile", "cell", "telephone"],
        ClientField::ClientType => &["clienttype", "type"],
        ClientField::Status => &["status"],
        ClientField::Source => &["source", "leadsource", "referral"],
        ClientField::PreferredContact => &["preferredcontact", "contactmethod"],
        ClientField::Notes => &["notes", "note", "comments"],
        ClientField::CurrentAddress => &["address", "currentaddress"],
    }
}

/// Seeds a mapping from parsed headers, left to right.
///
/// First match wins: when two headers classify to the same target, the
/// leftmost column keeps it and later columns stay unmapped.
#[must_use]
pub fn seed_mapping(headers: &[String]) -> ColumnMapping {
    let mut mapping = ColumnMapping::new();
    for (column, header) in headers.iter().enumerate() {
        let Some(target) = classify(header) else {
            continue;
        };
        if mapping.is_target_used(target) {
            debug!(column, header = %header, target = %target, "target already claimed, leaving column unmapped");
            continue;
        }
        mapping.set(column, target);
    }
    mapping
}
