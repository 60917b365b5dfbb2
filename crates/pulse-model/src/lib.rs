pub mod error;
pub mod field;
pub mod mapping;
pub mod record;
pub mod table;

pub use error::{ImportError, Result};
pub use field::ClientField;
pub use mapping::ColumnMapping;
pub use record::ProjectedRecord;
pub use table::ParsedTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_wire_names_round_trip() {
        for field in ClientField::ALL {
            assert_eq!(ClientField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(ClientField::from_name("First Name"), None);
    }

    #[test]
    fn field_serializes_as_wire_name() {
        let json = serde_json::to_string(&ClientField::PreferredContact).expect("serialize field");
        assert_eq!(json, "\"preferredContact\"");
        let field: ClientField = serde_json::from_str("\"currentAddress\"").expect("parse field");
        assert_eq!(field, ClientField::CurrentAddress);
    }

    #[test]
    fn mapping_set_replaces_only_its_own_column() {
        let mut mapping = ColumnMapping::new();
        mapping.set(0, ClientField::Email);
        mapping.set(1, ClientField::Email);
        // Both entries stand; uniqueness is the presentation layer's job.
        assert_eq!(mapping.target(0), Some(ClientField::Email));
        assert_eq!(mapping.target(1), Some(ClientField::Email));
        assert_eq!(mapping.unset(1), Some(ClientField::Email));
        assert!(mapping.is_target_used(ClientField::Email));
    }

    #[test]
    fn mapping_round_trips_through_json() {
        let mut mapping = ColumnMapping::new();
        mapping.set(0, ClientField::FirstName);
        mapping.set(3, ClientField::Phone);
        let json = serde_json::to_string(&mapping).expect("serialize mapping");
        assert_eq!(json, "{\"0\":\"firstName\",\"3\":\"phone\"}");
        let round: ColumnMapping = serde_json::from_str(&json).expect("parse mapping");
        assert_eq!(round, mapping);
    }

    #[test]
    fn record_serializes_with_wire_keys() {
        let mut record = ProjectedRecord::new();
        record.insert(ClientField::FirstName, "Sarah".to_string());
        record.insert(ClientField::Email, "sarah@email.com".to_string());
        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(json, "{\"firstName\":\"Sarah\",\"email\":\"sarah@email.com\"}");
    }

    #[test]
    fn short_row_cells_read_as_none() {
        let table = ParsedTable::new(
            vec!["A".to_string(), "B".to_string()],
            vec![vec!["only".to_string()]],
        );
        assert_eq!(table.cell(0, 0), Some("only"));
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 0), None);
    }
}
