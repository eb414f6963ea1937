use serde_json::Value;

/// A user record exactly as the API returned it. The list is stored verbatim.
pub type User = Value;

/// Display projection of a user record. Reads the backend's minimal user fields
/// when present and falls back to the compact JSON of the record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserRow {
    pub national_code: String,
    pub name: String,
    pub contract_date: String,
}

impl UserRow {
    #[must_use]
    pub fn from_record(record: &User) -> Self {
        let field = |key: &str| match record.get(key) {
            Some(Value::String(value)) => Some(value.trim().to_string()),
            Some(Value::Number(value)) => Some(value.to_string()),
            _ => None,
        };

        let first_name = field("FirstName");
        let last_name = field("LastName");

        let name = match (first_name, last_name) {
            (Some(first), Some(last)) => format!("{first} {last}").trim().to_string(),
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => record.to_string(),
        };

        Self {
            national_code: field("NationalCode").unwrap_or_else(|| "-".to_string()),
            name,
            contract_date: field("ContractDate").unwrap_or_else(|| "-".to_string()),
        }
    }
}
