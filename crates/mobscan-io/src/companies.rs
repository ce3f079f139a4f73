use mobscan_core::domain::Record;
use serde_json::Value;

/// JSON keys used to locate records and their fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLayout {
    pub collection: String,
    pub id_field: String,
    pub name_field: String,
    pub contact_field: String,
    pub phone_field: String,
}

impl Default for InputLayout {
    fn default() -> Self {
        Self {
            collection: "companies".to_string(),
            id_field: "id".to_string(),
            name_field: "company_name_arabic".to_string(),
            contact_field: "contact_info".to_string(),
            phone_field: "phone".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParsedCollection {
    pub records: Vec<Record>,
    pub warnings: Vec<String>,
    pub skipped: usize,
}

/// Parses raw input bytes; invalid UTF-8 is reported as a JSON error.
pub fn parse_companies(
    data: impl AsRef<[u8]>,
    layout: &InputLayout,
) -> serde_json::Result<ParsedCollection> {
    let value: Value = serde_json::from_slice(data.as_ref())?;
    Ok(collection_from_value(&value, layout))
}

/// Builds records from an already-parsed document. Shape problems become
/// warnings, never errors.
pub fn collection_from_value(value: &Value, layout: &InputLayout) -> ParsedCollection {
    let mut parsed = ParsedCollection::default();

    let Some(items) = value
        .get(layout.collection.as_str())
        .and_then(Value::as_array)
    else {
        parsed.warnings.push(format!(
            "no `{}` array found in input; treating it as empty",
            layout.collection
        ));
        return parsed;
    };

    for (index, item) in items.iter().enumerate() {
        let Some(object) = item.as_object() else {
            parsed.skipped += 1;
            parsed
                .warnings
                .push(format!("entry {index} is not an object; skipping"));
            continue;
        };

        let id = object.get(layout.id_field.as_str()).and_then(id_text);
        let display_name = object.get(layout.name_field.as_str()).and_then(name_text);
        let phone_value = object
            .get(layout.contact_field.as_str())
            .and_then(Value::as_object)
            .and_then(|contact| contact.get(layout.phone_field.as_str()));

        let phone_raw = match phone_value {
            Some(Value::Object(_)) => {
                parsed.warnings.push(format!(
                    "entry {index} has an object in `{}`; ignoring it",
                    layout.phone_field
                ));
                None
            }
            Some(value) => phone_text(value),
            None => None,
        };

        parsed.records.push(Record {
            id,
            display_name,
            phone_raw,
        });
    }

    parsed
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn name_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn phone_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(phone_text).collect();
            Some(parts.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_companies, InputLayout};

    fn parse(data: &str) -> super::ParsedCollection {
        parse_companies(data, &InputLayout::default()).expect("parse")
    }

    #[test]
    fn parse_companies_reads_records() {
        let parsed = parse(
            r#"{"companies": [
                {"id": 1, "company_name_arabic": "Acme", "contact_info": {"phone": "01123456789"}},
                {"id": "b-2", "company_name_arabic": "  Beta  ", "contact_info": {"phone": "0235551234"}}
            ]}"#,
        );
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].id.as_deref(), Some("1"));
        assert_eq!(parsed.records[0].display_name.as_deref(), Some("Acme"));
        assert_eq!(parsed.records[0].phone_raw.as_deref(), Some("01123456789"));
        assert_eq!(parsed.records[1].id.as_deref(), Some("b-2"));
        assert_eq!(parsed.records[1].display_name.as_deref(), Some("  Beta  "));
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn parse_companies_keeps_present_names_verbatim() {
        let parsed = parse(
            r#"{"companies": [
                {"company_name_arabic": ""},
                {"company_name_arabic": 42},
                {"company_name_arabic": null},
                {"company_name_arabic": ["Acme"]}
            ]}"#,
        );
        assert_eq!(parsed.records[0].display_name.as_deref(), Some(""));
        assert_eq!(parsed.records[1].display_name.as_deref(), Some("42"));
        assert!(parsed.records[2].display_name.is_none());
        assert!(parsed.records[3].display_name.is_none());
    }

    #[test]
    fn parse_companies_handles_missing_collection() {
        let parsed = parse(r#"{"pages": 460}"#);
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn parse_companies_handles_non_array_collection() {
        let parsed = parse(r#"{"companies": {"id": 1}}"#);
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn parse_companies_handles_top_level_array() {
        let parsed = parse("[1, 2, 3]");
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn parse_companies_skips_non_object_entries() {
        let parsed = parse(r#"{"companies": [42, {"id": 1}]}"#);
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.records.len(), 1);
    }

    #[test]
    fn parse_companies_leaves_phone_absent_without_contact_info() {
        let parsed = parse(
            r#"{"companies": [
                {"id": 1, "company_name_arabic": "NoContact"},
                {"id": 2, "contact_info": {"email": "a@b.c"}},
                {"id": 3, "contact_info": "01012345678"},
                {"id": 4, "contact_info": {"phone": null}}
            ]}"#,
        );
        assert_eq!(parsed.records.len(), 4);
        assert!(parsed.records.iter().all(|r| r.phone_raw.is_none()));
        assert!(parsed.records[1].display_name.is_none());
    }

    #[test]
    fn parse_companies_stringifies_phone_values() {
        let parsed = parse(
            r#"{"companies": [
                {"contact_info": {"phone": 1012345678}},
                {"contact_info": {"phone": ["01012345678", "01112345678"]}},
                {"contact_info": {"phone": {"mobile": "01012345678"}}}
            ]}"#,
        );
        assert_eq!(parsed.records[0].phone_raw.as_deref(), Some("1012345678"));
        assert_eq!(
            parsed.records[1].phone_raw.as_deref(),
            Some("01012345678, 01112345678")
        );
        assert!(parsed.records[2].phone_raw.is_none());
        assert_eq!(parsed.warnings.len(), 1);
    }

    #[test]
    fn parse_companies_honors_custom_layout() {
        let layout = InputLayout {
            collection: "entries".to_string(),
            id_field: "uid".to_string(),
            name_field: "name".to_string(),
            contact_field: "contact".to_string(),
            phone_field: "mobile".to_string(),
        };
        let parsed = parse_companies(
            r#"{"entries": [{"uid": 9, "name": "Gamma", "contact": {"mobile": "01512345678"}}]}"#,
            &layout,
        )
        .expect("parse");
        assert_eq!(parsed.records[0].id.as_deref(), Some("9"));
        assert_eq!(parsed.records[0].display_name.as_deref(), Some("Gamma"));
        assert_eq!(parsed.records[0].phone_raw.as_deref(), Some("01512345678"));
    }

    #[test]
    fn parse_companies_rejects_malformed_json() {
        assert!(parse_companies("{not json", &InputLayout::default()).is_err());
    }
}
