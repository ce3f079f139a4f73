use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORD_ID: &str = "N/A";
pub const DEFAULT_DISPLAY_NAME: &str = "unspecified";

/// One entry of the contact collection. A `None` phone means the entry carried
/// no phone field at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub phone_raw: Option<String>,
}

impl Record {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        phone_raw: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            display_name: Some(display_name.into()),
            phone_raw: Some(phone_raw.into()),
        }
    }

    pub fn id_or_default(&self) -> &str {
        self.id.as_deref().unwrap_or(DEFAULT_RECORD_ID)
    }

    pub fn name_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_DISPLAY_NAME)
    }
}
