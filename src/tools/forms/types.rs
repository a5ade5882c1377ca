use serde::{Deserialize, Serialize};

/// One `<form>...</form>` region found in a page.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FormRecord {
    /// The matched markup, verbatim
    pub raw_markup: String,
    pub action: Option<String>,
    pub method: Option<String>,
    /// Inputs in document order
    #[serde(default)]
    pub inputs: Vec<InputRecord>,
}

/// One `<input ...>` tag inside a form. Duplicates are kept.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct InputRecord {
    pub name: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub input_type: Option<String>,
}
