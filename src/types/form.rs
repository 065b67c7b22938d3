use serde::{Deserialize, Deserializer};

/// Body of `POST /add`. Any `completed` field is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AddTodoForm {
    pub title: String,
}

/// Body of `POST /update/{id}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UpdateTodoForm {
    pub title: String,
    /// Unchecked HTML checkboxes are omitted from the submission entirely.
    #[serde(default, deserialize_with = "deserialize_checkbox")]
    pub completed: bool,
}

fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().is_some_and(is_checked))
}

pub fn is_checked(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "on" | "true" | "1" | "yes"
    )
}
