//! Property descriptors handed to the host UI.
//!
//! A handler appends list controls keyed by a settings key; the host renders
//! them and writes the chosen value back under the same key. `index_of` maps a
//! stored value back to its dropdown position.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboType {
    /// Fixed choices
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboFormat {
    String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListProperty {
    pub name: String,
    pub description: String,
    pub combo_type: ComboType,
    pub format: ComboFormat,
    items: Vec<ListItem>,
}

impl ListProperty {
    /// Insert at `idx`; positions past the end append
    pub fn insert_string(&mut self, idx: usize, label: impl Into<String>, value: impl Into<String>) {
        let idx = idx.min(self.items.len());
        self.items.insert(
            idx,
            ListItem {
                label: label.into(),
                value: value.into(),
            },
        );
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn values(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.value.as_str()).collect()
    }

    /// Dropdown index for `value`, first entry when it isn't listed
    pub fn index_of(&self, value: &str) -> usize {
        self.items
            .iter()
            .position(|item| item.value == value)
            .unwrap_or(0)
    }
}

/// Ordered collection of controls built for one UI request
#[derive(Debug, Clone, Default, Serialize)]
pub struct Properties {
    lists: Vec<ListProperty>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty list control. Returns `None` if a control with the
    /// same name already exists.
    pub fn add_list(
        &mut self,
        name: &str,
        description: impl Into<String>,
        combo_type: ComboType,
        format: ComboFormat,
    ) -> Option<&mut ListProperty> {
        if self.get(name).is_some() {
            return None;
        }
        self.lists.push(ListProperty {
            name: name.to_string(),
            description: description.into(),
            combo_type,
            format,
            items: Vec::new(),
        });
        self.lists.last_mut()
    }

    pub fn get(&self, name: &str) -> Option<&ListProperty> {
        self.lists.iter().find(|list| list.name == name)
    }

    pub fn lists(&self) -> &[ListProperty] {
        &self.lists
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
