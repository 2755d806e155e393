// File: src/memory.rs
// Purpose: In-memory host page for tests and snapshot evaluation

use crate::field::{FieldRef, FileSelection};
use crate::host::{FieldAccessor, Notifier};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

/// Something the evaluator asked the host to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Notification {
    Inline { field: FieldRef, message: String },
    Page { message: String },
    ClearAll,
}

/// Serialized state of a page, as a browser would capture it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSnapshot {
    /// Field values by name; a missing name is an absent value
    pub values: HashMap<String, String>,
    /// Checkbox-like fields and whether they are checked
    pub checked: HashMap<String, bool>,
    /// File inputs and their raw path
    pub files: HashMap<String, String>,
    /// Number of checked elements per group name
    pub groups: HashMap<String, usize>,
}

/// A host page backed by plain maps
///
/// Records every notification so tests can assert on what would have been shown.
#[derive(Debug, Default)]
pub struct MemoryHost {
    values: HashMap<FieldRef, String>,
    checked: HashSet<FieldRef>,
    files: RefCell<HashMap<FieldRef, FileSelection>>,
    groups: HashMap<String, usize>,
    notifications: RefCell<Vec<Notification>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, field: impl Into<FieldRef>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn with_checked(mut self, field: impl Into<FieldRef>, checked: bool) -> Self {
        let field = field.into();
        if checked {
            self.checked.insert(field);
        } else {
            self.checked.remove(&field);
        }
        self
    }

    pub fn with_file(mut self, field: impl Into<FieldRef>, raw_path: impl Into<String>) -> Self {
        self.files
            .get_mut()
            .insert(field.into(), FileSelection::new(raw_path));
        self
    }

    pub fn with_group_checked(mut self, group: impl Into<String>, count: usize) -> Self {
        self.groups.insert(group.into(), count);
        self
    }

    pub fn from_snapshot(snapshot: HostSnapshot) -> Self {
        let mut host = Self::new();
        for (field, value) in snapshot.values {
            host = host.with_value(field, value);
        }
        for (field, checked) in snapshot.checked {
            host = host.with_checked(field, checked);
        }
        for (field, raw_path) in snapshot.files {
            host = host.with_file(field, raw_path);
        }
        host.groups = snapshot.groups;
        host
    }

    /// Whether a file input still holds a selection
    pub fn has_file(&self, field: impl Into<FieldRef>) -> bool {
        let field: FieldRef = field.into();
        self.files.borrow().contains_key(&field)
    }

    /// File inputs whose selection has been cleared, compared to `snapshot`
    pub fn cleared_files(&self, snapshot: &HostSnapshot) -> Vec<String> {
        let files = self.files.borrow();
        let mut cleared: Vec<String> = snapshot
            .files
            .keys()
            .filter(|name| !files.contains_key(&FieldRef::from(name.as_str())))
            .cloned()
            .collect();
        cleared.sort();
        cleared
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    pub fn take_notifications(&self) -> Vec<Notification> {
        self.notifications.take()
    }

    /// Inline messages still on screen, honouring `ClearAll`
    pub fn visible_inline_errors(&self) -> Vec<(FieldRef, String)> {
        let mut visible = Vec::new();
        for notification in self.notifications.borrow().iter() {
            match notification {
                Notification::ClearAll => visible.clear(),
                Notification::Inline { field, message } => {
                    visible.push((field.clone(), message.clone()))
                }
                Notification::Page { .. } => {}
            }
        }
        visible
    }

    pub fn page_errors(&self) -> Vec<String> {
        self.notifications
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Page { message } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl FieldAccessor for MemoryHost {
    fn value(&self, field: &FieldRef) -> Option<String> {
        self.values.get(field).cloned()
    }

    fn is_checked(&self, field: &FieldRef) -> bool {
        self.checked.contains(field)
    }

    fn file_selection(&self, field: &FieldRef) -> Option<FileSelection> {
        self.files.borrow().get(field).cloned()
    }

    fn clear_file_selection(&self, field: &FieldRef) {
        self.files.borrow_mut().remove(field);
    }

    fn count_checked(&self, group: &str) -> usize {
        self.groups.get(group).copied().unwrap_or(0)
    }
}

impl Notifier for MemoryHost {
    fn show_inline_error(&self, field: &FieldRef, message: &str) {
        self.notifications.borrow_mut().push(Notification::Inline {
            field: field.clone(),
            message: message.to_string(),
        });
    }

    fn show_page_error(&self, message: &str) {
        self.notifications.borrow_mut().push(Notification::Page {
            message: message.to_string(),
        });
    }

    fn clear_all_errors(&self) {
        self.notifications.borrow_mut().push(Notification::ClearAll);
    }
}
