// File: src/host.rs
// Purpose: Capabilities the host page provides to the evaluator

use crate::field::{FieldRef, FileSelection};

/// Read access to the page's fields
///
/// Implementations must answer for any field reference without panicking; an
/// unknown field is simply absent.
pub trait FieldAccessor {
    /// Current value of a field, `None` when the field has no value at all
    fn value(&self, field: &FieldRef) -> Option<String>;

    /// Checked state of a checkbox-like field
    fn is_checked(&self, field: &FieldRef) -> bool;

    /// Current file selection of a file input, `None` when nothing is selected
    fn file_selection(&self, field: &FieldRef) -> Option<FileSelection>;

    /// Drop the file selection so a rejected file cannot be resubmitted
    fn clear_file_selection(&self, field: &FieldRef);

    /// Number of checked elements sharing a group name
    fn count_checked(&self, group: &str) -> usize;
}

/// Error display surface of the host page
pub trait Notifier {
    /// Show a message next to one field
    fn show_inline_error(&self, field: &FieldRef, message: &str);

    /// Show a message that belongs to the page rather than a single field
    fn show_page_error(&self, message: &str);

    /// Remove every message currently displayed
    fn clear_all_errors(&self);
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for &T {
    fn value(&self, field: &FieldRef) -> Option<String> {
        (**self).value(field)
    }

    fn is_checked(&self, field: &FieldRef) -> bool {
        (**self).is_checked(field)
    }

    fn file_selection(&self, field: &FieldRef) -> Option<FileSelection> {
        (**self).file_selection(field)
    }

    fn clear_file_selection(&self, field: &FieldRef) {
        (**self).clear_file_selection(field)
    }

    fn count_checked(&self, group: &str) -> usize {
        (**self).count_checked(group)
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn show_inline_error(&self, field: &FieldRef, message: &str) {
        (**self).show_inline_error(field, message)
    }

    fn show_page_error(&self, message: &str) {
        (**self).show_page_error(message)
    }

    fn clear_all_errors(&self) {
        (**self).clear_all_errors()
    }
}
