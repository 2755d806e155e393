// File: src/evaluator.rs
// Purpose: One operation per field rule, reporting failures through the host notifier

use crate::config::EvaluatorConfig;
use crate::field::{FieldRef, FileSelection};
use crate::host::{FieldAccessor, Notifier};
use crate::verdict::Verdict;
use rusty_field_rules_core as core;
use rusty_field_rules_core::DateOrder;
use tracing::{debug, trace, warn};

/// Inclusive length bounds for [`Evaluator::length`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
    /// Measure the trimmed value instead of the raw one
    pub trim: bool,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max,
            trim: false,
        }
    }

    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }
}

/// Evaluates field rules against a host page
///
/// Holds no mutable state: the same host state always yields the same verdict.
/// On failure the notifier is told once per call; nothing is shown on success.
pub struct Evaluator<A, N> {
    accessor: A,
    notifier: N,
    config: EvaluatorConfig,
}

impl<A: FieldAccessor, N: Notifier> Evaluator<A, N> {
    pub fn new(accessor: A, notifier: N) -> Self {
        Self::with_config(accessor, notifier, EvaluatorConfig::default())
    }

    pub fn with_config(accessor: A, notifier: N, config: EvaluatorConfig) -> Self {
        Self {
            accessor,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    // =========================================================================
    // Text rules
    // =========================================================================

    /// Fails when the value is absent, empty, or only whitespace
    pub fn required(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = self
            .accessor
            .value(&field)
            .is_some_and(|v| !core::is_blank(&v));
        self.check("required", field, ok, &self.config.messages.required)
    }

    pub fn email(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = core::is_valid_email(&self.value_or_empty(&field));
        self.check("email", field, ok, &self.config.messages.email)
    }

    pub fn numeric(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = core::is_numeric(&self.value_or_empty(&field));
        self.check("numeric", field, ok, &self.config.messages.numeric)
    }

    /// Digits with at most two decimal places
    pub fn decimal(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = core::is_decimal(&self.value_or_empty(&field));
        self.check("decimal", field, ok, &self.config.messages.decimal)
    }

    /// Fails on an absent value or any character outside `[A-Za-z0-9_]`
    ///
    /// An empty value passes: there is nothing in it to object to.
    pub fn no_special_characters(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = self
            .accessor
            .value(&field)
            .is_some_and(|v| !core::has_special_characters(&v));
        self.check(
            "no_special_characters",
            field,
            ok,
            &self.config.messages.special_characters,
        )
    }

    pub fn length(&self, field: impl Into<FieldRef>, bounds: LengthBounds) -> Verdict {
        let field = field.into();
        let value = self.value_or_empty(&field);
        let measured = if bounds.trim { value.trim() } else { value.as_str() };
        let len = core::char_length(measured);
        let ok = len >= bounds.min && len <= bounds.max;
        let message = self.config.messages.length_message(bounds.min, bounds.max);
        self.check("length", field, ok, &message)
    }

    pub fn password_strength(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = core::is_strong_password(&self.value_or_empty(&field));
        self.check(
            "password_strength",
            field,
            ok,
            &self.config.messages.password_strength,
        )
    }

    /// Reads the value the way a browser's `parseFloat` would and wants it above zero
    pub fn greater_than_zero(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = core::is_greater_than_zero(&self.value_or_empty(&field));
        self.check(
            "greater_than_zero",
            field,
            ok,
            &self.config.messages.greater_than_zero,
        )
    }

    pub fn no_whitespace_edges(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = !core::has_whitespace_edges(&self.value_or_empty(&field));
        self.check(
            "no_whitespace_edges",
            field,
            ok,
            &self.config.messages.whitespace_edges,
        )
    }

    /// Fails when the field's HTML has no visible text
    pub fn rich_text_not_empty(&self, field: impl Into<FieldRef>, message: Option<&str>) -> Verdict {
        let field = field.into();
        let ok = !core::is_rich_text_empty(&self.value_or_empty(&field));
        let message = message.unwrap_or(&self.config.messages.rich_text);
        self.check("rich_text_not_empty", field, ok, message)
    }

    // =========================================================================
    // Multi-field rules (failure targets the later field)
    // =========================================================================

    /// Fails when the two values differ; the error goes on `confirm`
    pub fn fields_match(
        &self,
        original: impl Into<FieldRef>,
        confirm: impl Into<FieldRef>,
        message: Option<&str>,
    ) -> Verdict {
        let original = original.into();
        let confirm = confirm.into();
        let ok = self.value_or_empty(&original) == self.value_or_empty(&confirm);
        let message = message.unwrap_or(&self.config.messages.fields_match);
        self.check("fields_match", confirm, ok, message)
    }

    /// Fails when both dates parse and the start is after the end; the error goes on `end`
    ///
    /// Values that are not dates are left to other rules and pass here.
    pub fn date_range(&self, start: impl Into<FieldRef>, end: impl Into<FieldRef>) -> Verdict {
        let start = start.into();
        let end = end.into();
        let order = core::compare_dates(
            &self.value_or_empty(&start),
            &self.value_or_empty(&end),
            &self.config.dates.formats,
        );
        if order == DateOrder::Unparsable {
            warn!(start = %start, end = %end, "date range not checked: unparsable date");
        }
        let ok = order != DateOrder::Reversed;
        self.check("date_range", end, ok, &self.config.messages.date_range)
    }

    // =========================================================================
    // Selection rules
    // =========================================================================

    pub fn checkbox_checked(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = self.accessor.is_checked(&field);
        self.check(
            "checkbox_checked",
            field,
            ok,
            &self.config.messages.checkbox_checked,
        )
    }

    pub fn radio_selected(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let ok = self.accessor.value(&field).is_some_and(|v| !v.is_empty());
        self.check(
            "radio_selected",
            field,
            ok,
            &self.config.messages.radio_selected,
        )
    }

    /// Fails when the value equals `default_value`; an absent value counts as ""
    pub fn select_not_default(&self, field: impl Into<FieldRef>, default_value: &str) -> Verdict {
        let field = field.into();
        let ok = self.value_or_empty(&field) != default_value;
        self.check(
            "select_not_default",
            field,
            ok,
            &self.config.messages.select_not_default,
        )
    }

    /// Page-level failure when no element of the group is checked
    pub fn group_checked(&self, group: &str) -> Verdict {
        if self.accessor.count_checked(group) > 0 {
            trace!(rule = "group_checked", group, "field rule passed");
            return Verdict::pass();
        }
        let message = &self.config.messages.group_checked;
        debug!(rule = "group_checked", group, error = %message, "field rule failed");
        if self.config.display.clear_before_show {
            self.notifier.clear_all_errors();
        }
        self.notifier.show_page_error(message);
        Verdict::fail_page(message.as_str())
    }

    // =========================================================================
    // File rules (a rejected file is cleared from the input)
    // =========================================================================

    pub fn file_name_alphanumeric(&self, field: impl Into<FieldRef>) -> Verdict {
        let field = field.into();
        let Some(selection) = self.selected_file(&field) else {
            return self.reject("file_name_alphanumeric", field, &self.config.messages.file_missing);
        };

        if core::is_alphanumeric_file_name(core::file_base_name(&selection.raw_path)) {
            return self.accept("file_name_alphanumeric", &field);
        }

        let verdict = self.reject("file_name_alphanumeric", field.clone(), &self.config.messages.file_name);
        self.accessor.clear_file_selection(&field);
        verdict
    }

    /// Case-insensitive allow-list check on the uploaded file's extension
    pub fn file_extension<S: AsRef<str>>(&self, field: impl Into<FieldRef>, allowed: &[S]) -> Verdict {
        let field = field.into();
        let Some(selection) = self.selected_file(&field) else {
            return self.reject("file_extension", field, &self.config.messages.file_missing);
        };

        if core::is_allowed_extension(core::file_base_name(&selection.raw_path), allowed) {
            return self.accept("file_extension", &field);
        }

        let verdict = self.reject("file_extension", field.clone(), &self.config.messages.file_type);
        self.accessor.clear_file_selection(&field);
        verdict
    }

    /// [`Evaluator::file_extension`] against the configured allow-list
    pub fn file_extension_default(&self, field: impl Into<FieldRef>) -> Verdict {
        self.file_extension(field, self.config.files.allowed_extensions.as_slice())
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn value_or_empty(&self, field: &FieldRef) -> String {
        self.accessor.value(field).unwrap_or_default()
    }

    fn selected_file(&self, field: &FieldRef) -> Option<FileSelection> {
        self.accessor
            .file_selection(field)
            .filter(|selection| !selection.is_empty())
    }

    fn check(&self, rule: &'static str, field: FieldRef, ok: bool, message: &str) -> Verdict {
        if ok {
            self.accept(rule, &field)
        } else {
            self.reject(rule, field, message)
        }
    }

    fn accept(&self, rule: &'static str, field: &FieldRef) -> Verdict {
        trace!(rule, field = %field, "field rule passed");
        Verdict::pass()
    }

    fn reject(&self, rule: &'static str, field: FieldRef, message: &str) -> Verdict {
        debug!(rule, field = %field, error = message, "field rule failed");
        if self.config.display.clear_before_show {
            self.notifier.clear_all_errors();
        }
        self.notifier.show_inline_error(&field, message);
        Verdict::fail_inline(field, message)
    }
}
