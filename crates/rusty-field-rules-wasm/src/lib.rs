//! Field Rules WASM
//!
//! WebAssembly bindings for the field rule evaluator.
//! Lets a page run the same rules in the browser, either against a live JS host
//! object or against a serialized snapshot of the page.

use rusty_field_rules::predicates as core;
use rusty_field_rules::{
    Evaluator, EvaluatorConfig, FieldAccessor, FieldRef, FileSelection, HostSnapshot, MemoryHost,
    Notification, Notifier, RuleSpec, Verdict,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
extern "C" {
    /// Page adapter supplied by JavaScript
    ///
    /// ```javascript
    /// const host = {
    ///   getValue: (item) => apex.item(item).getValue(),
    ///   isChecked: (item) => document.getElementById(item).checked,
    ///   getFileSelection: (item) => ({ rawPath: document.getElementById(item).value }),
    ///   clearFileSelection: (item) => { document.getElementById(item).value = ""; },
    ///   countChecked: (group) => document.querySelectorAll(`input[name="${group}"]:checked`).length,
    ///   showInlineError: (item, message) => apex.message.showErrors([{ type: "error", location: "inline", pageItem: item, message, unsafe: false }]),
    ///   showPageError: (message) => apex.message.showPageErrors(message),
    ///   clearAllErrors: () => apex.message.clearErrors(),
    /// };
    /// ```
    pub type JsPageHost;

    #[wasm_bindgen(method, catch, js_name = getValue)]
    fn get_value(this: &JsPageHost, field: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = isChecked)]
    fn is_checked_js(this: &JsPageHost, field: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = getFileSelection)]
    fn get_file_selection(this: &JsPageHost, field: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = clearFileSelection)]
    fn clear_file_selection_js(this: &JsPageHost, field: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = countChecked)]
    fn count_checked_js(this: &JsPageHost, group: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = showInlineError)]
    fn show_inline_error_js(this: &JsPageHost, field: &str, message: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = showPageError)]
    fn show_page_error_js(this: &JsPageHost, message: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = clearAllErrors)]
    fn clear_all_errors_js(this: &JsPageHost) -> Result<JsValue, JsValue>;
}

// A throwing or missing host method is logged and treated as a neutral answer
fn host_call(method: &str, result: Result<JsValue, JsValue>) -> JsValue {
    result.unwrap_or_else(|err| {
        web_sys::console::warn_2(&JsValue::from_str(&format!("field host {method} failed")), &err);
        JsValue::UNDEFINED
    })
}

impl FieldAccessor for JsPageHost {
    fn value(&self, field: &FieldRef) -> Option<String> {
        host_call("getValue", self.get_value(field.as_str())).as_string()
    }

    fn is_checked(&self, field: &FieldRef) -> bool {
        host_call("isChecked", self.is_checked_js(field.as_str())).is_truthy()
    }

    fn file_selection(&self, field: &FieldRef) -> Option<FileSelection> {
        let raw = host_call("getFileSelection", self.get_file_selection(field.as_str()));
        if raw.is_null() || raw.is_undefined() {
            return None;
        }
        serde_wasm_bindgen::from_value(raw).ok()
    }

    fn clear_file_selection(&self, field: &FieldRef) {
        host_call("clearFileSelection", self.clear_file_selection_js(field.as_str()));
    }

    fn count_checked(&self, group: &str) -> usize {
        host_call("countChecked", self.count_checked_js(group))
            .as_f64()
            .filter(|n| n.is_finite() && *n > 0.0)
            .map(|n| n as usize)
            .unwrap_or(0)
    }
}

impl Notifier for JsPageHost {
    fn show_inline_error(&self, field: &FieldRef, message: &str) {
        host_call("showInlineError", self.show_inline_error_js(field.as_str(), message));
    }

    fn show_page_error(&self, message: &str) {
        host_call("showPageError", self.show_page_error_js(message));
    }

    fn clear_all_errors(&self) {
        host_call("clearAllErrors", self.clear_all_errors_js());
    }
}

fn parse_config(config: JsValue) -> Result<EvaluatorConfig, JsValue> {
    if config.is_null() || config.is_undefined() {
        return Ok(EvaluatorConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

fn parse_rules(rules: JsValue) -> Result<Vec<RuleSpec>, JsValue> {
    serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))
}

/// Evaluate rules against a live page
///
/// # Arguments
/// * `host` - JavaScript object implementing the page adapter
/// * `rules` - Array of rule objects, e.g. `{ rule: "required", field: "P1_NAME" }`
/// * `config` - Optional evaluator configuration (messages, allow-lists, ...)
///
/// # Returns
/// Array of verdicts `{ passed, message, targetField }`, one per rule
///
/// # Example (JavaScript)
/// ```javascript
/// const verdicts = validateWithHost(host, [
///     { rule: "required", field: "P1_NAME" },
///     { rule: "date_range", start: "P1_FROM", end: "P1_TO" },
/// ]);
/// if (verdicts.some(v => !v.passed)) { apex.event.gCancelEvent = true; }
/// ```
#[wasm_bindgen(js_name = validateWithHost)]
pub fn validate_with_host(host: &JsPageHost, rules: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let rules = parse_rules(rules)?;
    let evaluator = Evaluator::with_config(host, host, parse_config(config)?);
    let verdicts = evaluator.evaluate_all(&rules);
    Ok(serde_wasm_bindgen::to_value(&verdicts)?)
}

/// Result of a snapshot evaluation
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotReport {
    pub verdicts: Vec<Verdict>,
    pub notifications: Vec<Notification>,
    pub cleared_files: Vec<String>,
}

/// Evaluate rules against a serialized page state
///
/// The snapshot has the shape `{ values, checked, files, groups }`. Instead of
/// touching the page, the report lists what would have been displayed and which
/// file inputs should be cleared.
#[wasm_bindgen(js_name = validateSnapshot)]
pub fn validate_snapshot(snapshot: JsValue, rules: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let snapshot: HostSnapshot = serde_wasm_bindgen::from_value(snapshot)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse snapshot: {}", e)))?;
    let rules = parse_rules(rules)?;

    let host = MemoryHost::from_snapshot(snapshot.clone());
    let evaluator = Evaluator::with_config(&host, &host, parse_config(config)?);
    let verdicts = evaluator.evaluate_all(&rules);

    let report = SnapshotReport {
        verdicts,
        notifications: host.take_notifications(),
        cleared_files: host.cleared_files(&snapshot),
    };
    Ok(serde_wasm_bindgen::to_value(&report)?)
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}

/// Quick password strength check
#[wasm_bindgen(js_name = isStrongPassword)]
pub fn is_strong_password_js(password: &str) -> bool {
    core::is_strong_password(password)
}

/// Quick decimal (max 2 places) check
#[wasm_bindgen(js_name = isDecimal)]
pub fn is_decimal_js(value: &str) -> bool {
    core::is_decimal(value)
}

/// Quick length check, returns the error message when out of bounds
#[wasm_bindgen(js_name = validateLength)]
pub fn validate_length_js(value: &str, min: usize, max: usize) -> Option<String> {
    core::validate_length(value, min, max).err()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_email_validation() {
        assert!(is_valid_email_js("user@example.com"));
        assert!(!is_valid_email_js("a@b"));
    }

    #[wasm_bindgen_test]
    fn test_password_validation() {
        assert!(is_strong_password_js("Abcdef1!"));
        assert!(!is_strong_password_js("abcdefgh"));
    }

    #[wasm_bindgen_test]
    fn test_length_validation() {
        assert!(validate_length_js("abcd", 3, 5).is_none());
        assert_eq!(
            validate_length_js("ab", 3, 5).as_deref(),
            Some("Length must be between 3 and 5 characters.")
        );
        assert!(is_decimal_js("1.25"));
    }

    #[wasm_bindgen_test]
    fn test_snapshot_validation() {
        let snapshot = HostSnapshot {
            files: [("P1_DOC".to_string(), r"C:\fakepath\doc.exe".to_string())]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let rules = vec![
            RuleSpec::FileExtension {
                field: "P1_DOC".into(),
                allowed: None,
            },
            RuleSpec::GroupChecked {
                group: "f01".to_string(),
            },
        ];

        let report = validate_snapshot(
            serde_wasm_bindgen::to_value(&snapshot).unwrap(),
            serde_wasm_bindgen::to_value(&rules).unwrap(),
            JsValue::UNDEFINED,
        )
        .unwrap();

        let cleared = js_sys::Reflect::get(&report, &JsValue::from_str("clearedFiles")).unwrap();
        let cleared: Vec<String> = serde_wasm_bindgen::from_value(cleared).unwrap();
        assert_eq!(cleared, vec!["P1_DOC".to_string()]);

        let verdicts = js_sys::Reflect::get(&report, &JsValue::from_str("verdicts")).unwrap();
        let verdicts: Vec<Verdict> = serde_wasm_bindgen::from_value(verdicts).unwrap();
        assert_eq!(verdicts[0], Verdict::fail_inline("P1_DOC".into(), "Invalid file type."));
        assert!(verdicts[1].is_page_level());
    }
}
