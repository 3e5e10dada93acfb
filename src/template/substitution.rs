//! Variable substitution engine for templates

use std::collections::BTreeMap;

/// Substitute `{{variable}}` placeholders in template text.
///
/// Every literal occurrence of `{{key}}` is replaced with the bound value,
/// one binding at a time in sorted key order. Placeholders without a
/// binding are left as-is, and replacement values are not re-scanned for
/// the key being replaced, so no recursive expansion occurs.
pub fn substitute_variables(template: &str, variables: &BTreeMap<String, String>) -> String {
    let mut rendered = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        rendered = rendered.replace(&placeholder, value);
    }

    rendered
}
