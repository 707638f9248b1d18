//! Type-name derivation: arbitrary delimited identifiers → PascalCase.

use std::collections::BTreeSet;

/// Every generated alias name carries this prefix so generated declarations
/// never collide with the source module's own names.
pub const TYPE_NAME_PREFIX: &str = "Type";

/// Derive a PascalCase alias name from a source expression.
///
/// The delimiter set is whatever non-alphanumeric characters appear in the
/// input, so `user_defined_name` and `user.address.city` both work without
/// configuration. Digits have no case and pass through unchanged.
///
/// ```text
/// some_expression -> TypeSomeExpression
/// ```
pub fn type_name(raw: &str) -> String {
    let delimiters: BTreeSet<char> = raw.chars().filter(|c| !c.is_alphanumeric()).collect();

    let mut out = String::from(TYPE_NAME_PREFIX);
    let components = raw
        .split(|c: char| delimiters.contains(&c))
        .filter(|component| !component.is_empty());
    for component in components {
        let mut chars = component.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
