//! Type annotation text from sample values.
//!
//! Annotations are the right-hand side of a declaration: a primitive type
//! keyword, `List[...]`, `Tuple[...]`, or a `TypedDict(...)` record
//! constructor. Containers recurse; mappings are referenced by a name
//! derived from the surrounding context (field key or caller-supplied
//! hint) because the mapping's own declaration is hoisted separately by
//! the alias builder.

use indexmap::IndexMap;

use crate::name::type_name;
use crate::sample::Sample;

/// Type keyword for a scalar sample.
///
/// Booleans are their own kind; they must never degrade to `int`.
fn scalar_annotation(value: &Sample) -> &'static str {
    match value {
        Sample::None => "None",
        Sample::Bool(_) => "bool",
        Sample::Int(_) => "int",
        Sample::Float(_) => "float",
        Sample::Str(_) => "str",
        // containers are routed to their own builders before this point
        Sample::List(_) | Sample::Tuple(_) | Sample::Dict(_) => "Any",
    }
}

/// Annotation for one sequence slot.
///
/// A mapping element is referenced by the hint name (its declaration is
/// emitted by the caller); a nested sequence recurses with the same hint.
fn slot_annotation(element: Option<&Sample>, item_hint: &str) -> String {
    match element {
        None => "Any".to_string(),
        Some(Sample::Dict(_)) => type_name(item_hint),
        Some(inner @ (Sample::List(_) | Sample::Tuple(_))) => {
            sequence_annotation(inner, item_hint)
        }
        Some(scalar) => scalar_annotation(scalar).to_string(),
    }
}

/// `List[...]` / `Tuple[...]` annotation for a sequence sample.
///
/// Lists are typed from their first element only; heterogeneous lists are
/// out of contract. Tuples are fixed-arity, one slot per element, each
/// slot typed independently from its own element. Empty sequences get a
/// single `Any` slot.
///
/// ```text
/// [1, 2, 3] -> List[int]
/// ("pom", "kit") -> Tuple[str, str]
/// ```
pub fn sequence_annotation(source: &Sample, item_hint: &str) -> String {
    match source {
        Sample::List(items) => {
            format!("List[{}]", slot_annotation(items.first(), item_hint))
        }
        Sample::Tuple(items) if items.is_empty() => {
            format!("Tuple[{}]", slot_annotation(None, item_hint))
        }
        Sample::Tuple(items) => {
            let slots = items
                .iter()
                .map(|element| slot_annotation(Some(element), item_hint))
                .collect::<Vec<_>>();
            format!("Tuple[{}]", slots.join(", "))
        }
        other => slot_annotation(Some(other), item_hint),
    }
}

/// `TypedDict("TypeName", { ... })` record constructor for a mapping.
///
/// Fields appear in the mapping's insertion order. Nested mappings are
/// referenced by a name derived from their field key; sequences use the
/// field key as their element hint.
pub fn dict_annotation(source: &IndexMap<String, Sample>, name_hint: &str) -> String {
    let fields = source
        .iter()
        .map(|(key, value)| match value {
            Sample::Dict(_) => format!("\"{key}\": {}", type_name(key)),
            Sample::List(_) | Sample::Tuple(_) => {
                format!("\"{key}\": {}", sequence_annotation(value, key))
            }
            scalar => format!("\"{key}\": {}", scalar_annotation(scalar)),
        })
        .collect::<Vec<_>>();
    format!(
        "TypedDict(\"{}\", {{ {} }})",
        type_name(name_hint),
        fields.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_list_of_any() {
        assert_eq!(sequence_annotation(&Sample::list([]), ""), "List[Any]");
    }

    #[test]
    fn primitive_list() {
        let source = Sample::list(["apple".into(), "banana".into()]);
        assert_eq!(sequence_annotation(&source, ""), "List[str]");
    }

    #[test]
    fn dict_list_references_the_hint_name() {
        let source = Sample::list([Sample::dict([("name", "hoge".into())])]);
        assert_eq!(sequence_annotation(&source, "user"), "List[TypeUser]");
    }

    #[test]
    fn nested_list_recurses() {
        let source = Sample::list([Sample::list(["Hiroshima-1-1".into()])]);
        assert_eq!(sequence_annotation(&source, ""), "List[List[str]]");
    }

    #[test]
    fn empty_tuple_is_a_single_any_slot() {
        assert_eq!(sequence_annotation(&Sample::tuple([]), ""), "Tuple[Any]");
    }

    #[test]
    fn tuple_gets_one_slot_per_element() {
        let source = Sample::tuple(["000-0000".into(), "123-4567".into()]);
        assert_eq!(sequence_annotation(&source, ""), "Tuple[str, str]");

        let mixed = Sample::tuple(["pom".into(), 100.into(), Sample::Bool(false)]);
        assert_eq!(sequence_annotation(&mixed, ""), "Tuple[str, int, bool]");
    }

    #[test]
    fn booleans_never_degrade_to_int() {
        let source = Sample::list([Sample::Bool(true)]);
        assert_eq!(sequence_annotation(&source, ""), "List[bool]");
    }

    #[test]
    fn simple_dict() {
        let source = Sample::dict([("username", "pompom".into())]);
        assert_eq!(
            dict_annotation(source.as_dict().unwrap(), "user"),
            "TypedDict(\"TypeUser\", { \"username\": str })"
        );
    }

    #[test]
    fn nested_dict_field_references_a_derived_name() {
        let source = Sample::dict([
            ("body", Sample::dict([("message", "success".into())])),
            ("has_error", false.into()),
        ]);
        assert_eq!(
            dict_annotation(source.as_dict().unwrap(), "response"),
            "TypedDict(\"TypeResponse\", { \"body\": TypeBody, \"has_error\": bool })"
        );
    }

    #[test]
    fn snake_case_keys_pascalize_in_references_only() {
        let source = Sample::dict([("user_address", Sample::dict([("city", "Tokyo".into())]))]);
        assert_eq!(
            dict_annotation(source.as_dict().unwrap(), "user"),
            "TypedDict(\"TypeUser\", { \"user_address\": TypeUserAddress })"
        );
    }

    #[test]
    fn field_order_matches_insertion_order() {
        let source = Sample::dict([
            ("b", 1.into()),
            ("a", 2.into()),
            ("c", 3.into()),
        ]);
        assert_eq!(
            dict_annotation(source.as_dict().unwrap(), "x"),
            "TypedDict(\"TypeX\", { \"b\": int, \"a\": int, \"c\": int })"
        );
    }

    #[test]
    fn empty_dict() {
        assert_eq!(
            dict_annotation(Sample::dict::<&str, _>([]).as_dict().unwrap(), "OPTIONS"),
            "TypedDict(\"TypeOPTIONS\", {  })"
        );
    }

    #[test]
    fn none_valued_field() {
        let source = Sample::dict([("TIME_ZONE", Sample::None)]);
        assert_eq!(
            dict_annotation(source.as_dict().unwrap(), "default"),
            "TypedDict(\"TypeDefault\", { \"TIME_ZONE\": None })"
        );
    }
}
