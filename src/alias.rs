//! Alias declaration lines: `<TypeName> = <annotation>`.
//!
//! Mappings may nest other mappings (directly, or as the first element of
//! a nested sequence). Those inner records are anonymous in the source, so
//! each one is hoisted into its own declaration line named after the field
//! key that holds it, ordered so every declaration textually precedes the
//! declarations that reference it.

use indexmap::IndexMap;

use crate::annotate::{dict_annotation, sequence_annotation};
use crate::name::type_name;
use crate::sample::Sample;

/// Alias line for a sequence sample.
///
/// `item_hint` names the element record when the sequence holds anonymous
/// mappings; the caller emits that record's own declaration.
///
/// ```text
/// user = [{"name": "hoge"}] -> TypeUser = List[TypeName]
///   via sequence_alias(user, "user", "name")
/// ```
pub fn sequence_alias(source: &Sample, sequence_name: &str, item_hint: &str) -> String {
    format!(
        "{} = {}\n",
        type_name(sequence_name),
        sequence_annotation(source, item_hint)
    )
}

/// Alias text for a mapping: hoisted inner declarations first, the
/// mapping's own declaration last.
pub fn dict_alias(source: &IndexMap<String, Sample>, dict_name: &str) -> String {
    let current = format!(
        "{} = {}\n",
        type_name(dict_name),
        dict_annotation(source, dict_name)
    );

    let inner = inner_dicts(source);
    if inner.is_empty() {
        return current;
    }

    let mut lines = inner
        .iter()
        .map(|(key, dict)| format!("{} = {}", type_name(key), dict_annotation(dict, key)))
        .collect::<Vec<_>>();
    lines.push(current);
    lines.join("\n")
}

/// Collect every nested mapping together with the field key that names it.
///
/// Depth-first, ordered so a mapping's whole subtree lands before the
/// mapping itself; a referenced declaration therefore always precedes its
/// reference when emitted front to back.
fn inner_dicts<'a>(
    source: &'a IndexMap<String, Sample>,
) -> Vec<(&'a str, &'a IndexMap<String, Sample>)> {
    let mut collected: Vec<(&str, &IndexMap<String, Sample>)> = Vec::new();

    for (key, value) in source {
        let nested = match value {
            Sample::Dict(dict) => Some(dict),
            Sample::List(items) | Sample::Tuple(items) => match items.first() {
                Some(Sample::Dict(dict)) => Some(dict),
                _ => None,
            },
            _ => None,
        };

        if let Some(dict) = nested {
            let mut subtree = inner_dicts(dict);
            subtree.push((key.as_str(), dict));
            subtree.extend(collected);
            collected = subtree;
        }
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_list_alias() {
        let source = Sample::list(["apple".into(), "banana".into()]);
        assert_eq!(
            sequence_alias(&source, "fruits", ""),
            "TypeFruits = List[str]\n"
        );
    }

    #[test]
    fn simple_tuple_alias() {
        let source = Sample::tuple(["apple".into(), "banana".into()]);
        assert_eq!(
            sequence_alias(&source, "fruits", ""),
            "TypeFruits = Tuple[str, str]\n"
        );
    }

    #[test]
    fn flat_dict_alias_is_a_single_line() {
        let source = Sample::dict([("username", "pompom".into())]);
        assert_eq!(
            dict_alias(source.as_dict().unwrap(), "user"),
            "TypeUser = TypedDict(\"TypeUser\", { \"username\": str })\n"
        );
    }

    #[test]
    fn nested_dict_is_hoisted_before_its_reference() {
        let source = Sample::dict([
            (
                "body",
                Sample::dict([("message", "success".into()), ("status_code", 200.into())]),
            ),
            ("has_error", false.into()),
        ]);
        let expected = concat!(
            "TypeBody = TypedDict(\"TypeBody\", { \"message\": str, \"status_code\": int })\n",
            "TypeResponse = TypedDict(\"TypeResponse\", { \"body\": TypeBody, \"has_error\": bool })\n",
        );
        assert_eq!(dict_alias(source.as_dict().unwrap(), "response"), expected);
    }

    #[test]
    fn deepest_declarations_come_first() {
        let source = Sample::dict([
            (
                "dog",
                Sample::dict([("owner", Sample::dict([("name", "x".into())]))]),
            ),
            ("cat", Sample::dict([("name", "y".into())])),
        ]);
        let text = dict_alias(source.as_dict().unwrap(), "pets");
        let owner = text.find("TypeOwner =").unwrap();
        let dog = text.find("TypeDog =").unwrap();
        let pets = text.find("TypePets =").unwrap();
        assert!(owner < dog && dog < pets);
    }

    #[test]
    fn sequence_of_dicts_inside_a_dict_is_hoisted_too() {
        let source = Sample::dict([(
            "characters",
            Sample::list([
                Sample::dict([("name", "purin".into()), ("has_twitter_acount", false.into())]),
                Sample::dict([("name", "kitty".into()), ("has_twitter_acount", true.into())]),
            ]),
        )]);
        let expected = concat!(
            "TypeCharacters = TypedDict(\"TypeCharacters\", ",
            "{ \"name\": str, \"has_twitter_acount\": bool })\n",
            "TypeCharactersDict = TypedDict(\"TypeCharactersDict\", ",
            "{ \"characters\": List[TypeCharacters] })\n",
        );
        assert_eq!(
            dict_alias(source.as_dict().unwrap(), "characters_dict"),
            expected
        );
    }

    #[test]
    fn tuple_of_dicts_gets_one_reference_per_slot() {
        let source = Sample::dict([(
            "characters",
            Sample::tuple([
                Sample::dict([("name", "purin".into())]),
                Sample::dict([("name", "kitty".into())]),
            ]),
        )]);
        let text = dict_alias(source.as_dict().unwrap(), "characters_dict");
        assert!(text.contains("\"characters\": Tuple[TypeCharacters, TypeCharacters]"));
    }
}
