use onto2bsdd_core::IdentifierStrategy;
use onto2bsdd_core::identifier::{code_from_name, is_code_char, link_code, local_name};
use proptest::prelude::*;

/// Strings built only from characters a code may contain.
fn code_chars() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_.\\-\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{24F}]{0,32}"
}

proptest! {
    #[test]
    fn code_from_name_output_is_legal_for_any_string(name in any::<String>()) {
        let code = code_from_name(&name);
        prop_assert!(code.chars().all(is_code_char), "illegal code {:?}", code);
        prop_assert!(code.chars().count() <= name.chars().count());
    }

    #[test]
    fn code_from_name_keeps_names_that_are_already_codes(name in code_chars()) {
        prop_assert_eq!(code_from_name(&name), name);
    }

    #[test]
    fn whitespace_becomes_underscore(left in code_chars(), right in code_chars()) {
        let code = code_from_name(&format!("{left} \t{right}"));
        prop_assert_eq!(code, format!("{left}__{right}"));
    }

    #[test]
    fn local_name_never_spans_a_separator(uri in "\\PC*") {
        if let Some(name) = local_name(&uri) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('#'));
            if !uri.contains('#') {
                prop_assert!(!name.contains('/'));
            }
        }
    }

    #[test]
    fn uri_strategy_mints_for_every_present_uri(uri in "\\PC*") {
        let strategy = IdentifierStrategy::UriLocalName;
        let code = strategy.mint(Some(&uri), None);
        prop_assert!(code.is_ok(), "mint failed for {:?}", uri);
        let code = code.unwrap_or_default();
        prop_assert!(code.chars().all(is_code_char));
        prop_assert_eq!(strategy.mint_reference(Some(&uri), None), Some(code));
    }

    #[test]
    fn label_strategy_mints_for_every_present_label(label in any::<String>()) {
        let strategy = IdentifierStrategy::Label;
        let code = strategy.mint(None, Some(&label));
        prop_assert_eq!(code.ok(), Some(code_from_name(&label)));
    }

    #[test]
    fn link_code_is_uuid_shaped(class in code_chars(), property in code_chars()) {
        let code = link_code(&class, &property);
        let groups = code.split('-').map(str::len).collect::<Vec<_>>();
        prop_assert_eq!(groups, vec![8, 4, 4, 4, 12]);
        prop_assert!(code.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
        prop_assert_eq!(code.clone(), link_code(&class, &property));
    }
}
