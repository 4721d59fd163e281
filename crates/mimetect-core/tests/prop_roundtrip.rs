//! Property tests for content-type name parsing.

use mimetect_core::{MimeError, MimeType};
use proptest::prelude::*;

/// One half of a content-type name: printable, no reserved specials, no
/// control characters, no whitespace.
fn part() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9][a-zA-Z0-9!#$%&'*+.^_`|~-]{0,15}")
        .expect("valid regex")
}

proptest! {
    #[test]
    fn prop_valid_names_round_trip(primary in part(), sub in part()) {
        let name = format!("{primary}/{sub}");
        let mime_type = MimeType::new(&name).unwrap();
        prop_assert_eq!(mime_type.name(), name.as_str());
        prop_assert_eq!(mime_type.primary_type(), primary.as_str());
        prop_assert_eq!(mime_type.sub_type(), sub.as_str());
        prop_assert_eq!(MimeType::clean(&name).unwrap(), name);
    }

    #[test]
    fn prop_parameters_never_survive_canonicalization(
        primary in part(),
        sub in part(),
        params in "[a-z=; -]{0,12}",
    ) {
        let name = format!("{primary}/{sub};{params}");
        let mime_type = MimeType::new(&name).unwrap();
        let expected = format!("{primary}/{sub}");
        prop_assert_eq!(mime_type.name(), expected.as_str());
    }

    #[test]
    fn prop_specials_in_primary_are_rejected(
        primary in part(),
        sub in part(),
        special in proptest::sample::select(
            "()<>@,;:\\\"/[]?=".chars().collect::<Vec<_>>()
        ),
        split in 0usize..16,
    ) {
        let split = split.min(primary.len());
        let tainted = format!("{}{special}{}", &primary[..split], &primary[split..]);
        let err = MimeType::from_parts(&tainted, &sub).unwrap_err();
        let malformed = matches!(err, MimeError::MalformedType { .. });
        prop_assert!(malformed, "unexpected error: {err}");
    }

    #[test]
    fn prop_equality_follows_name(a in part(), b in part(), sub in part()) {
        let left = MimeType::from_parts(&a, &sub).unwrap();
        let right = MimeType::from_parts(&b, &sub).unwrap();
        prop_assert_eq!(left == right, a == b);
    }
}
