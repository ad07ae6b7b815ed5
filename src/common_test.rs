use crate::common::{capwords, is_supported_tag, SUPPORTED_TAGS};

#[test]
fn test_capwords() {
    assert_eq!(capwords("bob marley"), "Bob Marley");
    assert_eq!(capwords("EXODUS"), "Exodus");
    assert_eq!(capwords("One love"), "One Love");
    assert_eq!(capwords("  spaced   out  "), "Spaced Out");
    assert_eq!(capwords(""), "");
}

#[test]
fn test_supported_tags() {
    for tag in SUPPORTED_TAGS {
        assert!(is_supported_tag(tag));
    }
    assert!(!is_supported_tag("foo"));
    assert!(!is_supported_tag("Artist"));
}
