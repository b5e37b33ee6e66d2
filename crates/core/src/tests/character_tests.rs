use super::*;

#[test]
fn accepts_plain_identifiers() {
    assert!(is_valid_var_name("a1_b"));
    assert!(is_valid_var_name("_private"));
    assert!(is_valid_var_name("Mary"));
}

#[test]
fn rejects_digit_first_empty_and_non_ascii() {
    assert!(!is_valid_var_name("1abc"));
    assert!(!is_valid_var_name(""));
    assert!(!is_valid_var_name("名前"));
    assert!(!is_valid_var_name("with space"));
    assert!(!is_valid_var_name("dash-ed"));
}

#[test]
fn add_defaults_display_name_to_var_name() {
    let mut registry = CharacterRegistry::new();
    let added = registry.add("m", "   ").expect("add");
    assert_eq!(added.display_name, "m");
    assert_eq!(registry.display_for("m"), Some("m"));
}

#[test]
fn add_trims_inputs() {
    let mut registry = CharacterRegistry::new();
    let added = registry.add("  m  ", "  Mary  ").expect("add");
    assert_eq!(added.var_name, "m");
    assert_eq!(added.display_name, "Mary");
}

#[test]
fn add_rejects_duplicates() {
    let mut registry = CharacterRegistry::new();
    registry.add("m", "Mary").expect("first add");
    let err = registry.add("m", "Molly").expect_err("duplicate");
    assert!(matches!(err, RenError::DuplicateIdentifier(name) if name == "m"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn add_rejects_invalid_pattern() {
    let mut registry = CharacterRegistry::new();
    let err = registry.add("1abc", "One").expect_err("digit-first");
    assert!(matches!(err, RenError::InvalidIdentifier(_)));
    let err = registry.add("", "Empty").expect_err("empty");
    assert!(matches!(err, RenError::EmptyField(_)));
    assert!(registry.is_empty());
}

#[test]
fn remove_is_positional_and_bounded() {
    let mut registry = CharacterRegistry::new();
    registry.add("a", "").expect("add a");
    registry.add("b", "").expect("add b");

    assert!(registry.remove(5).is_none());
    let removed = registry.remove(0).expect("remove first");
    assert_eq!(removed.var_name, "a");
    assert_eq!(registry.len(), 1);
    assert!(registry.contains("b"));
}

#[test]
fn replace_all_is_wholesale_and_unchecked() {
    let mut registry = CharacterRegistry::new();
    registry.add("old", "Old").expect("add");

    // Imports are taken as-is, duplicates included.
    registry.replace_all(vec![
        Character::new("x", "X"),
        Character::new("x", "Also X"),
    ]);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.display_for("x"), Some("X"));
    assert!(!registry.contains("old"));
}
