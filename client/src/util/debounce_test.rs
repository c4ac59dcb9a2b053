use super::*;

#[test]
fn bump_supersedes_older_tokens() {
    let mut d = Debounce::default();
    let first = d.bump();
    let second = d.bump();
    assert!(!d.is_current(first));
    assert!(d.is_current(second));
}

#[test]
fn fresh_debounce_has_no_current_token() {
    let d = Debounce::default();
    assert!(!d.is_current(1));
}
