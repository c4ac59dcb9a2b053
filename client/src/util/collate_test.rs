use super::*;

#[test]
fn swedish_letters_sort_after_z() {
    let mut words = vec!["Ölberg", "apa", "Åsa", "zebra", "Äpple", "Bertil"];
    words.sort_by(|a, b| swedish_cmp(a, b));
    assert_eq!(words, vec!["apa", "Bertil", "zebra", "Åsa", "Äpple", "Ölberg"]);
}

#[test]
fn case_and_accents_are_ignored() {
    assert_eq!(swedish_cmp("Café", "cafe"), Ordering::Equal);
    assert_eq!(swedish_cmp("VÄGG", "vägg"), Ordering::Equal);
}

#[test]
fn nordic_variants_fold_to_swedish_letters() {
    assert_eq!(swedish_cmp("æble", "äble"), Ordering::Equal);
    assert_eq!(swedish_cmp("Søren", "Sören"), Ordering::Equal);
    assert_eq!(swedish_cmp("Müller", "Myller"), Ordering::Equal);
}

#[test]
fn prefix_sorts_first() {
    assert_eq!(swedish_cmp("Dörr", "Dörrblad"), Ordering::Less);
}
