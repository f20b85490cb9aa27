use std::collections::{BTreeMap, BTreeSet};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use passmu_generate::transforms::{
    capitalization_forms, insert_symbols_everywhere, leetspeak_variants, random_capitalization,
};

fn set_of(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn leet_map(entries: &[(char, &[&str])]) -> BTreeMap<char, Vec<String>> {
    entries
        .iter()
        .map(|(letter, reps)| (*letter, reps.iter().map(|rep| rep.to_string()).collect()))
        .collect()
}

#[test]
fn capitalization_forms_bounds_and_lengths() {
    for word in ["test", "John Smith", "a", "123", "mIxEdCaSe"] {
        let forms = capitalization_forms(word);
        assert!(!forms.is_empty() && forms.len() <= 4, "forms for {word:?}");
        let expected_len = word.chars().count();
        for form in &forms {
            assert_eq!(form.chars().count(), expected_len, "length of {form:?}");
        }
    }
}

#[test]
fn capitalization_forms_of_two_word_input() {
    let forms = capitalization_forms("john smith");
    assert_eq!(
        forms,
        set_of(&["john smith", "JOHN SMITH", "John smith", "John Smith"])
    );
}

#[test]
fn capitalization_forms_collapse_for_digits() {
    assert_eq!(capitalization_forms("123"), set_of(&["123"]));
}

#[test]
fn insert_symbols_zero_budget_returns_word() {
    let symbols = vec!["!".to_string()];
    assert_eq!(insert_symbols_everywhere("ab", &symbols, 0), set_of(&["ab"]));
}

#[test]
fn insert_symbols_empty_alphabet_returns_word() {
    assert_eq!(insert_symbols_everywhere("ab", &[], 3), set_of(&["ab"]));
}

#[test]
fn insert_symbols_single_budget_covers_every_position() {
    let symbols = vec!["!".to_string()];
    assert_eq!(
        insert_symbols_everywhere("ab", &symbols, 1),
        set_of(&["ab", "!ab", "a!b", "ab!"])
    );
}

#[test]
fn insert_symbols_two_budget_stacks_positions() {
    let symbols = vec!["!".to_string()];
    let results = insert_symbols_everywhere("ab", &symbols, 2);
    // 1 original + 3 single insertions + C(4,2)=6 double insertions.
    assert_eq!(results.len(), 10);
    for doubled in ["!!ab", "!a!b", "!ab!", "a!!b", "a!b!", "ab!!"] {
        assert!(results.contains(doubled), "missing {doubled:?}");
    }
}

#[test]
fn insert_symbols_orders_distinct_symbols_both_ways() {
    let symbols = vec!["!".to_string(), "@".to_string()];
    let results = insert_symbols_everywhere("a", &symbols, 2);
    // Both orderings of a stacked pair are distinct outputs.
    assert!(results.contains("!@a"));
    assert!(results.contains("@!a"));
}

#[test]
fn leetspeak_zero_budget_returns_word() {
    let map = leet_map(&[('a', &["4"])]);
    assert_eq!(leetspeak_variants("sale", &map, 0), set_of(&["sale"]));
}

#[test]
fn leetspeak_single_substitution_set() {
    let map = leet_map(&[('a', &["4"]), ('s', &["$", "5"])]);
    assert_eq!(
        leetspeak_variants("sale", &map, 1),
        set_of(&["sale", "s4le", "$ale", "5ale"])
    );
}

#[test]
fn leetspeak_double_substitution_set() {
    let map = leet_map(&[('a', &["4"]), ('s', &["$", "5"])]);
    assert_eq!(
        leetspeak_variants("sale", &map, 2),
        set_of(&["sale", "s4le", "$ale", "5ale", "$4le", "54le"])
    );
}

#[test]
fn leetspeak_discards_case_at_substituted_positions() {
    let map = leet_map(&[('a', &["4"])]);
    let variants = leetspeak_variants("SALE", &map, 1);
    assert!(variants.contains("S4LE"));
    assert!(variants.contains("SALE"));
    assert_eq!(variants.len(), 2);
}

#[test]
fn leetspeak_budget_above_positions_is_harmless() {
    let map = leet_map(&[('a', &["4"])]);
    assert_eq!(
        leetspeak_variants("ab", &map, 5),
        set_of(&["ab", "4b"])
    );
}

#[test]
fn random_capitalization_is_deterministic_per_seed() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(42);
    let mut rng_b = ChaCha8Rng::seed_from_u64(42);
    let a = random_capitalization("password123", &mut rng_a);
    let b = random_capitalization("password123", &mut rng_b);
    assert_eq!(a, b);
}

#[test]
fn random_capitalization_preserves_content() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for word in ["password", "p@ss w0rd", ""] {
        let drawn = random_capitalization(word, &mut rng);
        assert_eq!(drawn.to_lowercase(), word.to_lowercase());
        assert_eq!(drawn.chars().count(), word.chars().count());
    }
}

#[test]
fn random_capitalization_passes_non_alphabetics_through() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let drawn = random_capitalization("1234-!@", &mut rng);
    assert_eq!(drawn, "1234-!@");
}
