//! Pure string transformations over one input word.
//!
//! Every function here is stateless: randomness comes in through an
//! injected [`Rng`] so callers (and tests) control the source.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

/// The four common capitalization styles of a word.
///
/// Styles that coincide (single-letter words, digit-only words) collapse
/// through set insertion, so the result holds between one and four forms.
pub fn capitalization_forms(word: &str) -> BTreeSet<String> {
    let mut forms = BTreeSet::new();
    forms.insert(word.to_lowercase());
    forms.insert(word.to_uppercase());
    forms.insert(capitalize_first(word));
    forms.insert(capitalize_words(word));
    forms
}

/// One randomly capitalized rendering of `word`.
///
/// Each character independently goes upper or lower with probability 0.5;
/// the draw happens for every character, non-alphabetics just pass
/// through it unchanged.
pub fn random_capitalization(word: &str, rng: &mut impl Rng) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        if rng.random_bool(0.5) {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// The original word plus every insertion of 1..=`max_symbols` symbols.
///
/// Symbols are drawn with repetition (order matters) and land on any
/// non-decreasing multiset of positions over 0..=len, so multiple symbols
/// may stack at the same spot. An empty alphabet yields only the word
/// itself. Growth is `len(symbols)^n * C(len+n, n)` per insertion count
/// `n`; callers bound `max_symbols` and the alphabet to keep this
/// tractable.
pub fn insert_symbols_everywhere(
    word: &str,
    symbols: &[String],
    max_symbols: usize,
) -> BTreeSet<String> {
    let mut results = BTreeSet::new();
    results.insert(word.to_string());
    if symbols.is_empty() {
        return results;
    }

    let chars: Vec<char> = word.chars().collect();
    for count in 1..=max_symbols {
        let position_sets = position_multisets(chars.len(), count);
        let slots: Vec<&[String]> = vec![symbols; count];
        for sequence in choice_products(&slots) {
            for positions in &position_sets {
                results.insert(splice_symbols(&chars, positions, &sequence));
            }
        }
    }
    results
}

/// The original word plus every leetspeak variant with 1..=`max_subs`
/// simultaneous substitutions.
///
/// Substitutable positions are those whose lowercase form keys into
/// `leet_map`; the original character's case is discarded wherever a
/// replacement lands.
pub fn leetspeak_variants(
    word: &str,
    leet_map: &BTreeMap<char, Vec<String>>,
    max_subs: usize,
) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    variants.insert(word.to_string());

    let chars: Vec<char> = word.chars().collect();
    let substitutable: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| leet_map.contains_key(&lowercase_key(**c)))
        .map(|(index, _)| index)
        .collect();

    for subs in 1..=max_subs {
        for combo in index_combinations(&substitutable, subs) {
            let slots: Vec<&[String]> = combo
                .iter()
                .map(|index| {
                    leet_map
                        .get(&lowercase_key(chars[*index]))
                        .map(Vec::as_slice)
                        .unwrap_or_default()
                })
                .collect();
            for replacements in choice_products(&slots) {
                variants.insert(apply_substitutions(&chars, &combo, &replacements));
            }
        }
    }
    variants
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
    }
}

/// Uppercase the first letter of each whitespace-separated token,
/// lowercasing the rest. Whitespace is preserved as-is.
fn capitalize_words(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut at_boundary = true;
    for c in word.chars() {
        if c.is_whitespace() {
            at_boundary = true;
            out.push(c);
        } else if at_boundary {
            out.extend(c.to_uppercase());
            at_boundary = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

fn lowercase_key(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Rebuild the word with `sequence[i]` inserted at char position
/// `positions[i]`. Positions are non-decreasing; symbols stacking on one
/// position keep their sequence order.
fn splice_symbols(chars: &[char], positions: &[usize], sequence: &[&str]) -> String {
    let mut out = String::new();
    let mut cursor = 0;
    for (position, symbol) in positions.iter().zip(sequence) {
        out.extend(&chars[cursor..*position]);
        out.push_str(symbol);
        cursor = *position;
    }
    out.extend(&chars[cursor..]);
    out
}

fn apply_substitutions(chars: &[char], combo: &[usize], replacements: &[&str]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut next = 0;
    for (index, c) in chars.iter().enumerate() {
        if next < combo.len() && combo[next] == index {
            out.push_str(replacements[next]);
            next += 1;
        } else {
            out.push(*c);
        }
    }
    out
}

/// Every way to pick one entry from each slot, in slot order.
fn choice_products<'a>(slots: &[&'a [String]]) -> Vec<Vec<&'a str>> {
    let mut products: Vec<Vec<&str>> = vec![Vec::new()];
    for slot in slots {
        let mut grown = Vec::with_capacity(products.len() * slot.len());
        for product in &products {
            for choice in *slot {
                let mut next = product.clone();
                next.push(choice.as_str());
                grown.push(next);
            }
        }
        products = grown;
    }
    products
}

/// Non-decreasing multisets of `count` insertion positions over
/// 0..=`word_len`.
fn position_multisets(word_len: usize, count: usize) -> Vec<Vec<usize>> {
    let mut sets = Vec::new();
    let mut current = Vec::with_capacity(count);
    fill_positions(word_len, count, 0, &mut current, &mut sets);
    sets
}

fn fill_positions(
    word_len: usize,
    remaining: usize,
    start: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }
    for position in start..=word_len {
        current.push(position);
        fill_positions(word_len, remaining - 1, position, current, out);
        current.pop();
    }
}

/// All `size`-element subsets of `indexes`, preserving order.
fn index_combinations(indexes: &[usize], size: usize) -> Vec<Vec<usize>> {
    let mut combos = Vec::new();
    if size > indexes.len() {
        return combos;
    }
    let mut current = Vec::with_capacity(size);
    fill_combinations(indexes, size, 0, &mut current, &mut combos);
    combos
}

fn fill_combinations(
    indexes: &[usize],
    remaining: usize,
    start: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }
    for offset in start..=indexes.len().saturating_sub(remaining) {
        current.push(indexes[offset]);
        fill_combinations(indexes, remaining - 1, offset + 1, current, out);
        current.pop();
    }
}
