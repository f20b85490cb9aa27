//! Builds the full variant set for one base word.

use std::collections::BTreeSet;

use passmu_core::MutationConfig;
use rand::Rng;

use crate::transforms::{
    capitalization_forms, insert_symbols_everywhere, leetspeak_variants, random_capitalization,
};

/// Expand one base word into its filtered variant set.
///
/// Capitalization forms are mutated with symbol insertion first; random
/// casing and leetspeak then fan out from those mutants. Random-caps draws
/// land in the set as-is; colliding draws collapse through ordinary set
/// insertion. The final set keeps only candidates inside the configured
/// length bounds.
pub fn compose_variants(
    base_word: &str,
    config: &MutationConfig,
    rng: &mut impl Rng,
) -> BTreeSet<String> {
    let alphabet: &[String] = if config.use_symbols { &config.symbols } else { &[] };

    let mut mutants = BTreeSet::new();
    for form in capitalization_forms(base_word) {
        mutants.extend(insert_symbols_everywhere(&form, alphabet, config.max_symbols));
    }

    let mut variants = mutants.clone();

    if config.random_caps_per_variant > 0 {
        for mutant in &mutants {
            for _ in 0..config.random_caps_per_variant {
                variants.insert(random_capitalization(mutant, rng));
            }
        }
    }

    if config.use_leetspeak {
        for mutant in &mutants {
            variants.extend(leetspeak_variants(
                mutant,
                &config.real_world_leet,
                config.max_leet_substitutions,
            ));
        }
    }

    variants.retain(|candidate| within_length(candidate, config));
    variants
}

fn within_length(candidate: &str, config: &MutationConfig) -> bool {
    let length = candidate.chars().count();
    length >= config.min_password_length
        && config.max_password_length.is_none_or(|max| length <= max)
}
