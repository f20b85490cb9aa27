//! Turns one raw input into the list of base words submitted to workers.

use passmu_core::MutationConfig;

/// Expand a raw input (single word or "First Last" pair) into base words.
///
/// A two-token input produces the five canonical joins; anything else
/// passes through trimmed. Year suffixing extends the list (never
/// replaces it) and skips bases that already contain one of the filtered
/// years. Keyboard-walk literals ride along as independent bases. The
/// returned order is what the scheduler dispatches in, which pins down
/// file-part boundaries across identical runs.
pub fn expand_base_word(input: &str, config: &MutationConfig) -> Vec<String> {
    let trimmed = input.trim();
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    let mut bases = if let [first, last] = tokens.as_slice() {
        vec![
            format!("{first}{last}"),
            format!("{first}_{last}"),
            format!("{first}.{last}"),
            format!("{first}-{last}"),
            format!("{last}{first}"),
        ]
    } else {
        vec![trimmed.to_string()]
    };

    if config.use_years {
        let years: Vec<&str> = config
            .years
            .iter()
            .filter(|year| {
                (config.use_long_years && year.len() == 4)
                    || (config.use_short_years && year.len() == 2)
            })
            .map(String::as_str)
            .collect();

        let snapshot = bases.clone();
        for base in &snapshot {
            if years.iter().any(|year| base.contains(year)) {
                continue;
            }
            for year in &years {
                bases.push(format!("{base}{year}"));
            }
        }
    }

    if config.use_keyboard_walks {
        bases.extend(config.keyboard_walks.iter().cloned());
    }

    bases
}
