//! Random string synthesizer for passwords and email local parts.
//!
//! Characters come from a base alphabet of lowercase letters extended with the
//! enabled classes. Each enabled class also gets one character placed at a
//! fixed position:
//!
//! - special character: inserted at the front when the cursor reaches `length - 3`
//! - uppercase letter: inserted at `length / 2` when the cursor reaches `length / 2`
//! - digit: inserted at `length - 1` when the cursor reaches `length - 1`
//!
//! The cursor is the current output length. When no placement fires, one
//! character from the base alphabet is appended.

use crate::random::RandomSource;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"$#&*{}[],=-().+;/!%^?><:~`|";

/// Optional character classes on top of lowercase letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses {
    pub uppercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl CharClasses {
    /// Lowercase letters only.
    pub const LOWERCASE_ONLY: CharClasses = CharClasses {
        uppercase: false,
        digits: false,
        special: false,
    };

    /// Every class enabled.
    pub const ALL: CharClasses = CharClasses {
        uppercase: true,
        digits: true,
        special: true,
    };

    pub fn new(uppercase: bool, digits: bool, special: bool) -> Self {
        Self {
            uppercase,
            digits,
            special,
        }
    }

    /// Combined base alphabet: lowercase, then upper, digits, special as enabled.
    pub fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = LOWERCASE.to_vec();
        if self.uppercase {
            alphabet.extend_from_slice(UPPERCASE);
        }
        if self.digits {
            alphabet.extend_from_slice(DIGITS);
        }
        if self.special {
            alphabet.extend_from_slice(SPECIAL);
        }
        alphabet
    }
}

fn pick<R: RandomSource + ?Sized>(random: &mut R, alphabet: &[u8]) -> char {
    alphabet[random.next_index(alphabet.len())] as char
}

/// Build a random string of exactly `length` characters.
///
/// For `length >= 3` the result contains at least one character of every
/// enabled class. Shorter strings keep only the placements that fit, in the
/// order special, uppercase, digit.
pub fn synthesize<R: RandomSource + ?Sized>(
    random: &mut R,
    length: usize,
    classes: CharClasses,
) -> String {
    let alphabet = classes.alphabet();
    let mut out = String::with_capacity(length);

    while out.len() < length {
        let cursor = out.len();
        let mut placed = false;

        if classes.special && length >= 3 && cursor == length - 3 {
            out.insert(0, pick(random, SPECIAL));
            placed = true;
        }

        if classes.uppercase && cursor == length / 2 && out.len() < length {
            let at = (length / 2).min(out.len());
            out.insert(at, pick(random, UPPERCASE));
            placed = true;
        }

        if classes.digits && cursor == length - 1 && out.len() < length {
            let at = (length - 1).min(out.len());
            out.insert(at, pick(random, DIGITS));
            placed = true;
        }

        if !placed {
            out.push(pick(random, &alphabet));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::testing::ScriptedSource;
    use crate::random::RandomService;

    fn all_flag_combinations() -> Vec<CharClasses> {
        let mut combos = Vec::new();
        for uppercase in [false, true] {
            for digits in [false, true] {
                for special in [false, true] {
                    combos.push(CharClasses::new(uppercase, digits, special));
                }
            }
        }
        combos
    }

    fn contains_any(s: &str, alphabet: &[u8]) -> bool {
        s.bytes().any(|b| alphabet.contains(&b))
    }

    #[test]
    fn test_exact_length_and_classes_present() {
        let mut random = RandomService::seeded(42);

        for classes in all_flag_combinations() {
            for length in 3..=64 {
                let s = synthesize(&mut random, length, classes);
                assert_eq!(s.len(), length, "length {length} with {classes:?}");
                assert_eq!(s.chars().count(), length);

                if classes.uppercase {
                    assert!(contains_any(&s, UPPERCASE), "{s} missing uppercase");
                }
                if classes.digits {
                    assert!(contains_any(&s, DIGITS), "{s} missing digit");
                }
                if classes.special {
                    assert!(contains_any(&s, SPECIAL), "{s} missing special");
                }

                let alphabet = classes.alphabet();
                assert!(s.bytes().all(|b| alphabet.contains(&b)));
            }
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        let mut random = RandomService::seeded(42);
        for classes in all_flag_combinations() {
            assert_eq!(synthesize(&mut random, 0, classes), "");
        }
    }

    #[test]
    fn test_lowercase_only() {
        let mut random = RandomService::seeded(1);
        let s = synthesize(&mut random, 9, CharClasses::LOWERCASE_ONLY);
        assert_eq!(s.len(), 9);
        assert!(s.bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn test_length_three_layout() {
        // cursor 0: special to front, cursor 1: uppercase at 1, cursor 2: digit at 2
        let mut random = ScriptedSource::new([0, 0, 0]);
        let s = synthesize(&mut random, 3, CharClasses::ALL);
        assert_eq!(s, "$A0");
        assert_eq!(random.bounds, vec![SPECIAL.len(), UPPERCASE.len(), DIGITS.len()]);
    }

    #[test]
    fn test_placements_in_longer_string() {
        // length 8: append 0..3, uppercase at 4, special to front at 5, append 6, digit at 7
        let mut random = ScriptedSource::new([0, 1, 2, 3, 25, 1, 4, 9]);
        let s = synthesize(&mut random, 8, CharClasses::ALL);
        assert_eq!(s, "#abcdZe9");
    }

    #[test]
    fn test_collision_at_midpoint() {
        // length 6: special and uppercase both fire at cursor 3, skipping cursor 4
        let mut random = ScriptedSource::new([0, 0, 0, 0, 0, 0]);
        let s = synthesize(&mut random, 6, CharClasses::new(true, true, true));
        assert_eq!(s, "$aaAa0");
        assert_eq!(random.bounds.len(), 6);
    }

    #[test]
    fn test_short_lengths() {
        // Placements that do not fit are dropped.
        let mut random = ScriptedSource::new([0, 0]);
        assert_eq!(
            synthesize(&mut random, 2, CharClasses::new(true, true, false)),
            "aA"
        );

        let mut random = ScriptedSource::new([0]);
        assert_eq!(
            synthesize(&mut random, 1, CharClasses::new(true, true, false)),
            "A"
        );

        let mut random = ScriptedSource::new([3]);
        assert_eq!(
            synthesize(&mut random, 1, CharClasses::new(false, true, false)),
            "3"
        );

        // No room for the special placement below three characters.
        let mut random = RandomService::seeded(9);
        let s = synthesize(&mut random, 2, CharClasses::new(false, false, true));
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut a = RandomService::seeded(42);
        let mut b = RandomService::seeded(42);
        assert_eq!(
            synthesize(&mut a, 20, CharClasses::ALL),
            synthesize(&mut b, 20, CharClasses::ALL)
        );
    }
}
