use rpawogen::passgen::*;
use rpawogen::{CharacterClass, ClassSet, PassgenError};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn seeded(seed: u64) -> RngSource<ChaCha20Rng> {
        RngSource(ChaCha20Rng::seed_from_u64(seed))
    }

    fn classes_in(password: &str) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| password.chars().any(|c| class.contains(c)))
            .collect()
    }

    /// Every non-empty combination of the four classes.
    fn all_class_sets() -> Vec<ClassSet> {
        (1u8..16)
            .map(|bits| {
                ClassSet::from_flags(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0)
            })
            .collect()
    }

    #[test]
    fn test_generate_password_default_options() {
        let config = GenerationConfig::default();
        for _ in 0..200 {
            let password = generate(&config).unwrap();
            assert_eq!(password.chars().count(), 12);
            assert!(password.chars().any(|c| c.is_ascii_lowercase()));
            assert!(password.chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.chars().any(|c| c.is_ascii_digit()));
            assert!(password.chars().any(|c| c.is_ascii_punctuation()));
        }
    }

    #[test]
    fn test_generate_password_every_class_combination() {
        let mut rng = seeded(1);
        for enabled in all_class_sets() {
            for length in enabled.len()..=20 {
                let config = GenerationConfig::new(length, enabled);
                let password = generate_with(&config, &mut rng).unwrap();
                assert_eq!(password.chars().count(), length);
                let present = classes_in(&password);
                assert_eq!(present, enabled.iter().collect::<Vec<_>>(), "{:?}", password);
            }
        }
    }

    #[test]
    fn test_generate_password_only_uses_enabled_classes() {
        let config = GenerationConfig::new(40, ClassSet::from_flags(true, false, true, false));
        let password = generate_with(&config, &mut seeded(2)).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_password_no_classes() {
        let config = GenerationConfig::new(12, ClassSet::empty());
        let result = generate(&config);
        assert!(matches!(result, Err(PassgenError::InvalidConfig(_))));
    }

    #[test]
    fn test_generate_password_zero_length() {
        let config = GenerationConfig::new(0, ClassSet::all());
        assert!(matches!(generate(&config), Err(PassgenError::InvalidConfig(_))));
    }

    #[test]
    fn test_generate_password_shorter_than_class_count() {
        let mut rng = seeded(3);
        for length in 1..4 {
            let config = GenerationConfig::new(length, ClassSet::all());
            let expected: Vec<CharacterClass> = CharacterClass::ALL[..length].to_vec();
            for _ in 0..100 {
                let password = generate_with(&config, &mut rng).unwrap();
                assert_eq!(password.chars().count(), length);
                assert_eq!(classes_in(&password), expected, "{:?}", password);
            }
        }
    }

    #[test]
    fn test_generate_password_short_respects_enabled_order() {
        let enabled = ClassSet::from_flags(false, false, true, true);
        let config = GenerationConfig::new(1, enabled);
        for seed in 0..50 {
            let password = generate_with(&config, &mut seeded(seed)).unwrap();
            assert!(password.chars().all(|c| c.is_ascii_digit()), "{:?}", password);
        }
    }

    #[test]
    fn test_generate_password_is_random() {
        let config = GenerationConfig::default();
        let passwords: HashSet<String> = (0..100).map(|_| generate(&config).unwrap()).collect();
        assert_eq!(passwords.len(), 100);
    }

    #[test]
    fn test_generate_password_seeded_is_reproducible() {
        let config = GenerationConfig::new(24, ClassSet::all());
        let first = generate_with(&config, &mut seeded(99)).unwrap();
        let second = generate_with(&config, &mut seeded(99)).unwrap();
        let other = generate_with(&config, &mut seeded(100)).unwrap();
        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_generate_password_last_character_is_not_biased() {
        // Length equal to the class count forces frequent fix-ups.
        let config = GenerationConfig::new(4, ClassSet::all());
        let mut rng = seeded(5);
        let mut last_classes = HashSet::new();
        let mut first_classes = HashSet::new();
        for _ in 0..500 {
            let password = generate_with(&config, &mut rng).unwrap();
            let chars: Vec<char> = password.chars().collect();
            first_classes.insert(CharacterClass::of(chars[0]));
            last_classes.insert(CharacterClass::of(chars[3]));
        }
        assert_eq!(last_classes.len(), 4);
        assert_eq!(first_classes.len(), 4);
    }
}
