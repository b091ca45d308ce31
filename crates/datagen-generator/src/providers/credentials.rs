//! Credentials provider.

use crate::generator::DataGenerator;
use crate::generators::{synthesize, CharClasses};
use crate::providers::EmailProvider;
use crate::random::RandomSource;

/// Generates login credentials.
pub struct CredentialsProvider<'a, R: RandomSource> {
    generator: &'a mut DataGenerator<R>,
}

impl<'a, R: RandomSource> CredentialsProvider<'a, R> {
    pub fn new(generator: &'a mut DataGenerator<R>) -> Self {
        Self { generator }
    }

    /// Email provider sharing this provider's locale and random source.
    pub fn email(&mut self) -> EmailProvider<'_, R> {
        EmailProvider::new(self.generator)
    }

    /// Random password of `length` characters.
    pub fn password(&mut self, length: usize, classes: CharClasses) -> String {
        synthesize(self.generator.random(), length, classes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::string::{DIGITS, SPECIAL};
    use datagen_core::Locale;

    #[test]
    fn test_password_classes() {
        let mut generator = DataGenerator::seeded("unused", Locale::default(), 42);

        let password = generator.credentials().password(12, CharClasses::ALL);
        assert_eq!(password.len(), 12);
        assert!(password.bytes().any(|b| b.is_ascii_uppercase()));
        assert!(password.bytes().any(|b| DIGITS.contains(&b)));
        assert!(password.bytes().any(|b| SPECIAL.contains(&b)));
    }

    #[test]
    fn test_password_zero_length() {
        let mut generator = DataGenerator::seeded("unused", Locale::default(), 42);
        assert_eq!(generator.credentials().password(0, CharClasses::ALL), "");
    }

    #[test]
    fn test_credentials_email() {
        let mut generator = DataGenerator::seeded("unused", Locale::default(), 42);
        let email = generator.credentials().email().email(false, false);
        assert!(email.ends_with(".com"));
        assert!(email.contains('@'));
    }

    #[test]
    fn test_same_seed_same_password() {
        let mut a = DataGenerator::seeded("unused", Locale::default(), 3);
        let mut b = DataGenerator::seeded("unused", Locale::default(), 3);
        assert_eq!(
            a.credentials().password(16, CharClasses::ALL),
            b.credentials().password(16, CharClasses::ALL)
        );
    }
}
