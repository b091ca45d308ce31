//! Email address provider.

use crate::error::GeneratorError;
use crate::generator::DataGenerator;
use crate::generators::{synthesize, CharClasses};
use crate::providers::NameProvider;
use crate::random::RandomSource;

/// Length of a synthesized local part.
pub const LOCAL_PART_LENGTH: usize = 8;
/// Length of the synthesized second-level domain.
pub const DOMAIN_LENGTH: usize = 4;
/// Separator used when building a local part from a full name.
pub const DEFAULT_NAME_SEPARATOR: &str = "_";

/// Generates email addresses and their parts.
pub struct EmailProvider<'a, R: RandomSource> {
    generator: &'a mut DataGenerator<R>,
}

impl<'a, R: RandomSource> EmailProvider<'a, R> {
    pub fn new(generator: &'a mut DataGenerator<R>) -> Self {
        Self { generator }
    }

    /// Random local part. Special characters are never used.
    pub fn local_part(&mut self, uppercase: bool, digits: bool) -> String {
        synthesize(
            self.generator.random(),
            LOCAL_PART_LENGTH,
            CharClasses::new(uppercase, digits, false),
        )
    }

    /// Local part made from a full name, with spaces replaced by `separator`.
    pub fn full_name_local_part(&mut self, separator: &str) -> Result<String, GeneratorError> {
        let full_name = NameProvider::new(&mut *self.generator).full_name()?;
        Ok(full_name.replace(' ', separator))
    }

    /// Random domain such as `@abcd.com`.
    pub fn domain_name(&mut self) -> String {
        let label = synthesize(
            self.generator.random(),
            DOMAIN_LENGTH,
            CharClasses::LOWERCASE_ONLY,
        );
        format!("@{label}.com")
    }

    /// Random local part at a random domain.
    pub fn email(&mut self, uppercase: bool, digits: bool) -> String {
        let local = self.local_part(uppercase, digits);
        local + &self.domain_name()
    }

    /// Random local part at the given domain (including the `@`).
    pub fn email_with_domain(&mut self, uppercase: bool, digits: bool, domain: &str) -> String {
        self.local_part(uppercase, digits) + domain
    }

    /// Full-name local part at the given domain, or a random one.
    pub fn email_with_person_name(
        &mut self,
        separator: Option<&str>,
        domain: Option<&str>,
    ) -> Result<String, GeneratorError> {
        let local = self.full_name_local_part(separator.unwrap_or(DEFAULT_NAME_SEPARATOR))?;
        let domain = match domain {
            Some(domain) => domain.to_string(),
            None => self.domain_name(),
        };
        Ok(local + &domain)
    }
}
