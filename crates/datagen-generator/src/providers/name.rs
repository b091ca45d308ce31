//! Person name provider.

use crate::error::GeneratorError;
use crate::generator::DataGenerator;
use crate::generators::Selection;
use crate::random::RandomSource;

pub const FIRST_NAME_REQUEST: &str = "name(/generator/first_name)";
pub const LAST_NAME_REQUEST: &str = "name(/generator/last_name)";
pub const FULL_NAME_REQUEST: &str = "name(/generator/first_name|/generator/last_name)";

/// Generates names from the locale's `name` dataset.
pub struct NameProvider<'a, R: RandomSource> {
    generator: &'a mut DataGenerator<R>,
}

impl<'a, R: RandomSource> NameProvider<'a, R> {
    pub fn new(generator: &'a mut DataGenerator<R>) -> Self {
        Self { generator }
    }

    pub fn first_name(&mut self) -> Result<String, GeneratorError> {
        self.generator.resolve(FIRST_NAME_REQUEST, Selection::Independent)
    }

    pub fn last_name(&mut self) -> Result<String, GeneratorError> {
        self.generator.resolve(LAST_NAME_REQUEST, Selection::Independent)
    }

    /// First and last name drawn from the same key position, separated by a space.
    pub fn full_name(&mut self) -> Result<String, GeneratorError> {
        self.generator.resolve(FULL_NAME_REQUEST, Selection::Correlated)
    }
}
