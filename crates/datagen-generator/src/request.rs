//! Request mini-language.
//!
//! A request names a dataset context and one or more JSON pointer paths
//! inside it:
//!
//! ```text
//! context '(' path ('|' path)* ')'
//! name(/generator/first_name|/generator/last_name)
//! ```
//!
//! Paths are not validated here. A path that addresses nothing fails later,
//! when the dataset is extracted.

use crate::error::GeneratorError;
use std::fmt;
use std::str::FromStr;

/// Parsed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Dataset context (subdirectory and file suffix).
    pub context: String,
    /// Pointer paths, in request order.
    pub paths: Vec<String>,
}

impl Request {
    /// Parse a request string.
    pub fn parse(request: &str) -> Result<Self, GeneratorError> {
        let open = request
            .find('(')
            .ok_or_else(|| GeneratorError::malformed(request, "missing '('"))?;
        let close = request[open..]
            .find(')')
            .map(|offset| open + offset)
            .ok_or_else(|| GeneratorError::malformed(request, "missing ')'"))?;

        let context = request[..open].trim();
        if context.is_empty() {
            return Err(GeneratorError::malformed(request, "empty context"));
        }
        // The context becomes a directory and file name under the dataset root.
        if context.contains(['/', '\\']) || context.contains("..") {
            return Err(GeneratorError::malformed(
                request,
                "context must not contain path separators or '..'",
            ));
        }

        let expression = &request[open + 1..close];
        if expression.is_empty() {
            return Err(GeneratorError::malformed(request, "empty path expression"));
        }

        if !request[close + 1..].trim().is_empty() {
            return Err(GeneratorError::malformed(request, "unexpected text after ')'"));
        }

        Ok(Self {
            context: context.to_string(),
            paths: expression.split('|').map(str::to_string).collect(),
        })
    }
}

impl FromStr for Request {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.context, self.paths.join("|"))
    }
}
