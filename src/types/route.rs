use serde::{Deserialize, Serialize};

/// A declarative rewrite rule mapping a vanity path shape to a canonical path.
///
/// Both `source` and `destination` may contain the `:slug` capture exactly
/// once; whatever the capture binds to in the source is substituted
/// positionally into the destination. Rules are defined at construction time
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    pub source: String,
    pub destination: String,
}

impl RouteRule {
    pub fn new(source: &str, destination: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
        }
    }
}
