//! Route rewriter for Toolhub.
//!
//! Translates vanity URL shapes into canonical tool paths before dispatch.
//! Rules are a small ordered list of `(source, destination)` patterns with a
//! single `:slug` wildcard capture; the rewrite is transparent to the client
//! and unmatched paths pass through unchanged.

use crate::types::route::RouteRule;

/// The wildcard capture recognized in rule patterns.
const SLUG_CAPTURE: &str = ":slug";

/// Trait defining route rewriting operations.
pub trait RouteRewriterTrait {
    /// Returns the rewritten path for the first matching rule, or `None`
    /// if no rule matches.
    fn rewrite(&self, path: &str) -> Option<String>;
    /// Returns the rewritten path, or the input unchanged when no rule matches.
    fn resolve(&self, path: &str) -> String;
    fn rules(&self) -> &[RouteRule];
}

/// Route rewriter evaluating an ordered rule list, first match wins.
pub struct RouteRewriter {
    rules: Vec<RouteRule>,
}

impl RouteRewriter {
    /// Creates a rewriter with the portal's built-in vanity rules:
    /// `/:slug-minifier` and `/:slug-formatter`.
    pub fn new() -> Self {
        Self::with_rules(vec![
            RouteRule::new("/:slug-minifier", "/tools/minifiers/:slug"),
            RouteRule::new("/:slug-formatter", "/tools/formatters/:slug"),
        ])
    }

    /// Creates a rewriter with a custom rule list.
    pub fn with_rules(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Matches `path` against a source pattern.
    ///
    /// Patterns and paths are compared segment by segment. A pattern segment
    /// containing `:slug` binds the capture to the non-empty text between its
    /// literal prefix and suffix; all other segments must match exactly.
    /// Returns `None` on no match, `Some(slug)` on a match (`slug` is `None`
    /// for patterns without a capture).
    fn match_rule(pattern: &str, path: &str) -> Option<Option<String>> {
        let pattern_segments: Vec<&str> = pattern.trim_start_matches('/').split('/').collect();
        let path_segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

        if pattern_segments.len() != path_segments.len() {
            return None;
        }

        let mut slug: Option<String> = None;
        for (pat, seg) in pattern_segments.iter().zip(path_segments.iter()) {
            match pat.find(SLUG_CAPTURE) {
                Some(idx) => {
                    let prefix = &pat[..idx];
                    let suffix = &pat[idx + SLUG_CAPTURE.len()..];
                    if seg.len() <= prefix.len() + suffix.len()
                        || !seg.starts_with(prefix)
                        || !seg.ends_with(suffix)
                    {
                        return None;
                    }
                    let captured = &seg[prefix.len()..seg.len() - suffix.len()];
                    slug = Some(captured.to_string());
                }
                None => {
                    if pat != seg {
                        return None;
                    }
                }
            }
        }

        Some(slug)
    }
}

impl Default for RouteRewriter {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteRewriterTrait for RouteRewriter {
    fn rewrite(&self, path: &str) -> Option<String> {
        for rule in &self.rules {
            if let Some(slug) = Self::match_rule(&rule.source, path) {
                return Some(match slug {
                    Some(slug) => rule.destination.replace(SLUG_CAPTURE, &slug),
                    None => rule.destination.clone(),
                });
            }
        }
        None
    }

    fn resolve(&self, path: &str) -> String {
        self.rewrite(path).unwrap_or_else(|| path.to_string())
    }

    fn rules(&self) -> &[RouteRule] {
        &self.rules
    }
}
