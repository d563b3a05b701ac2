//! Property-based tests for route rewriting.
//!
//! For any valid slug, the vanity shapes rewrite to their canonical
//! tool-category paths with the slug substituted whole, and paths without a
//! vanity suffix always pass through unchanged.

use proptest::prelude::*;

use toolhub::services::route_rewriter::{RouteRewriter, RouteRewriterTrait};

/// Strategy for slugs: lowercase alphanumerics and inner hyphens.
fn arb_slug() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9-]{0,14}[a-z0-9]|[a-z0-9]"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn minifier_vanity_path_rewrites(slug in arb_slug()) {
        let rewriter = RouteRewriter::new();
        let rewritten = rewriter.rewrite(&format!("/{}-minifier", slug));
        prop_assert_eq!(rewritten, Some(format!("/tools/minifiers/{}", slug)));
    }

    #[test]
    fn formatter_vanity_path_rewrites(slug in arb_slug()) {
        let rewriter = RouteRewriter::new();
        let rewritten = rewriter.rewrite(&format!("/{}-formatter", slug));
        // The minifier rule is ordered first; it must never shadow the
        // formatter shape
        prop_assert_eq!(rewritten, Some(format!("/tools/formatters/{}", slug)));
    }

    #[test]
    fn paths_without_vanity_suffix_pass_through(slug in arb_slug()) {
        prop_assume!(!slug.ends_with("-minifier") && !slug.ends_with("-formatter"));

        let rewriter = RouteRewriter::new();
        let path = format!("/{}", slug);
        prop_assert_eq!(rewriter.rewrite(&path), None);
        prop_assert_eq!(rewriter.resolve(&path), path);
    }

    #[test]
    fn resolve_agrees_with_rewrite(slug in arb_slug()) {
        let rewriter = RouteRewriter::new();
        for path in [
            format!("/{}-minifier", slug),
            format!("/{}-formatter", slug),
            format!("/{}", slug),
        ] {
            let resolved = rewriter.resolve(&path);
            match rewriter.rewrite(&path) {
                Some(rewritten) => prop_assert_eq!(resolved, rewritten),
                None => prop_assert_eq!(resolved, path),
            }
        }
    }
}
