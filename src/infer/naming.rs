//! Record naming strategies
//!
//! Deriving a name for a discovered object shape is a pure function of the
//! object's key set and the parent-key hint. The default heuristic lives
//! behind a trait so alternate naming schemes can be substituted without
//! touching the recursion engine.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Valid generator-target identifier: letter or underscore, then word chars
static IDENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Strategy for naming a discovered record shape.
///
/// Implementations must be pure: the same key set and hint always produce
/// the same name.
pub trait NamingStrategy: fmt::Debug + Send + Sync {
    /// Derive a record name from the object's keys and the enclosing field
    /// name (empty when no hint is available).
    fn derive_name(&self, keys: &[&str], parent_key: &str) -> String;
}

/// Default key-set heuristic.
///
/// - keys contain `id`, `name` and `email` → `User`
/// - keys contain `id` → `Entity`
/// - a parent-key hint exists → the capitalized hint
/// - otherwise → `Object`
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicNamer;

impl NamingStrategy for HeuristicNamer {
    fn derive_name(&self, keys: &[&str], parent_key: &str) -> String {
        if keys.contains(&"id") && keys.contains(&"name") && keys.contains(&"email") {
            return "User".to_string();
        }
        if keys.contains(&"id") {
            return "Entity".to_string();
        }
        if !parent_key.is_empty() {
            return sanitize_identifier(&capitalize(parent_key));
        }
        "Object".to_string()
    }
}

/// Uppercase the first character, leaving the rest verbatim
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Coerce a candidate name into a valid identifier.
///
/// JSON keys can contain characters no target language accepts in a type
/// name (`content-type`, `2fa`). Strips everything outside `[A-Za-z0-9_]`
/// and prefixes a leading digit; an empty result falls back to `Object`.
pub fn sanitize_identifier(s: &str) -> String {
    if IDENT_REGEX.is_match(s) {
        return s.to_string();
    }

    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    if cleaned.is_empty() {
        return "Object".to_string();
    }
    if cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        return format!("_{cleaned}");
    }
    cleaned
}
