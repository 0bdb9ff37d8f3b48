//! Generator trait and target language selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::generators::{
    CGenerator, CppGenerator, CsGenerator, DjangoGenerator, GoGenerator, JsGenerator,
    ObjectiveCGenerator, RustGenerator, SwiftGenerator, TsGenerator,
};
use crate::error::Error;
use crate::infer::{RecordShape, TypeRegistry};

/// A per-target-language code generator.
///
/// Implementations are pure: the same shape and registry always produce the
/// same text.
pub trait CodeGenerator {
    /// Render declarations for the root shape. Generators that emit nested
    /// declarations read them from the registry; the rest ignore it.
    fn generate(&self, root: &RecordShape, registry: &TypeRegistry) -> String;

    /// Conventional file extension for the target (without the dot)
    fn file_extension(&self) -> &'static str;

    /// Line-comment prefix for the target
    fn comment_prefix(&self) -> &'static str;
}

/// Supported target languages
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// TypeScript type aliases
    Ts,
    /// JavaScript JSDoc typedefs
    Js,
    /// Go structs with json tags
    Go,
    /// Rust structs with serde derives
    Rust,
    /// C typedef structs
    C,
    /// C++ classes
    Cpp,
    /// C# classes with JsonProperty attributes
    Cs,
    /// Django model classes
    Django,
    /// Swift Codable structs
    Swift,
    /// Objective-C interfaces
    Objectivec,
}

impl Language {
    /// All supported languages, in help-text order
    pub fn all() -> &'static [Language] {
        &[
            Language::Ts,
            Language::Js,
            Language::Go,
            Language::Rust,
            Language::C,
            Language::Cpp,
            Language::Cs,
            Language::Django,
            Language::Swift,
            Language::Objectivec,
        ]
    }

    /// Short name used on the command line and in config files
    pub fn name(&self) -> &'static str {
        match self {
            Language::Ts => "ts",
            Language::Js => "js",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Cs => "cs",
            Language::Django => "django",
            Language::Swift => "swift",
            Language::Objectivec => "objectivec",
        }
    }

    /// Human-readable target name
    pub fn title(&self) -> &'static str {
        match self {
            Language::Ts => "TypeScript",
            Language::Js => "JavaScript (JSDoc)",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Cs => "C#",
            Language::Django => "Django/Python",
            Language::Swift => "Swift",
            Language::Objectivec => "Objective-C",
        }
    }

    /// Build the generator for this target
    pub fn generator(&self) -> Box<dyn CodeGenerator> {
        match self {
            Language::Ts => Box::new(TsGenerator),
            Language::Js => Box::new(JsGenerator),
            Language::Go => Box::new(GoGenerator),
            Language::Rust => Box::new(RustGenerator),
            Language::C => Box::new(CGenerator),
            Language::Cpp => Box::new(CppGenerator),
            Language::Cs => Box::new(CsGenerator),
            Language::Django => Box::new(DjangoGenerator),
            Language::Swift => Box::new(SwiftGenerator),
            Language::Objectivec => Box::new(ObjectiveCGenerator),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ts" | "typescript" => Ok(Language::Ts),
            "js" | "javascript" => Ok(Language::Js),
            "go" | "golang" => Ok(Language::Go),
            "rust" | "rs" => Ok(Language::Rust),
            "c" => Ok(Language::C),
            "cpp" | "c++" => Ok(Language::Cpp),
            "cs" | "csharp" | "c#" => Ok(Language::Cs),
            "django" | "py" | "python" => Ok(Language::Django),
            "swift" => Ok(Language::Swift),
            "objectivec" | "objc" => Ok(Language::Objectivec),
            other => Err(Error::unsupported_language(other)),
        }
    }
}
