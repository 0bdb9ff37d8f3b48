//! Generator implementations
//!
//! Each generator maps type labels into one target language's declaration
//! syntax. Labels that are neither primitives nor array forms (record names,
//! union arrays) fall through each mapper's default arm.

use super::types::CodeGenerator;
use crate::infer::{RecordShape, TypeRegistry};

fn field_lines<F: Fn(&str, &str) -> String>(shape: &RecordShape, render: F) -> Vec<String> {
    shape
        .fields
        .iter()
        .map(|(key, label)| render(key, label))
        .collect()
}

// ============================================================================
// TypeScript
// ============================================================================

/// TypeScript generator: type aliases, labels used verbatim.
///
/// The only generator that emits the registry's nested declarations ahead of
/// the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct TsGenerator;

impl CodeGenerator for TsGenerator {
    fn generate(&self, root: &RecordShape, registry: &TypeRegistry) -> String {
        let nested: Vec<String> = registry
            .shapes()
            .filter(|shape| shape.name != root.name)
            .map(|shape| {
                let lines = field_lines(shape, |k, v| format!("  {k}: {v};"));
                format!("export type {} = {{\n{}\n}}", shape.name, lines.join("\n"))
            })
            .collect();

        let lines = field_lines(root, |k, v| format!("  {k}: {v};"));
        let main = format!("export type {} = {{\n{}\n}}", root.name, lines.join("\n"));

        if nested.is_empty() {
            main
        } else {
            format!("{}\n\n{}", nested.join("\n\n"), main)
        }
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}

// ============================================================================
// JavaScript (JSDoc)
// ============================================================================

/// JavaScript generator: a JSDoc `@typedef` block
#[derive(Debug, Clone, Copy, Default)]
pub struct JsGenerator;

impl CodeGenerator for JsGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| format!(" * @property {{{v}}} {k}"));
        format!(
            "/**\n * @typedef {{Object}} {}\n{}\n */",
            root.name,
            lines.join("\n")
        )
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}

// ============================================================================
// Go
// ============================================================================

fn map_type_to_go(label: &str) -> String {
    match label {
        "string" => "string".to_string(),
        "number" => "float64".to_string(),
        "boolean" => "bool".to_string(),
        "null" | "any" => "interface{}".to_string(),
        "object" => "map[string]interface{}".to_string(),
        _ => {
            if let Some(element) = label.strip_suffix("[]") {
                format!("[]{}", map_type_to_go(element))
            } else {
                "interface{}".to_string()
            }
        }
    }
}

/// Go generator: struct with json tags
#[derive(Debug, Clone, Copy, Default)]
pub struct GoGenerator;

impl CodeGenerator for GoGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| {
            format!("\t{} {} `json:\"{}\"`", k, map_type_to_go(v), k)
        });
        format!("type {} struct {{\n{}\n}}", root.name, lines.join("\n"))
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}

// ============================================================================
// Rust
// ============================================================================

fn map_type_to_rust(label: &str) -> String {
    match label {
        "string" => "String".to_string(),
        "number" => "f64".to_string(),
        "boolean" => "bool".to_string(),
        "null" => "Option<()>".to_string(),
        "any" | "object" => "serde_json::Value".to_string(),
        _ => {
            if let Some(element) = label.strip_suffix("[]") {
                format!("Vec<{}>", map_type_to_rust(element))
            } else {
                "serde_json::Value".to_string()
            }
        }
    }
}

/// Rust generator: struct with serde derives
#[derive(Debug, Clone, Copy, Default)]
pub struct RustGenerator;

impl CodeGenerator for RustGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| format!("    pub {}: {},", k, map_type_to_rust(v)));
        format!(
            "#[derive(Debug, Serialize, Deserialize)]\npub struct {} {{\n{}\n}}",
            root.name,
            lines.join("\n")
        )
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}

// ============================================================================
// C
// ============================================================================

fn map_type_to_c(label: &str) -> String {
    match label {
        "string" => "char*".to_string(),
        "number" => "double".to_string(),
        "boolean" => "int".to_string(),
        "null" | "any" | "object" => "void*".to_string(),
        _ => {
            if let Some(element) = label.strip_suffix("[]") {
                format!("{}*", map_type_to_c(element))
            } else {
                "void*".to_string()
            }
        }
    }
}

/// C generator: typedef struct
#[derive(Debug, Clone, Copy, Default)]
pub struct CGenerator;

impl CodeGenerator for CGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| format!("    {} {};", map_type_to_c(v), k));
        format!("typedef struct {{\n{}\n}} {};", lines.join("\n"), root.name)
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}

// ============================================================================
// C++
// ============================================================================

fn map_type_to_cpp(label: &str) -> String {
    match label {
        "string" => "std::string".to_string(),
        "number" => "double".to_string(),
        "boolean" => "bool".to_string(),
        "null" => "std::nullptr_t".to_string(),
        "any" | "object" => "nlohmann::json".to_string(),
        _ => {
            if let Some(element) = label.strip_suffix("[]") {
                format!("std::vector<{}>", map_type_to_cpp(element))
            } else {
                "nlohmann::json".to_string()
            }
        }
    }
}

/// C++ generator: class with public members
#[derive(Debug, Clone, Copy, Default)]
pub struct CppGenerator;

impl CodeGenerator for CppGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| format!("    {} {};", map_type_to_cpp(v), k));
        format!("class {} {{\npublic:\n{}\n}};", root.name, lines.join("\n"))
    }

    fn file_extension(&self) -> &'static str {
        "hpp"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}

// ============================================================================
// C#
// ============================================================================

fn map_type_to_csharp(label: &str) -> String {
    match label {
        "string" => "string".to_string(),
        "number" => "double".to_string(),
        "boolean" => "bool".to_string(),
        "null" | "any" | "object" => "object".to_string(),
        _ => {
            if let Some(element) = label.strip_suffix("[]") {
                format!("{}[]", map_type_to_csharp(element))
            } else {
                "object".to_string()
            }
        }
    }
}

/// C# generator: class with `[JsonProperty]` attributes and PascalCase
/// property names
#[derive(Debug, Clone, Copy, Default)]
pub struct CsGenerator;

impl CodeGenerator for CsGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| {
            format!(
                "    [JsonProperty(\"{}\")]\n    public {} {} {{ get; set; }}",
                k,
                map_type_to_csharp(v),
                crate::infer::capitalize(k)
            )
        });
        format!("public class {}\n{{\n{}\n}}", root.name, lines.join("\n\n"))
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}

// ============================================================================
// Django
// ============================================================================

fn map_type_to_django(label: &str) -> String {
    match label {
        "string" => "models.CharField(max_length=255)".to_string(),
        "number" => "models.FloatField()".to_string(),
        "boolean" => "models.BooleanField()".to_string(),
        "null" => "models.JSONField(null=True, blank=True)".to_string(),
        _ => "models.JSONField()".to_string(),
    }
}

/// Django generator: model class with a `Meta.db_table`
#[derive(Debug, Clone, Copy, Default)]
pub struct DjangoGenerator;

impl CodeGenerator for DjangoGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| format!("    {} = {}", k, map_type_to_django(v)));
        format!(
            "from django.db import models\n\nclass {}(models.Model):\n{}\n\n    class Meta:\n        db_table = '{}'",
            root.name,
            lines.join("\n"),
            root.name.to_lowercase()
        )
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn comment_prefix(&self) -> &'static str {
        "#"
    }
}

// ============================================================================
// Swift
// ============================================================================

fn map_type_to_swift(label: &str) -> String {
    match label {
        "string" => "String".to_string(),
        "number" => "Double".to_string(),
        "boolean" => "Bool".to_string(),
        "null" => "String?".to_string(),
        "any" | "object" => "Any".to_string(),
        _ => {
            if let Some(element) = label.strip_suffix("[]") {
                format!("[{}]", map_type_to_swift(element))
            } else {
                "Any".to_string()
            }
        }
    }
}

/// Swift generator: Codable struct
#[derive(Debug, Clone, Copy, Default)]
pub struct SwiftGenerator;

impl CodeGenerator for SwiftGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| format!("    let {}: {}", k, map_type_to_swift(v)));
        format!(
            "struct {}: Codable {{\n{}\n}}",
            root.name,
            lines.join("\n")
        )
    }

    fn file_extension(&self) -> &'static str {
        "swift"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}

// ============================================================================
// Objective-C
// ============================================================================

fn map_type_to_objc(label: &str) -> String {
    match label {
        "string" => "NSString*".to_string(),
        "number" => "NSNumber*".to_string(),
        "boolean" => "BOOL".to_string(),
        "null" | "any" => "id".to_string(),
        "object" => "NSDictionary*".to_string(),
        _ => {
            if let Some(element) = label.strip_suffix("[]") {
                format!("NSArray<{}>*", map_type_to_objc(element))
            } else {
                "id".to_string()
            }
        }
    }
}

/// Objective-C generator: NSObject interface with properties
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectiveCGenerator;

impl CodeGenerator for ObjectiveCGenerator {
    fn generate(&self, root: &RecordShape, _registry: &TypeRegistry) -> String {
        let lines = field_lines(root, |k, v| {
            format!("@property (nonatomic, strong) {} {};", map_type_to_objc(v), k)
        });
        format!(
            "#import <Foundation/Foundation.h>\n\n@interface {} : NSObject\n\n{}\n\n@end",
            root.name,
            lines.join("\n")
        )
    }

    fn file_extension(&self) -> &'static str {
        "h"
    }

    fn comment_prefix(&self) -> &'static str {
        "//"
    }
}
