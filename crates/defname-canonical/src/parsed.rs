use serde::{Deserialize, Serialize};

use crate::builtin;

/// Tree form of a type descriptor.
///
/// Built fresh for every naming call, rewritten in place by
/// [`qualify`](crate::qualifier::qualify) and consumed by
/// [`render`](crate::renderer::render).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParsedType {
    /// A type referenced by name, optionally instantiated with generic arguments.
    Named {
        /// Package path without a trailing separator; empty when unqualified.
        #[serde(default)]
        package: String,
        /// Short name.
        name: String,
        /// Generic arguments in declaration order.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        generic_args: Vec<ParsedType>,
    },
    /// Pointer to `element`.
    Pointer {
        /// Pointee type.
        element: Box<ParsedType>,
    },
    /// Dynamic sequence, or fixed array when `length` is set.
    Slice {
        /// Fixed length, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        length: Option<u64>,
        /// Element type.
        element: Box<ParsedType>,
    },
    /// Associative map.
    Map {
        /// Key type.
        key: Box<ParsedType>,
        /// Value type.
        value: Box<ParsedType>,
    },
}

impl ParsedType {
    /// Unqualified named type without generic arguments.
    pub fn named(name: impl Into<String>) -> Self {
        ParsedType::Named {
            package: String::new(),
            name: name.into(),
            generic_args: Vec::new(),
        }
    }

    /// Named type in `package`.
    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        ParsedType::Named {
            package: package.into(),
            name: name.into(),
            generic_args: Vec::new(),
        }
    }

    /// Pointer to `element`.
    pub fn pointer(element: ParsedType) -> Self {
        ParsedType::Pointer {
            element: Box::new(element),
        }
    }

    /// Dynamic sequence of `element`.
    pub fn slice(element: ParsedType) -> Self {
        ParsedType::Slice {
            length: None,
            element: Box::new(element),
        }
    }

    /// Fixed array of `length` elements.
    pub fn array(length: u64, element: ParsedType) -> Self {
        ParsedType::Slice {
            length: Some(length),
            element: Box::new(element),
        }
    }

    /// Map from `key` to `value`.
    pub fn map(key: ParsedType, value: ParsedType) -> Self {
        ParsedType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Replaces the generic arguments of a named type; other variants are returned unchanged.
    pub fn with_generic_args(mut self, args: Vec<ParsedType>) -> Self {
        if let ParsedType::Named { generic_args, .. } = &mut self {
            *generic_args = args;
        }
        self
    }

    /// True for a named primitive kind with no package.
    pub fn is_builtin(&self) -> bool {
        match self {
            ParsedType::Named { package, name, .. } => builtin::is_builtin(package, name),
            _ => false,
        }
    }

    /// Nesting depth of the tree; a lone named type has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            ParsedType::Named { generic_args, .. } => {
                1 + generic_args.iter().map(ParsedType::depth).max().unwrap_or(0)
            }
            ParsedType::Pointer { element } | ParsedType::Slice { element, .. } => {
                1 + element.depth()
            }
            ParsedType::Map { key, value } => 1 + key.depth().max(value.depth()),
        }
    }
}
