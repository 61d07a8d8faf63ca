//! Structured type descriptors and the [`Describe`] introspection boundary.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;
use crate::parsed::ParsedType;
use crate::parser;

/// Structural kind of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Named (possibly generic) type.
    Named,
    /// Pointer.
    Pointer,
    /// Dynamic-length sequence.
    Slice,
    /// Fixed-length array.
    Array,
    /// Associative map.
    Map,
}

/// Structural description of a runtime type, as supplied by an introspection layer.
///
/// Every named descriptor carries its own package path. When walked by
/// [`Namer::name_type`](crate::Namer::name_type), each named descriptor reached
/// through pointers, slices, arrays or maps is qualified relative to its own
/// package; its generic arguments are qualified relative to that same package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// Named type. `name` may carry a textual instantiation such as
    /// `G1[encoding/json.RawMessage]` when `generic_args` is empty.
    Named {
        /// Package path; empty for builtins.
        #[serde(default)]
        package: String,
        /// Short name.
        name: String,
        /// Structured generic arguments.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        generic_args: Vec<TypeDescriptor>,
    },
    /// Pointer to `element`.
    Pointer {
        /// Pointee.
        element: Box<TypeDescriptor>,
    },
    /// Dynamic-length sequence.
    Slice {
        /// Element type.
        element: Box<TypeDescriptor>,
    },
    /// Fixed-length array.
    Array {
        /// Number of elements.
        length: u64,
        /// Element type.
        element: Box<TypeDescriptor>,
    },
    /// Associative map.
    Map {
        /// Key type.
        key: Box<TypeDescriptor>,
        /// Value type.
        value: Box<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    /// Named type in `package`.
    pub fn named(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeDescriptor::Named {
            package: package.into(),
            name: name.into(),
            generic_args: Vec::new(),
        }
    }

    /// Builtin primitive kind.
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::named(String::new(), name)
    }

    /// Pointer to `element`.
    pub fn pointer(element: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer {
            element: Box::new(element),
        }
    }

    /// Dynamic sequence of `element`.
    pub fn slice(element: TypeDescriptor) -> Self {
        TypeDescriptor::Slice {
            element: Box::new(element),
        }
    }

    /// Fixed array of `length` elements.
    pub fn array(length: u64, element: TypeDescriptor) -> Self {
        TypeDescriptor::Array {
            length,
            element: Box::new(element),
        }
    }

    /// Map from `key` to `value`.
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Replaces the generic arguments of a named descriptor; composites are returned unchanged.
    pub fn with_generic_args(mut self, args: Vec<TypeDescriptor>) -> Self {
        if let TypeDescriptor::Named { generic_args, .. } = &mut self {
            *generic_args = args;
        }
        self
    }

    /// Structural kind discriminator.
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDescriptor::Named { .. } => TypeKind::Named,
            TypeDescriptor::Pointer { .. } => TypeKind::Pointer,
            TypeDescriptor::Slice { .. } => TypeKind::Slice,
            TypeDescriptor::Array { .. } => TypeKind::Array,
            TypeDescriptor::Map { .. } => TypeKind::Map,
        }
    }

    /// Package path; empty for builtins and unnamed composites.
    pub fn package(&self) -> &str {
        match self {
            TypeDescriptor::Named { package, .. } => package,
            _ => "",
        }
    }

    /// Short name; empty for unnamed composites.
    pub fn short_name(&self) -> &str {
        match self {
            TypeDescriptor::Named { name, .. } => name,
            _ => "",
        }
    }

    /// Converts the descriptor into an unqualified parse tree.
    ///
    /// Package paths are copied verbatim; qualification is applied later.
    pub fn to_parsed(&self) -> Result<ParsedType, ParseError> {
        Ok(match self {
            TypeDescriptor::Named {
                package,
                name,
                generic_args,
            } if generic_args.is_empty() && name.contains('[') => {
                let mut parsed = parser::parse_complete(name)?;
                if let ParsedType::Named {
                    package: inner, ..
                } = &mut parsed
                {
                    if inner.is_empty() {
                        *inner = package.clone();
                    }
                }
                parsed
            }
            TypeDescriptor::Named {
                package,
                name,
                generic_args,
            } => ParsedType::Named {
                package: package.clone(),
                name: name.clone(),
                generic_args: generic_args
                    .iter()
                    .map(TypeDescriptor::to_parsed)
                    .collect::<Result<Vec<_>, _>>()?,
            },
            TypeDescriptor::Pointer { element } => ParsedType::pointer(element.to_parsed()?),
            TypeDescriptor::Slice { element } => ParsedType::slice(element.to_parsed()?),
            TypeDescriptor::Array { length, element } => {
                ParsedType::array(*length, element.to_parsed()?)
            }
            TypeDescriptor::Map { key, value } => {
                ParsedType::map(key.to_parsed()?, value.to_parsed()?)
            }
        })
    }
}

/// Types that can describe their own structure.
///
/// Implemented for primitives and the standard containers; use
/// [`describe_named!`](crate::describe_named) for your own types.
pub trait Describe {
    /// Returns the structural descriptor of `Self`.
    fn describe() -> TypeDescriptor;
}

macro_rules! describe_builtin {
    ($($ty:ty => $name:expr),+ $(,)?) => {
        $(
            impl Describe for $ty {
                fn describe() -> TypeDescriptor {
                    TypeDescriptor::builtin($name)
                }
            }
        )+
    };
}

describe_builtin!(
    bool => "bool",
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    isize => "int",
    u8 => "uint8",
    u16 => "uint16",
    u32 => "uint32",
    u64 => "uint64",
    usize => "uint",
    f32 => "float32",
    f64 => "float64",
    char => "int32",
    String => "string",
    str => "string",
);

impl<T: Describe> Describe for Vec<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::slice(T::describe())
    }
}

impl<T: Describe> Describe for [T] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::slice(T::describe())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::array(N as u64, T::describe())
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::pointer(T::describe())
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::pointer(T::describe())
    }
}

impl<T: Describe> Describe for Option<T> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::pointer(T::describe())
    }
}

impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map(K::describe(), V::describe())
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    fn describe() -> TypeDescriptor {
        TypeDescriptor::map(K::describe(), V::describe())
    }
}

/// Implements [`Describe`] for a named type declared in `package`.
///
/// ```rust
/// use defname_canonical::{describe_named, Describe, TypeDescriptor};
///
/// struct Widget;
/// struct Page<T>(Vec<T>);
///
/// describe_named!(Widget, "acme/api", "Widget");
/// describe_named!(Page<T>, "acme/api", "Page");
///
/// assert_eq!(
///     <Page<Widget>>::describe(),
///     TypeDescriptor::named("acme/api", "Page")
///         .with_generic_args(vec![TypeDescriptor::named("acme/api", "Widget")])
/// );
/// ```
#[macro_export]
macro_rules! describe_named {
    ($ty:ident < $($param:ident),+ >, $package:expr, $name:expr) => {
        impl<$($param: $crate::Describe),+> $crate::Describe for $ty<$($param),+> {
            fn describe() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::named($package, $name)
                    .with_generic_args(vec![$(<$param as $crate::Describe>::describe()),+])
            }
        }
    };
    ($ty:ty, $package:expr, $name:expr) => {
        impl $crate::Describe for $ty {
            fn describe() -> $crate::TypeDescriptor {
                $crate::TypeDescriptor::named($package, $name)
            }
        }
    };
}
