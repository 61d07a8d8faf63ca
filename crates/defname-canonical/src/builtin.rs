/// Primitive kind names that are never package-qualified.
///
/// Mirrors the kind enumeration of the reflection facility, including the
/// `invalid` sentinel and the unsafe pointer kind.
pub const BUILTIN_NAMES: &[&str] = &[
    "invalid",
    "bool",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "string",
    "unsafe.Pointer",
];

/// Returns true when `name` is one of the primitive kind names.
pub fn is_builtin_name(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Returns true when a named node with this package and short name is a builtin.
pub fn is_builtin(package: &str, name: &str) -> bool {
    package.is_empty() && is_builtin_name(name)
}
