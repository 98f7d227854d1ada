//! Shared identifier helpers.

/// C++ keywords that cannot name a class, method, field or parameter.
pub const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "const_cast", "continue", "decltype", "default", "delete",
    "do", "double", "dynamic_cast", "else", "enum", "explicit", "export", "extern", "false",
    "float", "for", "friend", "goto", "if", "inline", "int", "long", "mutable", "namespace",
    "new", "noexcept", "not", "nullptr", "operator", "or", "private", "protected", "public",
    "register", "reinterpret_cast", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "throw", "true",
    "try", "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual", "void",
    "volatile", "while",
];

/// Check if a name is a C++ keyword
pub fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Check that a name can be spelled as a C identifier.
///
/// Returns `None` when valid, otherwise the reason it is not.
pub fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Some("name must start with a letter or underscore");
        }
        Some(_) => {}
    }
    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_')) {
        return Some("name contains invalid characters");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_error() {
        assert_eq!(identifier_error("QString"), None);
        assert_eq!(identifier_error("_d"), None);
        assert_eq!(identifier_error("asSlice2"), None);
        assert!(identifier_error("").is_some());
        assert!(identifier_error("2fast").is_some());
        assert!(identifier_error("my-class").is_some());
        assert!(identifier_error("QList<int>").is_some());
    }

    #[test]
    fn test_is_cpp_keyword() {
        assert!(is_cpp_keyword("class"));
        assert!(is_cpp_keyword("delete"));
        assert!(!is_cpp_keyword("size"));
    }
}
