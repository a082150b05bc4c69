//! Error types for layout and keymap definitions.

/// Errors raised while defining layouts, layers and behaviors.
///
/// All of these are authoring errors: the keymap cannot be generated until
/// the definition is corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeymapError {
    /// A grid or one of its rows was given the wrong number of bindings.
    #[error("{context}: expected {expected} bindings, found {found}")]
    ArityMismatch {
        /// Which part of the grid was being filled
        context: String,
        /// Number of bindings the shape requires
        expected: usize,
        /// Number of bindings supplied
        found: usize,
    },

    /// A name was declared twice in the same namespace.
    #[error("duplicate {kind} definition '{name}'")]
    DuplicateDefinition {
        /// Kind of node ("layer" or "behavior")
        kind: &'static str,
        /// The colliding name
        name: String,
    },

    /// A definition refers to something that does not exist.
    #[error("{from} references undefined {kind} '{name}'")]
    UndefinedReference {
        /// Where the reference appears
        from: String,
        /// Kind of the missing target
        kind: &'static str,
        /// The missing name
        name: String,
    },

    /// A mirrored layer was derived from another mirrored layer.
    #[error("layer '{layer}' mirrors '{source_layer}', which is itself a mirrored layer")]
    NestedMirror {
        /// The mirrored layer
        layer: String,
        /// Its source
        source_layer: String,
    },

    /// A name is not usable as a devicetree node identifier.
    #[error("invalid {kind} name '{name}': must start with a letter or '_' and contain only letters, digits and '_'")]
    InvalidName {
        /// Kind of node being named
        kind: &'static str,
        /// The rejected name
        name: String,
    },

    /// A binding token is blank.
    #[error("{context}: binding is empty")]
    EmptyBinding {
        /// Where the empty token appears
        context: String,
    },
}

/// Convenience alias for results carrying a [`KeymapError`].
pub type KeymapResult<T> = Result<T, KeymapError>;

/// Returns true if `name` is a valid devicetree node identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
