//! Keymap validation before generation.
//!
//! This module performs the checks the downstream configuration loader would
//! otherwise fail on: duplicate node names and references to layers that do
//! not exist.

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use crate::constants::{LAYER_TOGGLE_BEHAVIOR, SWAP_LAYER};
use crate::error::{is_identifier, KeymapError};
use crate::models::{Binding, Keymap, LayerSource, Slot};
use anyhow::{Context, Result};
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Errors that prevent keymap generation
    pub errors: Vec<ValidationError>,
    /// Non-critical warnings
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("❌ {} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("\n⚠️  {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Layer where the error occurred
    pub layer: Option<String>,
    /// Slot where the error occurred
    pub slot: Option<Slot>,
    /// Human-readable error message
    pub message: String,
    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            layer: None,
            slot: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets the layer context.
    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    /// Sets the slot context.
    #[must_use]
    pub const fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Sets a suggestion for fixing the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<KeymapError> for ValidationError {
    fn from(err: KeymapError) -> Self {
        let kind = match &err {
            KeymapError::ArityMismatch { .. } => ValidationErrorKind::ArityMismatch,
            KeymapError::DuplicateDefinition { .. } => ValidationErrorKind::DuplicateDefinition,
            KeymapError::UndefinedReference { .. } => ValidationErrorKind::UndefinedReference,
            KeymapError::NestedMirror { .. } => ValidationErrorKind::NestedMirror,
            KeymapError::InvalidName { .. } => ValidationErrorKind::InvalidName,
            KeymapError::EmptyBinding { .. } => ValidationErrorKind::EmptyBinding,
        };
        Self::new(kind, err.to_string())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.layer, self.slot) {
            (Some(layer), Some(slot)) => {
                write!(f, "[Layer {layer} {slot}] {}: {}", self.kind, self.message)?;
            }
            (Some(layer), None) => write!(f, "[Layer {layer}] {}: {}", self.kind, self.message)?,
            _ => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n    → {suggestion}")?;
        }

        Ok(())
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A grid does not have the fixed shape
    ArityMismatch,
    /// A name is defined more than once
    DuplicateDefinition,
    /// A reference names a layer that does not exist
    UndefinedReference,
    /// A mirrored layer mirrors another mirrored layer
    NestedMirror,
    /// A name is not a devicetree identifier
    InvalidName,
    /// A binding is blank
    EmptyBinding,
    /// The keymap has no layers
    EmptyKeymap,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch => write!(f, "Arity Mismatch"),
            Self::DuplicateDefinition => write!(f, "Duplicate Definition"),
            Self::UndefinedReference => write!(f, "Undefined Reference"),
            Self::NestedMirror => write!(f, "Nested Mirror"),
            Self::InvalidName => write!(f, "Invalid Name"),
            Self::EmptyBinding => write!(f, "Empty Binding"),
            Self::EmptyKeymap => write!(f, "Empty Keymap"),
        }
    }
}

/// Validation warning (non-blocking).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Warning message
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Keymap validator.
pub struct KeymapValidator<'a> {
    keymap: &'a Keymap,
}

impl<'a> KeymapValidator<'a> {
    /// Creates a new keymap validator.
    #[must_use]
    pub const fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }

    /// Validates the keymap for generation.
    ///
    /// Checks:
    /// - At least one layer exists
    /// - Layer and behavior names are identifiers and unique
    /// - Mirrored layers point at authored layers
    /// - Layer-switch bindings and the swap toggle target defined layers
    /// - No binding is blank
    pub fn validate(&self) -> Result<ValidationReport> {
        let mut report = ValidationReport::new();

        if self.keymap.layers.is_empty() {
            report.add_error(
                ValidationError::new(ValidationErrorKind::EmptyKeymap, "Keymap has no layers")
                    .with_suggestion("Add at least one [[layer]] table"),
            );
            return Ok(report);
        }

        self.validate_names(&mut report);
        self.validate_mirrors(&mut report);
        self.validate_bindings(&mut report)?;
        self.validate_behaviors(&mut report);

        debug!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "keymap validated"
        );
        Ok(report)
    }

    /// Checks identifier syntax and uniqueness across layers and behaviors.
    fn validate_names(&self, report: &mut ValidationReport) {
        let mut defines = HashSet::new();
        for layer in &self.keymap.layers {
            if !is_identifier(&layer.name) {
                report.add_error(
                    KeymapError::InvalidName {
                        kind: "layer",
                        name: layer.name.clone(),
                    }
                    .into(),
                );
            }
            if !defines.insert(layer.define_name()) {
                report.add_error(
                    ValidationError::from(KeymapError::DuplicateDefinition {
                        kind: "layer",
                        name: layer.name.clone(),
                    })
                    .with_suggestion("Rename one of the layers"),
                );
            }
        }

        let layer_nodes: HashSet<String> =
            self.keymap.layers.iter().map(|l| l.node_name()).collect();
        let mut behaviors = HashSet::new();
        for behavior in &self.keymap.behaviors {
            if let Err(e) = behavior.validate() {
                report.add_error(e.into());
            }
            if !behaviors.insert(behavior.name.as_str()) || layer_nodes.contains(&behavior.name) {
                report.add_error(
                    ValidationError::from(KeymapError::DuplicateDefinition {
                        kind: "behavior",
                        name: behavior.name.clone(),
                    })
                    .with_suggestion("Behavior names must be unique across all nodes"),
                );
            } else if defines.contains(&behavior.name) {
                // The layer #define would rewrite the node label and every reference
                report.add_error(
                    ValidationError::from(KeymapError::DuplicateDefinition {
                        kind: "behavior",
                        name: behavior.name.clone(),
                    })
                    .with_suggestion(format!(
                        "'{}' is already a layer define; rename the behavior",
                        behavior.name
                    )),
                );
            }
        }
    }

    /// Checks that every mirrored layer resolves.
    fn validate_mirrors(&self, report: &mut ValidationReport) {
        for layer in &self.keymap.layers {
            if let LayerSource::MirrorOf(source) = &layer.source {
                if let Err(e) = self.keymap.resolve(&layer.name) {
                    report.add_error(
                        ValidationError::from(e)
                            .with_layer(&layer.name)
                            .with_suggestion(format!(
                                "Point mirror_of at an authored layer instead of '{source}'"
                            )),
                    );
                }
            }
        }
    }

    /// Checks every authored binding for blanks and dangling layer references.
    fn validate_bindings(&self, report: &mut ValidationReport) -> Result<()> {
        let layer_ref = Regex::new(r"^&(?:mo|tog|to|sl|lt)\s+(\S+)")
            .context("Failed to compile layer reference pattern")?;

        for layer in &self.keymap.layers {
            let LayerSource::Grid(grid) = &layer.source else {
                continue;
            };

            for slot in Slot::grid_order() {
                let binding = &grid[slot];
                if binding.is_empty() {
                    report.add_error(
                        ValidationError::new(ValidationErrorKind::EmptyBinding, "Binding is empty")
                            .with_layer(&layer.name)
                            .with_slot(slot)
                            .with_suggestion("Use XXX (&none) for positions without a key"),
                    );
                    continue;
                }

                if let Some(captures) = layer_ref.captures(binding.as_str()) {
                    let target = &captures[1];
                    if !self.layer_exists(target) {
                        report.add_error(
                            ValidationError::new(
                                ValidationErrorKind::UndefinedReference,
                                format!("'{binding}' targets undefined layer '{target}'"),
                            )
                            .with_layer(&layer.name)
                            .with_slot(slot)
                            .with_suggestion(self.layer_suggestion()),
                        );
                    }
                }
            }
        }

        Ok(())
    }

    /// Checks the swap toggle target and warns about unused behaviors.
    fn validate_behaviors(&self, report: &mut ValidationReport) {
        if self.keymap.behaviors.is_empty() {
            return;
        }

        if self.keymap.layer_index(SWAP_LAYER).is_none() {
            report.add_error(
                ValidationError::from(KeymapError::UndefinedReference {
                    from: format!("{LAYER_TOGGLE_BEHAVIOR} {SWAP_LAYER} in swap behaviors"),
                    kind: "layer",
                    name: SWAP_LAYER.to_string(),
                })
                .with_suggestion("Add a layer named 'swp', e.g. mirror_of = \"base\""),
            );
        }

        let used: HashSet<&str> = self
            .keymap
            .layers
            .iter()
            .filter_map(|layer| match &layer.source {
                LayerSource::Grid(grid) => Some(grid.iter()),
                LayerSource::MirrorOf(_) => None,
            })
            .flatten()
            .filter_map(Binding::behavior)
            .collect();

        for behavior in &self.keymap.behaviors {
            if !used.contains(behavior.name.as_str()) {
                report.add_warning(ValidationWarning::new(format!(
                    "Swap behavior '{}' is defined but never bound",
                    behavior.name
                )));
            }
        }
    }

    /// A layer target is either a define name or a numeric index.
    fn layer_exists(&self, target: &str) -> bool {
        match target.parse::<usize>() {
            Ok(index) => index < self.keymap.layers.len(),
            Err(_) => self.keymap.layer_index(target).is_some(),
        }
    }

    fn layer_suggestion(&self) -> String {
        let defines: Vec<String> = self.keymap.layers.iter().map(|l| l.define_name()).collect();
        format!("Defined layers: {}", defines.join(", "))
    }
}
