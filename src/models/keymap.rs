//! Keymap document: layers and swap behaviors sharing one namespace.

use crate::error::{is_identifier, KeymapError, KeymapResult};
use crate::models::{Binding, LayoutGrid, SwapTapDance};

/// Where a layer's bindings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerSource {
    /// Bindings authored directly
    Grid(Box<LayoutGrid<Binding>>),
    /// Opposite-hand assignment of another authored layer
    MirrorOf(String),
}

/// A named keymap layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Layer name (devicetree identifier)
    pub name: String,
    /// Binding source
    pub source: LayerSource,
}

impl Layer {
    /// Creates a layer from an authored grid.
    pub fn from_grid(name: impl Into<String>, grid: LayoutGrid<Binding>) -> Self {
        Self {
            name: name.into(),
            source: LayerSource::Grid(Box::new(grid)),
        }
    }

    /// Creates a layer mirroring `source`.
    pub fn mirror_of(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: LayerSource::MirrorOf(source.into()),
        }
    }

    /// Uppercase name used by `#define` lines and layer references.
    ///
    /// ```
    /// use splitmap::models::Layer;
    ///
    /// assert_eq!(Layer::mirror_of("swp", "base").define_name(), "SWP");
    /// ```
    pub fn define_name(&self) -> String {
        self.name.to_ascii_uppercase()
    }

    /// Devicetree node name of the layer.
    pub fn node_name(&self) -> String {
        format!("{}_layer", self.name)
    }

    /// Returns true if this layer is derived by mirroring.
    pub const fn is_mirror(&self) -> bool {
        matches!(self.source, LayerSource::MirrorOf(_))
    }
}

/// A layer's grid after resolving `mirror_of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLayer<'a> {
    /// The authored grid the layer reads from
    pub grid: &'a LayoutGrid<Binding>,
    /// True if the grid must be emitted with the mirrored transform
    pub mirrored: bool,
}

/// The configuration namespace: ordered layers plus swap behaviors.
///
/// Names are inserted once; a second insertion of the same name fails with
/// [`KeymapError::DuplicateDefinition`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
    /// Layers in index order
    pub layers: Vec<Layer>,
    /// Swap behaviors in declaration order
    pub behaviors: Vec<SwapTapDance>,
}

impl Keymap {
    /// Creates an empty keymap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer.
    pub fn add_layer(&mut self, layer: Layer) -> KeymapResult<()> {
        if !is_identifier(&layer.name) {
            return Err(KeymapError::InvalidName {
                kind: "layer",
                name: layer.name,
            });
        }

        if self
            .layers
            .iter()
            .any(|l| l.name == layer.name || l.define_name() == layer.define_name())
        {
            return Err(KeymapError::DuplicateDefinition {
                kind: "layer",
                name: layer.name,
            });
        }

        self.layers.push(layer);
        Ok(())
    }

    /// Declares a swap behavior.
    pub fn add_behavior(&mut self, behavior: SwapTapDance) -> KeymapResult<()> {
        behavior.validate()?;

        if self.get_behavior(&behavior.name).is_some() {
            return Err(KeymapError::DuplicateDefinition {
                kind: "behavior",
                name: behavior.name,
            });
        }

        self.behaviors.push(behavior);
        Ok(())
    }

    /// Gets a layer by name.
    pub fn get_layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Gets a behavior by name.
    pub fn get_behavior(&self, name: &str) -> Option<&SwapTapDance> {
        self.behaviors.iter().find(|b| b.name == name)
    }

    /// Index of the layer whose define name is `define`.
    pub fn layer_index(&self, define: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.define_name() == define)
    }

    /// Resolves the grid a layer reads from.
    pub fn resolve(&self, name: &str) -> KeymapResult<ResolvedLayer<'_>> {
        let layer = self
            .get_layer(name)
            .ok_or_else(|| KeymapError::UndefinedReference {
                from: "keymap".to_string(),
                kind: "layer",
                name: name.to_string(),
            })?;

        match &layer.source {
            LayerSource::Grid(grid) => Ok(ResolvedLayer {
                grid: grid.as_ref(),
                mirrored: false,
            }),
            LayerSource::MirrorOf(source) => {
                let target =
                    self.get_layer(source)
                        .ok_or_else(|| KeymapError::UndefinedReference {
                            from: format!("layer '{name}'"),
                            kind: "layer",
                            name: source.clone(),
                        })?;
                match &target.source {
                    LayerSource::Grid(grid) => Ok(ResolvedLayer {
                        grid: grid.as_ref(),
                        mirrored: true,
                    }),
                    LayerSource::MirrorOf(_) => Err(KeymapError::NestedMirror {
                        layer: name.to_string(),
                        source_layer: source.clone(),
                    }),
                }
            }
        }
    }
}
