//! ZMK devicetree generation.
//!
//! Renders a [`Keymap`] as a `.keymap` file: layer defines, the swap behavior
//! nodes and one keymap layer node per layer. Binding order inside each layer
//! node is exactly the flattened firmware order produced by
//! [`crate::firmware::mapping`].

// Allow format! appended to String - more readable for building output
#![allow(clippy::format_push_string)]

use crate::config::RenderConfig;
use crate::constants::APP_NAME;
use crate::error::{KeymapError, KeymapResult};
use crate::firmware::mapping::{flatten, flatten_mirrored};
use crate::models::position::{MAIN_COLS, MAIN_ROWS, THUMB_COLS};
use crate::models::{Binding, Keymap, Layer, SwapTapDance, SLOT_COUNT};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Columns on one rendered line: both halves side by side.
const LINE_COLS: usize = 2 * MAIN_COLS;
/// Gap between the left and right half on a rendered line.
const HALF_GAP: &str = "    ";
/// First column of the left thumb keys on a rendered line.
const LEFT_THUMB_START: usize = MAIN_COLS - THUMB_COLS;

/// Generates keymap files from a [`Keymap`].
pub struct KeymapGenerator<'a> {
    keymap: &'a Keymap,
    render: &'a RenderConfig,
}

impl<'a> KeymapGenerator<'a> {
    /// Creates a new generator.
    pub const fn new(keymap: &'a Keymap, render: &'a RenderConfig) -> Self {
        Self { keymap, render }
    }

    /// Generates the complete `.keymap` file.
    pub fn generate_keymap(&self) -> Result<String> {
        let mut out = String::new();

        out.push_str("/*\n");
        out.push_str(&format!(" * Generated by {APP_NAME}. Do not edit.\n"));
        out.push_str(" */\n\n");

        for header in &self.render.includes {
            out.push_str(&format!("#include <{header}>\n"));
        }
        if !self.render.includes.is_empty() {
            out.push('\n');
        }

        for (idx, layer) in self.keymap.layers.iter().enumerate() {
            out.push_str(&format!("#define {} {}\n", layer.define_name(), idx));
        }
        out.push('\n');

        out.push_str("/ {\n");
        if !self.keymap.behaviors.is_empty() {
            out.push_str(&self.behaviors_block(1));
            out.push('\n');
        }

        out.push_str(&format!("{}keymap {{\n", self.indent(1)));
        out.push_str(&format!(
            "{}compatible = \"zmk,keymap\";\n",
            self.indent(2)
        ));
        for layer in &self.keymap.layers {
            out.push('\n');
            out.push_str(
                &self
                    .layer_node(layer, 2)
                    .with_context(|| format!("Failed to render layer '{}'", layer.name))?,
            );
        }
        out.push_str(&format!("{}}};\n", self.indent(1)));
        out.push_str("};\n");

        info!(
            layers = self.keymap.layers.len(),
            behaviors = self.keymap.behaviors.len(),
            "generated keymap"
        );
        Ok(out)
    }

    /// Renders one behavior wrapped in its own root and `behaviors` node,
    /// ready to paste into a configuration.
    pub fn standalone_behavior(&self, behavior: &SwapTapDance) -> String {
        let mut out = String::from("/ {\n");
        out.push_str(&format!("{}behaviors {{\n", self.indent(1)));
        out.push_str(&self.behavior_node(behavior, 2));
        out.push_str(&format!("{}}};\n", self.indent(1)));
        out.push_str("};\n");
        out
    }

    /// Renders a single behavior node at nesting `depth`.
    pub fn behavior_node(&self, behavior: &SwapTapDance, depth: usize) -> String {
        let outer = self.indent(depth);
        let inner = self.indent(depth + 1);
        let bindings: Vec<String> = behavior
            .bindings()
            .iter()
            .map(|b| format!("<{b}>"))
            .collect();

        let mut out = String::new();
        out.push_str(&format!("{outer}{0}: {0} {{\n", behavior.name));
        out.push_str(&format!("{inner}label = \"{}\";\n", behavior.label()));
        out.push_str(&format!(
            "{inner}compatible = \"{}\";\n",
            behavior.compatible()
        ));
        out.push_str(&format!(
            "{inner}#binding-cells = <{}>;\n",
            behavior.binding_cells()
        ));
        out.push_str(&format!(
            "{inner}tapping-term-ms = <{}>;\n",
            behavior.tapping_term_ms()
        ));
        out.push_str(&format!("{inner}bindings = {};\n", bindings.join(", ")));
        out.push_str(&format!("{outer}}};\n"));
        out
    }

    fn behaviors_block(&self, depth: usize) -> String {
        let mut out = format!("{}behaviors {{\n", self.indent(depth));
        for (idx, behavior) in self.keymap.behaviors.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            out.push_str(&self.behavior_node(behavior, depth + 1));
        }
        out.push_str(&format!("{}}};\n", self.indent(depth)));
        out
    }

    fn layer_node(&self, layer: &Layer, depth: usize) -> Result<String> {
        let resolved = self.keymap.resolve(&layer.name)?;
        let flat = if resolved.mirrored {
            flatten_mirrored(resolved.grid)
        } else {
            flatten(resolved.grid)
        };
        debug!(layer = %layer.name, mirrored = resolved.mirrored, "flattened layer");

        let lines = render_binding_lines(&flat, self.render.align_columns)?;
        let body = self.indent(depth + 2);

        let mut out = format!("{}{} {{\n", self.indent(depth), layer.node_name());
        out.push_str(&format!("{}bindings = <\n", self.indent(depth + 1)));
        for line in lines {
            out.push_str(&format!("{body}{line}\n"));
        }
        out.push_str(&format!("{}>;\n", self.indent(depth + 1)));
        out.push_str(&format!("{}}};\n", self.indent(depth)));
        Ok(out)
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(self.render.indent * depth)
    }
}

/// Lays out a flattened binding sequence as text lines.
///
/// The three full rows come first, then the rotation pair under the inner
/// columns, then the thumb row under the inner four columns of each half.
/// Reading the tokens of the lines in order yields `flat` unchanged.
pub fn render_binding_lines(flat: &[Binding], align: bool) -> KeymapResult<Vec<String>> {
    if flat.len() != SLOT_COUNT {
        return Err(KeymapError::ArityMismatch {
            context: "flattened layer".to_string(),
            expected: SLOT_COUNT,
            found: flat.len(),
        });
    }

    let main = MAIN_ROWS * LINE_COLS;
    let mut lines: Vec<[Option<&str>; LINE_COLS]> = Vec::with_capacity(MAIN_ROWS + 2);

    for row in flat[..main].chunks(LINE_COLS) {
        lines.push(std::array::from_fn(|c| Some(row[c].as_str())));
    }

    let mut rotation = [None; LINE_COLS];
    rotation[MAIN_COLS - 1] = Some(flat[main].as_str());
    rotation[MAIN_COLS] = Some(flat[main + 1].as_str());
    lines.push(rotation);

    let mut thumbs = [None; LINE_COLS];
    for (offset, binding) in flat[main + 2..].iter().enumerate() {
        thumbs[LEFT_THUMB_START + offset] = Some(binding.as_str());
    }
    lines.push(thumbs);

    let widths: [usize; LINE_COLS] = std::array::from_fn(|c| {
        lines
            .iter()
            .filter_map(|line| line[c].map(str::len))
            .max()
            .unwrap_or(0)
    });

    Ok(lines
        .iter()
        .map(|line| render_line(line, &widths, align))
        .collect())
}

fn render_line(cells: &[Option<&str>; LINE_COLS], widths: &[usize; LINE_COLS], align: bool) -> String {
    if !align {
        return cells.iter().flatten().copied().collect::<Vec<_>>().join(" ");
    }

    let mut line = String::new();
    for (c, cell) in cells.iter().enumerate() {
        if c == MAIN_COLS {
            line.push_str(HALF_GAP);
        } else if c > 0 {
            line.push(' ');
        }
        line.push_str(&format!("{:<width$}", cell.unwrap_or(""), width = widths[c]));
    }
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LayoutGrid;

    fn numbered_flat() -> Vec<Binding> {
        let tokens = (0..SLOT_COUNT).map(|i| Binding::new(format!("&p{i}"))).collect();
        flatten(&LayoutGrid::from_positional(tokens).unwrap())
    }

    fn tokens_of(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .flat_map(|line| line.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_render_lines_preserve_order() {
        let flat = numbered_flat();
        for align in [true, false] {
            let lines = render_binding_lines(&flat, align).unwrap();
            assert_eq!(lines.len(), 5);
            let expected: Vec<String> = flat.iter().map(ToString::to_string).collect();
            assert_eq!(tokens_of(&lines), expected);
        }
    }

    #[test]
    fn test_render_lines_alignment() {
        let lines = render_binding_lines(&numbered_flat(), true).unwrap();

        assert_eq!(
            lines[0],
            "&p0  &p1  &p2  &p3  &p4  &p5     &p18 &p19 &p20 &p21 &p22 &p23"
        );
        // Rotation pair sits at the inner columns
        let rot = lines[3].trim_start();
        assert!(rot.starts_with("&p44"));
        assert_eq!(lines[3].find("&p44"), lines[0].find("&p5"));
        assert_eq!(lines[3].find("&p45"), lines[0].find("&p18"));
        // Thumbs start under column 2 of the left half and column 0 of the right
        assert_eq!(lines[4].find("&p36"), lines[0].find("&p2"));
        assert_eq!(lines[4].find("&p40"), lines[0].find("&p18"));
    }

    #[test]
    fn test_render_lines_arity() {
        let flat = numbered_flat();
        assert!(matches!(
            render_binding_lines(&flat[..45], true),
            Err(KeymapError::ArityMismatch { found: 45, .. })
        ));
    }

    #[test]
    fn test_behavior_node() {
        let render = RenderConfig::default();
        let keymap = Keymap::new();
        let generator = KeymapGenerator::new(&keymap, &render);

        let node = generator.standalone_behavior(&SwapTapDance::new("FOO", "&kp A"));
        let expected = "/ {
    behaviors {
        FOO: FOO {
            label = \"ZB_FOO\";
            compatible = \"zmk,behavior-tap-dance\";
            #binding-cells = <0>;
            tapping-term-ms = <200>;
            bindings = <&kp A>, <&mo SWP>;
        };
    };
};
";
        assert_eq!(node, expected);
    }
}
