//! Code synthesis for the current playground configuration.

use prism_pigment::StyleOption;

use crate::types::PlaygroundConfig;

/// Component tag used in generated markup.
pub const COMPONENT_TAG: &str = "Button";

/// Render a configuration as a component invocation.
///
/// Layout is fixed: one attribute per line in the order color, size,
/// variant, then the text as the indented body. Values are inserted
/// verbatim.
pub fn generate_code(config: &PlaygroundConfig) -> String {
    let mut code = String::with_capacity(96 + config.text.len());

    code.push('<');
    code.push_str(COMPONENT_TAG);
    code.push('\n');

    push_attribute(&mut code, "color", config.params.color.as_str());
    push_attribute(&mut code, "size", config.params.size.as_str());
    push_attribute(&mut code, "variant", config.params.variant.as_str());

    code.push_str(">\n  ");
    code.push_str(&config.text);
    code.push_str("\n</");
    code.push_str(COMPONENT_TAG);
    code.push('>');

    code
}

fn push_attribute(code: &mut String, name: &str, value: &str) {
    code.push_str("  ");
    code.push_str(name);
    code.push_str("=\"");
    code.push_str(value);
    code.push_str("\"\n");
}
