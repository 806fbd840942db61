use crate::element::{Element, Node};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe",
    "noembed",
    "noframes",
    "noscript",
    "plaintext",
    "script",
    "style",
    "xmp",
];

pub fn serialize_element(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(element.name());

    for (name, value) in element.attributes() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        escape(value, true, output);
        output.push('"');
    }

    output.push('>');

    if is_void(element) {
        return;
    }

    serialize_children(element, output);

    output.push_str("</");
    output.push_str(element.name());
    output.push('>');
}

pub fn serialize_children(element: &Element, output: &mut String) {
    if is_void(element) {
        return;
    }

    let raw = RAW_TEXT_ELEMENTS.contains(&element.name());

    for child in element.children() {
        match child {
            Node::Element(element) => serialize_element(element, output),
            Node::Text(text) if raw => output.push_str(text),
            Node::Text(text) => escape(text, false, output),
            Node::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
        }
    }
}

fn is_void(element: &Element) -> bool {
    VOID_ELEMENTS.contains(&element.name())
}

fn escape(text: &str, attribute: bool, output: &mut String) {
    for character in text.chars() {
        match character {
            '&' => output.push_str("&amp;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            '"' if attribute => output.push_str("&quot;"),
            '<' if !attribute => output.push_str("&lt;"),
            '>' if !attribute => output.push_str("&gt;"),
            character => output.push(character),
        }
    }
}
