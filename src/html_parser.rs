use crate::element::{Element, Node};
use html5ever::{LocalName, Namespace, QualName, tendril::TendrilSink};
use log::trace;
use markup5ever_rcdom::{NodeData, RcDom};

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Parses an HTML fragment in the context of an element.
///
/// Doctypes and processing instructions are dropped.
pub fn parse_fragment(context: &str, markup: &str) -> Vec<Node> {
    trace!("parsing a fragment in <{context}>");

    let dom = html5ever::parse_fragment(
        RcDom::default(),
        Default::default(),
        QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from(context),
        ),
        vec![],
        false,
    )
    .one(markup);

    // The parser wraps fragment nodes in a synthetic root element.
    let roots = dom.document.children.borrow();

    roots
        .iter()
        .flat_map(|root| convert_children(root))
        .collect()
}

fn convert_children(node: &markup5ever_rcdom::Node) -> Vec<Node> {
    node.children
        .borrow()
        .iter()
        .flat_map(|node| convert_node(node))
        .collect()
}

fn convert_node(node: &markup5ever_rcdom::Node) -> Option<Node> {
    match &node.data {
        NodeData::Element {
            name,
            attrs,
            template_contents,
            ..
        } => Some(
            Element::new(
                name.local.to_string(),
                attrs
                    .borrow()
                    .iter()
                    .map(|attribute| {
                        (
                            if let Some(prefix) = &attribute.name.prefix {
                                format!("{prefix}:{}", attribute.name.local)
                            } else {
                                attribute.name.local.to_string()
                            },
                            attribute.value.to_string(),
                        )
                    })
                    .collect(),
                if let Some(contents) = template_contents.borrow().as_ref() {
                    convert_children(contents)
                } else {
                    convert_children(node)
                },
            )
            .into(),
        ),
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Comment { contents } => Some(Node::Comment(contents.to_string())),
        NodeData::Document | NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {
            None
        }
    }
}
