#![doc = include_str!("../README.md")]

mod attribute;
mod class_list;
mod classes;
mod document;
mod element;
mod element_builder;
mod error;
mod html_parser;
mod render;
mod serializer;
mod value;

pub use self::{
    attribute::{Attribute, Attributes, INNER_HTML, INNER_TEXT},
    class_list::ClassList,
    classes::Classes,
    document::Document,
    element::{Element, Node},
    element_builder::{ElementBuilder, create_element},
    error::Error,
    html_parser::parse_fragment,
    render::{RenderFormat, RenderOptions, render_element},
};
