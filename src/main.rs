#![doc = include_str!("../README.md")]

use aztools::{Attributes, Classes, Document, ElementBuilder, RenderFormat, RenderOptions};
use clap::Parser;
use colored::Colorize;
use core::error::Error;
use log::{LevelFilter, debug};
use serde_json::Value;
use std::process::exit;
use tokio::io::stdout;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// A tag name.
    tag: String,
    /// Adds a class.
    #[arg(short, long, conflicts_with = "classes")]
    class: Vec<String>,
    /// Sets an attribute, or content with the `innerHTML` and `innerText` names.
    #[arg(short, long, value_name = "NAME=VALUE", value_parser = parse_attribute, conflicts_with = "attributes")]
    attribute: Vec<(String, String)>,
    /// Sets classes as a JSON value.
    #[arg(long, value_name = "JSON")]
    classes: Option<String>,
    /// Sets attributes as a JSON value.
    #[arg(long, value_name = "JSON")]
    attributes: Option<String>,
    /// Sets an output format.
    #[arg(long, default_value = "html")]
    format: RenderFormat,
    /// Becomes verbose.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("{}", error.to_string().red());
        exit(1)
    }
}

async fn run() -> Result<(), Box<dyn Error>> {
    let Arguments {
        tag,
        class,
        attribute,
        classes,
        attributes,
        format,
        verbose,
    } = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let builder = ElementBuilder::new(Document::new());

    let element = if classes.is_some() || attributes.is_some() {
        debug!("building <{tag}> from JSON arguments");

        builder.build_value(
            &tag,
            &parse_json(classes.as_deref())?.unwrap_or_else(|| class.into()),
            &parse_json(attributes.as_deref())?.unwrap_or_else(|| {
                Value::Object(
                    attribute
                        .into_iter()
                        .map(|(name, value)| (name, value.into()))
                        .collect(),
                )
            }),
        )?
    } else {
        builder.build(
            &tag,
            &Classes::from(class),
            &attribute.into_iter().collect::<Attributes>(),
        )?
    };

    debug!(
        "built <{}> with {} attributes",
        element.name(),
        element.attributes().len()
    );

    aztools::render_element(
        &element,
        &RenderOptions::new().set_format(format),
        &mut stdout(),
    )
    .await?;

    Ok(())
}

fn parse_attribute(argument: &str) -> Result<(String, String), String> {
    argument
        .split_once('=')
        .map(|(name, value)| (name.into(), value.into()))
        .ok_or_else(|| format!("attribute must be NAME=VALUE: {argument}"))
}

fn parse_json(argument: Option<&str>) -> Result<Option<Value>, serde_json::Error> {
    argument.map(serde_json::from_str).transpose()
}
