mod options;

pub use self::options::{RenderFormat, RenderOptions};
use crate::{element::Element, error::Error};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Renders an element.
pub async fn render_element(
    element: &Element,
    options: &RenderOptions,
    writer: &mut (impl AsyncWrite + Unpin),
) -> Result<(), Error> {
    let string = match options.format() {
        RenderFormat::Html => element.outer_html(),
        RenderFormat::Json => serde_json::to_string(element)?,
    };

    render_line(writer, &string).await?;
    writer.flush().await?;

    Ok(())
}

async fn render_line(writer: &mut (impl AsyncWrite + Unpin), string: &str) -> Result<(), Error> {
    writer.write_all(string.as_bytes()).await?;
    writer.write_all(b"\n").await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_element;
    use insta::assert_snapshot;

    async fn render(element: &Element, format: RenderFormat) -> String {
        let mut output = vec![];

        render_element(
            element,
            &RenderOptions::new().set_format(format),
            &mut output,
        )
        .await
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.ends_with('\n'));
        output.trim_end().into()
    }

    #[tokio::test]
    async fn render_html() {
        let element = create_element("p", "note", [("innerText", "foo\nbar")]).unwrap();

        assert_snapshot!(
            render(&element, RenderFormat::Html).await,
            @r#"<p class="note">foo<br>bar</p>"#
        );
    }

    #[tokio::test]
    async fn render_json() {
        let element = create_element("p", "note", [("innerHTML", "<b>hi</b><!--x-->")]).unwrap();

        assert_snapshot!(
            render(&element, RenderFormat::Json).await,
            @r#"{"name":"p","attributes":[["class","note"]],"children":[{"element":{"name":"b","attributes":[],"children":[{"text":"hi"}]}},{"comment":"x"}]}"#
        );
    }
}
