//! HTML output
//!
//! The glyph blob is embedded verbatim in a `<pre>` element of a fixed
//! black page with white monospace text.

use crate::IoResult;
use std::path::Path;

/// File name written when no output path is given.
pub const DEFAULT_OUTPUT: &str = "ascii-result.html";

const HEAD: &str = r#"
	<!DOCTYPE html>
	<html lang="en">
	<head>
		<meta charset="UTF-8">
		<meta name="viewport" content="width=device-width, initial-scale=0.4">
		<title>RaiMei</title>
	</head>
	<body >
		<pre>"#;

const TAIL: &str = r#"</pre>
	</body>
	<style>
		body{
			background: black;
			margin: 0px;
			padding: 0px;
			display: flex;
			justify-content: center;
			height: 100vh;
  			width: 100vw;
		}

		pre {
			background: inherit;
			color: white;
			font-family: monospace;
			letter-spacing: 0.5em;
			font-size: 0.4em;

		}

		pre .height-scaling {
			letter-spacing: 0.2vh;
			font-size: 0.4vh;
		}

	</style>
	</html>"#;

/// Wrap a flattened glyph grid in the display page.
///
/// The blob is not escaped: color-annotated cells carry `<span>` markup.
pub fn html_document(blob: &str) -> String {
    let mut doc = String::with_capacity(HEAD.len() + blob.len() + TAIL.len());
    doc.push_str(HEAD);
    doc.push_str(blob);
    doc.push_str(TAIL);
    doc
}

/// Write the display page for `blob` to `path`.
pub fn write_html<P: AsRef<Path>>(path: P, blob: &str) -> IoResult<()> {
    let path = path.as_ref();
    std::fs::write(path, html_document(blob))?;
    log::debug!("wrote {} ({} bytes of glyphs)", path.display(), blob.len());
    Ok(())
}
