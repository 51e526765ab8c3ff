// src/render/graphviz.rs

//! Invocation of the external Graphviz `dot` binary.
//!
//! The DOT text is written to the child's stdin and `dot` writes the image
//! file itself (`-o <path>`), so nothing large flows back over a pipe.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::errors::{DagplotError, Result};

/// Raster/vector formats supported via Graphviz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    /// The `-T` argument value understood by `dot`.
    pub fn as_dot_arg(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Render DOT text to an image file at `path` by piping it through `dot`.
///
/// Fails with [`DagplotError::Render`] if the `dot` binary cannot be spawned
/// (Graphviz not installed) or exits non-zero; Graphviz's stderr is included
/// in the error.
pub fn render_image(dot_source: &str, format: ImageFormat, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    debug!(?path, format = format.as_dot_arg(), "invoking graphviz");

    let mut child = Command::new("dot")
        .arg(format!("-T{}", format.as_dot_arg()))
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            DagplotError::Render(format!("failed to run `dot` (is Graphviz installed?): {e}"))
        })?;

    // stdin is piped above, so take() cannot return None here.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(dot_source.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DagplotError::Render(format!(
            "`dot` exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    info!(?path, "wrote image");
    Ok(())
}

/// Write the DOT text itself to a file.
pub fn write_dot(dot_source: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, dot_source)?;
    info!(?path, "wrote DOT file");
    Ok(())
}
