//! Emit - writing a resolved runtime configuration to disk.
//!
//! Output layout is `<out_dir>/<target>/<profile>/`: the runtime
//! description document verbatim as `runtime.xml`, plus a `target.toml`
//! summary (triple, capabilities, sources, system spec, build flags) for
//! the downstream compiler invocation step to consume.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::generator::resolve::RuntimeConfig;
use crate::util::fs::{ensure_dir, write_string};

/// File name of the emitted runtime description.
pub const RUNTIME_XML_NAME: &str = "runtime.xml";

/// File name of the emitted configuration summary.
pub const SUMMARY_NAME: &str = "target.toml";

/// Write a resolved configuration under `out_dir`.
///
/// Returns the directory the pair was written to.
pub fn emit(config: &RuntimeConfig, out_dir: &Path) -> Result<PathBuf> {
    let dir = out_dir.join(&config.target).join(&config.profile);
    ensure_dir(&dir)?;

    write_string(&dir.join(RUNTIME_XML_NAME), &config.runtime_xml).with_context(|| {
        format!(
            "failed to emit runtime description for `{}`/`{}`",
            config.target, config.profile
        )
    })?;

    let summary = toml::to_string_pretty(config).with_context(|| {
        format!(
            "failed to serialize configuration summary for `{}`/`{}`",
            config.target, config.profile
        )
    })?;
    write_string(&dir.join(SUMMARY_NAME), &summary)?;

    tracing::info!(
        "emitted `{}`/`{}` to {}",
        config.target,
        config.profile,
        dir.display()
    );

    Ok(dir)
}
