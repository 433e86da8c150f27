use std::io::Write;

use console::style;

use crate::error::Result;
use crate::resolver::VersionInfo;

/// Format and print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Render the version info as JSON indented by two spaces.
pub fn format_version_info(info: &VersionInfo) -> Result<String> {
    Ok(serde_json::to_string_pretty(info)?)
}

/// Print the version info JSON document to `out`.
pub fn write_version_info<W: Write>(out: &mut W, info: &VersionInfo) -> Result<()> {
    writeln!(out, "{}", format_version_info(info)?)?;
    Ok(())
}
