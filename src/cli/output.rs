use anyhow::Result;
use icon_accents::GenerationReport;

/// Print a plain-text representation of the generation report.
pub(crate) fn print_plain(report: &GenerationReport) {
	for accent in &report.accents {
		println!(
			"{}: {} icon(s) -> {}{}",
			accent.accent,
			accent.written.len(),
			accent.manifest.display(),
			if accent.persisted { "" } else { " (not written)" }
		);
		for id in &accent.missing {
			println!("  not found: {id}");
		}
	}
	println!(
		"Generated {} accent(s), {} icon(s)",
		report.accents.len(),
		report.icons_written()
	);
}

/// Format the generation report as a JSON string.
pub(crate) fn format_report_json(report: &GenerationReport) -> Result<String> {
	Ok(serde_json::to_string_pretty(report)?)
}

/// Print the JSON representation of the generation report.
pub(crate) fn print_json(report: &GenerationReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
