mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use icon_accents::logging;
use workflow::AccentWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbosity());

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = AccentWorkflow::from_config(resolved)?;

	if cli.list_accents {
		for (name, colour) in workflow.palette().iter() {
			println!("{name}\t{colour}");
		}
		return Ok(());
	}

	run_generation(cli.output, workflow)
}

/// Run the generation workflow and print the report in the chosen format.
fn run_generation(format: OutputFormat, workflow: AccentWorkflow) -> Result<()> {
	let report = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
