use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `icon-accents` binary.
#[derive(Parser, Debug)]
#[command(
    name = "icon-accents",
    version,
    long_version = long_version(),
    about = "Generate accent-coloured icon variants for an icon theme",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ICON_ACCENTS_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long = "icons-root",
        value_name = "PATH",
        help = "Directory that icon paths are relative to (default: icons)"
    )]
    pub(crate) icons_root: Option<PathBuf>,
    #[arg(
        long = "themes-root",
        value_name = "PATH",
        help = "Directory generated theme manifests go to (default: dist)"
    )]
    pub(crate) themes_root: Option<PathBuf>,
    #[arg(
        short = 'b',
        long = "base-theme",
        value_name = "FILE",
        help = "Base icon theme manifest (default: <themes-root>/material-icons.json)"
    )]
    pub(crate) base_theme: Option<PathBuf>,
    #[arg(
        short = 'p',
        long = "palette",
        value_name = "FILE",
        help = "JSON file with the `accents` colour table (default: defaults.json)"
    )]
    pub(crate) palette: Option<PathBuf>,
    #[arg(
        short = 'a',
        long = "accent",
        value_name = "NAME",
        help = "Only generate the named accent; repeat for more (default: all)"
    )]
    pub(crate) accents: Option<Vec<String>>,
    #[arg(
        short = 'i',
        long = "icon",
        value_name = "ID",
        help = "Icon definition to accent; repeat for more (default: prefix match)"
    )]
    pub(crate) icons: Option<Vec<String>>,
    #[arg(
        long = "prefix",
        value_name = "PREFIX",
        help = "Accent every icon id starting with PREFIX (default: _folder)"
    )]
    pub(crate) prefix: Option<String>,
    #[arg(
        short = 'w',
        long = "write-manifests",
        value_parser = BoolishValueParser::new(),
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Write the generated theme manifests to disk (default: disabled)"
    )]
    pub(crate) write_manifests: Option<bool>,
    #[arg(
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-accents",
        help = "List the accents in the palette and exit (default: disabled)"
    )]
    pub(crate) list_accents: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity; repeat for more"
    )]
    pub(crate) verbose: u8,
    #[arg(
        short = 'q',
        long = "quiet",
        action = ArgAction::Count,
        help = "Decrease log verbosity; repeat for less"
    )]
    pub(crate) quiet: u8,
}

impl CliArgs {
    /// Net verbosity requested on the command line.
    pub(crate) fn verbosity(&self) -> i8 {
        let verbose = i8::try_from(self.verbose).unwrap_or(i8::MAX);
        let quiet = i8::try_from(self.quiet).unwrap_or(i8::MAX);
        verbose.saturating_sub(quiet)
    }
}
