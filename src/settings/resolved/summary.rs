use super::{ResolvedConfig, Selection};

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Icons root: {}", config.icons_root.display());
	println!("  Themes root: {}", config.themes_root.display());
	println!("  Base theme: {}", config.base_theme.display());
	println!("  Palette: {}", config.palette.display());
	match &config.selection {
		Selection::Icons(icons) => println!("  Accentable icons: {}", icons.join(", ")),
		Selection::Prefix(prefix) => println!("  Accentable icons: ids starting with '{prefix}'"),
	}
	println!(
		"  Write manifests: {}",
		bool_to_word(config.write_manifests)
	);
	match &config.accents {
		Some(accents) => println!("  Accents: {}", accents.join(", ")),
		None => println!("  Accents: (all)"),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
