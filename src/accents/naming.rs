use std::path::Path;

const SVG_EXTENSION: &str = ".svg";

/// Turn an accent key into a filesystem-safe token.
///
/// Every run of whitespace collapses to a single `-`.
pub fn sanitize_accent_name(accent: &str) -> String {
	let mut token = String::with_capacity(accent.len());
	let mut in_whitespace = false;
	for ch in accent.chars() {
		if ch.is_whitespace() {
			if !in_whitespace {
				token.push('-');
			}
			in_whitespace = true;
		} else {
			token.push(ch);
			in_whitespace = false;
		}
	}
	token
}

/// Derive the accent variant of an icon file name.
///
/// Only the first `.svg` is replaced; names without it come back unchanged.
pub fn accent_file_name(name: &str, token: &str) -> String {
	name.replacen(SVG_EXTENSION, &format!(".accent.{token}{SVG_EXTENSION}"), 1)
}

/// Derive the file name of an accent manifest from the base manifest path,
/// e.g. `material-icons.json` becomes `material-icons-blue.json`.
pub fn theme_file_name(base: &Path, token: &str) -> String {
	let stem = base
		.file_stem()
		.and_then(|stem| stem.to_str())
		.unwrap_or("theme");
	match base.extension().and_then(|ext| ext.to_str()) {
		Some(ext) => format!("{stem}-{token}.{ext}"),
		None => format!("{stem}-{token}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whitespace_runs_become_single_hyphens() {
		assert_eq!(sanitize_accent_name("Ocean Blue"), "Ocean-Blue");
		assert_eq!(sanitize_accent_name("Deep \t Sea  Green"), "Deep-Sea-Green");
	}

	#[test]
	fn names_without_whitespace_are_unchanged() {
		assert_eq!(sanitize_accent_name("blue"), "blue");
		assert_eq!(sanitize_accent_name(""), "");
	}

	#[test]
	fn edge_whitespace_is_kept_as_hyphens() {
		assert_eq!(sanitize_accent_name(" blue "), "-blue-");
	}

	#[test]
	fn accent_suffix_is_inserted_before_extension() {
		assert_eq!(
			accent_file_name("folder.svg", "Ocean-Blue"),
			"folder.accent.Ocean-Blue.svg"
		);
		assert_eq!(
			accent_file_name("./../icons/folder-open.svg", "blue"),
			"./../icons/folder-open.accent.blue.svg"
		);
	}

	#[test]
	fn only_the_first_svg_is_replaced() {
		assert_eq!(
			accent_file_name("a.svg.svg", "red"),
			"a.accent.red.svg.svg"
		);
	}

	#[test]
	fn names_without_svg_are_returned_unchanged() {
		assert_eq!(accent_file_name("folder.png", "red"), "folder.png");
	}

	#[test]
	fn theme_names_carry_the_accent_token() {
		assert_eq!(
			theme_file_name(Path::new("dist/material-icons.json"), "Ocean-Blue"),
			"material-icons-Ocean-Blue.json"
		);
		assert_eq!(theme_file_name(Path::new("icons"), "red"), "icons-red");
	}
}
