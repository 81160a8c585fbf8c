use std::sync::LazyLock;

use log::{debug, info};
use regex::{Match, Regex};

/// `.st0{fill:#RRGGBB` as emitted by Illustrator-style exports; whatever
/// follows the digits (`}` or `;}`) is left alone.
static STYLE_FILL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\.st0\{fill:\s*#([0-9a-fA-F]{6})").expect("style fill pattern is valid")
});

/// `path fill="#RRGGBB"`; fills on other elements are backgrounds, not glyphs.
static ATTRIBUTE_FILL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r##"path fill="#([0-9a-fA-F]{6})""##).expect("attribute fill pattern is valid")
});

/// Which authoring convention carried the fill colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillKind {
	Style,
	Attribute,
}

/// Locate the fill colour that [`replace_svg_colour`] would rewrite.
///
/// The earliest match of either form wins; the style form is preferred only
/// when both start at the same offset.
pub fn find_fill_colour(svg: &str) -> Option<(FillKind, &str)> {
	find_fill(svg).map(|(kind, found)| (kind, found.as_str()))
}

/// First match of `pattern` as `(start of whole match, captured digits)`.
fn first_match<'t>(pattern: &Regex, svg: &'t str) -> Option<(usize, Match<'t>)> {
	let caps = pattern.captures(svg)?;
	let start = caps.get(0)?.start();
	caps.get(1).map(|digits| (start, digits))
}

fn find_fill(svg: &str) -> Option<(FillKind, Match<'_>)> {
	let style = first_match(&STYLE_FILL, svg);
	let attribute = first_match(&ATTRIBUTE_FILL, svg);
	match (style, attribute) {
		(Some((style_at, digits)), Some((attribute_at, _))) if style_at <= attribute_at => {
			Some((FillKind::Style, digits))
		}
		(_, Some((_, digits))) => Some((FillKind::Attribute, digits)),
		(Some((_, digits)), None) => Some((FillKind::Style, digits)),
		(None, None) => None,
	}
}

/// Replace the first fill colour of an SVG document with `colour`.
///
/// `colour` may carry a leading `#`. Only the six hex digits of a single
/// match are replaced; text without a recognised fill is returned as is.
pub fn replace_svg_colour(svg: &str, colour: &str) -> String {
	let colour = colour.strip_prefix('#').unwrap_or(colour);
	let Some((kind, found)) = find_fill(svg) else {
		debug!("no fill colour found, leaving icon unchanged");
		return svg.to_string();
	};

	info!("replacing colour #{} with #{colour} ({kind:?} fill)", found.as_str());

	let mut recoloured = String::with_capacity(svg.len() - found.len() + colour.len());
	recoloured.push_str(&svg[..found.start()]);
	recoloured.push_str(colour);
	recoloured.push_str(&svg[found.end()..]);
	recoloured
}
