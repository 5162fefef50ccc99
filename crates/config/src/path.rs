//! Shape checks for the paths, links and names a site configuration carries.

static ELEMENT_NAME: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r"^[a-zA-Z][a-zA-Z0-9-]*$").unwrap());

static ATTRIBUTE_NAME: once_cell::sync::Lazy<regex::Regex> =
    once_cell::sync::Lazy::new(|| regex::Regex::new(r#"^[^\s"'>/=\x00-\x1f]+$"#).unwrap());

const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];

/// Whether `link` can be used as a navigation target.
///
/// Site links are absolute (`/posts/`); anything else has to be an external URL.
pub fn is_link(link: &str) -> bool {
    if link.is_empty() || link.chars().any(char::is_whitespace) {
        return false;
    }
    if let Some(rest) = link.strip_prefix('/') {
        return !rest.starts_with('/');
    }
    EXTERNAL_SCHEMES
        .iter()
        .any(|scheme| link.len() > scheme.len() && link.starts_with(scheme))
}

/// Whether `link` can prefix every page of a locale, e.g. `/zh/`.
pub fn is_locale_prefix(link: &str) -> bool {
    link.len() > 1 && link.starts_with('/') && link.ends_with('/') && is_link(link)
}

/// Whether `name` is a usable HTML element name.
pub fn is_element_name(name: &str) -> bool {
    ELEMENT_NAME.is_match(name)
}

/// Whether `name` is a usable HTML attribute name.
pub fn is_attribute_name(name: &str) -> bool {
    ATTRIBUTE_NAME.is_match(name)
}

/// Split a relative path into its `/`-separated segments.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/')
}
