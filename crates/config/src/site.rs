use std::borrow::Cow;

use super::*;

const DEFAULT_LANG: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    /// Language of the default locale.
    pub lang: String,
    pub title: String,
    pub description: String,
    /// Serve `/posts/hello` instead of `/posts/hello.html`.
    pub clean_urls: bool,
    #[serde(skip_serializing_if = "Rewrites::is_empty")]
    pub rewrites: Rewrites,
    #[serde(skip_serializing_if = "Locales::is_empty")]
    pub locales: Locales,
    pub theme: ThemeOptions,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<HeadTag>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_owned(),
            title: Default::default(),
            description: Default::default(),
            clean_urls: false,
            rewrites: Default::default(),
            locales: Default::default(),
            theme: Default::default(),
            head: Default::default(),
        }
    }
}

impl SiteConfig {
    /// Locale serving `path`: the one with the longest matching `link`, else the root locale.
    pub fn locale_for<'s>(&'s self, path: &str) -> Option<(&'s str, &'s LocaleConfig)> {
        let path = if path.starts_with('/') {
            Cow::Borrowed(path)
        } else {
            Cow::Owned(format!("/{path}"))
        };
        let prefixed = self
            .locales
            .iter()
            .filter_map(|(key, locale)| locale.link.as_deref().map(|link| (key, locale, link)))
            .filter(|&(_, _, link)| path.starts_with(link) || *path == *link.trim_end_matches('/'))
            .max_by_key(|(_, _, link)| link.len())
            .map(|(key, locale, _)| (key, locale));
        prefixed.or_else(|| {
            self.locales
                .get(ROOT_LOCALE)
                .map(|locale| (ROOT_LOCALE, locale))
        })
    }

    /// Public form of a source path after `rewrites`.
    pub fn rewrite<'p>(&self, path: &'p str) -> Result<Cow<'p, str>> {
        self.rewrites.apply(path)
    }

    /// `<head>` tags as HTML, one per line.
    pub fn head_html(&self) -> String {
        itertools::join(self.head.iter().map(HeadTag::to_html), "\n")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn bilingual() -> SiteConfig {
        SiteConfig {
            locales: Locales::new()
                .with(
                    ROOT_LOCALE,
                    LocaleConfig {
                        label: "English".into(),
                        lang: "en".into(),
                        ..Default::default()
                    },
                )
                .with(
                    "zh",
                    LocaleConfig {
                        label: "简体中文".into(),
                        lang: "zh".into(),
                        link: Some("/zh/".into()),
                        ..Default::default()
                    },
                ),
            ..Default::default()
        }
    }

    #[test]
    fn locale_for_prefixed_path() {
        let site = bilingual();
        let (key, locale) = site.locale_for("/zh/posts/").unwrap();
        assert_eq!(key, "zh");
        assert_eq!(locale.lang, "zh");
    }

    #[test]
    fn locale_for_relative_and_bare_prefix() {
        let site = bilingual();
        assert_eq!(site.locale_for("zh/posts").unwrap().0, "zh");
        assert_eq!(site.locale_for("/zh").unwrap().0, "zh");
    }

    #[test]
    fn locale_for_falls_back_to_root() {
        let site = bilingual();
        assert_eq!(site.locale_for("/posts/").unwrap().0, ROOT_LOCALE);
        assert_eq!(site.locale_for("/zhuyin/").unwrap().0, ROOT_LOCALE);
    }

    #[test]
    fn locale_for_without_locales() {
        let site = SiteConfig::default();
        assert_eq!(site.locale_for("/posts/"), None);
    }

    #[test]
    fn head_html_joins_lines() {
        let site = SiteConfig {
            head: vec![
                HeadTag::new("link")
                    .with_attr("rel", "icon")
                    .with_attr("href", "/favicon.ico"),
                HeadTag::new("meta")
                    .with_attr("name", "theme-color")
                    .with_attr("content", "#3c8772"),
            ],
            ..Default::default()
        };
        assert_eq!(
            site.head_html(),
            "<link rel=\"icon\" href=\"/favicon.ico\">\n<meta name=\"theme-color\" content=\"#3c8772\">"
        );
    }
}
