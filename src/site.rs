use std::path;

use kenblog_config::{
    HeadTag, LocaleConfig, Locales, NavItem, Outline, ROOT_LOCALE, Rewrites, SiteConfig,
    ThemeOptions,
};

use crate::Result;

/// The site configuration of the ken blog.
///
/// English pages live under `en/` in the source tree and are served from the site root; Chinese
/// pages keep their `/zh/` prefix.
pub fn construct() -> SiteConfig {
    SiteConfig {
        lang: "en".to_owned(),
        title: "ken".to_owned(),
        description: "ken's blog and portfolio".to_owned(),
        clean_urls: true,
        rewrites: Rewrites::new().with_rule("en/:rest*", ":rest*"),
        locales: Locales::new()
            .with(
                ROOT_LOCALE,
                LocaleConfig {
                    label: "English".to_owned(),
                    lang: "en".to_owned(),
                    link: None,
                    nav: vec![NavItem::new("Home", "/"), NavItem::new("Posts", "/posts/")],
                },
            )
            .with(
                "zh",
                LocaleConfig {
                    label: "简体中文".to_owned(),
                    lang: "zh".to_owned(),
                    link: Some("/zh/".to_owned()),
                    nav: vec![
                        NavItem::new("首页", "/zh/"),
                        NavItem::new("文章", "/zh/posts/"),
                    ],
                },
            ),
        theme: ThemeOptions {
            sidebar: Vec::new(),
            outline: Outline::with_level(2, 3),
            social_links: None,
            footer: None,
        },
        head: vec![
            HeadTag::new("link")
                .with_attr("rel", "icon")
                .with_attr("href", "/favicon.ico"),
        ],
    }
}

/// Resolve the site configuration for a run started in `cwd`.
///
/// An explicit `config` file wins, then a `_kenblog.yml` found from `cwd` upwards, then
/// [`construct`]. Whatever is picked has to pass validation.
pub fn load(config: Option<&path::Path>, cwd: &path::Path) -> Result<SiteConfig> {
    let site = if let Some(config) = config {
        log::debug!("Using config file `{}`", config.display());
        SiteConfig::from_file(config)?
    } else if let Some(found) = SiteConfig::find(cwd) {
        log::debug!("Using config file `{}`", found.display());
        SiteConfig::from_file(found)?
    } else {
        log::debug!(
            "No {} file found in {}, using the built-in config.",
            kenblog_config::CONFIG_FILE,
            cwd.display()
        );
        construct()
    };
    site.validate()?;
    Ok(site)
}
