use super::*;

const MAX_HEADING_LEVEL: u8 = 6;

fn invalid(reason: &'static str, field: String, value: impl Into<String>) -> Status {
    let value = value.into();
    Status::new(reason).context_with(|c| {
        c.insert("Field", field.clone())
            .insert("Value", value.clone())
    })
}

impl SiteConfig {
    /// Check the configuration's invariants, failing on the first violation.
    ///
    /// The error names the offending field, e.g. `locales.zh.nav[1].link`.
    pub fn validate(&self) -> Result<()> {
        if self.lang.trim().is_empty() {
            return Err(invalid("Language is empty", "lang".to_owned(), &self.lang));
        }
        validate_rewrites(&self.rewrites)?;
        validate_locales(&self.locales)?;
        validate_theme(&self.theme)?;
        for (i, tag) in self.head.iter().enumerate() {
            validate_head_tag(tag, &format!("head[{i}]"))?;
        }
        log::trace!(
            "validated {} locales, {} rewrites, {} head tags",
            self.locales.len(),
            self.rewrites.len(),
            self.head.len()
        );
        Ok(())
    }
}

fn validate_rewrites(rewrites: &Rewrites) -> Result<()> {
    for (pattern, target) in rewrites.iter() {
        RewriteRule::new(pattern, target)
            .map_err(|s| s.context_with(|c| c.insert("Field", format!("rewrites.{pattern}"))))?;
    }
    Ok(())
}

fn validate_locales(locales: &Locales) -> Result<()> {
    if let Some(key) = itertools::Itertools::duplicates(locales.keys()).next() {
        return Err(invalid("Locale key is repeated", "locales".to_owned(), key));
    }
    for (key, locale) in locales.iter() {
        if key.trim().is_empty() {
            return Err(invalid("Locale key is empty", "locales".to_owned(), key));
        }
        let field = format!("locales.{key}");
        if locale.lang.trim().is_empty() {
            return Err(invalid(
                "Locale language is empty",
                format!("{field}.lang"),
                &locale.lang,
            ));
        }
        if let Some(link) = &locale.link {
            if !path::is_locale_prefix(link) {
                return Err(invalid(
                    "Locale link must start and end with `/`",
                    format!("{field}.link"),
                    link,
                ));
            }
        }
        for (i, item) in locale.nav.iter().enumerate() {
            let field = format!("{field}.nav[{i}]");
            validate_entry(&item.text, Some(&item.link), &field)?;
        }
    }
    Ok(())
}

fn validate_theme(theme: &ThemeOptions) -> Result<()> {
    let (min, max) = (theme.outline.min(), theme.outline.max());
    if min == 0 || max > MAX_HEADING_LEVEL || max < min {
        return Err(invalid(
            "Outline level must be an ascending pair of heading levels",
            "theme.outline.level".to_owned(),
            format!("[{min}, {max}]"),
        ));
    }
    for (i, item) in theme.sidebar.iter().enumerate() {
        validate_sidebar_item(item, &format!("theme.sidebar[{i}]"))?;
    }
    for (i, social) in theme.social_links.iter().flatten().enumerate() {
        let field = format!("theme.social_links[{i}]");
        validate_entry(&social.icon, Some(&social.link), &field)?;
    }
    Ok(())
}

fn validate_sidebar_item(item: &SidebarItem, field: &str) -> Result<()> {
    validate_entry(&item.text, item.link.as_deref(), field)?;
    for (i, child) in item.items.iter().enumerate() {
        validate_sidebar_item(child, &format!("{field}.items[{i}]"))?;
    }
    Ok(())
}

fn validate_entry(text: &str, link: Option<&str>, field: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(invalid("Entry text is empty", format!("{field}.text"), text));
    }
    if let Some(link) = link {
        if !path::is_link(link) {
            return Err(invalid("Entry link is invalid", format!("{field}.link"), link));
        }
    }
    Ok(())
}

fn validate_head_tag(tag: &HeadTag, field: &str) -> Result<()> {
    if !path::is_element_name(&tag.tag) {
        return Err(invalid("Head tag name is invalid", format!("{field}.tag"), &tag.tag));
    }
    for name in tag.attrs.keys() {
        if !path::is_attribute_name(name) {
            return Err(invalid(
                "Head tag attribute name is invalid",
                format!("{field}.attrs"),
                name,
            ));
        }
    }
    if let Some(name) = itertools::Itertools::duplicates(tag.attrs.keys()).next() {
        return Err(invalid(
            "Head tag attribute is repeated",
            format!("{field}.attrs"),
            name,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            lang: "en".into(),
            title: "ken".into(),
            rewrites: Rewrites::new().with_rule("en/:rest*", ":rest*"),
            locales: Locales::new()
                .with(
                    ROOT_LOCALE,
                    LocaleConfig {
                        label: "English".into(),
                        lang: "en".into(),
                        nav: vec![NavItem::new("Home", "/")],
                        ..Default::default()
                    },
                )
                .with(
                    "zh",
                    LocaleConfig {
                        label: "简体中文".into(),
                        lang: "zh".into(),
                        link: Some("/zh/".into()),
                        nav: vec![NavItem::new("首页", "/zh/"), NavItem::new("文章", "/zh/posts/")],
                    },
                ),
            theme: ThemeOptions {
                outline: Outline::with_level(2, 3),
                ..Default::default()
            },
            head: vec![
                HeadTag::new("link")
                    .with_attr("rel", "icon")
                    .with_attr("href", "/favicon.ico"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn valid_site() {
        site().validate().unwrap();
    }

    #[test]
    fn default_site_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn outline_ascending() {
        let mut site = site();
        site.theme.outline = Outline::with_level(2, 3);
        assert!(site.validate().is_ok());

        site.theme.outline = Outline::with_level(3, 3);
        assert!(site.validate().is_ok());
    }

    #[test]
    fn outline_descending() {
        let mut site = site();
        site.theme.outline = Outline::with_level(3, 2);
        let err = site.validate().unwrap_err().to_string();
        assert!(err.contains("Field: theme.outline.level"), "{err}");
        assert!(err.contains("Value: [3, 2]"), "{err}");
    }

    #[test]
    fn outline_out_of_heading_range() {
        let mut site = site();
        site.theme.outline = Outline::with_level(0, 2);
        assert!(site.validate().is_err());

        site.theme.outline = Outline::with_level(2, 7);
        assert!(site.validate().is_err());
    }

    #[test]
    fn repeated_locale_key() {
        let mut site = site();
        site.locales.push(
            "zh",
            LocaleConfig {
                label: "繁體中文".into(),
                lang: "zh-TW".into(),
                ..Default::default()
            },
        );
        let err = site.validate().unwrap_err().to_string();
        assert!(err.starts_with("Locale key is repeated"), "{err}");
        assert!(err.contains("Field: locales\n"), "{err}");
        assert!(err.contains("Value: zh"), "{err}");
    }

    #[test]
    fn empty_locale_key() {
        let mut site = site();
        site.locales.push(
            "",
            LocaleConfig {
                label: "?".into(),
                lang: "fr".into(),
                ..Default::default()
            },
        );
        assert!(site.validate().is_err());
    }

    #[test]
    fn bad_locale_link() {
        let mut site = site();
        site.locales.push(
            "ja",
            LocaleConfig {
                label: "日本語".into(),
                lang: "ja".into(),
                link: Some("/ja".into()),
                ..Default::default()
            },
        );
        assert!(site.validate().is_err());
    }

    #[test]
    fn empty_nav_text() {
        let mut site = site();
        site.locales.push(
            "ja",
            LocaleConfig {
                label: "日本語".into(),
                lang: "ja".into(),
                link: Some("/ja/".into()),
                nav: vec![NavItem::new(" ", "/ja/")],
            },
        );
        assert!(site.validate().is_err());
    }

    #[test]
    fn bad_nav_link() {
        let mut site = site();
        site.locales.push(
            "ja",
            LocaleConfig {
                label: "日本語".into(),
                lang: "ja".into(),
                link: Some("/ja/".into()),
                nav: vec![NavItem::new("ホーム", "ja/")],
            },
        );
        let err = site.validate().unwrap_err().to_string();
        assert!(err.contains("Field: locales.ja.nav[0].link"), "{err}");
        assert!(err.contains("Value: ja/"), "{err}");
    }

    #[test]
    fn bad_second_nav_link_is_named() {
        let mut site = site();
        site.locales = Locales::new().with(
            "zh",
            LocaleConfig {
                label: "简体中文".into(),
                lang: "zh".into(),
                link: Some("/zh/".into()),
                nav: vec![NavItem::new("首页", "/zh/"), NavItem::new("文章", "zh/posts/")],
            },
        );
        let err = site.validate().unwrap_err().to_string();
        assert!(err.starts_with("Entry link is invalid"), "{err}");
        assert!(err.contains("Field: locales.zh.nav[1].link"), "{err}");
        assert!(err.contains("Value: zh/posts/"), "{err}");
    }

    #[test]
    fn bad_nested_sidebar_link() {
        let mut site = site();
        site.theme.sidebar = vec![SidebarItem {
            text: "Posts".into(),
            items: vec![SidebarItem {
                text: "Hello".into(),
                link: Some("posts/hello".into()),
                ..Default::default()
            }],
            ..Default::default()
        }];
        assert!(site.validate().is_err());
    }

    #[test]
    fn malformed_rewrite() {
        let mut site = site();
        site.rewrites = Rewrites::new().with_rule("/en/:rest*", ":rest*");
        let err = site.validate().unwrap_err().to_string();
        assert!(err.contains("Field: rewrites./en/:rest*"), "{err}");
    }

    #[test]
    fn head_tag_name_required() {
        let mut site = site();
        site.head.push(HeadTag::new("").with_attr("name", "x"));
        let err = site.validate().unwrap_err().to_string();
        assert!(err.contains("Field: head[1].tag"), "{err}");
    }

    #[test]
    fn head_tag_attribute_names() {
        let mut site = site();
        site.head.push(HeadTag::new("meta").with_attr("na me", "x"));
        assert!(site.validate().is_err());
    }

    #[test]
    fn head_tag_repeated_attribute() {
        let mut site = site();
        site.head.push(
            HeadTag::new("meta")
                .with_attr("name", "x")
                .with_attr("name", "y"),
        );
        assert!(site.validate().is_err());
    }
}
