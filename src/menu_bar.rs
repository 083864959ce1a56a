//! Menu bars: ordered groups of sibling menus, rendered as `<ul>`
//! lists. A bar is either the top-level one handed to the
//! configuration block, or the one nested inside a menu.

use anyhow::Result;
use kstring::KString;
use thiserror::Error;

use crate::{content_for::ContentSlots,
            element::{content_tag, HtmlAttrs},
            menu::{Menu, MenuArgs},
            routing::RequestContext};

/// The css class given to every menu bar (plus `menubar-<level>`).
pub const MENU_BAR_CLASS: &str = "menubar";
/// The css class given to every menu (plus `menu-<level>`).
pub const MENU_CLASS: &str = "menu";
/// The css class marking a selected menu or menu bar.
pub const SELECTED_CLASS: &str = "selected";
/// The css class for the last menu in a bar.
pub const LAST_CLASS: &str = "last";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown menu bar option {:?}", .0.as_str())]
    UnknownKey(KString),
    #[error("invalid value {:?} for menu bar option {:?}", .value.as_str(), .key.as_str())]
    InvalidValue { key: KString, value: KString },
}

/// Menu bar configuration. Validated once at construction, immutable
/// afterwards, and inherited by every bar nested below the one it
/// was given to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Derive element ids like "nav-about_us-contact" wherever an
    /// ancestor id is available.
    pub auto_set_ids: bool,
    /// Render the sub-menu bar of a selected menu inside its parent
    /// menu's markup; `false` detaches it into a `ContentSlots`
    /// entry for the host template to place.
    pub attach_active_submenus: bool,
    /// Base name for detachment slot keys,
    /// `"<content_for>_level_<depth>"`.
    pub content_for: KString,
    /// Named route lookup order: parent-qualified name before the
    /// bare name?
    pub qualified_route_first: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            auto_set_ids: true,
            attach_active_submenus: true,
            content_for: KString::from_static("menu_bar"),
            qualified_route_first: true,
        }
    }
}

impl Config {
    /// Build a configuration from key/value strings, for
    /// configuration coming from outside the program. Fails fast: a
    /// typoed key must never turn into a silently-default menu bar.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        for (key, value) in pairs {
            match key {
                "auto_set_ids" => config.auto_set_ids = parse_bool(key, value)?,
                "attach_active_submenus" =>
                    config.attach_active_submenus = parse_bool(key, value)?,
                "content_for" => config.content_for = KString::from_ref(value),
                "qualified_route_first" =>
                    config.qualified_route_first = parse_bool(key, value)?,
                _ => return Err(ConfigError::UnknownKey(KString::from_ref(key))),
            }
        }
        Ok(config)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: KString::from_ref(key),
            value: KString::from_ref(value),
        }),
    }
}

/// What a nested bar knows about the menu it sits under: a plain
/// value copied at construction time, never a reference back into
/// the tree.
#[derive(Debug, Clone)]
pub(crate) struct ParentMenu {
    pub name: KString,
    pub id: Option<KString>,
    pub controller: Option<KString>,
}

/// An ordered group of sibling menus. Member order is render order;
/// the last member gets the `last` class.
pub struct MenuBar {
    config: Config,
    attrs: HtmlAttrs,
    level: u32,
    parent: Option<ParentMenu>,
    menus: Vec<Menu>,
}

impl MenuBar {
    /// A new top-level menu bar (nesting level 1).
    pub fn new(config: Config, attrs: HtmlAttrs) -> MenuBar {
        Self::with_parent(config, attrs, None, 1)
    }

    pub(crate) fn nested(config: Config, parent: ParentMenu, level: u32) -> MenuBar {
        Self::with_parent(config, HtmlAttrs::new(), Some(parent), level)
    }

    fn with_parent(
        config: Config,
        mut attrs: HtmlAttrs,
        parent: Option<ParentMenu>,
        level: u32,
    ) -> MenuBar {
        attrs.add_class(MENU_BAR_CLASS);
        attrs.add_class(format!("{}-{}", MENU_BAR_CLASS, level));
        MenuBar {
            config,
            attrs,
            level,
            parent,
            menus: Vec::new(),
        }
    }

    /// The nesting depth; the top-level bar is at 1. Fixed when the
    /// bar is created within its ancestry.
    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn attrs(&self) -> &HtmlAttrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut HtmlAttrs {
        &mut self.attrs
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }

    pub(crate) fn parent(&self) -> Option<&ParentMenu> {
        self.parent.as_ref()
    }

    /// Refresh the recorded id of the menu this bar nests under, so
    /// menus added from now on chain their auto ids off the current
    /// one.
    pub(crate) fn set_parent_id(&mut self, id: Option<KString>) {
        if let Some(parent) = &mut self.parent {
            parent.id = id;
        }
    }

    /// Append a menu named `name`. The label defaults to the
    /// humanized name, the link target to name-based inference (see
    /// `MenuArgs`). Returns the menu, so sub-menus can still be
    /// added through it.
    pub fn menu(&mut self, ctx: &dyn RequestContext, name: &str, args: MenuArgs) -> &mut Menu {
        let menu = Menu::new(ctx, self, name, args);
        self.menus.push(menu);
        self.menus.last_mut().expect("just pushed")
    }

    /// Like `menu`, plus a block declaring the sub-menus.
    pub fn menu_with(
        &mut self,
        ctx: &dyn RequestContext,
        name: &str,
        args: MenuArgs,
        block: impl FnOnce(&mut MenuBar) -> Result<()>,
    ) -> Result<&mut Menu> {
        let menu = self.menu(ctx, name, args);
        block(menu.submenus_mut())?;
        Ok(menu)
    }

    /// A bar is selected iff it is nested under a menu and one of
    /// its menus is selected. The top-level bar is never selected
    /// itself, only its menus are.
    pub fn selected(&self, ctx: &dyn RequestContext) -> bool {
        self.parent.is_some() && self.menus.iter().any(|menu| menu.selected(ctx))
    }

    /// The slot key this bar's markup goes to when detached.
    pub fn content_for_key(&self) -> KString {
        KString::from_string(format!("{}_level_{}", self.config.content_for, self.level))
    }

    /// The `<ul>` markup of this bar. A bar without menus renders as
    /// an empty element (the documented policy; the alternative of
    /// omitting it entirely would make the markup depend on
    /// construction order). Detached sub-bars go to `slots`.
    ///
    /// Renders on a copy of the attributes: calling this twice gives
    /// identical output and `attrs()` stays as constructed.
    pub fn html(&self, ctx: &dyn RequestContext, slots: &mut ContentSlots) -> String {
        let mut attrs = self.attrs.clone();
        if self.selected(ctx) {
            attrs.add_class(SELECTED_CLASS);
        }
        let mut body = String::new();
        for (i, menu) in self.menus.iter().enumerate() {
            body.push_str(&menu.html(ctx, slots, i + 1 == self.menus.len()));
        }
        content_tag("ul", &attrs, &body)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsite::{TestSite, SITE};

    #[test]
    fn t_config_default() {
        let config = Config::default();
        assert!(config.auto_set_ids);
        assert!(config.attach_active_submenus);
        assert_eq!(config.content_for.as_str(), "menu_bar");
        assert!(config.qualified_route_first);
    }

    #[test]
    fn t_config_from_pairs() {
        let config = Config::from_pairs([("attach_active_submenus", "false"),
                                         ("content_for", "subnav")])
            .unwrap();
        assert!(config.auto_set_ids);
        assert!(!config.attach_active_submenus);
        assert_eq!(config.content_for.as_str(), "subnav");
        assert_eq!(config, Config {
            attach_active_submenus: false,
            content_for: KString::from_static("subnav"),
            ..Config::default()
        });
    }

    #[test]
    fn t_config_unknown_key() {
        assert_eq!(Config::from_pairs([("attach_active_submenu", "false")]),
                   Err(ConfigError::UnknownKey(
                       KString::from_static("attach_active_submenu"))));
        assert_eq!(Config::from_pairs([("attach_active_submenu", "false")])
                       .unwrap_err().to_string(),
                   "unknown menu bar option \"attach_active_submenu\"");
    }

    #[test]
    fn t_config_invalid_value() {
        assert_eq!(Config::from_pairs([("auto_set_ids", "yes")]),
                   Err(ConfigError::InvalidValue {
                       key: KString::from_static("auto_set_ids"),
                       value: KString::from_static("yes"),
                   }));
        assert_eq!(Config::from_pairs([("auto_set_ids", "yes")])
                       .unwrap_err().to_string(),
                   "invalid value \"yes\" for menu bar option \"auto_set_ids\"");
    }

    #[test]
    fn t_empty_bar_renders_empty_list() {
        let bar = MenuBar::new(Config::default(), HtmlAttrs::new());
        let mut slots = ContentSlots::new();
        assert_eq!(bar.html(&*SITE, &mut slots),
                   "<ul class=\"menubar menubar-1\"></ul>");
        assert!(slots.is_empty());
    }

    #[test]
    fn t_caller_classes_come_first() {
        let bar = MenuBar::new(Config::default(),
                               HtmlAttrs::from_pairs([("class", "pretty"),
                                                      ("id", "nav")]));
        let mut slots = ContentSlots::new();
        assert_eq!(bar.html(&*SITE, &mut slots),
                   "<ul class=\"pretty menubar menubar-1\" id=\"nav\"></ul>");
    }

    #[test]
    fn t_levels() {
        let mut bar = MenuBar::new(Config::default(), HtmlAttrs::new());
        assert_eq!(bar.level(), 1);
        let about_us = bar.menu(&*SITE, "about_us", MenuArgs::new());
        assert_eq!(about_us.submenus().level(), 2);
        let who = about_us.menu(&*SITE, "who_we_are", MenuArgs::new());
        assert_eq!(who.submenus().level(), 3);
    }

    #[test]
    fn t_content_for_key() {
        let mut bar = MenuBar::new(Config::from_pairs([("content_for", "subnav")]).unwrap(),
                                   HtmlAttrs::new());
        assert_eq!(bar.content_for_key().as_str(), "subnav_level_1");
        let about_us = bar.menu(&*SITE, "about_us", MenuArgs::new());
        assert_eq!(about_us.submenus().content_for_key().as_str(), "subnav_level_2");
    }

    #[test]
    fn t_root_bar_never_selected() {
        let mut bar = MenuBar::new(Config::default(), HtmlAttrs::new());
        bar.menu(&*SITE, "contact", MenuArgs::new());
        // The contact menu matches the current page, but the bar has
        // no parent menu.
        assert!(bar.menus()[0].selected(&*SITE));
        assert!(!bar.selected(&*SITE));
    }

    #[test]
    fn t_nested_bar_selected_with_selected_member() {
        let site = TestSite::new();
        let mut bar = MenuBar::new(Config::default(), HtmlAttrs::new());
        let home = bar.menu(&site, "home", MenuArgs::new());
        home.menu(&site, "contact", MenuArgs::new());
        assert!(home.submenus().selected(&site));
    }

    #[test]
    fn t_selected_bar_gets_class() {
        let site = TestSite::new();
        let mut bar = MenuBar::new(Config::default(), HtmlAttrs::new());
        bar.menu_with(&site, "home", MenuArgs::new(), |home| {
            home.menu(&site, "contact", MenuArgs::new());
            Ok(())
        }).unwrap();
        let mut slots = ContentSlots::new();
        let html = bar.html(&site, &mut slots);
        assert!(html.contains("<ul class=\"menubar menubar-2 selected\">"),
                "got: {}", html);
    }

    #[test]
    fn t_last_class_on_exactly_the_last_member() {
        let site = TestSite::new();
        let mut bar = MenuBar::new(Config::default(), HtmlAttrs::new());
        bar.menu(&site, "a", MenuArgs::new());
        bar.menu(&site, "b", MenuArgs::new());
        bar.menu(&site, "c", MenuArgs::new());
        let mut slots = ContentSlots::new();
        let html = bar.html(&site, &mut slots);
        assert_eq!(html.matches(" last\"").count(), 1);
        assert!(html.ends_with(
            "<li class=\"menu menu-1 last\"><a href=\"/contact/c\">C</a></li></ul>"),
            "got: {}", html);
    }
}
