//! A builder for generating html menu bars. The structure of the
//! menus/menu bars is based on nested lists and meant to be styled
//! via css; which path of menus is "selected" is derived from the
//! page currently being rendered.
//!
//! The hosting web framework supplies the routing knowledge (current
//! page, named routes, path building, controller existence) through
//! the [`RequestContext`](routing::RequestContext) trait; the menu
//! code only ever queries it.
//!
//! ```
//! # fn main() -> anyhow::Result<()> {
//! use menubar::{menu_bar, Config, ContentSlots, HtmlAttrs, KString, MenuArgs,
//!               RequestContext, Resolved, UrlParams};
//!
//! # struct Site;
//! # impl RequestContext for Site {
//! #     fn current_page(&self, target: &Resolved) -> bool {
//! #         match target {
//! #             Resolved::Params(params) =>
//! #                 self.path_for(&params.for_path_building()).as_str() == "/about_us",
//! #             _ => false,
//! #         }
//! #     }
//! #     fn named_route(&self, _name: &str) -> Option<UrlParams> { None }
//! #     fn path_for(&self, params: &UrlParams) -> KString {
//! #         KString::from_string(
//! #             format!("/{}", params.controller.as_deref().unwrap_or("")))
//! #     }
//! #     fn controller_exists(&self, _name: &str) -> bool { true }
//! #     fn current_controller(&self) -> &str { "home" }
//! # }
//! # let site = Site;
//! let mut slots = ContentSlots::new();
//! let html = menu_bar(
//!     &site, Config::default(), HtmlAttrs::from_pairs([("id", "nav")]),
//!     &mut slots,
//!     |main| {
//!         main.menu(&site, "home", MenuArgs::new());
//!         main.menu_with(&site, "about_us", MenuArgs::new(), |about_us| {
//!             about_us.menu(&site, "who_we_are", MenuArgs::new());
//!             about_us.menu(&site, "contact", MenuArgs::new()
//!                           .label("Contact")
//!                           .url("mailto:contact@us.com"));
//!             Ok(())
//!         })?;
//!         Ok(())
//!     })?;
//!
//! assert!(html.starts_with("<ul class=\"menubar menubar-1\" id=\"nav\">"));
//! // /about_us is the current page, so that menu is selected (and
//! // it's the last of its bar):
//! assert!(html.contains(
//!     "<li class=\"menu menu-1 selected last\" id=\"nav-about_us\">"));
//! assert!(html.contains("<a href=\"mailto:contact@us.com\">Contact</a>"));
//! # Ok(())
//! # }
//! ```
//!
//! Configuration options (see [`Config`](menu_bar::Config)):
//!
//! * `auto_set_ids` - whether to derive ids like "nav-about_us" for
//!   each menu from its ancestor's id. Default is true.
//! * `attach_active_submenus` - whether the sub-menu bar of a
//!   selected menu is rendered as part of its parent menu. When
//!   false it is written to a [`ContentSlots`](content_for::ContentSlots)
//!   entry instead, for the host template to place; with the default
//!   base name, a second-level bar goes to "menu_bar_level_2".
//!   Default is true.
//! * `content_for` - the base name for those slot keys. Default is
//!   "menu_bar".
//! * `qualified_route_first` - whether the parent-qualified route
//!   name ("home_search") is tried before the bare one ("search").
//!   Default is true.

pub mod warn;
pub mod myfrom;
pub mod str_util;
pub mod class_list;
pub mod element;
pub mod routing;
mod resolve;
pub mod content_for;
pub mod menu;
pub mod menu_bar;
#[cfg(test)]
mod testsite;

pub use kstring::KString;

pub use class_list::ClassList;
pub use content_for::ContentSlots;
pub use element::HtmlAttrs;
pub use menu::{Menu, MenuArgs};
pub use menu_bar::{Config, ConfigError, MenuBar,
                   LAST_CLASS, MENU_BAR_CLASS, MENU_CLASS, SELECTED_CLASS};
pub use routing::{LinkTarget, RequestContext, Resolved, RouteTable, UrlParams};

use anyhow::Result;

/// Build and render a first-level menu bar: the block receives the
/// bar and declares its menus, then a single render pass produces
/// the markup (and fills `slots` with any detached sub-menu bars).
pub fn menu_bar(
    ctx: &dyn RequestContext,
    config: Config,
    attrs: HtmlAttrs,
    slots: &mut ContentSlots,
    block: impl FnOnce(&mut MenuBar) -> Result<()>,
) -> Result<String> {
    let mut bar = MenuBar::new(config, attrs);
    block(&mut bar)?;
    Ok(bar.html(ctx, slots))
}
