//! A single menu within a menu bar, rendered as an `<li>`. Owns the
//! bar of its sub-menus, which always exists (possibly empty); that
//! keeps the recursive selection and render logic free of special
//! cases.

use std::cell::Cell;

use anyhow::Result;
use kstring::KString;

use crate::{content_for::ContentSlots,
            element::{content_tag, html_escape, link_to, HtmlAttrs},
            menu_bar::{MenuBar, ParentMenu, LAST_CLASS, MENU_CLASS, SELECTED_CLASS},
            myfrom::MyFrom,
            resolve::{resolve, ResolveCx},
            routing::{LinkTarget, RequestContext, Resolved, UrlParams},
            str_util::humanize};

/// Everything a menu takes besides its name; all of it optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuArgs {
    /// Display text; defaults to the humanized name.
    pub label: Option<KString>,
    pub target: LinkTarget,
    pub attrs: HtmlAttrs,
}

impl MenuArgs {
    pub fn new() -> MenuArgs {
        MenuArgs::default()
    }

    pub fn label<T>(mut self, label: T) -> MenuArgs
    where KString: MyFrom<T>
    {
        self.label = Some(KString::myfrom(label));
        self
    }

    /// Link to this URL verbatim.
    pub fn url<T>(mut self, url: T) -> MenuArgs
    where KString: MyFrom<T>
    {
        self.target = LinkTarget::Url(KString::myfrom(url));
        self
    }

    /// Link via routing parameters; unspecified parts get inferred.
    pub fn params(mut self, params: UrlParams) -> MenuArgs {
        self.target = LinkTarget::Params(params);
        self
    }

    /// Don't link; the label is rendered bare.
    pub fn unlinked(mut self) -> MenuArgs {
        self.target = LinkTarget::None;
        self
    }

    pub fn attrs(mut self, attrs: HtmlAttrs) -> MenuArgs {
        self.attrs = attrs;
        self
    }

    pub fn class(mut self, token: &str) -> MenuArgs {
        self.attrs.add_class(token);
        self
    }

    pub fn id(mut self, id: &str) -> MenuArgs {
        self.attrs.set_id(id);
        self
    }
}

pub struct Menu {
    name: KString,
    label: KString,
    attrs: HtmlAttrs,
    resolved: Resolved,
    href: Option<KString>,
    // Cached bottom-up selection state; computed at most once per
    // tree (trees are built fresh per request).
    selected: Cell<Option<bool>>,
    bar: MenuBar,
}

impl Menu {
    /// Resolves the link target right here, once; everything the
    /// menu needs from its ancestry (id prefix, parent name and
    /// controller, nesting level) is copied out of `owner` now, so
    /// the menu never reaches back up the tree.
    pub(crate) fn new(
        ctx: &dyn RequestContext,
        owner: &MenuBar,
        name: &str,
        args: MenuArgs,
    ) -> Menu {
        let MenuArgs { label, target, mut attrs } = args;
        let config = owner.config();
        let label = label.unwrap_or_else(|| humanize(name));

        let resolved = resolve(
            ctx,
            ResolveCx {
                name,
                parent_name: owner.parent().map(|parent| parent.name.as_str()),
                parent_controller: owner.parent().and_then(|parent| parent.controller.as_deref()),
                qualified_route_first: config.qualified_route_first,
            },
            &target,
        );
        let href = match &resolved {
            Resolved::Url(url) => Some(url.clone()),
            Resolved::Params(params) => Some(ctx.path_for(&params.for_path_building())),
            Resolved::None => None,
        };

        // Default id from the nearest ancestor id, if there is one;
        // an explicitly given id wins.
        if config.auto_set_ids && attrs.id().is_none() {
            let id_prefix = owner.attrs().id()
                .or_else(|| owner.parent().and_then(|parent| parent.id.as_ref()));
            if let Some(id_prefix) = id_prefix {
                attrs.set_id(format!("{}-{}", id_prefix, name));
            }
        }
        attrs.add_class(MENU_CLASS);
        attrs.add_class(format!("{}-{}", MENU_CLASS, owner.level()));

        let controller = match &resolved {
            Resolved::Params(params) => params.controller.clone(),
            _ => None,
        };
        let bar = MenuBar::nested(
            config.clone(),
            ParentMenu {
                name: KString::from_ref(name),
                id: attrs.id().cloned(),
                controller,
            },
            owner.level() + 1,
        );

        Menu {
            name: KString::from_ref(name),
            label,
            attrs,
            resolved,
            href,
            selected: Cell::new(None),
            bar,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// What resolution decided this menu links to.
    pub fn target(&self) -> &Resolved {
        &self.resolved
    }

    /// The href actually rendered, if the menu links anywhere.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn attrs(&self) -> &HtmlAttrs {
        &self.attrs
    }

    pub fn attrs_mut(&mut self) -> &mut HtmlAttrs {
        &mut self.attrs
    }

    /// The bar holding this menu's sub-menus; always present, empty
    /// until sub-menus are added.
    pub fn submenus(&self) -> &MenuBar {
        &self.bar
    }

    pub fn submenus_mut(&mut self) -> &mut MenuBar {
        &mut self.bar
    }

    /// Add a sub-menu (also possible after this menu was created).
    /// The sub-menu's auto id chains off this menu's id as it is
    /// *now*, so an id changed through `attrs_mut` since
    /// construction is honored.
    pub fn menu(&mut self, ctx: &dyn RequestContext, name: &str, args: MenuArgs) -> &mut Menu {
        self.bar.set_parent_id(self.attrs.id().cloned());
        self.bar.menu(ctx, name, args)
    }

    /// Like `menu`, plus a block declaring the sub-menu's sub-menus.
    pub fn menu_with(
        &mut self,
        ctx: &dyn RequestContext,
        name: &str,
        args: MenuArgs,
        block: impl FnOnce(&mut MenuBar) -> Result<()>,
    ) -> Result<&mut Menu> {
        self.bar.set_parent_id(self.attrs.id().cloned());
        self.bar.menu_with(ctx, name, args, block)
    }

    /// Is this menu selected? It is if its own target is the current
    /// page, or if any of its sub-menus is selected. Memoized: asked
    /// once, the answer stays the same for the life of the tree.
    pub fn selected(&self, ctx: &dyn RequestContext) -> bool {
        if let Some(selected) = self.selected.get() {
            return selected;
        }
        let selected = (match &self.resolved {
            Resolved::None => false,
            target => ctx.current_page(target),
        }) || self.bar.selected(ctx);
        self.selected.set(Some(selected));
        selected
    }

    /// The `<li>` markup. Works on a copy of the attributes, so
    /// rendering twice gives identical output and `attrs()` stays as
    /// constructed.
    pub(crate) fn html(
        &self,
        ctx: &dyn RequestContext,
        slots: &mut ContentSlots,
        last: bool,
    ) -> String {
        let mut attrs = self.attrs.clone();
        if self.selected(ctx) {
            attrs.add_class(SELECTED_CLASS);
        }
        if last {
            attrs.add_class(LAST_CLASS);
        }

        let mut content = match &self.href {
            Some(href) => link_to(&html_escape(&self.label), href),
            None => html_escape(&self.label).into_owned(),
        };
        if !self.bar.is_empty() {
            let sub = self.bar.html(ctx, slots);
            if self.bar.config().attach_active_submenus || !self.selected(ctx) {
                content.push_str(&sub);
            } else {
                // The host template yields this slot elsewhere.
                slots.set(self.bar.content_for_key(), sub);
            }
        }
        content_tag("li", &attrs, &content)
    }
}
