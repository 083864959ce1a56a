//! What a menu can link to, plus the capability interface through
//! which the hosting framework answers routing questions. The menu
//! code never reaches into global routing state; it is handed a
//! `RequestContext` and asks.

use anyhow::{bail, Result};
use kstring::KString;

use crate::myfrom::MyFrom;

/// url_for-style routing parameters, possibly only partially
/// specified by the caller; the unspecified parts get inferred during
/// resolution (see the `resolve` module).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub controller: Option<KString>,
    pub action: Option<KString>,
    /// Generate a path-only URL? Defaults to false (full URL) during
    /// resolution.
    pub only_path: Option<bool>,
    /// Route-selection hint: the named route these parameters came
    /// from. Stripped before path building, see `for_path_building`.
    pub use_route: Option<KString>,
    /// Any further parameters, in insertion order.
    pub extra: Vec<(KString, KString)>,
}

impl UrlParams {
    pub fn new() -> UrlParams {
        UrlParams::default()
    }

    pub fn controller_action(controller: &str, action: &str) -> UrlParams {
        UrlParams {
            controller: Some(KString::from_ref(controller)),
            action: Some(KString::from_ref(action)),
            ..UrlParams::default()
        }
    }

    pub fn with_controller<T>(mut self, controller: T) -> UrlParams
    where KString: MyFrom<T>
    {
        self.controller = Some(KString::myfrom(controller));
        self
    }

    pub fn with_action<T>(mut self, action: T) -> UrlParams
    where KString: MyFrom<T>
    {
        self.action = Some(KString::myfrom(action));
        self
    }

    pub fn with_extra<K, V>(mut self, key: K, value: V) -> UrlParams
    where KString: MyFrom<K> + MyFrom<V>
    {
        self.extra.push((KString::myfrom(key), KString::myfrom(value)));
        self
    }

    /// Nothing specified at all? Then the target is open for
    /// name-based inference, the same as not passing parameters.
    pub fn is_unspecified(&self) -> bool {
        self.controller.is_none()
            && self.action.is_none()
            && self.only_path.is_none()
            && self.use_route.is_none()
            && self.extra.is_empty()
    }

    /// The copy to hand to `RequestContext::path_for`: the
    /// `use_route` hint must not end up in the path-building call.
    pub fn for_path_building(&self) -> UrlParams {
        UrlParams {
            use_route: None,
            ..self.clone()
        }
    }
}

/// A menu's declared link target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkTarget {
    /// Nothing declared: infer from the menu's name (named routes
    /// first, controller conventions second).
    #[default]
    Auto,
    /// An explicit URL, used verbatim. The empty string counts as
    /// `Auto`.
    Url(KString),
    /// Partially specified routing parameters; missing parts are
    /// inferred.
    Params(UrlParams),
    /// Do not link at all; the label is rendered bare.
    None,
}

impl LinkTarget {
    pub fn url<T>(url: T) -> LinkTarget
    where KString: MyFrom<T>
    {
        LinkTarget::Url(KString::myfrom(url))
    }
}

/// The outcome of resolving a `LinkTarget`, fixed at menu
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Url(KString),
    Params(UrlParams),
    None,
}

/// The questions the menu code asks the hosting framework. Lookup
/// misses are reported as `None`/`false`, they are normal outcomes,
/// never errors; and all methods must be read-only queries so that
/// resolving and rendering stay idempotent.
pub trait RequestContext {
    /// Does `target` point to the page being rendered right now?
    fn current_page(&self, target: &Resolved) -> bool;

    /// Look up a named URL-generation rule.
    fn named_route(&self, name: &str) -> Option<UrlParams>;

    /// Build a path from (fully filled-in) parameters. Total: must
    /// return *something* for every input.
    fn path_for(&self, params: &UrlParams) -> KString;

    /// Does a controller conventionally named `name` exist in the
    /// application?
    fn controller_exists(&self, name: &str) -> bool;

    /// The controller handling the request being rendered.
    fn current_controller(&self) -> &str;
}

/// An in-memory named-route registry; a building block for
/// `RequestContext` implementations.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

#[derive(Debug)]
pub struct Route {
    pub name: KString,
    pub params: UrlParams,
    pub path: KString,
}

impl RouteTable {
    pub fn new() -> RouteTable {
        RouteTable::default()
    }

    /// Register a route; chaining. A second route under the same name
    /// is refused.
    pub fn add(&mut self, name: &str, params: UrlParams, path: &str) -> Result<&mut Self> {
        if self.get(name).is_some() {
            bail!("already contains a route named {:?}", name);
        }
        self.routes.push(Route {
            name: KString::from_ref(name),
            params,
            path: KString::from_ref(path),
        });
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.name.as_str() == name)
    }

    /// The path of the first route whose controller and action match
    /// `params`.
    pub fn path_matching(&self, params: &UrlParams) -> Option<&KString> {
        self.routes
            .iter()
            .find(|route| {
                route.params.controller == params.controller
                    && route.params.action == params.action
            })
            .map(|route| &route.path)
    }
}
