//! The URL resolution chain: turning what a menu *declared* into
//! what it actually links to. First match wins:
//!
//! 1. an explicit non-empty URL string, verbatim;
//! 2. a named route, tried under the parent-qualified name
//!    ("<parent>_<name>") and the bare name (order is a
//!    configuration policy);
//! 3. url_for-style parameters, with unspecified parts filled in
//!    from conventions (controller from name/ancestry/request,
//!    action from name);
//! 4. or no link at all, if linking was turned off.
//!
//! Pure and idempotent; lookup misses fall through to the next step.

use kstring::KString;

use crate::routing::{LinkTarget, RequestContext, Resolved, UrlParams};

/// Construction-time context of the menu being resolved: its name
/// and what it inherits from its ancestry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolveCx<'a> {
    pub name: &'a str,
    /// Name of the menu this one nests under, if any.
    pub parent_name: Option<&'a str>,
    /// The resolved controller of that menu.
    pub parent_controller: Option<&'a str>,
    /// Try "<parent>_<name>" before the bare name?
    pub qualified_route_first: bool,
}

pub(crate) fn resolve(
    ctx: &dyn RequestContext,
    rcx: ResolveCx,
    target: &LinkTarget,
) -> Resolved {
    match target {
        LinkTarget::None => Resolved::None,
        LinkTarget::Url(url) if !url.is_empty() => Resolved::Url(url.clone()),
        LinkTarget::Url(_) | LinkTarget::Auto => resolve_by_name(ctx, rcx),
        LinkTarget::Params(params) if params.is_unspecified() => resolve_by_name(ctx, rcx),
        LinkTarget::Params(params) => Resolved::Params(fill_params(ctx, rcx, params.clone())),
    }
}

fn resolve_by_name(ctx: &dyn RequestContext, rcx: ResolveCx) -> Resolved {
    match named_route(ctx, rcx) {
        Some(params) => Resolved::Params(params),
        None => Resolved::Params(fill_params(ctx, rcx, UrlParams::new())),
    }
}

/// Try the parent-qualified and the bare route name in the
/// configured order. A hit keeps the route's name as the `use_route`
/// hint and defaults to a full (not path-only) URL.
fn named_route(ctx: &dyn RequestContext, rcx: ResolveCx) -> Option<UrlParams> {
    let qualified = rcx.parent_name.map(|parent| format!("{}_{}", parent, rcx.name));
    let candidates = if rcx.qualified_route_first {
        [qualified.as_deref(), Some(rcx.name)]
    } else {
        [Some(rcx.name), qualified.as_deref()]
    };
    // Bound to a local so the borrows of `qualified` end before it
    // is dropped.
    let found = candidates.into_iter().flatten().find_map(|name| {
        let mut params = ctx.named_route(name)?;
        params.use_route = Some(KString::from_ref(name));
        params.only_path.get_or_insert(false);
        Some(params)
    });
    found
}

/// Fill in the unspecified parts of url_for-style parameters.
fn fill_params(ctx: &dyn RequestContext, rcx: ResolveCx, mut params: UrlParams) -> UrlParams {
    if params.controller.is_none() {
        params.controller = Some(find_controller(ctx, rcx));
    }
    // An index-like route doesn't want a redundant action named
    // after its own controller.
    let controller_is_name = params.controller.as_deref() == Some(rcx.name);
    if params.action.is_none() && !controller_is_name {
        params.action = Some(KString::from_ref(rcx.name));
    }
    params.only_path.get_or_insert(false);
    params
}

/// The most likely controller for a menu, in falling priority: one
/// named like the menu, the parent menu's, the request's. A failing
/// existence probe just moves on to the next candidate.
fn find_controller(ctx: &dyn RequestContext, rcx: ResolveCx) -> KString {
    if ctx.controller_exists(rcx.name) {
        KString::from_ref(rcx.name)
    } else if let Some(controller) = rcx.parent_controller {
        KString::from_ref(controller)
    } else {
        KString::from_ref(ctx.current_controller())
    }
}
