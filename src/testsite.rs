//! An in-memory `RequestContext` fixture standing in for a small
//! hosting application: a few controllers, a few named routes, the
//! visitor currently sitting on /contact.

use kstring::KString;
use lazy_static::lazy_static;

use crate::routing::{RequestContext, Resolved, RouteTable, UrlParams};

pub(crate) struct TestSite {
    pub routes: RouteTable,
    pub controllers: Vec<&'static str>,
    pub current_path: &'static str,
    pub current_controller: &'static str,
}

impl TestSite {
    pub fn new() -> TestSite {
        let mut routes = RouteTable::new();
        routes
            .add("home", UrlParams::controller_action("home", "index"), "/")
            .unwrap()
            .add("home_search", UrlParams::controller_action("home", "search"),
                 "/search_stuff")
            .unwrap()
            .add("contact", UrlParams::controller_action("contact", "index"),
                 "/contact")
            .unwrap();
        TestSite {
            routes,
            controllers: vec!["home", "about_us", "contact"],
            current_path: "/contact",
            current_controller: "contact",
        }
    }
}

lazy_static! {
    pub(crate) static ref SITE: TestSite = TestSite::new();
}

impl RequestContext for TestSite {
    fn current_page(&self, target: &Resolved) -> bool {
        match target {
            Resolved::Url(url) => url.as_str() == self.current_path,
            Resolved::Params(params) => {
                self.path_for(&params.for_path_building()).as_str() == self.current_path
            }
            Resolved::None => false,
        }
    }

    fn named_route(&self, name: &str) -> Option<UrlParams> {
        self.routes.get(name).map(|route| route.params.clone())
    }

    fn path_for(&self, params: &UrlParams) -> KString {
        if let Some(path) = self.routes.path_matching(params) {
            return path.clone();
        }
        let controller = params.controller.as_deref().unwrap_or("");
        match params.action.as_deref() {
            None | Some("index") => KString::from_string(format!("/{}", controller)),
            Some(action) => KString::from_string(format!("/{}/{}", controller, action)),
        }
    }

    fn controller_exists(&self, name: &str) -> bool {
        self.controllers.contains(&name)
    }

    fn current_controller(&self) -> &str {
        self.current_controller
    }
}
