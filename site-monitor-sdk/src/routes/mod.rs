//! The route table of pages outside the main application layout: login, the full-screen H5
//! pages and the redirect helper.
//!
//! ```
//! use site_monitor_sdk::routes;
//!
//! let matched = routes::resolve("/redirect/h5/crane").unwrap();
//! assert_eq!(matched.route.name, Some("Redirect"));
//! assert_eq!(matched.params.get("path").map(|v| v.as_str()), Some("h5/crane"));
//! ```

use std::collections::HashMap;

use serde::Serialize;

mod pages;

/// A page route.
#[derive(Debug, Serialize)]
pub struct Route {
    /// Path pattern. `:name` matches one segment, `:name(.*)` matches the rest of the path.
    pub path: &'static str,
    pub name: Option<&'static str>,
    /// The lazily loaded page bundle.
    pub component: &'static str,
    pub meta: Meta,
    pub children: &'static [Route],
}

/// Display information of a route.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub title: Option<&'static str>,
    /// To show the route in the navigation menu.
    #[serde(rename = "showLink")]
    pub show_link: bool,
    /// Menu ordering.
    pub rank: Option<u32>,
}

/// The result of [`resolve`].
#[derive(Debug)]
pub struct RouteMatch {
    pub route: &'static Route,
    /// The enclosing route when `route` is a child.
    pub parent: Option<&'static Route>,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// The title of the route or, for child routes without one, the parent's title.
    pub fn title(&self) -> Option<&'static str> {
        match self.route.meta.title {
            Some(title) => Some(title),
            None => self.parent.and_then(|parent| parent.meta.title),
        }
    }
}

/// All declared top-level routes in declaration order.
pub fn table() -> &'static [Route] {
    &pages::ROUTES
}

/// All declared paths (children included) in declaration order.
pub fn paths() -> Vec<&'static str> {
    let mut paths = vec![];
    for route in table() {
        paths.push(route.path);
        for child in route.children {
            paths.push(child.path);
        }
    }
    paths
}

/// To find a route by its name.
pub fn find_by_name(name: &str) -> Option<&'static Route> {
    for route in table() {
        if route.name == Some(name) {
            return Some(route);
        }
        for child in route.children {
            if child.name == Some(name) {
                return Some(child);
            }
        }
    }
    None
}

/// To resolve a location (query string and hash are ignored) to its route. The first matching
/// route in declaration order wins.
pub fn resolve(location: &str) -> Option<RouteMatch> {
    let path = normalize(location);
    for route in table() {
        if let Some(params) = match_path(route.path, path) {
            return Some(RouteMatch {
                route,
                parent: None,
                params,
            });
        }
        for child in route.children {
            if let Some(params) = match_path(child.path, path) {
                return Some(RouteMatch {
                    route: child,
                    parent: Some(route),
                    params,
                });
            }
        }
    }
    None
}

fn normalize(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    match path.len() > 1 {
        false => path,
        true => path.trim_end_matches('/'),
    }
}

/// Match a path against a pattern, returning the captured parameters. A catch-all parameter
/// must be the last segment and needs its leading slash.
fn match_path(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let mut params = HashMap::new();
    let mut rest = path;

    for segment in pattern.split('/').skip(1) {
        rest = rest.strip_prefix('/')?;
        match segment.strip_prefix(':') {
            None => {
                let (head, tail) = split_segment(rest);
                if head != segment {
                    return None;
                }
                rest = tail;
            }
            Some(param) => {
                if let Some(name) = param.strip_suffix("(.*)") {
                    params.insert(name.to_string(), rest.to_string());
                    return Some(params);
                }
                let (head, tail) = split_segment(rest);
                if head.is_empty() {
                    return None;
                }
                params.insert(param.to_string(), head.to_string());
                rest = tail;
            }
        }
    }
    match rest.is_empty() {
        false => None,
        true => Some(params),
    }
}

/// Split `a/b/c` into `("a", "/b/c")`.
fn split_segment(path: &str) -> (&str, &str) {
    match path.find('/') {
        None => (path, ""),
        Some(idx) => (&path[..idx], &path[idx..]),
    }
}
