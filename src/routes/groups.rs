//! External route groups mounted under fixed `/api` prefixes.
//!
//! The gateway never looks inside these routers; it only decides whether a
//! request may reach them.

use axum::Router;
use std::collections::BTreeMap;
use std::fmt;

/// One of the API areas served by an external router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteGroup {
    Auth,
    Trips,
    Locations,
    Vehicles,
    Reviews,
}

impl RouteGroup {
    pub const ALL: [RouteGroup; 5] = [
        RouteGroup::Auth,
        RouteGroup::Trips,
        RouteGroup::Locations,
        RouteGroup::Vehicles,
        RouteGroup::Reviews,
    ];

    /// Path prefix the group is nested under
    pub fn prefix(self) -> &'static str {
        match self {
            RouteGroup::Auth => "/api/auth",
            RouteGroup::Trips => "/api/trips",
            RouteGroup::Locations => "/api/locations",
            RouteGroup::Vehicles => "/api/vehicles",
            RouteGroup::Reviews => "/api/reviews",
        }
    }
}

impl fmt::Display for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Routers bound to route groups by the host application.
#[derive(Default)]
pub struct RouteGroups {
    routers: BTreeMap<RouteGroup, Router>,
}

impl RouteGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `router` to `group`, replacing any previous binding.
    pub fn with(mut self, group: RouteGroup, router: Router) -> Self {
        self.routers.insert(group, router);
        self
    }

    pub fn is_bound(&self, group: RouteGroup) -> bool {
        self.routers.contains_key(&group)
    }

    /// Groups without a bound router, in declaration order
    pub fn unbound(&self) -> Vec<RouteGroup> {
        RouteGroup::ALL
            .into_iter()
            .filter(|group| !self.is_bound(*group))
            .collect()
    }

    /// Nest every bound router under its prefix.
    pub(crate) fn mount(self, mut router: Router) -> Router {
        for (group, group_router) in self.routers {
            router = router.nest(group.prefix(), group_router);
        }
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        let prefixes: Vec<&str> = RouteGroup::ALL.iter().map(|g| g.prefix()).collect();
        assert_eq!(
            prefixes,
            vec![
                "/api/auth",
                "/api/trips",
                "/api/locations",
                "/api/vehicles",
                "/api/reviews"
            ]
        );
    }

    #[test]
    fn test_binding() {
        let groups = RouteGroups::new().with(RouteGroup::Trips, Router::new());

        assert!(groups.is_bound(RouteGroup::Trips));
        assert!(!groups.is_bound(RouteGroup::Auth));
        assert_eq!(
            groups.unbound(),
            vec![
                RouteGroup::Auth,
                RouteGroup::Locations,
                RouteGroup::Vehicles,
                RouteGroup::Reviews
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RouteGroup::Reviews.to_string(), "/api/reviews");
    }
}
