//! Route entity: the path → page mapping and the navigation item list.

/// One of the five pages. Mounting a route discards the previous page's
/// local state, so filters and form fields never survive navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl Route {
    /// All routes in navigation order
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Experience,
        Route::Projects,
        Route::Contact,
    ];

    /// URL-style path for this route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Experience => "/experience",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
        }
    }

    /// Resolve a path to a route. Exact string equality, no prefix matching.
    pub fn from_path(path: &str) -> Option<Route> {
        Route::ALL.iter().copied().find(|r| r.path() == path)
    }

    /// Display label for the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Experience => "Experience",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
        }
    }

    /// Next route in navigation order, wrapping
    pub fn next(&self) -> Route {
        let idx = self.index();
        Route::ALL[(idx + 1) % Route::ALL.len()]
    }

    /// Previous route in navigation order, wrapping
    pub fn previous(&self) -> Route {
        let idx = self.index();
        Route::ALL[(idx + Route::ALL.len() - 1) % Route::ALL.len()]
    }

    /// Position in navigation order
    pub fn index(&self) -> usize {
        Route::ALL
            .iter()
            .position(|r| r == self)
            .unwrap_or_default()
    }
}

/// A navigation bar entry. The list is defined once and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    /// Glyph shown next to the label
    pub icon: &'static str,
}

impl NavItem {
    /// True iff `path` equals this item's path exactly
    pub fn is_active(&self, path: &str) -> bool {
        self.route.path() == path
    }
}

/// The navigation item list
pub fn nav_items() -> &'static [NavItem] {
    const ITEMS: [NavItem; 5] = [
        NavItem {
            route: Route::Home,
            label: "Home",
            icon: "⌂",
        },
        NavItem {
            route: Route::About,
            label: "About",
            icon: "☺",
        },
        NavItem {
            route: Route::Experience,
            label: "Experience",
            icon: "⚑",
        },
        NavItem {
            route: Route::Projects,
            label: "Projects",
            icon: "▣",
        },
        NavItem {
            route: Route::Contact,
            label: "Contact",
            icon: "✉",
        },
    ];
    &ITEMS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_paths_unmatched() {
        assert_eq!(Route::from_path("/blog"), None);
        assert_eq!(Route::from_path(""), None);
        // No prefix matching
        assert_eq!(Route::from_path("/projects/1"), None);
        assert_eq!(Route::from_path("/about/"), None);
    }

    #[test]
    fn test_exactly_one_active_item_per_route() {
        for route in Route::ALL {
            let active = nav_items()
                .iter()
                .filter(|item| item.is_active(route.path()))
                .count();
            assert_eq!(active, 1, "route {:?} should have one active item", route);
        }
    }

    #[test]
    fn test_no_active_item_for_foreign_path() {
        let active = nav_items()
            .iter()
            .filter(|item| item.is_active("/elsewhere"))
            .count();
        assert_eq!(active, 0);
    }

    #[test]
    fn test_next_previous_wrap() {
        assert_eq!(Route::Contact.next(), Route::Home);
        assert_eq!(Route::Home.previous(), Route::Contact);
        for route in Route::ALL {
            assert_eq!(route.next().previous(), route);
        }
    }
}
