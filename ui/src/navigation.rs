//! The navigation model behind the side menu: categories, their links, and
//! the rules that decide which link is highlighted for the current path.

/// One of the four collapsible groups in the side menu.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr, strum::EnumIs,
)]
pub enum Category {
    #[strum(serialize = "DEX")]
    Dex,
    Charts,
    Tools,
    Listings,
}

impl Category {
    pub fn label(&self) -> &'static str {
        (*self).into()
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Dex => "⇄",
            Category::Charts => "📈",
            Category::Tools => "🛠",
            Category::Listings => "📋",
        }
    }

    /// The links shown when this category is expanded, in display order.
    pub fn entries(&self) -> impl Iterator<Item = &'static NavEntry> {
        let category = *self;
        MENU_CATALOG
            .iter()
            .filter(move |entry| entry.category == category)
    }
}

/// How a link decides whether it is the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// The path must equal the link's route.
    Exact,
    /// The first path segment must be one of these names, so listing
    /// routes (`/tokens`) also light up on their detail pages (`/token/..`).
    FirstSegment(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub category: Category,
    pub label: &'static str,
    pub glyph: &'static str,
    pub route: &'static str,
    pub rule: MatchRule,
}

impl NavEntry {
    pub fn is_active(&self, current_path: &str) -> bool {
        is_link_active(current_path, self.route, self.rule)
    }
}

const fn exact(
    category: Category,
    label: &'static str,
    glyph: &'static str,
    route: &'static str,
) -> NavEntry {
    NavEntry {
        category,
        label,
        glyph,
        route,
        rule: MatchRule::Exact,
    }
}

const fn by_segment(
    category: Category,
    label: &'static str,
    glyph: &'static str,
    route: &'static str,
    segments: &'static [&'static str],
) -> NavEntry {
    NavEntry {
        category,
        label,
        glyph,
        route,
        rule: MatchRule::FirstSegment(segments),
    }
}

pub static MENU_CATALOG: [NavEntry; 12] = [
    exact(Category::Dex, "Swap", "🔁", "/swap"),
    exact(Category::Dex, "Liquidity", "💧", "/liquidity"),
    exact(Category::Dex, "Farms", "🌾", "/farms"),
    exact(Category::Charts, "Overview", "📊", "/overview"),
    by_segment(Category::Charts, "Accounts", "🔍", "/accounts", &["accounts", "account"]),
    by_segment(Category::Charts, "Tokens", "🪙", "/tokens", &["tokens", "token"]),
    by_segment(Category::Charts, "Pairs", "🔗", "/pairs", &["pairs", "pair"]),
    exact(Category::Tools, "LP Locker", "🔒", "/lp-locker"),
    exact(Category::Tools, "Multisender", "📤", "/multisender"),
    exact(Category::Tools, "Scanner", "📡", "/scanner"),
    exact(Category::Listings, "CMC", "🌐", "/cmc"),
    exact(Category::Listings, "Coingecko", "🌐", "/coingecko"),
];

/// Whether a link with `route` and `rule` is highlighted at `current_path`.
pub fn is_link_active(current_path: &str, route: &str, rule: MatchRule) -> bool {
    match rule {
        MatchRule::Exact => current_path == route,
        MatchRule::FirstSegment(names) => first_segment(current_path)
            .map(|segment| names.iter().any(|name| *name == segment))
            .unwrap_or(false),
    }
}

/// The path component between the first and second `/`.
fn first_segment(path: &str) -> Option<&str> {
    path.split('/').nth(1)
}

/// Which category is expanded. At most one is open at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveSubmenu(Option<Category>);

impl ActiveSubmenu {
    pub fn open(&self) -> Option<Category> {
        self.0
    }

    pub fn is_open(&self, category: Category) -> bool {
        self.0 == Some(category)
    }

    /// Closes `category` if it is open, otherwise opens it in place of
    /// whatever was open before.
    pub fn toggle(&mut self, category: Category) {
        self.0 = if self.is_open(category) {
            None
        } else {
            Some(category)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn entry(label: &str) -> &'static NavEntry {
        MENU_CATALOG
            .iter()
            .find(|e| e.label == label)
            .unwrap()
    }

    #[test]
    fn categories_keep_menu_order_and_labels() {
        let labels: Vec<_> = Category::iter().map(|c| c.label()).collect();
        assert_eq!(labels, ["DEX", "Charts", "Tools", "Listings"]);
    }

    #[test]
    fn catalog_routes_are_preserved_verbatim() {
        let routes: Vec<_> = MENU_CATALOG.iter().map(|e| e.route).collect();
        assert_eq!(
            routes,
            [
                "/swap",
                "/liquidity",
                "/farms",
                "/overview",
                "/accounts",
                "/tokens",
                "/pairs",
                "/lp-locker",
                "/multisender",
                "/scanner",
                "/cmc",
                "/coingecko",
            ]
        );
    }

    #[test]
    fn entries_are_grouped_by_category() {
        let charts: Vec<_> = Category::Charts.entries().map(|e| e.label).collect();
        assert_eq!(charts, ["Overview", "Accounts", "Tokens", "Pairs"]);
        let listings: Vec<_> = Category::Listings.entries().map(|e| e.label).collect();
        assert_eq!(listings, ["CMC", "Coingecko"]);
    }

    #[test]
    fn tokens_matches_listing_and_detail_paths() {
        let tokens = entry("Tokens");
        assert!(tokens.is_active("/tokens"));
        assert!(tokens.is_active("/token/0xabc"));
        assert!(!tokens.is_active("/tokenomics"));
    }

    #[test]
    fn aliased_links_are_inactive_elsewhere() {
        for label in ["Accounts", "Tokens", "Pairs"] {
            assert!(!entry(label).is_active("/swap"), "{label} active on /swap");
        }
        assert!(entry("Accounts").is_active("/account/0x1"));
        assert!(entry("Pairs").is_active("/pair/0x2"));
        assert!(entry("Pairs").is_active("/pairs"));
    }

    #[test]
    fn exact_links_ignore_detail_paths() {
        let swap = entry("Swap");
        assert!(swap.is_active("/swap"));
        assert!(!swap.is_active("/swap/extra"));
        assert!(!entry("Overview").is_active("/"));
    }

    #[test]
    fn path_without_segment_never_matches_alias() {
        assert!(!is_link_active("tokens", "/tokens", MatchRule::FirstSegment(&["tokens"])));
        assert!(!is_link_active("", "/tokens", MatchRule::FirstSegment(&["tokens"])));
    }

    #[test]
    fn opening_a_category_closes_the_previous_one() {
        let mut submenu = ActiveSubmenu::default();
        submenu.toggle(Category::Dex);
        submenu.toggle(Category::Charts);
        assert_eq!(submenu.open(), Some(Category::Charts));
        assert!(!submenu.is_open(Category::Dex));
    }

    #[test]
    fn exclusivity_holds_for_every_pair() {
        for first in Category::iter() {
            for second in Category::iter().filter(|c| *c != first) {
                let mut submenu = ActiveSubmenu::default();
                submenu.toggle(first);
                submenu.toggle(second);
                let open: Vec<_> = Category::iter().filter(|c| submenu.is_open(*c)).collect();
                assert_eq!(open, [second]);
            }
        }
    }

    #[test]
    fn toggling_the_open_category_closes_it() {
        let mut submenu = ActiveSubmenu::default();
        submenu.toggle(Category::Tools);
        submenu.toggle(Category::Tools);
        assert_eq!(submenu, ActiveSubmenu::default());
        assert_eq!(submenu.open(), None);
    }
}
