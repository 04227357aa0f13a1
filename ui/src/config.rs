//! Static site configuration shared through a Dioxus context.

use std::ops::Deref;
use std::sync::Arc;

/// Viewport width (px) at or below which the mobile header replaces the
/// desktop column.
pub const NARROW_MAX_WIDTH_PX: u32 = 1080;

/// Viewport width (px) at or below which the polling indicator is hidden.
pub const MEDIUM_MAX_WIDTH_PX: u32 = 1180;

/// An outbound link to one of the project's social profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub const DEFAULT_SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Twitter",
        href: "https://twitter.com/ZodiacSwapDEX",
        glyph: "𝕏",
    },
    SocialLink {
        name: "Telegram",
        href: "https://t.me/ZodiacSwapDEX",
        glyph: "✈",
    },
    SocialLink {
        name: "Website",
        href: "https://zodiacswap.com/",
        glyph: "🌐",
    },
];

#[derive(Debug, PartialEq, Eq)]
pub struct SiteConfigData {
    pub brand_title: String,
    pub network_label: String,
    pub social_links: Vec<SocialLink>,
    pub narrow_max_width_px: u32,
    pub medium_max_width_px: u32,
}

/// Cheap to clone; components receive it with `use_context::<SiteConfig>()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig(Arc<SiteConfigData>);

impl Deref for SiteConfig {
    type Target = SiteConfigData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl SiteConfig {
    pub fn new(data: SiteConfigData) -> Self {
        Self(Arc::new(data))
    }

    /// CSS media query matching the mobile layout.
    pub fn narrow_query(&self) -> String {
        max_width_query(self.narrow_max_width_px)
    }

    /// CSS media query under which the polling indicator is hidden.
    pub fn medium_query(&self) -> String {
        max_width_query(self.medium_max_width_px)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(SiteConfigData {
            brand_title: "ZodiacSwap".to_string(),
            network_label: "Mainnetz Mainnet".to_string(),
            social_links: DEFAULT_SOCIAL_LINKS.to_vec(),
            narrow_max_width_px: NARROW_MAX_WIDTH_PX,
            medium_max_width_px: MEDIUM_MAX_WIDTH_PX,
        })
    }
}

fn max_width_query(px: u32) -> String {
    format!("(max-width: {}px)", px)
}
