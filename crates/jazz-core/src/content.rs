//! Static marketing copy for the landing page.

/// Hero headline and supporting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const LANDING_COPY: LandingCopy = LandingCopy {
    title: "Create. Manage. Self-Service.",
    subtitle: "Our API Services system allows you to seamlessly create, deploy, and manage all you API needs.",
};

/// A card in the services carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    /// Short glyph rendered as the card icon
    pub icon: &'static str,
}

pub const FEATURE_CARDS: &[FeatureCard] = &[
    FeatureCard {
        title: "Create",
        description: "Describe a new API and get a working gateway entry in minutes.",
        icon: "\u{271A}",
    },
    FeatureCard {
        title: "Deploy",
        description: "Promote services from sandbox to production with one click.",
        icon: "\u{2191}",
    },
    FeatureCard {
        title: "Manage",
        description: "Rotate keys, set quotas and watch usage from one dashboard.",
        icon: "\u{2699}",
    },
    FeatureCard {
        title: "Secure",
        description: "OAuth scopes and per-consumer credentials out of the box.",
        icon: "\u{26BF}",
    },
    FeatureCard {
        title: "Monitor",
        description: "Latency, error rates and traffic for every endpoint.",
        icon: "\u{223F}",
    },
    FeatureCard {
        title: "Document",
        description: "Publish interactive reference docs alongside each service.",
        icon: "\u{2630}",
    },
    FeatureCard {
        title: "Integrate",
        description: "Wire notifications into the chat tools your team already uses.",
        icon: "\u{21C4}",
    },
];
