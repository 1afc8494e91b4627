//! Typed view over one locale's messages.

use super::Messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub brand: BrandText,
    pub nav: NavText,
    pub hero: HeroText,
    pub why: WhyText,
    pub mission: MissionText,
    pub pillars: PillarsText,
    pub upcoming: UpcomingText,
    pub collaborators: CollaboratorsText,
    pub about: AboutText,
    pub subscribe: SubscribeText,
    pub footer: FooterText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandText {
    pub name: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavText {
    pub home: String,
    pub mission: String,
    pub events: String,
    pub about: String,
    pub contact: String,
    pub toggle_theme: String,
    pub toggle_language: String,
    pub toggle_menu: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroText {
    pub title: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhyText {
    pub title: String,
    pub lead: String,
    pub paragraphs: [String; 3],
    pub aside: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionText {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardText {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityCardText {
    pub title: String,
    pub text: String,
    /// Label of the external community link.
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PillarsText {
    pub title: String,
    pub education: CardText,
    pub events: CardText,
    pub community: CommunityCardText,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingText {
    pub title: String,
    pub badge: String,
    pub name: String,
    pub details: String,
    pub cta: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaboratorsText {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutText {
    pub title: String,
    pub link: String,
    pub text: String,
    pub testimonial: String,
    pub join_cta: String,
    pub join_button: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeText {
    pub title: String,
    pub subtitle: String,
    pub name: String,
    pub name_placeholder: String,
    pub email: String,
    pub email_placeholder: String,
    pub button: String,
    pub sending: String,
    pub success: String,
    pub error: String,
    pub missing_fields: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterText {
    pub tagline: String,
    pub explore: String,
    pub community: String,
    pub community_text: String,
    pub copyright: String,
    pub closing: String,
}

impl Dictionary {
    pub(crate) fn build(m: &mut Messages<'_>) -> Self {
        Self {
            brand: BrandText {
                name: m.msg("brand-name"),
                city: m.msg("brand-city"),
            },
            nav: NavText {
                home: m.msg("nav-home"),
                mission: m.msg("nav-mission"),
                events: m.msg("nav-events"),
                about: m.msg("nav-about"),
                contact: m.msg("nav-contact"),
                toggle_theme: m.msg("nav-toggle-theme"),
                toggle_language: m.msg("nav-toggle-language"),
                toggle_menu: m.msg("nav-toggle-menu"),
            },
            hero: HeroText {
                title: m.msg("hero-title"),
                subtitle: m.msg("hero-subtitle"),
                cta_primary: m.msg("hero-cta-primary"),
                cta_secondary: m.msg("hero-cta-secondary"),
            },
            why: WhyText {
                title: m.msg("why-title"),
                lead: m.msg("why-lead"),
                paragraphs: [m.msg("why-p1"), m.msg("why-p2"), m.msg("why-p3")],
                aside: m.msg("why-aside"),
            },
            mission: MissionText {
                title: m.msg("mission-title"),
                text: m.msg("mission-text"),
            },
            pillars: PillarsText {
                title: m.msg("pillars-title"),
                education: CardText {
                    title: m.msg("pillars-education-title"),
                    text: m.msg("pillars-education-text"),
                },
                events: CardText {
                    title: m.msg("pillars-events-title"),
                    text: m.msg("pillars-events-text"),
                },
                community: CommunityCardText {
                    title: m.msg("pillars-community-title"),
                    text: m.msg("pillars-community-text"),
                    link: m.msg("pillars-community-link"),
                },
            },
            upcoming: UpcomingText {
                title: m.msg("upcoming-title"),
                badge: m.msg("upcoming-badge"),
                name: m.msg("upcoming-name"),
                details: m.msg("upcoming-details"),
                cta: m.msg("upcoming-cta"),
                image: m.msg("upcoming-image"),
            },
            collaborators: CollaboratorsText {
                title: m.msg("collaborators-title"),
            },
            about: AboutText {
                title: m.msg("about-title"),
                link: m.msg("about-link"),
                text: m.msg("about-text"),
                testimonial: m.msg("about-testimonial"),
                join_cta: m.msg("about-join-cta"),
                join_button: m.msg("about-join-button"),
            },
            subscribe: SubscribeText {
                title: m.msg("subscribe-title"),
                subtitle: m.msg("subscribe-subtitle"),
                name: m.msg("subscribe-name"),
                name_placeholder: m.msg("subscribe-name-placeholder"),
                email: m.msg("subscribe-email"),
                email_placeholder: m.msg("subscribe-email-placeholder"),
                button: m.msg("subscribe-button"),
                sending: m.msg("subscribe-sending"),
                success: m.msg("subscribe-success"),
                error: m.msg("subscribe-error"),
                missing_fields: m.msg("subscribe-missing-fields"),
            },
            footer: FooterText {
                tagline: m.msg("footer-tagline"),
                explore: m.msg("footer-explore"),
                community: m.msg("footer-community"),
                community_text: m.msg("footer-community-text"),
                copyright: m.msg("footer-copyright"),
                closing: m.msg("footer-closing"),
            },
        }
    }
}
