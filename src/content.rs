//! Static copy and link tables for the site.

use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub route: Route,
    description: &'static str,
}

impl Service {
    /// Bullet lines of the description with the bullet glyph removed.
    pub fn points(&self) -> Vec<&'static str> {
        description_points(self.description)
    }
}

pub fn description_points(description: &'static str) -> Vec<&'static str> {
    description
        .split('\n')
        .map(|line| line.trim().trim_start_matches('•').trim())
        .filter(|line| !line.is_empty())
        .collect()
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Audit & Assurance",
        route: Route::AuditAssurance,
        description: "• External Audit\n• Real Estate Audit\n• Internal Audit\n• Inventory Audit\n• Due Diligence Support\n• Forensic Audit",
    },
    Service {
        title: "Taxation",
        route: Route::Taxation,
        description: "• Corporate Tax\n• Value Added Tax (VAT)\n• Tax Agent Service",
    },
    Service {
        title: "Accounting & Bookkeeping",
        route: Route::AccountingBookkeeping,
        description: "• Accounts Regulation\n• Cloud Accounting Services\n• Audit Preparation & Support\n• Accounting & Financial Reporting\n• Inventory & Asset Verification",
    },
    Service {
        title: "Business Advisory Services",
        route: Route::BusinessAdvisory,
        description: "• CFO Service\n• Business Valuation\n• Business Consultation\n• Merger & Acquisition\n• Business Process Re-engineering\n• Financial Feasibilities\n• IFRS Advisory Service",
    },
    Service {
        title: "Business Support Services",
        route: Route::BusinessSupport,
        description: "• Mainland Company Formation\n• Freezone Business Setup\n• Company Secretarial Service\n• Liquidation / De-registration\n• ICV Consultancy\n• PRO Service",
    },
    Service {
        title: "Anti–Money Laundering (AML)",
        route: Route::Aml,
        description: "• AML Risk Assessment\n• Compliance Program Design\n• Transaction Monitoring\n• KYC & Customer Due Diligence\n• AML Training & Awareness\n• Regulatory Reporting",
    },
];

pub fn service_for(route: &Route) -> Option<&'static Service> {
    SERVICES.iter().find(|service| &service.route == route)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLink {
    pub label: &'static str,
    pub route: Route,
}

/// Desktop and mobile navigation, in display order. `Services` opens the
/// services dropdown instead of navigating.
pub const NAV_LINKS: [PageLink; 5] = [
    PageLink { label: "Home", route: Route::Home },
    PageLink { label: "About", route: Route::About },
    PageLink { label: "Services", route: Route::Services },
    PageLink { label: "Blog", route: Route::Blog },
    PageLink { label: "Contact", route: Route::Contact },
];

pub const FOOTER_LINKS: [PageLink; 4] = [
    PageLink { label: "Home", route: Route::Home },
    PageLink { label: "About Us", route: Route::About },
    PageLink { label: "Blog", route: Route::Blog },
    PageLink { label: "Contact Us", route: Route::Contact },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Facebook", glyph: "f", href: "#" },
    SocialLink { label: "Twitter", glyph: "𝕏", href: "#" },
    SocialLink { label: "LinkedIn", glyph: "in", href: "#" },
    SocialLink { label: "YouTube", glyph: "▶", href: "#" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeArt {
    Certificate,
    Clock,
    Smile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub number: u32,
    pub suffix: &'static str,
    pub title: &'static str,
    pub art: BadgeArt,
}

pub const ACHIEVEMENTS: [Achievement; 3] = [
    Achievement { number: 20, suffix: "+", title: "Certified Specialist", art: BadgeArt::Certificate },
    Achievement { number: 5, suffix: "+", title: "Years Of Experience", art: BadgeArt::Clock },
    Achievement { number: 100, suffix: "+", title: "Satisfied Customers", art: BadgeArt::Smile },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_drop_bullets_and_blank_lines() {
        let points = description_points("• One\n\n  •  Two  \n•\nThree");
        assert_eq!(points, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn every_service_has_points_and_a_distinct_route() {
        for (i, service) in SERVICES.iter().enumerate() {
            assert!(!service.points().is_empty(), "{}", service.title);
            assert!(SERVICES[i + 1..].iter().all(|other| other.route != service.route));
        }
        assert_eq!(SERVICES[1].points(), vec!["Corporate Tax", "Value Added Tax (VAT)", "Tax Agent Service"]);
    }

    #[test]
    fn service_lookup_by_route() {
        assert_eq!(service_for(&Route::Aml).map(|s| s.title), Some("Anti–Money Laundering (AML)"));
        assert!(service_for(&Route::Blog).is_none());
    }
}
