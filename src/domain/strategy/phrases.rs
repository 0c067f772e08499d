//! Canned phrases keyed by (category, capability band).
//!
//! Every narrative fragment the synthesizer and the assembler use comes
//! from a small pure function here, so wording can be tested per pair
//! instead of by diffing whole documents.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::Category;
use crate::domain::foundation::Percentage;

/// Qualitative band of a category percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityBand {
    Critical,
    Developing,
    Established,
    Advanced,
}

impl CapabilityBand {
    /// Bands a category percentage: <40, <60, <80, >=80.
    pub fn from_percentage(percentage: Percentage) -> Self {
        match percentage.value() {
            0..=39 => CapabilityBand::Critical,
            40..=59 => CapabilityBand::Developing,
            60..=79 => CapabilityBand::Established,
            _ => CapabilityBand::Advanced,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CapabilityBand::Critical => "critical",
            CapabilityBand::Developing => "developing",
            CapabilityBand::Established => "established",
            CapabilityBand::Advanced => "advanced",
        }
    }
}

impl fmt::Display for CapabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What a strong category gives the company.
pub fn asset(category: Category) -> &'static str {
    match category {
        Category::BusinessFoundation => "a clear business strategy that AI initiatives can align with",
        Category::CurrentAiUse => "hands-on experience with AI tools in daily work",
        Category::OrganizationReadiness => "leadership commitment and an organization open to change",
        Category::TechnologyInfrastructure => "a cloud-ready IT foundation for deploying AI services",
        Category::DataManagement => "well-organized data that can feed AI models",
        Category::HumanResources => "people with the digital skills to adopt AI",
    }
}

/// What a weak category holds back.
pub fn gap(category: Category) -> &'static str {
    match category {
        Category::BusinessFoundation => "AI goals are not yet tied to business objectives or budgets",
        Category::CurrentAiUse => "AI is used sporadically, without measured results",
        Category::OrganizationReadiness => "ownership and governance for AI initiatives are unclear",
        Category::TechnologyInfrastructure => "legacy systems and limited integration slow AI deployment",
        Category::DataManagement => "data is scattered, inconsistent, or hard to access",
        Category::HumanResources => "AI skills are scarce and training is not systematic",
    }
}

/// Action that builds on a strong category.
pub fn leverage_action(category: Category) -> &'static str {
    match category {
        Category::BusinessFoundation => "Turn the business strategy into a prioritized AI use-case portfolio with owners and KPIs",
        Category::CurrentAiUse => "Scale the AI tools already in use from individual teams to company-wide workflows",
        Category::OrganizationReadiness => "Use leadership sponsorship to launch a cross-functional AI program office",
        Category::TechnologyInfrastructure => "Build reusable AI services on the existing cloud platform",
        Category::DataManagement => "Use the existing data assets to train or ground domain-specific AI models",
        Category::HumanResources => "Appoint AI champions from the skilled workforce to coach other teams",
    }
}

/// Action that closes the gap of a weak category.
pub fn improvement_action(category: Category) -> &'static str {
    match category {
        Category::BusinessFoundation => "Define two or three AI objectives linked to measurable business outcomes",
        Category::CurrentAiUse => "Run a small, measurable AI pilot in one high-volume process",
        Category::OrganizationReadiness => "Assign an executive owner and a lightweight AI governance process",
        Category::TechnologyInfrastructure => "Modernize the integration layer and adopt managed cloud AI services",
        Category::DataManagement => "Consolidate core data sources and set basic data-quality rules",
        Category::HumanResources => "Launch role-based AI literacy training for all staff",
    }
}

/// Risk that a weak category poses once AI use grows.
pub fn risk(category: Category) -> &'static str {
    match category {
        Category::BusinessFoundation => "AI spending without business alignment may not produce a return",
        Category::CurrentAiUse => "limited practical experience makes it hard to judge vendors and results",
        Category::OrganizationReadiness => "resistance to change can stall projects after the pilot stage",
        Category::TechnologyInfrastructure => "infrastructure bottlenecks can block scaling beyond pilots",
        Category::DataManagement => "poor data quality leads to unreliable AI output and compliance exposure",
        Category::HumanResources => "dependence on a few experts creates key-person risk",
    }
}

/// Strength statement for a category in a band.
pub fn strength_phrase(category: Category, band: CapabilityBand) -> String {
    match band {
        CapabilityBand::Advanced => format!("Advanced {}: {}", category.label(), asset(category)),
        CapabilityBand::Established => format!("Solid {}: {}", category.label(), asset(category)),
        CapabilityBand::Developing | CapabilityBand::Critical => format!(
            "{} is the relatively strongest area, a starting point for {}",
            category.label(),
            asset(category)
        ),
    }
}

/// Weakness statement for a category in a band.
pub fn weakness_phrase(category: Category, band: CapabilityBand) -> String {
    match band {
        CapabilityBand::Critical => format!("Critical gap in {}: {}", category.label(), gap(category)),
        CapabilityBand::Developing => {
            format!("Underdeveloped {}: {}", category.label(), gap(category))
        }
        CapabilityBand::Established => format!(
            "{} trails the other categories: {}",
            category.label(),
            gap(category)
        ),
        CapabilityBand::Advanced => format!(
            "{} is the least advanced area, although it is already strong",
            category.label()
        ),
    }
}

/// One-line finding for a category in a band.
pub fn finding_phrase(category: Category, band: CapabilityBand, percentage: Percentage) -> String {
    let assessment = match band {
        CapabilityBand::Advanced => "a competitive advantage to build on",
        CapabilityBand::Established => "a workable base that needs targeted investment",
        CapabilityBand::Developing => "an area that will limit AI results if left unaddressed",
        CapabilityBand::Critical => "a bottleneck that should be addressed first",
    };
    format!("{} scores {} ({}): {}", category.label(), percentage, band, assessment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_percentage_thresholds() {
        assert_eq!(CapabilityBand::from_percentage(Percentage::new(0)), CapabilityBand::Critical);
        assert_eq!(CapabilityBand::from_percentage(Percentage::new(39)), CapabilityBand::Critical);
        assert_eq!(CapabilityBand::from_percentage(Percentage::new(40)), CapabilityBand::Developing);
        assert_eq!(CapabilityBand::from_percentage(Percentage::new(60)), CapabilityBand::Established);
        assert_eq!(CapabilityBand::from_percentage(Percentage::new(80)), CapabilityBand::Advanced);
        assert_eq!(CapabilityBand::from_percentage(Percentage::HUNDRED), CapabilityBand::Advanced);
    }

    #[test]
    fn strength_phrase_names_the_category() {
        let phrase = strength_phrase(Category::DataManagement, CapabilityBand::Advanced);
        assert!(phrase.starts_with("Advanced Data Management"));
    }

    #[test]
    fn weakness_phrase_depends_on_band() {
        let critical = weakness_phrase(Category::HumanResources, CapabilityBand::Critical);
        let advanced = weakness_phrase(Category::HumanResources, CapabilityBand::Advanced);
        assert!(critical.starts_with("Critical gap in Human Resources"));
        assert_ne!(critical, advanced);
    }

    #[test]
    fn every_pair_produces_text() {
        let bands = [
            CapabilityBand::Critical,
            CapabilityBand::Developing,
            CapabilityBand::Established,
            CapabilityBand::Advanced,
        ];
        for category in Category::ALL {
            for band in bands {
                assert!(!strength_phrase(category, band).is_empty());
                assert!(!weakness_phrase(category, band).is_empty());
                assert!(!finding_phrase(category, band, Percentage::new(50)).is_empty());
            }
        }
    }
}
