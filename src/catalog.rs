use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Ai,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Web => "Web",
            Category::Mobile => "Mobile",
            Category::Ai => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: Category,
    pub technologies: Vec<String>,
    pub demo_url: String,
    pub github_url: String,
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialRecord {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub avatar: String,
}

impl TestimonialRecord {
    pub const MAX_RATING: u8 = 5;

    /// Filled stars to render; anything above the maximum is clamped.
    pub fn stars(&self) -> u8 {
        self.rating.min(Self::MAX_RATING)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCriterion {
    #[default]
    All,
    Featured,
    Web,
    Mobile,
    Ai,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown project filter: {0}")]
    UnknownCriterion(String),
}

impl FilterCriterion {
    /// In the order the filter buttons are shown.
    pub const ALL: [FilterCriterion; 5] = [
        FilterCriterion::All,
        FilterCriterion::Featured,
        FilterCriterion::Web,
        FilterCriterion::Mobile,
        FilterCriterion::Ai,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterCriterion::All => "All Projects",
            FilterCriterion::Featured => "Featured",
            FilterCriterion::Web => "Web Development",
            FilterCriterion::Mobile => "Mobile Apps",
            FilterCriterion::Ai => "AI & ML",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            FilterCriterion::All => "all",
            FilterCriterion::Featured => "featured",
            FilterCriterion::Web => "web",
            FilterCriterion::Mobile => "mobile",
            FilterCriterion::Ai => "ai",
        }
    }

    pub fn matches(self, project: &ProjectRecord) -> bool {
        match self {
            FilterCriterion::All => true,
            FilterCriterion::Featured => project.featured,
            FilterCriterion::Web => project.category == Category::Web,
            FilterCriterion::Mobile => project.category == Category::Mobile,
            FilterCriterion::Ai => project.category == Category::Ai,
        }
    }
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for FilterCriterion {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| CatalogError::UnknownCriterion(s.to_string()))
    }
}

/// Visible subset of `projects` for `criterion`, in catalog order.
pub fn filter_projects(projects: &[ProjectRecord], criterion: FilterCriterion) -> Vec<ProjectRecord> {
    projects
        .iter()
        .filter(|p| criterion.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: Category, featured: bool) -> ProjectRecord {
        ProjectRecord {
            id,
            title: format!("P{id}"),
            description: String::new(),
            image: String::new(),
            category,
            technologies: vec!["Rust".to_string()],
            demo_url: "#".to_string(),
            github_url: "#".to_string(),
            featured,
        }
    }

    fn sample() -> Vec<ProjectRecord> {
        vec![
            project(1, Category::Web, true),
            project(2, Category::Mobile, false),
            project(3, Category::Ai, true),
        ]
    }

    fn ids(projects: &[ProjectRecord]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_filter_scenario() {
        let catalog = sample();
        assert_eq!(ids(&filter_projects(&catalog, FilterCriterion::Featured)), vec![1, 3]);
        assert_eq!(ids(&filter_projects(&catalog, FilterCriterion::Mobile)), vec![2]);
        assert_eq!(ids(&filter_projects(&catalog, FilterCriterion::All)), vec![1, 2, 3]);
        assert_eq!(ids(&filter_projects(&catalog, FilterCriterion::Web)), vec![1]);
        assert_eq!(ids(&filter_projects(&catalog, FilterCriterion::Ai)), vec![3]);
    }

    #[test]
    fn test_filter_results_satisfy_criterion() {
        let mut catalog = sample();
        catalog.push(project(4, Category::Web, false));
        catalog.push(project(5, Category::Ai, false));
        for criterion in FilterCriterion::ALL {
            let visible = filter_projects(&catalog, criterion);
            assert!(visible.iter().all(|p| criterion.matches(p)));
            assert!(visible.iter().all(|p| catalog.contains(p)));
            // order is preserved
            let positions = visible
                .iter()
                .map(|p| catalog.iter().position(|c| c == p).unwrap())
                .collect::<Vec<_>>();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(filter_projects(&catalog, FilterCriterion::All), catalog);
    }

    #[test]
    fn test_categories_partition_catalog() {
        let catalog = sample();
        let mut union = [FilterCriterion::Web, FilterCriterion::Mobile, FilterCriterion::Ai]
            .into_iter()
            .flat_map(|c| ids(&filter_projects(&catalog, c)))
            .collect::<Vec<_>>();
        union.sort();
        assert_eq!(union, ids(&catalog));
    }

    #[test]
    fn test_no_match_yields_empty() {
        let catalog = vec![project(1, Category::Web, false)];
        assert!(filter_projects(&catalog, FilterCriterion::Featured).is_empty());
        assert!(filter_projects(&[], FilterCriterion::All).is_empty());
    }

    #[test]
    fn test_criterion_slug_parsing() {
        for criterion in FilterCriterion::ALL {
            assert_eq!(criterion.to_string().parse::<FilterCriterion>(), Ok(criterion));
        }
        assert_eq!(
            "games".parse::<FilterCriterion>(),
            Err(CatalogError::UnknownCriterion("games".to_string()))
        );
    }

    #[test]
    fn test_stars_are_clamped() {
        let mut t = TestimonialRecord {
            id: 1,
            name: "A".to_string(),
            role: "B".to_string(),
            content: "C".to_string(),
            rating: 4,
            avatar: String::new(),
        };
        assert_eq!(t.stars(), 4);
        t.rating = 9;
        assert_eq!(t.stars(), 5);
    }
}
