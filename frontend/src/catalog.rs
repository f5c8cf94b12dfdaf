//! The showcased projects. The list is compiled in and never changes at
//! runtime; the home page renders it in declaration order.

use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub icon: &'static str,
}

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: "regression",
        title: "Linear & Polynomial Regression",
        description: "Implementation of linear regression with gradient descent optimization and polynomial feature expansion for non-linear relationships.",
        technologies: &["Python", "NumPy", "Scikit-learn"],
        icon: "📈",
    },
    ProjectEntry {
        id: "decision-trees",
        title: "Decision Trees",
        description: "Building decision trees from scratch with entropy-based splitting criteria, pruning techniques, and visualization of tree structures.",
        technologies: &["Python", "Pandas", "Matplotlib"],
        icon: "🌳",
    },
    ProjectEntry {
        id: "random-forest",
        title: "Random Forest",
        description: "Ensemble learning method combining multiple decision trees with bootstrap aggregating for improved accuracy and reduced overfitting.",
        technologies: &["Python", "Scikit-learn", "Ensemble Methods"],
        icon: "🌲",
    },
    ProjectEntry {
        id: "boosting",
        title: "Gradient Boosting & AdaBoost",
        description: "Sequential ensemble methods that build weak learners iteratively, focusing on misclassified samples to create powerful predictive models.",
        technologies: &["Python", "XGBoost", "LightGBM"],
        icon: "🚀",
    },
    ProjectEntry {
        id: "bagging",
        title: "Bagging & Bootstrap Methods",
        description: "Bootstrap aggregating techniques for reducing variance in machine learning models through parallel ensemble construction.",
        technologies: &["Python", "Scikit-learn", "Statistics"],
        icon: "📦",
    },
    ProjectEntry {
        id: "svm",
        title: "Support Vector Machines",
        description: "Implementation of SVM for classification and regression with kernel methods, margin maximization, and support vector selection.",
        technologies: &["Python", "Scikit-learn", "Kernel Methods"],
        icon: "⚡",
    },
    ProjectEntry {
        id: "knn",
        title: "K-Nearest Neighbors",
        description: "Non-parametric classification and regression algorithm with distance metrics, optimal k selection, and performance optimization.",
        technologies: &["Python", "Distance Metrics", "Scikit-learn"],
        icon: "👥",
    },
    ProjectEntry {
        id: "kmeans",
        title: "K-Means Clustering",
        description: "Unsupervised learning algorithm for partitioning data into k clusters with centroid-based optimization and convergence analysis.",
        technologies: &["Python", "Clustering", "Data Analysis"],
        icon: "🎯",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate project id `{0}`")]
    DuplicateId(&'static str),
    #[error("project `{id}` has a blank {field}")]
    BlankField { id: &'static str, field: &'static str },
    #[error("project `{0}` lists no technologies")]
    NoTechnologies(&'static str),
}

impl ProjectEntry {
    fn blank_field(&self) -> Option<&'static str> {
        [
            ("id", self.id),
            ("title", self.title),
            ("description", self.description),
            ("icon", self.icon),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .or_else(|| {
            self.technologies
                .iter()
                .any(|tech| tech.trim().is_empty())
                .then_some("technology label")
        })
    }
}

/// Checks the catalog invariants and reports the first violation.
pub fn validate_catalog(entries: &[ProjectEntry]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if let Some(field) = entry.blank_field() {
            return Err(CatalogError::BlankField {
                id: entry.id,
                field,
            });
        }
        if entry.technologies.is_empty() {
            return Err(CatalogError::NoTechnologies(entry.id));
        }
        if !seen.insert(entry.id) {
            return Err(CatalogError::DuplicateId(entry.id));
        }
    }
    Ok(())
}
