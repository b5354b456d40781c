//! Type-Safe Route Payload
//!
//! A Route is a climbable line. It carries a grade, an optional style
//! (`type` on the wire: sport, boulder, trad, ...), free-form comments and
//! betas, and owns the Ascent nodes logged against it.
//!
//! # Examples
//!
//! ```rust
//! use rocdoc_core::models::Route;
//!
//! let mut route = Route::new()
//!     .with_grade("7a")
//!     .with_type("sport");
//! route.add_comment("Polished start");
//! route.add_beta("Left heel hook at the roof");
//!
//! assert_eq!(route.grade, "7a");
//! assert_eq!(route.route_type.as_deref(), Some("sport"));
//! assert_eq!(route.comments.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Grade used when none is known
pub const UNKNOWN_GRADE: &str = "?";

/// Extra fields of a Route node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    /// Difficulty grade, `"?"` when unknown
    pub grade: String,

    /// Route style, persisted under the `type` key
    #[serde(rename = "type")]
    pub route_type: Option<String>,

    /// Comments in insertion order
    pub comments: Vec<String>,

    /// Betas (advice entries) in insertion order
    pub betas: Vec<String>,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            grade: UNKNOWN_GRADE.to_string(),
            route_type: None,
            comments: Vec::new(),
            betas: Vec::new(),
        }
    }
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grade
    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    /// Set the route style
    pub fn with_type(mut self, route_type: impl Into<String>) -> Self {
        self.route_type = Some(route_type.into());
        self
    }

    /// Seed the comment list
    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    /// Seed the beta list
    pub fn with_betas(mut self, betas: Vec<String>) -> Self {
        self.betas = betas;
        self
    }

    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.push(comment.into());
    }

    pub fn add_beta(&mut self, beta: impl Into<String>) {
        self.betas.push(beta.into());
    }

    /// Whether a real grade has been recorded
    pub fn is_graded(&self) -> bool {
        self.grade != UNKNOWN_GRADE
    }
}
