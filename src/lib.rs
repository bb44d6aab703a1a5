//! # impulse-rs — IMPULSE Consortium Dashboard Views
//!
//! Loads the EU-OPENSCREEN IMPULSE screening catalogue and data-standards
//! survey, and computes everything the dashboard shows: per-partner counts
//! and charts, the categorical hierarchy graph, and the survey heatmap.
//!
//! ## Design Principles
//!
//! 1. **Selections are arguments**: a chosen site or attribute is passed in,
//!    never stored; every view recomputes from the read-only tables
//! 2. **Named fields, not positions**: rows are `ScreeningRecord`s keyed by
//!    `Attribute`, so column order in the export does not matter
//! 3. **Total normalization**: any survey cell maps to yes or no
//! 4. **Deterministic output**: same tables in, same bytes out
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use impulse_rs::{Dashboard, DashboardConfig};
//!
//! # fn example() -> impulse_rs::Result<()> {
//! let dashboard = Dashboard::open(DashboardConfig::default())?;
//!
//! for site in dashboard.sites() {
//!     let graph = dashboard.partner_graph(site);
//!     println!("{site}: {} nodes, {} edges", graph.node_count(), graph.edge_count());
//! }
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod normalize;
pub mod projection;
pub mod catalog;
pub mod survey;
pub mod views;
pub mod export;
pub mod config;
#[cfg(feature = "cli")]
pub mod logging;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Attribute, CellValue, ScreeningRecord, ScreeningDetail,
    GraphNode, GraphEdge, EdgeStyle, WeightedEdge, ProjectedGraph,
};

// ============================================================================
// Re-exports: Pipeline
// ============================================================================

pub use normalize::{normalize_answer, normalize_text, YesNo};
pub use projection::{
    project, project_partition, AdjacencyPattern, AdjacencyStep,
    MissingValuePolicy, ProjectionOptions,
};
pub use catalog::Catalog;
pub use survey::{SurveyMatrix, SurveySchema, SurveyTable};
pub use views::{
    AttributeBreakdown, CountTable, GroupedCounts, Heatmap, PartnerOverview,
};
pub use config::{DashboardConfig, GraphLayout};

// ============================================================================
// Top-level Dashboard handle
// ============================================================================

/// The primary entry point. A `Dashboard` owns the loaded tables and the
/// configuration, and computes views on demand.
#[derive(Debug, Clone)]
pub struct Dashboard {
    catalog: Catalog,
    survey: Option<SurveyMatrix>,
    config: DashboardConfig,
}

impl Dashboard {
    /// Load the catalogue (and the survey, when configured) from disk.
    pub fn open(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let catalog = Catalog::from_path(&config.catalog_path)?;
        let survey = match &config.survey_path {
            Some(path) => Some(survey::load(path, &config.survey)?),
            None => None,
        };
        Ok(Self { catalog, survey, config })
    }

    /// Assemble from already-loaded tables.
    pub fn from_parts(catalog: Catalog, survey: Option<SurveyMatrix>, config: DashboardConfig) -> Self {
        Self { catalog, survey, config }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn survey(&self) -> Option<&SurveyMatrix> {
        self.survey.as_ref()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Partner institutes offered for selection, sorted.
    pub fn sites(&self) -> Vec<&str> {
        self.catalog.sites()
    }

    /// Screening-type pie and detail rows for one partner.
    pub fn partner_overview(&self, site: &str) -> PartnerOverview {
        views::partner_overview(&self.catalog.for_site(site), site)
    }

    /// Breakdown of one selectable attribute (see [`Attribute::BREAKDOWN`])
    /// within one partner's screens.
    pub fn attribute_breakdown(&self, site: &str, attribute: Attribute) -> Result<AttributeBreakdown> {
        if !Attribute::BREAKDOWN.contains(&attribute) {
            return Err(Error::UnknownAttribute(attribute.column_name().into()));
        }
        Ok(views::attribute_breakdown(&self.catalog.for_site(site), site, attribute))
    }

    /// Aggregate graph over the whole catalogue.
    pub fn overview_graph(&self) -> ProjectedGraph {
        project(self.catalog.records(), &self.config.overview.pattern, &self.projection_options())
    }

    /// Graph of one partner's screens.
    pub fn partner_graph(&self, site: &str) -> ProjectedGraph {
        project_partition(
            self.catalog.records(),
            Attribute::Site,
            site,
            &self.config.partner.pattern,
            &self.projection_options(),
        )
    }

    /// Survey heatmap; fails when no survey was loaded.
    pub fn survey_heatmap(&self) -> Result<Heatmap> {
        self.survey
            .as_ref()
            .map(views::survey_heatmap)
            .ok_or_else(|| Error::NotFound("survey (no survey_path configured)".into()))
    }

    fn projection_options(&self) -> ProjectionOptions {
        ProjectionOptions {
            missing: self.config.missing_values,
            colors: self.config.colors.clone(),
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{table} is missing required column '{column}'")]
    MissingColumn { table: String, column: String },

    #[error("Malformed {table}: {message}")]
    Malformed { table: String, message: String },

    #[error("Sheet '{sheet}' not found in {path}")]
    SheetNotFound { sheet: String, path: String },

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "xlsx")]
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
