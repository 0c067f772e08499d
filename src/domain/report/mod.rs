//! Report Module - Narrative report assembly.
//!
//! The assembler turns scores, maturity, benchmark and SWOT/TOWS output
//! into a [`Report`] with a fixed section layout. An optional enrichment
//! narrative can be overlaid on the summary, findings and recommendations.

mod aggregate;
mod assembler;
mod enrichment;
mod provenance;
mod roadmap;
mod roi;
mod section;

pub use aggregate::Report;
pub use assembler::{AssemblyInput, NarrativeAssembler};
pub use enrichment::{EnrichedNarrative, NarrativeParseError};
pub use provenance::ReportProvenance;
pub use roadmap::{build_roadmap, RoadmapPhase};
pub use roi::RoiProjection;
pub use section::{ReportSection, SectionKind};
