//! Lookup operations shared by front ends.
//!
//! Wraps the database queries behind [`CompoundStore`], and adds batch
//! input parsing, found/missing reconciliation, structure image resolution,
//! result rendering, and settings resolution.

pub mod batch;
pub mod detail;
pub mod display;
pub mod reconcile;
pub mod settings;
pub mod store;
pub mod structure;

pub use batch::{BatchInputError, parse_identifier_list, read_identifier_file, read_identifier_stream};
pub use detail::{CompoundDetail, detail_fields, resolve_detail};
pub use display::{DisplayError, OutputFormat};
pub use reconcile::{BatchOutcome, BatchReport, reconcile, run_batch};
pub use settings::{Overrides, ResolvedSettings, SettingSource, resolve_settings};
pub use store::CompoundStore;
pub use structure::{ImageSettings, StructureImage, resolve_structure_image};
