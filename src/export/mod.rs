//! Curation and export of the folder tree into a map data file.

mod exporter;
mod prompt;

pub use exporter::{select_all, write_map_data, CurationExporter};
pub use prompt::{is_affirmative, zone_choice, DecisionSource, ScriptedAnswers, TerminalPrompt};
