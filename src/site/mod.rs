//! Launch-site classification and GO/NOGO zone queries.

mod classify;
mod index;
mod table;
mod zone;

pub use classify::{classify, classify_csv};
pub use index::{MapZone, ZoneIndex};
pub use table::{canonical_column, read_coord_table, read_coord_table_path};
pub use zone::{BoundaryLine, LaunchSite, SafetyZone};
