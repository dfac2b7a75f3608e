//! Values resolved while handling a single purge request.
//!
//! # Entity Types
//!
//! - [`PageFilenames`] - Primary filename and optional alias of a CMS page
//! - [`ZoneId`] - CDN zone identifier
//! - [`PurgeOutcome`] - What the CDN said about a purge command
//! - [`PurgeReport`] - Everything resolved for one purge

pub mod page;
pub mod purge;
pub mod zone;

pub use page::{PageFilenames, build_purge_urls};
pub use purge::{PurgeOutcome, PurgeReport};
pub use zone::{ZoneId, ZoneSummary, select_zone};
