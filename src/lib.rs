//! # Cuetint - Cue Tint Tally
//!
//! A command-line utility for tallying subtitle cue durations per highlight
//! color in table-based Word review documents.
//!
//! ## Features
//!
//! - **Cue Scanning**: Finds table rows whose first cell carries an
//!   `HH:MM:SS,mmm --> HH:MM:SS,mmm` timestamp range
//! - **Color Tallies**: Sums elapsed time per highlight color across the
//!   whole document, with ceiling rounding into seconds
//! - **Error Reports**: Separates cue rows without a usable highlight from
//!   document-level failures, never mixing the two
//! - **Data Export**: Writes results to CSV or JSON files
//! - **Configurable Output**: Clock, verbose, or custom three-slot time
//!   format templates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cuetint::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
