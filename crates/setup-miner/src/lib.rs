//! # Composer Setup Miner
//!
//! Best-effort extraction of post-install setup steps from a package README.
//!
//! The miner is a stack of independent pattern passes over plain Markdown text,
//! not a Markdown parser. Every pass is pure (text in, steps out) so it can be
//! exercised with literal README fixtures.
//!
//! ## Architecture
//!
//! ```text
//! README text
//!     │
//!     ├──> Section extraction (header-delimited, topic vocabulary filter)
//!     │
//!     ├──> Primary mining, per relevant section
//!     │    ├─> list items
//!     │    ├─> fenced code block lines
//!     │    └─> inline command spans
//!     │
//!     └──> Whole-document fallback (inline commands, deduplicated)
//! ```
//!
//! When nothing can be mined, callers consult [`FallbackTable`], a static
//! mapping from well-known package identifiers to hand-curated steps.
//!
//! ## Example
//!
//! ```rust
//! use composer_setup_miner::extract_setup_steps;
//!
//! let readme = "# Demo\n\n## Installation\n\n```bash\nphp artisan migrate\n```\n";
//! let steps = extract_setup_steps(readme);
//! assert_eq!(steps[0].as_str(), "- Run `php artisan migrate`");
//! ```

mod error;
mod fallback;
mod miner;
mod sections;
mod types;

pub use error::{MinerError, Result};
pub use fallback::{static_steps, FallbackTable};
pub use miner::{
    code_block_steps, extract_setup_steps, fallback_command_steps, inline_command_steps,
    list_item_steps, mine_steps, process_section,
};
pub use sections::{extract_relevant_sections, is_relevant_header, RELEVANT_TOPICS};
pub use types::{Section, SetupStep};
