//! Configuration discovery, loading and resolution
//!
//! Sources are merged in this precedence order, highest first:
//!
//! 1. **Command-line flags**
//! 2. **Project config** - the first file found by [`discover_config_file`],
//!    or the `radbuild` field of `package.json`
//! 3. **Preset** - the named entry of the preset registry for the chosen bundler
//! 4. **Empty object** - bundler defaults are applied afterwards by
//!    [`crate::defaults`]
//!
//! Objects merge key by key; arrays and scalars from the higher source
//! replace the lower one outright. `null` counts as unset.
//!
//! # Example
//!
//! ```ignore
//! use buildcfg_core::config::{ConfigResolver, ResolveOptions};
//! use buildcfg_fs::NormalizedPath;
//!
//! let resolver = ConfigResolver::new(NormalizedPath::new("/path/to/project"));
//! let resolved = resolver.resolve(&ResolveOptions::default()).await;
//! println!("{} -> {}", resolved.bundler, resolved.native_config());
//! ```

mod detect;
mod discovery;
mod loader;
mod merge;
mod resolver;

pub use detect::detect_bundler;
pub use discovery::{CONFIG_FILES, MANIFEST_FIELD, discover_config_file};
pub use loader::{ConfigLoader, ModuleEvaluator, NodeEvaluator};
pub use merge::{merge_layers, merge_with_precedence};
pub use resolver::{ConfigResolver, ResolveOptions, ResolvedConfig};
