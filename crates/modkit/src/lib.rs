//! # modkit
//!
//! Utility library for game mods.
//!
//! This crate provides:
//! - SI-prefix number formatting (`12345678.0` → `"12.3M"`)
//! - Composite format strings with `{0:S3}` style SI items
//! - Pooled string builders and list printing for log output
//! - Logging glue with scene-aware screen messages and runtime debug output
//! - A memoized cache of part prefab module metadata
//!
//! ## Quick start
//!
//! ```
//! use modkit::si::{FormatSpec, ToSi, to_si};
//!
//! assert_eq!(to_si(12_345_678.0, 3), "12.3M");
//!
//! let spec: FormatSpec = "S3".parse().unwrap();
//! assert_eq!(format!("{}", 0.5_f64.si(spec)), "500.0m");
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod logging;
pub mod prefab;
pub mod prelude;
pub mod si;
pub mod text;
pub mod util;

pub use config::{Config, ConfigBuilder, FormatConfig, LogConfig};
pub use error::{Error, Result};
pub use host::{GameScene, Part, PartModule, SceneHost, Vessel};
pub use logging::{DebugLogger, LogChannel, LogSink, Logger, TracingSink};
pub use prefab::{AvailablePart, ModuleInfo, PartRegistry, PrefabPartDb};
pub use si::{FormatSpec, SiPrefix, ToSi, format_si, parse_si, to_si, to_si_bounded};
pub use text::{FormatArg, StringBuilderPool, format};
