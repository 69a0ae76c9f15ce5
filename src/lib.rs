//! # Quarkit
//!
//! Vector path synthesis for stylized QR code symbols:
//! - Eye (finder pattern) shapes: square, circle, rounded square, ring
//! - Module styles: square outlines, dots, rounded outlines, faceted "star"
//!   modules, smoothed "vertigo" outlines
//! - Backend-agnostic path output, with SVG data and `lyon` lowering
//!
//! ## Architecture
//!
//! Quarkit is organized as a workspace with multiple crates:
//!
//! 1. **quarkit-core** - Module matrix, path builder, errors
//! 2. **quarkit-styles** - Eye shapes, edge tracer, module styles, symbol composition
//! 3. **quarkit-settings** - Style configuration and persistence
//! 4. **quarkit** - SVG document output and the command line binary

pub mod svg;

pub use quarkit_core::{
    Error, MatrixError, Module, ModuleMatrix, Path, PathCommand, Point, Result, StyleError,
    FINDER_PATTERN_SIZE,
};

pub use quarkit_styles::{
    CircleEye, DotStyle, EdgeTracer, EyePosition, EyeShape, EyeStyle, ModuleRenderer,
    ModuleStyle, ModuleStyleKind, Outline, PlacedEye, RingEye, RoundStyle, RoundedSquareEye,
    SquareEye, SquareStyle, StarStyle, SymbolPaths, SymbolRenderer, VertigoStyle,
};

pub use quarkit_settings::{SettingsError, SettingsResult, StyleConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout free for documents
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
