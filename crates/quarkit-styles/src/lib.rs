//! # Quarkit Styles
//!
//! Vector path synthesis for styled QR symbols. Everything in this crate is
//! a pure function of a [`ModuleMatrix`](quarkit_core::ModuleMatrix) and a
//! few style constants; no encoding, rasterizing or I/O happens here.
//!
//! ## Components
//!
//! - **Eyes**: ring, rounded square, square and circle finder patterns
//! - **Edge tracer**: outlines of 4-connected dark regions and their holes
//! - **Module styles**: square outlines, dots, rounded outlines, faceted
//!   "star" octagons and smoothed "vertigo" Bezier outlines
//! - **Symbol**: a module style and an eye style composed over one matrix
//!
//! ## Architecture
//!
//! ```text
//! ModuleMatrix
//!   ├── EdgeTracer ── Outline ──┬── SquareStyle
//!   │                           ├── RoundStyle
//!   │                           └── VertigoStyle
//!   └── StarStyle, DotStyle (per module)
//!
//! SymbolRenderer
//!   ├── ModuleRenderer (finder areas cleared)
//!   └── EyeStyle × 3 (rotated into place)
//! ```
//!
//! ## Usage
//!
//! ```
//! use quarkit_core::ModuleMatrix;
//! use quarkit_styles::{ModuleStyle, VertigoStyle};
//!
//! let matrix = ModuleMatrix::parse(".#.\n###\n.#.\n")?;
//! let path = VertigoStyle::new(0.3)?.create_path(&matrix);
//! assert_eq!(path.curve_count(), 12);
//! # Ok::<(), quarkit_core::Error>(())
//! ```

pub mod edge;
pub mod eye;
pub mod module;
pub mod symbol;

pub use edge::{EdgeTracer, Outline};
pub use eye::{CircleEye, EyeShape, EyeStyle, RingEye, RoundedSquareEye, SquareEye};
pub use module::{
    DotStyle, ModuleRenderer, ModuleStyle, ModuleStyleKind, RoundStyle, SquareStyle, StarStyle,
    VertigoStyle,
};
pub use symbol::{EyePosition, PlacedEye, SymbolPaths, SymbolRenderer};
