//! # affinekit builder
//!
//! A fluent API over [`affinekit_core::CompositeTransformation`]. Each call
//! appends one primitive, and the first call made is the first applied to
//! a point.
//!
//! ```rust
//! use affinekit_builder::AffineBuilder;
//! use affinekit_core::Point3d;
//!
//! let mut builder = AffineBuilder::new();
//! builder.translate(10.0, 10.0, 10.0).scale_uniform(2.0);
//! assert_eq!(builder.transform(&Point3d::new(1.0, 1.0, 1.0)), Point3d::new(22.0, 22.0, 22.0));
//! ```

pub mod builder;

pub use builder::*;
