//! SVG renderer for icon records
//!
//! This module turns an [`IconRecord`](crate::IconRecord) into a single inline
//! `<svg>` tag: variant defaults first, then overrides, then sanitized extra
//! attributes, then the opaque body.

pub mod attrs;
pub mod config;
pub mod svg;

pub use attrs::{sanitize_attribute, sanitize_attributes, EVENT_ATTRIBUTES, RESERVED_ATTRIBUTES};
pub use config::SvgConfig;
pub use svg::{error_comment, render_data_uri, render_icon, render_svg, try_render_icon};
