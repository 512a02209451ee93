//! Icon records and their builder
//!
//! An [`IconRecord`] is an immutable template describing one icon (name and
//! style variant) together with visual overrides. Templates are customized by
//! cloning them into an [`IconBuilder`]:
//!
//! ```rust
//! use heroicons_svg::{icons, IconRecord};
//!
//! let icon: IconRecord = icons::MOON.configure().with_size(32).with_color("#f59e0b").build();
//! assert_eq!(icon.size().as_str(), "32");
//! assert_eq!(icons::MOON.size().as_str(), "24");
//! ```

mod builder;
mod record;

pub use builder::IconBuilder;
pub use record::{Attrs, IconRecord, Size, Variant};
