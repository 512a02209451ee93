//! Fluent customization of icon records

use crate::cache::BodyCache;
use crate::renderer::SvgConfig;

use super::{Attrs, IconRecord, Size};

/// Builder holding a private clone of an [`IconRecord`].
///
/// The record passed to [`IconBuilder::from_record`] is never touched; every
/// setter mutates the clone owned by the builder. [`IconBuilder::build`] may be
/// called any number of times and each call returns an independent record.
#[derive(Debug, Clone)]
pub struct IconBuilder {
    icon: IconRecord,
}

impl IconBuilder {
    pub fn from_record(record: &IconRecord) -> Self {
        Self {
            icon: record.clone(),
        }
    }

    /// Set the rendered width and height in pixels
    pub fn with_size(mut self, pixels: u32) -> Self {
        self.icon.size = Size::from(pixels);
        self
    }

    /// Set the CSS `color` the `currentColor` defaults resolve to
    pub fn with_color(mut self, value: impl Into<String>) -> Self {
        self.icon.color = Some(value.into());
        self
    }

    pub fn with_stroke(mut self, value: impl Into<String>) -> Self {
        self.icon.stroke = Some(value.into());
        self
    }

    pub fn with_stroke_width(mut self, value: impl Into<String>) -> Self {
        self.icon.stroke_width = Some(value.into());
        self
    }

    pub fn with_fill(mut self, value: impl Into<String>) -> Self {
        self.icon.fill = Some(value.into());
        self
    }

    /// Replace (not merge) the extra attributes
    pub fn with_attrs<I, K, V>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.icon.attrs = attrs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<Attrs>();
        self
    }

    /// The record as currently configured
    pub fn icon(&self) -> &IconRecord {
        &self.icon
    }

    /// Return a finished copy of the configured record
    pub fn build(&self) -> IconRecord {
        self.icon.clone()
    }

    /// Render with the bundled dataset and default visual settings
    pub fn render(&self) -> String {
        self.icon.render()
    }

    pub fn render_with(&self, cache: &BodyCache, config: &SvgConfig) -> String {
        self.icon.render_with(cache, config)
    }
}

impl From<&IconRecord> for IconBuilder {
    fn from(record: &IconRecord) -> Self {
        Self::from_record(record)
    }
}

impl From<IconBuilder> for IconRecord {
    fn from(builder: IconBuilder) -> Self {
        builder.icon
    }
}
