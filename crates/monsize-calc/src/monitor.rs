//! Monitor configurations and boundary validation.
//!
//! A [`MonitorConfiguration`] can only be built from validated parts, so every
//! calculator function called on it sees well-formed input. Raw user or
//! catalog input goes through [`MonitorInput`]; batches that contain malformed
//! entries are filtered by [`validate_all`], which drops bad entries instead
//! of rejecting the whole set.

use uuid::Uuid;

use crate::{
    AspectRatio, CalcError, Diagonal, DisplayColor, PhysicalDimensions, Resolution,
    color_for_index, physical_dimensions, pixel_density,
};

/// A monitor to compare: diagonal, resolution, aspect ratio and a colour tag.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MonitorConfiguration {
    id: String,
    name: String,
    diagonal: Diagonal,
    resolution: Resolution,
    aspect_ratio: AspectRatio,
    color: DisplayColor,
}

impl MonitorConfiguration {
    /// Build a configuration from raw strings, validating every field.
    ///
    /// The configuration gets a fresh random id; use [`with_id`](Self::with_id)
    /// to carry an existing identifier such as a catalog document id.
    ///
    /// # Errors
    ///
    /// Returns the [`CalcError`] of the first field that fails validation.
    pub fn new(
        name: impl Into<String>,
        diagonal: f64,
        resolution: &str,
        aspect_ratio: &str,
        color: DisplayColor,
    ) -> Result<Self, CalcError> {
        Ok(Self::from_parts(
            name,
            Diagonal::new(diagonal)?,
            Resolution::parse(resolution)?,
            AspectRatio::parse(aspect_ratio)?,
            color,
        ))
    }

    /// Build a configuration from already validated parts.
    #[must_use]
    pub fn from_parts(
        name: impl Into<String>,
        diagonal: Diagonal,
        resolution: Resolution,
        aspect_ratio: AspectRatio,
        color: DisplayColor,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            diagonal,
            resolution,
            aspect_ratio,
            color,
        }
    }

    /// Parse the compact `name;diagonal;WxH;W:H` form.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InvalidDescription`] if the description does not
    /// have exactly four fields or the diagonal is not a number, and the field
    /// specific error if a field fails validation.
    pub fn from_spec(spec: &str, color: DisplayColor) -> Result<Self, CalcError> {
        let invalid = || CalcError::InvalidDescription(spec.to_owned());

        let fields: Vec<&str> = spec.split(';').map(str::trim).collect();
        let [name, diagonal, resolution, aspect_ratio] = fields.as_slice() else {
            return Err(invalid());
        };
        if name.is_empty() {
            return Err(invalid());
        }
        let diagonal: f64 = diagonal
            .trim_end_matches('"')
            .parse()
            .map_err(|_| invalid())?;

        Self::new(*name, diagonal, resolution, aspect_ratio, color)
    }

    /// Replace the generated id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Replace the colour tag.
    #[must_use]
    pub fn with_color(mut self, color: DisplayColor) -> Self {
        self.color = color;
        self
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nominal diagonal.
    #[must_use]
    pub fn diagonal(&self) -> Diagonal {
        self.diagonal
    }

    /// Panel resolution.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Aspect ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect_ratio
    }

    /// Colour tag.
    #[must_use]
    pub fn color(&self) -> DisplayColor {
        self.color
    }

    /// Physical width and height in inches.
    #[must_use]
    pub fn dimensions(&self) -> PhysicalDimensions {
        physical_dimensions(self.diagonal.inches(), self.aspect_ratio)
    }

    /// Pixel density in PPI.
    #[must_use]
    pub fn pixel_density(&self) -> u32 {
        pixel_density(self.resolution, self.diagonal.inches())
    }
}

/// Unvalidated monitor description as supplied by a user or a catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorInput {
    /// Identifier to keep, if the source has one.
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Diagonal in inches.
    pub diagonal: f64,
    /// Resolution as `WxH`.
    pub resolution: String,
    /// Aspect ratio as `W:H`.
    pub aspect_ratio: String,
}

impl MonitorInput {
    /// Validate into a configuration with the given colour.
    ///
    /// # Errors
    ///
    /// Returns the [`CalcError`] of the first invalid field.
    pub fn validate(&self, color: DisplayColor) -> Result<MonitorConfiguration, CalcError> {
        let config = MonitorConfiguration::new(
            self.name.clone(),
            self.diagonal,
            &self.resolution,
            &self.aspect_ratio,
            color,
        )?;
        Ok(match &self.id {
            Some(id) => config.with_id(id.clone()),
            None => config,
        })
    }
}

/// Validate a batch of inputs, omitting malformed entries.
///
/// Colours are assigned from the palette in order of the entries that
/// survive validation. Every omitted entry is logged at warn level.
pub fn validate_all<'a, I>(inputs: I) -> Vec<MonitorConfiguration>
where
    I: IntoIterator<Item = &'a MonitorInput>,
{
    let mut configs = Vec::new();
    for input in inputs {
        match input.validate(color_for_index(configs.len())) {
            Ok(config) => configs.push(config),
            Err(e) => tracing::warn!(name = %input.name, "omitting monitor: {e}"),
        }
    }
    configs
}
