//! Orbital-element records and the parse-and-validate boundary.
//!
//! The remote orbital-elements endpoint returns loosely-typed payloads where
//! numeric fields may arrive as JSON numbers or as strings. Everything that
//! crosses that boundary goes through [`RawElementsRecord::validate`], which
//! either yields a fully-checked [`OrbitalElements`] or rejects the record
//! wholesale. Malformed orbits are never partially rendered.

use serde::Deserialize;
use thiserror::Error;

/// Keplerian orbital elements for a single object.
///
/// Semi-major axis in astronomical units, all angles in degrees (the unit
/// the remote API speaks; conversion to radians happens inside the
/// propagator). Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis `a` in AU.
    pub semi_major_axis: f64,
    /// Eccentricity `e`, dimensionless, 0 ≤ e < 1.
    pub eccentricity: f64,
    /// Inclination `i` in degrees.
    pub inclination: f64,
    /// Longitude of the ascending node `Ω` in degrees.
    pub ascending_node_longitude: f64,
    /// Argument of perihelion `ω` in degrees.
    pub perihelion_argument: f64,
    /// Mean anomaly `M` in degrees.
    pub mean_anomaly: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ElementsError {
    #[error("field `{field}` is not a finite number: {value:?}")]
    UnparsableField { field: &'static str, value: String },

    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveSemiMajorAxis(f64),

    #[error("eccentricity must be in [0, 1) for a closed orbit, got {0}")]
    EccentricityOutOfRange(f64),
}

impl OrbitalElements {
    /// Verify the invariants the propagator relies on.
    ///
    /// All six fields must be finite, `a > 0` and `0 ≤ e < 1`. Records from
    /// the fetch boundary are already checked; the propagator re-checks so
    /// hand-constructed degenerate inputs fail loudly instead of producing
    /// garbage positions.
    pub fn check(&self) -> Result<(), ElementsError> {
        let fields = [
            ("semi_major_axis", self.semi_major_axis),
            ("eccentricity", self.eccentricity),
            ("inclination", self.inclination),
            ("ascending_node_longitude", self.ascending_node_longitude),
            ("perihelion_argument", self.perihelion_argument),
            ("mean_anomaly", self.mean_anomaly),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ElementsError::UnparsableField {
                    field,
                    value: value.to_string(),
                });
            }
        }
        if self.semi_major_axis <= 0.0 {
            return Err(ElementsError::NonPositiveSemiMajorAxis(
                self.semi_major_axis,
            ));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ElementsError::EccentricityOutOfRange(self.eccentricity));
        }
        Ok(())
    }
}

/// A JSON field that may be a number or a string holding a number.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

impl RawField {
    /// Parse the field to a finite `f64`, naming the field in the error.
    fn parse(&self, field: &'static str) -> Result<f64, ElementsError> {
        let value = match self {
            RawField::Number(n) => Some(*n),
            RawField::Text(s) => s.trim().parse::<f64>().ok(),
        };
        match value {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(ElementsError::UnparsableField {
                field,
                value: self.display_value(),
            }),
        }
    }

    fn display_value(&self) -> String {
        match self {
            RawField::Number(n) => n.to_string(),
            RawField::Text(s) => s.clone(),
        }
    }

    /// Render the field as a stable identifier string.
    ///
    /// Integral numeric ids lose the trailing `.0` so `3542519` and
    /// `"3542519"` produce the same id.
    pub fn as_id_string(&self) -> String {
        match self {
            RawField::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                format!("{}", *n as i64)
            }
            RawField::Number(n) => n.to_string(),
            RawField::Text(s) => s.trim().to_string(),
        }
    }
}

/// Loosely-typed orbital-elements record as returned by the remote API.
///
/// Unknown extra fields in the payload are ignored.
#[derive(Deserialize, Debug, Clone)]
pub struct RawElementsRecord {
    pub semi_major_axis: RawField,
    pub eccentricity: RawField,
    pub inclination: RawField,
    pub ascending_node_longitude: RawField,
    pub perihelion_argument: RawField,
    pub mean_anomaly: RawField,
}

impl RawElementsRecord {
    /// Convert to the internal representation, rejecting on any field failure.
    pub fn validate(&self) -> Result<OrbitalElements, ElementsError> {
        let elements = OrbitalElements {
            semi_major_axis: self.semi_major_axis.parse("semi_major_axis")?,
            eccentricity: self.eccentricity.parse("eccentricity")?,
            inclination: self.inclination.parse("inclination")?,
            ascending_node_longitude: self
                .ascending_node_longitude
                .parse("ascending_node_longitude")?,
            perihelion_argument: self.perihelion_argument.parse("perihelion_argument")?,
            mean_anomaly: self.mean_anomaly.parse("mean_anomaly")?,
        };
        elements.check()?;
        Ok(elements)
    }
}
