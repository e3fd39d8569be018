//! Data models for METAR decoding
//!
//! This module contains the core data structures for representing a raw
//! METAR report, the ordered decoded output, and the internal observations
//! (wind, cloud layers, weather tokens, trend groups) produced while
//! decoding. All entities are created fresh per decode call; nothing here
//! carries state across calls.

use serde::{Serialize, Serializer};

// =============================================================================
// Raw Report
// =============================================================================

/// One raw METAR line: ASCII text with space-delimited groups
///
/// Construction is infallible; the decoder is total over arbitrary text,
/// including empty or non-METAR input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReport {
    line: String,
}

impl RawReport {
    /// Create a raw report from one line of text, trimming surrounding
    /// whitespace
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into().trim().to_string(),
        }
    }

    /// The report text
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Whether the line is empty after trimming
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

impl std::fmt::Display for RawReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.line)
    }
}

impl From<&str> for RawReport {
    fn from(line: &str) -> Self {
        Self::new(line)
    }
}

// =============================================================================
// Decoded Output
// =============================================================================

/// Labels for the fixed, closed set of decodable METAR fields
///
/// `all()` returns the labels in canonical METAR group order, which is also
/// the insertion order of a [`DecodedReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    RawReport,
    Station,
    ObservationTime,
    Wind,
    Visibility,
    Weather,
    Clouds,
    TemperatureDewPoint,
    Pressure,
    RunwayVisualRange,
    Trend,
    RecentWeather,
    WindShear,
    Remarks,
}

impl FieldLabel {
    /// Human-readable label text
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::RawReport => "raw report",
            FieldLabel::Station => "station",
            FieldLabel::ObservationTime => "observation time",
            FieldLabel::Wind => "wind",
            FieldLabel::Visibility => "visibility",
            FieldLabel::Weather => "weather",
            FieldLabel::Clouds => "clouds",
            FieldLabel::TemperatureDewPoint => "temperature/dew point",
            FieldLabel::Pressure => "pressure",
            FieldLabel::RunwayVisualRange => "runway visual range",
            FieldLabel::Trend => "trend",
            FieldLabel::RecentWeather => "recent weather",
            FieldLabel::WindShear => "wind shear",
            FieldLabel::Remarks => "remarks",
        }
    }

    /// All labels in canonical METAR group order
    pub fn all() -> [FieldLabel; 14] {
        [
            FieldLabel::RawReport,
            FieldLabel::Station,
            FieldLabel::ObservationTime,
            FieldLabel::Wind,
            FieldLabel::Visibility,
            FieldLabel::Weather,
            FieldLabel::Clouds,
            FieldLabel::TemperatureDewPoint,
            FieldLabel::Pressure,
            FieldLabel::RunwayVisualRange,
            FieldLabel::Trend,
            FieldLabel::RecentWeather,
            FieldLabel::WindShear,
            FieldLabel::Remarks,
        ]
    }
}

impl std::fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One decoded field: a label and its rendered text
///
/// Rendered text is plain text, possibly containing the configured trend
/// line-break marker; it is not structured for further parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedField {
    pub label: FieldLabel,
    pub text: String,
}

/// Ordered label → rendered-text mapping for one decoded report
///
/// Insertion order follows canonical METAR group order, with the raw report
/// text always present as the first field. A label appears only if the
/// corresponding group was found and decoded to non-empty text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecodedReport {
    fields: Vec<DecodedField>,
}

impl DecodedReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, dropping it if the rendered text is empty
    pub fn push(&mut self, label: FieldLabel, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.fields.push(DecodedField { label, text });
        }
    }

    /// Look up a field's rendered text by label
    pub fn get(&self, label: FieldLabel) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| field.text.as_str())
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DecodedField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// =============================================================================
// Wind Observation
// =============================================================================

/// Wind direction as reported in a wind group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    /// True direction in whole degrees
    Degrees(u16),
    /// VRB: direction variable
    Variable,
    /// All-zero direction and speed
    Calm,
}

/// Wind speed unit suffix of a wind group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
}

impl SpeedUnit {
    /// English phrase for the unit
    pub fn phrase(&self) -> &'static str {
        match self {
            SpeedUnit::Knots => "knots",
            SpeedUnit::MetersPerSecond => "meters/second",
        }
    }
}

/// Wind speed value, which may be the capped P99 indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindSpeed {
    Value(u32),
    /// Literal P99: more than 99 (meters/second groups only)
    MoreThan99,
}

/// Decoded surface-wind or trend-wind observation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindObservation {
    pub direction: WindDirection,
    pub speed: WindSpeed,
    pub gust: Option<u32>,
    pub unit: SpeedUnit,
}

// =============================================================================
// Cloud Layers
// =============================================================================

/// Sky cover amount code of a cloud group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudCover {
    Few,
    Scattered,
    Broken,
    Overcast,
    VerticalVisibility,
    NoSignificantCloud,
    NoCloudDetected,
}

impl CloudCover {
    /// Parse a cover code; `None` for anything outside the fixed set
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FEW" => Some(CloudCover::Few),
            "SCT" => Some(CloudCover::Scattered),
            "BKN" => Some(CloudCover::Broken),
            "OVC" => Some(CloudCover::Overcast),
            "VV" => Some(CloudCover::VerticalVisibility),
            "NSC" => Some(CloudCover::NoSignificantCloud),
            "NCD" => Some(CloudCover::NoCloudDetected),
            _ => None,
        }
    }

    /// The METAR code for this cover amount
    pub fn code(&self) -> &'static str {
        match self {
            CloudCover::Few => "FEW",
            CloudCover::Scattered => "SCT",
            CloudCover::Broken => "BKN",
            CloudCover::Overcast => "OVC",
            CloudCover::VerticalVisibility => "VV",
            CloudCover::NoSignificantCloud => "NSC",
            CloudCover::NoCloudDetected => "NCD",
        }
    }
}

/// Convective qualifier suffix on a cloud group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvectiveQualifier {
    Cumulonimbus,
    ToweringCumulus,
}

impl ConvectiveQualifier {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CB" => Some(ConvectiveQualifier::Cumulonimbus),
            "TCU" => Some(ConvectiveQualifier::ToweringCumulus),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ConvectiveQualifier::Cumulonimbus => "CB",
            ConvectiveQualifier::ToweringCumulus => "TCU",
        }
    }
}

/// One decoded sky-condition layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudLayer {
    pub cover: CloudCover,
    /// Layer base (or vertical visibility) in hundreds of feet
    pub height_hundreds_ft: u32,
    pub qualifier: Option<ConvectiveQualifier>,
}

// =============================================================================
// Weather Tokens
// =============================================================================

/// Intensity marker on a weather-phenomena code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIntensity {
    Light,
    Heavy,
}

/// Decoded compound weather-phenomena code
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WeatherToken {
    pub intensity: Option<WeatherIntensity>,
    pub vicinity: bool,
    /// Matched descriptors in scan order (at most four per compound code)
    pub descriptors: Vec<&'static str>,
}

// =============================================================================
// Trend Forecast Groups
// =============================================================================

/// Kind of a trailing trend forecast group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendKind {
    NoSignificantChange,
    Becoming,
    Temporary,
}

impl TrendKind {
    pub fn code(&self) -> &'static str {
        match self {
            TrendKind::NoSignificantChange => "NOSIG",
            TrendKind::Becoming => "BECMG",
            TrendKind::Temporary => "TEMPO",
        }
    }
}

/// Time qualifier inside a trend group: (FM|TL|AT)HHMM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendTime {
    /// English word for the qualifier ("from", "until", "at")
    pub qualifier: &'static str,
    pub hour: String,
    pub minute: String,
}

/// Collected content of one BECMG/TEMPO trend block
///
/// Wind and visibility are kept as the matched raw sub-groups; they are
/// rendered (or passed through untranslated) by the trend decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendGroup {
    pub kind: TrendKind,
    pub time: Option<TrendTime>,
    pub wind: Option<String>,
    pub visibility: Option<String>,
    pub clouds: Vec<CloudLayer>,
    pub weather: Vec<String>,
}

impl TrendGroup {
    pub fn new(kind: TrendKind) -> Self {
        Self {
            kind,
            time: None,
            wind: None,
            visibility: None,
            clouds: Vec::new(),
            weather: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod raw_report_tests {
        use super::*;

        #[test]
        fn test_trims_surrounding_whitespace() {
            let report = RawReport::new("  ZBAA 010000Z 24015KT 9999 NOSIG \n");
            assert_eq!(report.as_str(), "ZBAA 010000Z 24015KT 9999 NOSIG");
        }

        #[test]
        fn test_empty_input_allowed() {
            let report = RawReport::new("   ");
            assert!(report.is_empty());
        }
    }

    mod decoded_report_tests {
        use super::*;

        #[test]
        fn test_insertion_order_preserved() {
            let mut report = DecodedReport::new();
            report.push(FieldLabel::RawReport, "ZBAA ...");
            report.push(FieldLabel::Station, "ZBAA");
            report.push(FieldLabel::Pressure, "1013 hPa");

            let labels: Vec<FieldLabel> = report.iter().map(|f| f.label).collect();
            assert_eq!(
                labels,
                vec![
                    FieldLabel::RawReport,
                    FieldLabel::Station,
                    FieldLabel::Pressure
                ]
            );
        }

        #[test]
        fn test_empty_text_dropped() {
            let mut report = DecodedReport::new();
            report.push(FieldLabel::Wind, "");
            assert!(report.is_empty());
            assert_eq!(report.get(FieldLabel::Wind), None);
        }

        #[test]
        fn test_lookup_by_label() {
            let mut report = DecodedReport::new();
            report.push(FieldLabel::Station, "EGLL");
            assert_eq!(report.get(FieldLabel::Station), Some("EGLL"));
            assert_eq!(report.get(FieldLabel::Remarks), None);
        }

        #[test]
        fn test_serializes_as_ordered_array() {
            let mut report = DecodedReport::new();
            report.push(FieldLabel::Station, "EGLL");
            report.push(FieldLabel::Pressure, "1013 hPa");

            let json = serde_json::to_string(&report).unwrap();
            assert!(json.contains(r#""label":"station""#));
            assert!(json.find("station").unwrap() < json.find("pressure").unwrap());
        }
    }

    mod field_label_tests {
        use super::*;

        #[test]
        fn test_canonical_order() {
            let all = FieldLabel::all();
            assert_eq!(all.len(), 14);
            assert_eq!(all[0], FieldLabel::RawReport);
            assert_eq!(all[13], FieldLabel::Remarks);
        }

        #[test]
        fn test_display_matches_as_str() {
            for label in FieldLabel::all() {
                assert_eq!(format!("{}", label), label.as_str());
            }
        }
    }

    mod cloud_tests {
        use super::*;

        #[test]
        fn test_cover_code_roundtrip() {
            for code in ["FEW", "SCT", "BKN", "OVC", "VV", "NSC", "NCD"] {
                let cover = CloudCover::from_code(code).unwrap();
                assert_eq!(cover.code(), code);
            }
            assert_eq!(CloudCover::from_code("XXX"), None);
        }

        #[test]
        fn test_qualifier_codes() {
            assert_eq!(
                ConvectiveQualifier::from_code("CB"),
                Some(ConvectiveQualifier::Cumulonimbus)
            );
            assert_eq!(
                ConvectiveQualifier::from_code("TCU"),
                Some(ConvectiveQualifier::ToweringCumulus)
            );
            assert_eq!(ConvectiveQualifier::from_code("ACC"), None);
        }
    }
}
