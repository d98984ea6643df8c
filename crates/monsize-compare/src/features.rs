//! Side-by-side feature table for a catalog comparison.

use std::fmt;

use serde::Serialize;

use crate::{CatalogMonitor, Port};

/// Shown for a value a record does not have.
pub const MISSING: &str = "-";

/// One cell of the feature table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FeatureValue {
    /// Formatted text, e.g. `165Hz`.
    Text(String),
    /// Yes/no feature.
    Flag(bool),
    /// Several values, e.g. HDR formats.
    List(Vec<String>),
    /// Not set on the record.
    Missing,
}

impl FeatureValue {
    /// Text for an optional field; empty strings count as missing.
    fn text(value: Option<impl Into<String>>) -> Self {
        match value.map(Into::into) {
            Some(s) if !s.is_empty() => Self::Text(s),
            _ => Self::Missing,
        }
    }

    /// List for an array field; an empty list counts as missing.
    fn list(values: &[String]) -> Self {
        if values.is_empty() {
            Self::Missing
        } else {
            Self::List(values.to_vec())
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Flag(true) => f.write_str("Yes"),
            Self::Flag(false) => f.write_str("No"),
            Self::List(values) => f.write_str(&values.join(", ")),
            Self::Missing => f.write_str(MISSING),
        }
    }
}

/// Table section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSection {
    Display,
    HdrColour,
    Gaming,
    Connectivity,
    Physical,
    Pricing,
}

impl FeatureSection {
    /// Sections in display order.
    pub const ALL: [Self; 6] = [
        Self::Display,
        Self::HdrColour,
        Self::Gaming,
        Self::Connectivity,
        Self::Physical,
        Self::Pricing,
    ];

    /// Section heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Display => "Display",
            Self::HdrColour => "HDR & Colour",
            Self::Gaming => "Gaming",
            Self::Connectivity => "Connectivity",
            Self::Physical => "Physical",
            Self::Pricing => "Pricing",
        }
    }
}

/// A compared feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    ScreenSize,
    Resolution,
    PanelType,
    AspectRatio,
    RefreshRate,
    ResponseTime,
    Curved,
    CurveRadius,
    HdrSupport,
    PeakBrightness,
    ContrastRatio,
    Srgb,
    AdobeRgb,
    Dcip3,
    AdaptiveSync,
    Ports,
    UsbHub,
    Speakers,
    StandAdjustments,
    VesaMount,
    Weight,
    Msrp,
}

impl Feature {
    /// Rows in display order.
    pub const ALL: [Self; 22] = [
        Self::ScreenSize,
        Self::Resolution,
        Self::PanelType,
        Self::AspectRatio,
        Self::RefreshRate,
        Self::ResponseTime,
        Self::Curved,
        Self::CurveRadius,
        Self::HdrSupport,
        Self::PeakBrightness,
        Self::ContrastRatio,
        Self::Srgb,
        Self::AdobeRgb,
        Self::Dcip3,
        Self::AdaptiveSync,
        Self::Ports,
        Self::UsbHub,
        Self::Speakers,
        Self::StandAdjustments,
        Self::VesaMount,
        Self::Weight,
        Self::Msrp,
    ];

    /// Row label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ScreenSize => "Screen Size",
            Self::Resolution => "Resolution",
            Self::PanelType => "Panel Type",
            Self::AspectRatio => "Aspect Ratio",
            Self::RefreshRate => "Refresh Rate",
            Self::ResponseTime => "Response Time",
            Self::Curved => "Curved",
            Self::CurveRadius => "Curve Radius",
            Self::HdrSupport => "HDR Support",
            Self::PeakBrightness => "Peak Brightness",
            Self::ContrastRatio => "Contrast Ratio",
            Self::Srgb => "sRGB Coverage",
            Self::AdobeRgb => "Adobe RGB Coverage",
            Self::Dcip3 => "DCI-P3 Coverage",
            Self::AdaptiveSync => "Adaptive Sync",
            Self::Ports => "Ports",
            Self::UsbHub => "USB Hub",
            Self::Speakers => "Built-in Speakers",
            Self::StandAdjustments => "Stand Adjustments",
            Self::VesaMount => "VESA Mount",
            Self::Weight => "Weight",
            Self::Msrp => "MSRP",
        }
    }

    /// Section the row belongs to.
    #[must_use]
    pub fn section(self) -> FeatureSection {
        match self {
            Self::ScreenSize
            | Self::Resolution
            | Self::PanelType
            | Self::AspectRatio
            | Self::RefreshRate
            | Self::ResponseTime
            | Self::Curved
            | Self::CurveRadius => FeatureSection::Display,
            Self::HdrSupport
            | Self::PeakBrightness
            | Self::ContrastRatio
            | Self::Srgb
            | Self::AdobeRgb
            | Self::Dcip3 => FeatureSection::HdrColour,
            Self::AdaptiveSync => FeatureSection::Gaming,
            Self::Ports | Self::UsbHub | Self::Speakers => FeatureSection::Connectivity,
            Self::StandAdjustments | Self::VesaMount | Self::Weight => FeatureSection::Physical,
            Self::Msrp => FeatureSection::Pricing,
        }
    }

    /// The record's value for this row.
    #[must_use]
    pub fn value(self, m: &CatalogMonitor) -> FeatureValue {
        let gamut = m.colour_gamut.as_ref();
        let percent = |v: Option<f64>| FeatureValue::text(positive(v).map(|v| format!("{v}%")));

        match self {
            Self::ScreenSize => FeatureValue::Text(format!("{}\"", m.screen_size)),
            Self::Resolution => FeatureValue::text(Some(m.resolution.as_str())),
            Self::PanelType => FeatureValue::text(Some(m.panel_type.as_str())),
            Self::AspectRatio => FeatureValue::text(m.aspect_ratio.as_deref()),
            Self::RefreshRate => FeatureValue::Text(format!("{}Hz", m.refresh_rate)),
            Self::ResponseTime => {
                FeatureValue::text(positive(m.response_time).map(|v| format!("{v}ms")))
            }
            Self::Curved => FeatureValue::Flag(m.curved),
            Self::CurveRadius => FeatureValue::text(m.curve_radius.as_deref()),
            Self::HdrSupport => FeatureValue::list(&m.hdr_support),
            Self::PeakBrightness => {
                FeatureValue::text(positive(m.brightness).map(|v| format!("{v} nits")))
            }
            Self::ContrastRatio => FeatureValue::text(m.contrast_ratio.as_deref()),
            Self::Srgb => percent(gamut.and_then(|g| g.srgb)),
            Self::AdobeRgb => percent(gamut.and_then(|g| g.adobe_rgb)),
            Self::Dcip3 => percent(gamut.and_then(|g| g.dcip3)),
            Self::AdaptiveSync => FeatureValue::list(&m.adaptive_sync),
            Self::Ports => {
                FeatureValue::list(&m.ports.iter().map(port_label).collect::<Vec<_>>())
            }
            Self::UsbHub => FeatureValue::Flag(m.usb_hub),
            Self::Speakers => FeatureValue::Flag(m.speakers),
            Self::StandAdjustments => FeatureValue::list(&m.stand_adjustments),
            Self::VesaMount => FeatureValue::text(m.vesa_mount.as_deref()),
            Self::Weight => FeatureValue::text(positive(m.weight).map(|v| format!("{v}kg"))),
            Self::Msrp => FeatureValue::text(positive(m.msrp).map(format_price)),
        }
    }
}

/// Zero is treated as unset.
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// `2x HDMI 2.1`, `DisplayPort 1.4`.
fn port_label(port: &Port) -> String {
    let mut label = if port.count > 1 {
        format!("{}x {}", port.count, port.kind)
    } else {
        port.kind.clone()
    };
    if let Some(version) = port.version.as_deref().filter(|v| !v.is_empty()) {
        label.push(' ');
        label.push_str(version);
    }
    label
}

/// Price in pounds with thousands separators, e.g. `£1,299`.
fn format_price(value: f64) -> String {
    let plain = value.to_string();
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if fraction.is_empty() {
        format!("£{grouped}")
    } else {
        format!("£{grouped}.{fraction}")
    }
}

/// One feature across every compared monitor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    /// Which feature this row shows.
    pub feature: Feature,
    /// One value per monitor, in comparison order.
    pub values: Vec<FeatureValue>,
    /// Whether every monitor has the same value.
    pub all_same: bool,
}

impl FeatureRow {
    fn build(feature: Feature, monitors: &[CatalogMonitor]) -> Self {
        let values: Vec<FeatureValue> = monitors.iter().map(|m| feature.value(m)).collect();
        let all_same = values.windows(2).all(|pair| pair[0] == pair[1]);
        Self {
            feature,
            values,
            all_same,
        }
    }
}

/// Feature table: monitor names plus rows in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureTable {
    /// Monitor names in comparison order.
    pub monitors: Vec<String>,
    /// Rows in display order.
    pub rows: Vec<FeatureRow>,
}

impl FeatureTable {
    /// Build the table, or `None` when there is nothing to compare.
    #[must_use]
    pub fn build(monitors: &[CatalogMonitor]) -> Option<Self> {
        if monitors.is_empty() {
            return None;
        }
        Some(Self {
            monitors: monitors.iter().map(|m| m.name.clone()).collect(),
            rows: Feature::ALL
                .iter()
                .map(|&feature| FeatureRow::build(feature, monitors))
                .collect(),
        })
    }

    /// Look up a row by feature.
    #[must_use]
    pub fn row(&self, feature: Feature) -> Option<&FeatureRow> {
        self.rows.iter().find(|r| r.feature == feature)
    }

    /// Rows of one section, in display order.
    pub fn section(&self, section: FeatureSection) -> impl Iterator<Item = &FeatureRow> {
        self.rows.iter().filter(move |r| r.feature.section() == section)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Catalog;
    use crate::catalog::tests::CATALOG_JSON;

    fn monitors() -> Vec<CatalogMonitor> {
        Catalog::from_json(CATALOG_JSON).unwrap().iter().cloned().collect()
    }

    fn texts(row: &FeatureRow) -> Vec<String> {
        row.values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_all_same_flag() {
        let table = FeatureTable::build(&monitors()).unwrap();

        // No record has speakers
        let speakers = table.row(Feature::Speakers).unwrap();
        assert!(speakers.all_same);
        assert_eq!(texts(speakers), vec!["No", "No", "No"]);

        let refresh = table.row(Feature::RefreshRate).unwrap();
        assert!(!refresh.all_same);
        assert_eq!(texts(refresh), vec!["60Hz", "240Hz", "180Hz"]);

        // Two 27" panels match, the 49" does not
        let first_and_third = [monitors()[0].clone(), monitors()[2].clone()];
        let pair = FeatureTable::build(&first_and_third).unwrap();
        assert!(pair.row(Feature::ScreenSize).unwrap().all_same);
    }

    #[test]
    fn test_missing_values_use_placeholder() {
        let table = FeatureTable::build(&monitors()).unwrap();

        let aspect = table.row(Feature::AspectRatio).unwrap();
        assert_eq!(aspect.values[2], FeatureValue::Missing);
        assert_eq!(texts(aspect), vec!["16:9", "32:9", MISSING]);

        let adobe = table.row(Feature::AdobeRgb).unwrap();
        assert!(adobe.all_same);
        assert_eq!(texts(adobe), vec![MISSING, MISSING, MISSING]);

        let dcip3 = table.row(Feature::Dcip3).unwrap();
        assert_eq!(texts(dcip3), vec!["98%", MISSING, MISSING]);
    }

    #[test]
    fn test_array_rows() {
        let mut records = monitors();
        records[0].hdr_support = vec!["HDR10".to_owned(), "DisplayHDR 400".to_owned()];
        records[1].hdr_support = vec!["HDR10".to_owned(), "DisplayHDR 400".to_owned()];
        records[1].ports = vec![
            Port {
                kind: "HDMI".to_owned(),
                count: 2,
                version: Some("2.1".to_owned()),
            },
            Port {
                kind: "DisplayPort".to_owned(),
                count: 1,
                version: None,
            },
        ];

        let table = FeatureTable::build(&records).unwrap();

        let hdr = table.row(Feature::HdrSupport).unwrap();
        assert_eq!(
            hdr.values[0],
            FeatureValue::List(vec!["HDR10".to_owned(), "DisplayHDR 400".to_owned()])
        );
        assert_eq!(texts(hdr), vec!["HDR10, DisplayHDR 400", "HDR10, DisplayHDR 400", MISSING]);
        assert!(!hdr.all_same);

        let ports = table.row(Feature::Ports).unwrap();
        assert_eq!(texts(ports), vec!["HDMI 2.0", "2x HDMI 2.1, DisplayPort", MISSING]);
    }

    #[test]
    fn test_price_formatting() {
        assert_eq!(format_price(579.0), "£579");
        assert_eq!(format_price(1299.0), "£1,299");
        assert_eq!(format_price(1_234_567.5), "£1,234,567.5");

        let table = FeatureTable::build(&monitors()).unwrap();
        assert_eq!(texts(table.row(Feature::Msrp).unwrap()), vec!["£579", "£1,299", MISSING]);
    }

    #[test]
    fn test_sections_cover_every_row_in_order() {
        let table = FeatureTable::build(&monitors()).unwrap();
        let by_section: Vec<Feature> = FeatureSection::ALL
            .iter()
            .flat_map(|&s| table.section(s).map(|r| r.feature))
            .collect();
        assert_eq!(by_section, Feature::ALL.to_vec());
        assert_eq!(FeatureSection::HdrColour.title(), "HDR & Colour");
    }

    #[test]
    fn test_empty_table() {
        assert!(FeatureTable::build(&[]).is_none());
    }
}
