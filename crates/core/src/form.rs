//! Field definitions for the estimate form.
//!
//! The front end renders whatever [`form_schema`] describes, so field names,
//! limits, options and defaults live next to the encoder that consumes them.

use serde::Serialize;

use crate::property::{
    BuildingType, Furnishing, FORM_MAX_AREA, FORM_MAX_BALCONIES, FORM_MAX_BATHROOMS,
    FORM_MAX_BEDROOMS, FORM_MIN_AREA, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
    NO,
};

/// Column of the two-column layout a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormSection {
    PropertyDetails,
    LocationAndAmenities,
}

/// Widget kind plus its constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    Decimal { min: f64, max: f64, default: f64 },
    Integer { min: u32, max: u32, default: u32 },
    Choice { options: Vec<&'static str>, default: &'static str },
    YesNo { default: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    /// Key in the submitted `RawInput` JSON.
    pub name: &'static str,
    pub label: &'static str,
    pub section: FormSection,
    #[serde(flatten)]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

fn field(name: &'static str, label: &'static str, section: FormSection, kind: FieldKind) -> FormField {
    FormField {
        name,
        label,
        section,
        kind,
        help: None,
    }
}

/// The estimate form, in display order.
pub fn form_schema() -> Vec<FormField> {
    use FormSection::{LocationAndAmenities, PropertyDetails};

    vec![
        FormField {
            help: Some("Enter the total area of the property in square feet"),
            ..field(
                "area",
                "Area (sq ft)",
                PropertyDetails,
                FieldKind::Decimal {
                    min: FORM_MIN_AREA,
                    max: FORM_MAX_AREA,
                    default: FORM_MIN_AREA,
                },
            )
        },
        field(
            "bedrooms",
            "Number of Bedrooms",
            PropertyDetails,
            FieldKind::Integer { min: 1, max: FORM_MAX_BEDROOMS, default: 2 },
        ),
        field(
            "bathrooms",
            "Number of Bathrooms",
            PropertyDetails,
            FieldKind::Integer { min: 1, max: FORM_MAX_BATHROOMS, default: 2 },
        ),
        field(
            "balconies",
            "Number of Balconies",
            PropertyDetails,
            FieldKind::Integer { min: 0, max: FORM_MAX_BALCONIES, default: 1 },
        ),
        field(
            "building_type",
            "Building Type",
            PropertyDetails,
            FieldKind::Choice {
                options: BuildingType::labels(),
                default: BuildingType::Apartment.label(),
            },
        ),
        field(
            "latitude",
            "Latitude",
            LocationAndAmenities,
            FieldKind::Decimal { min: MIN_LATITUDE, max: MAX_LATITUDE, default: MIN_LATITUDE },
        ),
        field(
            "longitude",
            "Longitude",
            LocationAndAmenities,
            FieldKind::Decimal { min: MIN_LONGITUDE, max: MAX_LONGITUDE, default: MIN_LONGITUDE },
        ),
        field("ready_to_move", "Ready to Move?", LocationAndAmenities, FieldKind::YesNo { default: NO }),
        field("parking", "Parking Available?", LocationAndAmenities, FieldKind::YesNo { default: NO }),
        field(
            "furnishing",
            "Furnishing Status",
            LocationAndAmenities,
            FieldKind::Choice {
                options: Furnishing::labels(),
                default: Furnishing::SemiFurnished.label(),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::FEATURE_NAMES;

    #[test]
    fn schema_covers_every_feature_column() {
        let schema = form_schema();
        assert_eq!(schema.len(), FEATURE_NAMES.len());
        for name in FEATURE_NAMES {
            assert!(
                schema.iter().any(|f| f.name == name),
                "form is missing field {name}"
            );
        }
    }

    #[test]
    fn building_type_options_keep_encoding_order() {
        let schema = form_schema();
        let building = schema.iter().find(|f| f.name == "building_type").unwrap();
        match &building.kind {
            FieldKind::Choice { options, default } => {
                assert_eq!(options[2], "Villa");
                assert_eq!(*default, "Apartment");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn serializes_kind_inline() {
        let json = serde_json::to_value(&form_schema()[1]).unwrap();
        assert_eq!(json["name"], "bedrooms");
        assert_eq!(json["kind"], "integer");
        assert_eq!(json["max"], 10);
        assert_eq!(json["section"], "property_details");
        assert!(json.get("help").is_none());
    }
}
