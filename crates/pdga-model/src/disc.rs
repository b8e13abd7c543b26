use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::schema::{FieldKind, FieldReader, FieldRule, FieldSpec, RecordKind, RecordSchema};

/// Maximum weight assumed when the source omits the column entirely.
pub const DEFAULT_WEIGHT_MAX: f64 = 180.0;

/// A certified disc-golf disc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscRecord {
    pub manufacturer: String,
    pub name: String,
    /// Maximum certified weight in grams.
    pub weight_max: f64,
    pub diameter: Option<f64>,
    pub height: Option<f64>,
    pub rim_depth: Option<f64>,
    pub rim_diameter_inside: Option<f64>,
    pub rim_thickness: Option<f64>,
    pub rim_ratio: Option<f64>,
    pub rim_config: Option<f64>,
    pub flex: Option<f64>,
    pub cert: Option<String>,
    pub approved: NaiveDate,
    pub speed: Option<f64>,
    pub glide: Option<f64>,
    pub turn: Option<f64>,
    pub fade: Option<f64>,
    pub stability: Option<f64>,
    pub description: Option<String>,
    pub url: Option<Url>,
    pub oop: Option<bool>,
}

impl DiscRecord {
    /// Approval as a midnight timestamp, the form the provider export uses.
    pub fn approved_at(&self) -> NaiveDateTime {
        self.approved.and_time(NaiveTime::MIN)
    }
}

impl RecordSchema for DiscRecord {
    const KIND: RecordKind = RecordKind::Disc;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("manufacturer", FieldKind::Text).with_rule(FieldRule::CompanyName),
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::optional("weight_max", FieldKind::Number),
        FieldSpec::optional("diameter", FieldKind::Number),
        FieldSpec::optional("height", FieldKind::Number),
        FieldSpec::optional("rim_depth", FieldKind::Number),
        FieldSpec::optional("rim_diameter_inside", FieldKind::Number),
        FieldSpec::optional("rim_thickness", FieldKind::Number),
        FieldSpec::optional("rim_ratio", FieldKind::Number),
        FieldSpec::optional("rim_config", FieldKind::Number),
        FieldSpec::optional("flex", FieldKind::Number),
        FieldSpec::optional("cert", FieldKind::Text),
        FieldSpec::required("approved", FieldKind::Date),
        FieldSpec::optional("speed", FieldKind::Number),
        FieldSpec::optional("glide", FieldKind::Number),
        FieldSpec::optional("turn", FieldKind::Number),
        FieldSpec::optional("fade", FieldKind::Number),
        FieldSpec::optional("stability", FieldKind::Number),
        FieldSpec::optional("description", FieldKind::Text),
        FieldSpec::optional("url", FieldKind::Url),
        FieldSpec::optional("oop", FieldKind::Bool),
    ];

    const LABEL_FIELDS: &'static [&'static str] = &["name", "manufacturer", "cert"];

    fn read(reader: &mut FieldReader<'_>) -> Self {
        Self {
            manufacturer: reader.required_text("manufacturer"),
            name: reader.required_text("name"),
            weight_max: reader.number_or("weight_max", DEFAULT_WEIGHT_MAX),
            diameter: reader.number("diameter"),
            height: reader.number("height"),
            rim_depth: reader.number("rim_depth"),
            rim_diameter_inside: reader.number("rim_diameter_inside"),
            rim_thickness: reader.number("rim_thickness"),
            rim_ratio: reader.number("rim_ratio"),
            rim_config: reader.number("rim_config"),
            flex: reader.number("flex"),
            cert: reader.text("cert"),
            approved: reader.required_date("approved"),
            speed: reader.number("speed"),
            glide: reader.number("glide"),
            turn: reader.number("turn"),
            fade: reader.number("fade"),
            stability: reader.number("stability"),
            description: reader.text("description"),
            url: reader.url("url"),
            oop: reader.boolean("oop"),
        }
    }
}
