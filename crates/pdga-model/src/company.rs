use serde::{Deserialize, Serialize};
use url::Url;

use crate::schema::{FieldKind, FieldReader, FieldRule, FieldSpec, RecordKind, RecordSchema};
use crate::social::SocialPlatform;

/// Row cell carrying the platform of a social website moved out of `website`.
pub const WEBSITE_PLATFORM_FIELD: &str = "website_platform";

/// A disc-golf manufacturer from the PDGA directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    /// Summary of approved equipment kinds ("Discs, Targets").
    pub equipment: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
    pub website: Option<Url>,
    pub twitter: Option<Url>,
    pub facebook: Option<Url>,
    pub instagram: Option<Url>,
    pub youtube: Option<Url>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub is_active: bool,
    /// Set when `website` points at a social-media profile.
    pub website_platform: Option<SocialPlatform>,
}

impl RecordSchema for CompanyRecord {
    const KIND: RecordKind = RecordKind::Company;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("company_name", FieldKind::Text).with_rule(FieldRule::CompanyName),
        FieldSpec::optional("equipment", FieldKind::Text),
        FieldSpec::optional("address", FieldKind::Text),
        FieldSpec::optional("city", FieldKind::Text),
        FieldSpec::optional("state", FieldKind::Text),
        FieldSpec::optional("postal_code", FieldKind::Text),
        FieldSpec::optional("country", FieldKind::Text),
        FieldSpec::optional("phone", FieldKind::Text),
        FieldSpec::optional("website", FieldKind::Url).with_rule(FieldRule::Website),
        FieldSpec::optional("twitter", FieldKind::Url),
        FieldSpec::optional("facebook", FieldKind::Url),
        FieldSpec::optional("instagram", FieldKind::Url),
        FieldSpec::optional("youtube", FieldKind::Url),
        FieldSpec::optional("contact_name", FieldKind::Text),
        FieldSpec::optional("contact_email", FieldKind::Text),
        FieldSpec::optional("contact_phone", FieldKind::Text),
        FieldSpec::optional("is_active", FieldKind::Bool).with_rule(FieldRule::Status),
        FieldSpec::optional(WEBSITE_PLATFORM_FIELD, FieldKind::Text),
    ];

    const LABEL_FIELDS: &'static [&'static str] = &["company_name", "website"];

    fn read(reader: &mut FieldReader<'_>) -> Self {
        let website = reader.url("website");
        let routed_platform = reader
            .text(WEBSITE_PLATFORM_FIELD)
            .and_then(|name| SocialPlatform::from_name(&name));
        let website_platform = website
            .as_ref()
            .and_then(Url::host_str)
            .and_then(SocialPlatform::from_host)
            .or(routed_platform);
        Self {
            company_name: reader.required_text("company_name"),
            equipment: reader.text("equipment"),
            address: reader.text("address"),
            city: reader.text("city"),
            state: reader.text("state"),
            postal_code: reader.text("postal_code"),
            country: reader.text("country"),
            phone: reader.text("phone"),
            website,
            twitter: reader.url("twitter"),
            facebook: reader.url("facebook"),
            instagram: reader.url("instagram"),
            youtube: reader.url("youtube"),
            contact_name: reader.text("contact_name"),
            contact_email: reader.text("contact_email"),
            contact_phone: reader.text("contact_phone"),
            is_active: reader.boolean_or("is_active", true),
            website_platform,
        }
    }
}
