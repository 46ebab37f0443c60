//! Display formatting for a single manifest entry.

use chrono::NaiveDate;

use crate::model::manifest::ManifestEntryDto;

/// Shown in place of any missing value.
pub const PLACEHOLDER: &str = "-";

/// Neutral grey image used when an entry has no picture or the picture fails to load.
pub const FALLBACK_IMAGE: &str = "data:image/svg+xml;utf8,<svg xmlns='http://www.w3.org/2000/svg' width='160' height='120' viewBox='0 0 160 120'><rect width='160' height='120' fill='%23e5e7eb'/><path d='M40 88l24-30 18 22 12-14 26 22z' fill='%239ca3af'/><circle cx='104' cy='42' r='10' fill='%239ca3af'/></svg>";

/// A manifest entry with every field ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct ManifestView {
    pub numar_curent: String,
    pub numar_manifest: String,
    pub numar_permis: String,
    pub numar_pozitie: String,
    pub cerere_operatiune: String,
    pub data_inregistrare: String,
    pub container: String,
    pub model_container: String,
    pub tip_container: String,
    pub numar_colete: String,
    pub greutate_bruta: String,
    pub descriere_marfa: String,
    pub tip_operatiune: String,
    pub nume_nava: String,
    pub pavilion_nava: String,
    pub linie_maritima: String,
    pub numere_sumara: Vec<String>,
    pub observatii: Option<String>,
    pub ship_image: String,
    pub container_type_image: String,
    pub pavilion_image: String,
}

fn text(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value.to_string()
    }
}

fn number(value: Option<i32>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| v.to_string())
}

/// Date as `dd.mm.yyyy`.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || PLACEHOLDER.to_string(),
        |d| d.format("%d.%m.%Y").to_string(),
    )
}

/// Weight in kilograms with two decimals.
pub fn format_weight(weight: Option<f64>) -> String {
    weight.map_or_else(|| PLACEHOLDER.to_string(), |w| format!("{w:.2} kg"))
}

/// Split a summary declaration field on `;` or `,`, dropping blanks.
pub fn split_summary(numar_sumara: Option<&str>) -> Vec<String> {
    numar_sumara
        .unwrap_or_default()
        .split([';', ','])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Human label for an operation code.
pub fn operation_label(code: &str) -> String {
    match code.trim() {
        "I" => "Import".to_string(),
        "T" => "Transhipment".to_string(),
        other => text(other),
    }
}

/// Image URL, or the fallback when there is none.
pub fn image_or_fallback(image: Option<&str>) -> String {
    match image.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => FALLBACK_IMAGE.to_string(),
    }
}

impl From<&ManifestEntryDto> for ManifestView {
    fn from(entry: &ManifestEntryDto) -> Self {
        Self {
            numar_curent: entry.numar_curent.to_string(),
            numar_manifest: text(&entry.numar_manifest),
            numar_permis: text(&entry.numar_permis),
            numar_pozitie: text(&entry.numar_pozitie),
            cerere_operatiune: text(&entry.cerere_operatiune),
            data_inregistrare: format_date(entry.data_inregistrare),
            container: text(&entry.container),
            model_container: text(&entry.model_container),
            tip_container: text(&entry.tip_container),
            numar_colete: number(entry.numar_colete),
            greutate_bruta: format_weight(entry.greutate_bruta),
            descriere_marfa: text(&entry.descriere_marfa),
            tip_operatiune: operation_label(&entry.tip_operatiune),
            nume_nava: text(&entry.nume_nava),
            pavilion_nava: text(&entry.pavilion_nava),
            linie_maritima: text(&entry.linie_maritima),
            numere_sumara: split_summary(entry.numar_sumara.as_deref()),
            observatii: entry
                .observatii
                .as_deref()
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string),
            ship_image: image_or_fallback(entry.ship_image.as_deref()),
            container_type_image: image_or_fallback(entry.container_type_image.as_deref()),
            pavilion_image: image_or_fallback(entry.pavilion_image.as_deref()),
        }
    }
}
