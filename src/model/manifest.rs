use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A manifest entry as served by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ManifestEntryDto {
    pub id: i32,
    pub numar_curent: i32,
    pub numar_manifest: String,
    #[serde(default)]
    pub numar_permis: String,
    #[serde(default)]
    pub numar_pozitie: String,
    #[serde(default)]
    pub cerere_operatiune: String,
    #[serde(default)]
    pub data_inregistrare: Option<NaiveDate>,
    pub container: String,
    #[serde(default)]
    pub numar_colete: Option<i32>,
    /// Gross weight in kilograms. Accepts both numbers and decimal strings.
    #[serde(default, deserialize_with = "deserialize_weight")]
    pub greutate_bruta: Option<f64>,
    #[serde(default)]
    pub descriere_marfa: String,
    /// `I` for import, `T` for transhipment
    #[serde(default)]
    pub tip_operatiune: String,
    #[serde(default)]
    pub nume_nava: String,
    #[serde(default)]
    pub pavilion_nava: String,
    /// Summary declaration numbers, separated by `;` or `,`
    #[serde(default)]
    pub numar_sumara: Option<String>,
    #[serde(default)]
    pub tip_container: String,
    #[serde(default)]
    pub linie_maritima: String,
    #[serde(default)]
    pub model_container: String,
    #[serde(default)]
    pub observatii: Option<String>,
    /// Registration year the entry belongs to
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub ship_image: Option<String>,
    #[serde(default)]
    pub container_type_image: Option<String>,
    #[serde(default)]
    pub pavilion_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct YearDto {
    pub id: i32,
    pub year: i32,
    pub is_active: bool,
}

/// Body of a request creating a registry year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateYearRequest {
    pub year: i32,
    /// Make the new year the active one
    #[serde(default)]
    pub is_active: bool,
}

/// Body of a request recording a manifest entry.
///
/// The container model is derived from the container and its type; the running number
/// is assigned when absent or zero; the year defaults to the active one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewManifestEntryDto {
    #[serde(default)]
    pub database_year_id: Option<i32>,
    #[serde(default)]
    pub numar_curent: Option<i32>,
    pub numar_manifest: String,
    #[serde(default)]
    pub numar_permis: String,
    #[serde(default)]
    pub numar_pozitie: String,
    #[serde(default)]
    pub cerere_operatiune: String,
    #[serde(default)]
    pub data_inregistrare: Option<NaiveDate>,
    pub container: String,
    #[serde(default)]
    pub numar_colete: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_weight")]
    pub greutate_bruta: Option<f64>,
    #[serde(default)]
    pub descriere_marfa: String,
    #[serde(default)]
    pub tip_operatiune: String,
    #[serde(default)]
    pub nume_nava: String,
    #[serde(default)]
    pub pavilion_nava: String,
    #[serde(default)]
    pub numar_sumara: Option<String>,
    #[serde(default)]
    pub tip_container: String,
    #[serde(default)]
    pub linie_maritima: String,
    #[serde(default)]
    pub observatii: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ContainerTypeDto {
    pub id: i32,
    pub model_container: String,
    pub tip_container: String,
    pub image: Option<String>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PavilionDto {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ShipDto {
    pub id: i32,
    pub name: String,
    pub shipping_line: String,
    pub pavilion: Option<String>,
    pub image: Option<String>,
    pub description: String,
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Weight {
        Number(f64),
        Text(String),
    }

    match Option::<Weight>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Weight::Number(value)) => Ok(Some(value)),
        Some(Weight::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Weight::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
