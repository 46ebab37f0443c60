use dioxus::prelude::*;

use crate::{
    client::{components::FallbackImage, render::ManifestView},
    model::manifest::ManifestEntryDto,
};

#[component]
fn Field(label: &'static str, value: String) -> Element {
    rsx!(
        div { class: "manifest-field",
            div { class: "label", "{label}" }
            div { "{value}" }
        }
    )
}

/// One manifest entry with its ship, container-type and flag images.
#[component]
pub fn ManifestCard(entry: ManifestEntryDto) -> Element {
    let view = ManifestView::from(&entry);
    let summary = if view.numere_sumara.is_empty() {
        crate::client::render::PLACEHOLDER.to_string()
    } else {
        view.numere_sumara.join(", ")
    };

    rsx!(
        div { class: "card",
            h2 { "Container {view.container}" }
            div { class: "manifest-images",
                FallbackImage { src: view.ship_image.clone(), alt: "Navă {view.nume_nava}" }
                FallbackImage { src: view.container_type_image.clone(), alt: "Tip container {view.model_container}" }
                FallbackImage { src: view.pavilion_image.clone(), alt: "Pavilion {view.pavilion_nava}" }
            }
            div { class: "manifest-grid",
                Field { label: "Nr. Crt.", value: view.numar_curent.clone() }
                Field { label: "Număr Manifest", value: view.numar_manifest.clone() }
                Field { label: "Număr Permis", value: view.numar_permis.clone() }
                Field { label: "Număr Poziție", value: view.numar_pozitie.clone() }
                Field { label: "Cerere Operațiune", value: view.cerere_operatiune.clone() }
                Field { label: "Data Înregistrare", value: view.data_inregistrare.clone() }
                Field { label: "Model Container", value: view.model_container.clone() }
                Field { label: "Tip Container", value: view.tip_container.clone() }
                Field { label: "Număr Colete", value: view.numar_colete.clone() }
                Field { label: "Greutate Brută", value: view.greutate_bruta.clone() }
                Field { label: "Tip Operațiune", value: view.tip_operatiune.clone() }
                Field { label: "Nume Navă", value: view.nume_nava.clone() }
                Field { label: "Pavilion Navă", value: view.pavilion_nava.clone() }
                Field { label: "Linie Maritimă", value: view.linie_maritima.clone() }
                Field { label: "Număr Sumară", value: summary }
            }
            Field { label: "Descriere Marfă", value: view.descriere_marfa.clone() }
            if let Some(observatii) = view.observatii.clone() {
                div { class: "error-message",
                    Field { label: "Observații", value: observatii }
                }
            }
        }
    )
}
