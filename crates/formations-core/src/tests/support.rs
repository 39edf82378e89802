#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;

use crate::draft::FormationDraft;
use crate::model::{Formation, FormationId};
use crate::schema::FieldName;
use crate::state::list::ListState;

pub fn formation(id: &str, nom: &str) -> Formation {
    Formation {
        id: FormationId::new(id),
        nom: nom.to_string(),
        date_formation: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        nombre_utilisations: 5,
        thematique: "Dev".to_string(),
        prix: 100.0,
        image_url: Some(format!("https://x.com/{id}.png")),
        created_at: None,
        updated_at: None,
    }
}

pub fn loaded(formations: Vec<Formation>) -> ListState {
    let mut state = ListState::new();
    let epoch = state.begin_load();
    state.finish_load(epoch, Ok(formations));
    state
}

pub fn complete_draft() -> FormationDraft {
    FormationDraft::new()
        .with(FieldName::Nom, "Go Basics")
        .with(FieldName::DateFormation, "2024-01-01")
        .with(FieldName::NombreUtilisations, "5")
        .with(FieldName::Thematique, "Dev")
        .with(FieldName::Prix, "100")
        .with(FieldName::ImageUrl, "https://x.com/a.png")
}
