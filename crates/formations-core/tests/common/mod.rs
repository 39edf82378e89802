//! In-memory `FormationApi` and dialogs recording every call

#![allow(clippy::unwrap_used)]
#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use formations_core::api::ApiResult;
use formations_core::{
    ApiError, Dialogs, Formation, FormationApi, FormationId, FormationPayload,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(FormationPayload),
    Update(FormationId, FormationPayload),
    Delete(FormationId),
}

/// Server double: keeps records in insertion order, assigns sequential ids,
/// and fails the next call when told to.
#[derive(Default)]
pub struct FakeApi {
    records: RefCell<Vec<Formation>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    fail_next: Cell<bool>,
}

impl FakeApi {
    pub fn with_records(records: Vec<Formation>) -> Self {
        let api = Self::default();
        *api.records.borrow_mut() = records;
        api
    }

    pub fn fail_next_call(&self) {
        self.fail_next.set(true);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn records(&self) -> Vec<Formation> {
        self.records.borrow().clone()
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if self.fail_next.replace(false) {
            Err(ApiError::status("fake://api/formations", 500))
        } else {
            Ok(())
        }
    }

    fn stamp() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn materialise(id: FormationId, payload: &FormationPayload) -> Formation {
        Formation {
            id,
            nom: payload.nom.clone(),
            date_formation: payload.date_formation,
            nombre_utilisations: payload.nombre_utilisations,
            thematique: payload.thematique.clone(),
            prix: payload.prix,
            image_url: payload.image_url.clone(),
            created_at: Some(Self::stamp()),
            updated_at: Some(Self::stamp()),
        }
    }
}

#[async_trait(?Send)]
impl FormationApi for FakeApi {
    async fn list(&self) -> ApiResult<Vec<Formation>> {
        self.record(Call::List)?;
        Ok(self.records())
    }

    async fn create(&self, payload: &FormationPayload) -> ApiResult<Formation> {
        self.record(Call::Create(payload.clone()))?;
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);
        let created = Self::materialise(FormationId::new(format!("gen-{id}")), payload);
        self.records.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &FormationId, payload: &FormationPayload) -> ApiResult<Formation> {
        self.record(Call::Update(id.clone(), payload.clone()))?;
        let updated = Self::materialise(id.clone(), payload);
        let mut records = self.records.borrow_mut();
        let slot = records
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| ApiError::status(format!("fake://api/formations/{id}"), 404))?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: &FormationId) -> ApiResult<()> {
        self.record(Call::Delete(id.clone()))?;
        self.records.borrow_mut().retain(|f| &f.id != id);
        Ok(())
    }
}

/// Dialogs that answer every confirmation the same way and keep what was shown.
pub struct RecordedDialogs {
    answer: bool,
    confirms: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl RecordedDialogs {
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirms: RefCell::default(),
            alerts: RefCell::default(),
        }
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for RecordedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
