use crate::error::{AppError, Result};
use crate::models::{Incident, IncidentInput, IncidentUpdate, Note, NoteInput};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Counter seed; the first generated id is `INC-1001`.
const COUNTER_SEED: u64 = 1000;

/// The authoritative in-memory incident collection.
///
/// A single reader-writer lock guards the keyed collection, the ordering
/// side-list, and the id counter as one unit, so every operation is atomic
/// over all three. Reads take the shared lock, writes the exclusive lock,
/// and no lock is ever held across I/O. Every incident that crosses the
/// boundary is a clone; callers never see internal state.
pub struct IncidentStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    incidents: HashMap<String, Incident>,
    /// Incident ids in reverse-creation order; drives list() output since
    /// HashMap iteration order is meaningless.
    order: Vec<String>,
    counter: u64,
}

impl IncidentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                incidents: HashMap::new(),
                order: Vec::new(),
                counter: COUNTER_SEED,
            }),
        }
    }

    /// Create a store pre-populated with demonstration incidents.
    ///
    /// Seeds go through the normal creation path so they get real ids and
    /// timestamps, identical on every process start.
    pub fn with_seed_data() -> Self {
        let store = Self::new();
        for input in seed_incidents() {
            store.create(input);
        }
        store
    }

    /// Snapshot of all incidents, newest first.
    ///
    /// The result is point-in-time consistent: concurrent writes are either
    /// fully included or fully excluded.
    pub fn list(&self) -> Vec<Incident> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.incidents.get(id).cloned())
            .collect()
    }

    /// Fetch a single incident by id
    pub fn get(&self, id: &str) -> Result<Incident> {
        self.inner
            .read()
            .incidents
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("incident {id} not found")))
    }

    /// Create a new incident from caller input.
    ///
    /// Assigns the next id, fills in defaults for blank triage fields,
    /// sanitizes tags/iocs, and places the incident at the front of the
    /// listing order. Never fails; title presence is the caller's concern.
    pub fn create(&self, input: IncidentInput) -> Incident {
        let mut inner = self.inner.write();

        inner.counter += 1;
        let id = incident_id(inner.counter);
        let now = Utc::now();

        let incident = Incident {
            id: id.clone(),
            title: input.title,
            severity: non_blank_or(input.severity, "Medium"),
            status: non_blank_or(input.status, "New"),
            owner: non_blank_or(input.owner, "Unassigned"),
            tags: sanitize_entries(input.tags),
            iocs: sanitize_entries(input.iocs),
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        inner.order.insert(0, id.clone());
        inner.incidents.insert(id, incident.clone());

        tracing::debug!(incident_id = %incident.id, "Incident created");
        incident
    }

    /// Partially update an incident's triage fields.
    ///
    /// Blank input fields leave the stored value unchanged. `updated_at` is
    /// refreshed whenever the target exists, even if no field changed.
    pub fn update(&self, id: &str, input: IncidentUpdate) -> Result<Incident> {
        let mut inner = self.inner.write();

        let incident = inner
            .incidents
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("incident {id} not found")))?;

        if !input.severity.trim().is_empty() {
            incident.severity = input.severity;
        }
        if !input.status.trim().is_empty() {
            incident.status = input.status;
        }
        if !input.owner.trim().is_empty() {
            incident.owner = input.owner;
        }
        incident.updated_at = Utc::now();

        tracing::debug!(incident_id = %incident.id, "Incident updated");
        Ok(incident.clone())
    }

    /// Prepend an investigation note to an incident.
    ///
    /// The note id is numbered by the incident's current note count, so the
    /// first note on any incident is `NOTE-0001`. A blank body is rejected
    /// before anything is touched.
    pub fn add_note(&self, id: &str, input: NoteInput) -> Result<Incident> {
        let mut inner = self.inner.write();

        let incident = inner
            .incidents
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("incident {id} not found")))?;

        if input.body.trim().is_empty() {
            return Err(AppError::Validation("note body is required".to_string()));
        }

        let note = Note {
            id: note_id(incident.notes.len() + 1),
            body: input.body,
            author: non_blank_or(input.author, "Analyst"),
            created_at: Utc::now(),
        };
        incident.notes.insert(0, note);
        incident.updated_at = Utc::now();

        tracing::debug!(incident_id = %incident.id, "Note added");
        Ok(incident.clone())
    }

    /// Number of incidents currently held
    pub fn len(&self) -> usize {
        self.inner.read().incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IncidentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn incident_id(counter: u64) -> String {
    format!("INC-{counter:04}")
}

fn note_id(seq: usize) -> String {
    format!("NOTE-{seq:04}")
}

fn non_blank_or(value: String, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value
    }
}

fn sanitize_entries(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

fn seed_incidents() -> Vec<IncidentInput> {
    vec![
        IncidentInput {
            title: "Suspicious OAuth consent grant".to_string(),
            severity: "High".to_string(),
            status: "Investigating".to_string(),
            owner: "SOC Tier 2".to_string(),
            tags: vec!["identity".to_string(), "cloud".to_string()],
            iocs: vec!["a1f4b9f".to_string(), "login.live.com".to_string()],
        },
        IncidentInput {
            title: "Unusual lateral movement across finance segment".to_string(),
            severity: "Critical".to_string(),
            status: "Contained".to_string(),
            owner: "IR Lead".to_string(),
            tags: vec!["lateral".to_string(), "endpoint".to_string()],
            iocs: vec!["10.22.18.9".to_string(), "svc_backup".to_string()],
        },
        IncidentInput {
            title: "Phishing campaign targeting HR".to_string(),
            severity: "Medium".to_string(),
            status: "New".to_string(),
            owner: "SOC Tier 1".to_string(),
            tags: vec!["phishing".to_string(), "email".to_string()],
            iocs: vec!["payroll-update.com".to_string()],
        },
    ]
}
