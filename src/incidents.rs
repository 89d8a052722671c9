// Incident timeline: group stored incident log entries by incident id.

use std::collections::BTreeMap;

use crate::models::{Incident, IncidentEvent, IncidentLog};

/// Groups logs into incidents. Events within an incident are oldest first;
/// incidents are newest first (by start time, then id).
pub fn group_incidents(logs: Vec<IncidentLog>) -> Vec<Incident> {
    let mut by_id: BTreeMap<String, Vec<IncidentLog>> = BTreeMap::new();
    for log in logs {
        by_id.entry(log.incident_id.clone()).or_default().push(log);
    }

    let mut out: Vec<Incident> = Vec::with_capacity(by_id.len());
    for (id, mut entries) in by_id {
        entries.sort_by_key(|e| e.timestamp);
        let Some(first) = entries.first() else {
            continue;
        };
        let service_id = first.service_id;
        let start_time = first.timestamp;
        let events = entries
            .into_iter()
            .map(|e| IncidentEvent {
                timestamp: e.timestamp,
                type_: e.type_,
                oncaller: e.oncaller,
            })
            .collect();
        out.push(Incident {
            id,
            service_id,
            start_time,
            events,
        });
    }
    out.sort_by(|a, b| b.start_time.cmp(&a.start_time).then_with(|| a.id.cmp(&b.id)));
    out
}
