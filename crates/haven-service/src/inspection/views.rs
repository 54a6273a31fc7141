//! Response-shaped projections of inspection rows.
//!
//! The projections are pure functions over already-fetched rows, so the
//! derived fields (urgency, payment view) are testable without a database.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use haven_database::repositories::inspection::AvailableJobRow;
use haven_entity::inspection::{Inspection, InspectionClient, InspectionType, Urgency};
use haven_entity::listing::Listing;
use haven_entity::user::User;

/// Condensed listing fields shown on a job card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySummary {
    /// Listing id.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
}

/// Condensed user fields for agents and inspectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartySummary {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// A client on an inspection, with their join-row details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSummary {
    /// User id.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Whether the client flagged interest in the property.
    pub interested: bool,
    /// Free-text notes from the client.
    pub notes: Option<String>,
}

/// Settlement state shown to inspectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// The fee has been settled.
    Paid,
    /// The fee is outstanding.
    Pending,
}

/// Derived payment view: the fee and whether it has settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentView {
    /// Fee in integer currency units.
    pub amount: i64,
    /// Settlement state.
    pub status: PaymentStatus,
}

/// One unassigned job on the inspector job board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableJobView {
    /// Inspection id.
    pub id: Uuid,
    /// How the inspection is conducted.
    pub inspection_type: InspectionType,
    /// When the visit is scheduled.
    pub scheduled_at: DateTime<Utc>,
    /// Visit duration in minutes.
    pub duration_minutes: i32,
    /// Fee in integer currency units.
    pub fee: i64,
    /// Urgency derived from the lead time at query time.
    pub urgency: Urgency,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
    /// The property under inspection.
    pub property: PropertySummary,
    /// The listing agent.
    pub agent: PartySummary,
    /// The first registered client, if any.
    pub client: Option<ClientSummary>,
    /// Derived payment view.
    pub payment: PaymentView,
}

/// Project one job-board row into its response shape at `now`.
pub fn project_job(row: AvailableJobRow, now: DateTime<Utc>) -> AvailableJobView {
    let client = match (row.client_id, row.client_name, row.client_email) {
        (Some(id), Some(name), Some(email)) => Some(ClientSummary {
            id,
            name,
            email,
            interested: row.client_interested.unwrap_or(true),
            notes: row.client_notes,
        }),
        _ => None,
    };

    AvailableJobView {
        id: row.id,
        inspection_type: row.inspection_type,
        scheduled_at: row.scheduled_at,
        duration_minutes: row.duration_minutes,
        fee: row.fee,
        urgency: Urgency::from_lead_time(now, row.scheduled_at),
        created_at: row.created_at,
        property: PropertySummary {
            id: row.listing_id,
            title: row.listing_title,
            address: row.listing_address,
            city: row.listing_city,
            state: row.listing_state,
        },
        agent: PartySummary {
            id: row.agent_id,
            name: row.agent_name,
            email: row.agent_email,
        },
        client,
        payment: PaymentView {
            amount: row.fee,
            status: if row.paid {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Pending
            },
        },
    }
}

/// An inspection with its related listing, parties, and clients resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDetails {
    /// The inspection row.
    #[serde(flatten)]
    pub inspection: Inspection,
    /// The property under inspection, if still present.
    pub listing: Option<PropertySummary>,
    /// The listing agent.
    pub agent: Option<PartySummary>,
    /// The assigned inspector, if any.
    pub inspector: Option<PartySummary>,
    /// Every joined client, registration order.
    pub clients: Vec<ClientSummary>,
}

fn summarize(user: &User) -> PartySummary {
    PartySummary {
        id: user.id,
        name: user.full_name.clone(),
        email: user.email.clone(),
    }
}

/// Assemble detail views from batch-fetched related rows.
///
/// Missing related rows degrade to `None`/skipped entries rather than
/// failing the whole listing.
pub fn assemble_details(
    inspections: Vec<Inspection>,
    listings: &[Listing],
    users: &[User],
    client_rows: &[InspectionClient],
) -> Vec<InspectionDetails> {
    let listings_by_id: HashMap<Uuid, &Listing> = listings.iter().map(|l| (l.id, l)).collect();
    let users_by_id: HashMap<Uuid, &User> = users.iter().map(|u| (u.id, u)).collect();

    let mut clients_by_inspection: HashMap<Uuid, Vec<&InspectionClient>> = HashMap::new();
    for row in client_rows {
        clients_by_inspection
            .entry(row.inspection_id)
            .or_default()
            .push(row);
    }

    inspections
        .into_iter()
        .map(|inspection| {
            let listing = listings_by_id.get(&inspection.listing_id);
            let agent = listing.and_then(|l| users_by_id.get(&l.agent_id)).copied();
            let inspector = inspection
                .inspector_id
                .and_then(|id| users_by_id.get(&id))
                .copied();

            let clients = clients_by_inspection
                .get(&inspection.id)
                .map(|rows| {
                    rows.iter()
                        .filter_map(|row| {
                            users_by_id.get(&row.client_id).map(|user| ClientSummary {
                                id: user.id,
                                name: user.full_name.clone(),
                                email: user.email.clone(),
                                interested: row.interested,
                                notes: row.notes.clone(),
                            })
                        })
                        .collect()
                })
                .unwrap_or_default();

            InspectionDetails {
                listing: listing.map(|l| PropertySummary {
                    id: l.id,
                    title: l.title.clone(),
                    address: l.address.clone(),
                    city: l.city.clone(),
                    state: l.state.clone(),
                }),
                agent: agent.map(summarize),
                inspector: inspector.map(summarize),
                clients,
                inspection,
            }
        })
        .collect()
}
