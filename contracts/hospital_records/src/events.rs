use crate::billing::{PaymentMethod, PaymentStatus};
use crate::errors::ErrorContext;
use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the registry is initialized and seeded.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub patient_count: u32,
    pub doctor_count: u32,
    pub timestamp: u64,
}

/// Event published when a patient is added. Carries no history or password.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientCreatedEvent {
    pub patient_id: u32,
    pub name: String,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientUpdatedEvent {
    pub patient_id: u32,
    pub timestamp: u64,
}

/// Event published when an appointment reminder is (re)written.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppointmentScheduledEvent {
    pub patient_id: u32,
    pub doctor_name: String,
    pub time: String,
    pub timestamp: u64,
}

/// Event published when a password check unlocks a medical history.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HistoryAccessedEvent {
    pub patient_id: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CapacityUpdatedEvent {
    pub capacity: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BillGeneratedEvent {
    pub service: String,
    pub amount: i128,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyReportedEvent {
    pub location: String,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address, patient_count: u32, doctor_count: u32) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        patient_count,
        doctor_count,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_created(env: &Env, patient_id: u32, name: String) {
    let topics = (symbol_short!("PAT_NEW"), patient_id);
    let data = PatientCreatedEvent {
        patient_id,
        name,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_patient_updated(env: &Env, patient_id: u32) {
    let topics = (symbol_short!("PAT_UPD"), patient_id);
    let data = PatientUpdatedEvent {
        patient_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// The reason is left out of the payload; it stays on the patient record.
pub fn publish_appointment_scheduled(
    env: &Env,
    patient_id: u32,
    doctor_name: String,
    time: String,
) {
    let topics = (symbol_short!("APPT"), patient_id);
    let data = AppointmentScheduledEvent {
        patient_id,
        doctor_name,
        time,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_history_accessed(env: &Env, patient_id: u32) {
    let topics = (symbol_short!("HIST_OK"), patient_id);
    let data = HistoryAccessedEvent {
        patient_id,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_capacity_updated(env: &Env, capacity: u32) {
    let topics = (symbol_short!("CAP_SET"),);
    let data = CapacityUpdatedEvent {
        capacity,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_bill_generated(
    env: &Env,
    service: String,
    amount: i128,
    payment_method: PaymentMethod,
    status: PaymentStatus,
) {
    let topics = (symbol_short!("BILL"),);
    let data = BillGeneratedEvent {
        service,
        amount,
        payment_method,
        status,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_emergency_reported(env: &Env, location: String) {
    let topics = (symbol_short!("EMRG"),);
    let data = EmergencyReportedEvent {
        location,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an error event for monitoring and indexing.
pub fn publish_error(env: &Env, error_code: u32, context: ErrorContext) {
    let topics = (
        symbol_short!("ERROR"),
        context.category.clone(),
        context.severity.clone(),
    );
    env.events().publish(topics, (error_code, context));
}
