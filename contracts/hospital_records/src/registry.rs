//! Patient and doctor storage plus the registry operations.
//!
//! Patients live in persistent storage under `(PATIENT, id)` with ids
//! assigned densely from 1. The counter, capacity and doctor roster live in
//! instance storage. Every operation validates before it writes, so a
//! rejected call never leaves a partial update behind.

use hospital_common::credential::CredentialVerifier;
use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol, Vec};

use crate::scheduling::{self, AppointmentPicker, AppointmentSummary};
use crate::validation;
use crate::ContractError;

const PAT_CTR: Symbol = symbol_short!("PAT_CTR");
const PAT_CAP: Symbol = symbol_short!("PAT_CAP");
const DOCTORS: Symbol = symbol_short!("DOCTORS");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

pub const DEFAULT_PATIENT_CAPACITY: u32 = 50;
pub const MAX_DOCTORS: u32 = 8;
pub const NO_APPOINTMENT_REMINDER: &str = "No upcoming appointments.";

fn extend_ttl_patient_key(env: &Env, key: &(Symbol, u32)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Stored patient record. The password never leaves storage; callers get a
/// [`PatientInfo`] instead.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub contact: String,
    pub medical_history: String,
    pub password: String,
    pub appointment_reminder: String,
}

/// Patient record as exposed to callers.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientInfo {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub contact: String,
    pub medical_history: String,
    pub appointment_reminder: String,
}

impl Patient {
    pub fn info(&self) -> PatientInfo {
        PatientInfo {
            id: self.id,
            name: self.name.clone(),
            age: self.age,
            contact: self.contact.clone(),
            medical_history: self.medical_history.clone(),
            appointment_reminder: self.appointment_reminder.clone(),
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
}

/// One line of the reminder board.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppointmentReminder {
    pub patient_id: u32,
    pub name: String,
    pub reminder: String,
}

pub fn patient_key(id: u32) -> (Symbol, u32) {
    (symbol_short!("PATIENT"), id)
}

// ── Counters and configuration ────────────────────────────────

pub fn get_patient_count(env: &Env) -> u32 {
    env.storage().instance().get(&PAT_CTR).unwrap_or(0)
}

pub fn get_capacity(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&PAT_CAP)
        .unwrap_or(DEFAULT_PATIENT_CAPACITY)
}

/// Capacity must be positive and may not drop below the patients already
/// stored.
pub fn set_capacity(env: &Env, capacity: u32) -> Result<(), ContractError> {
    if capacity == 0 || capacity < get_patient_count(env) {
        return Err(ContractError::InvalidCapacity);
    }
    env.storage().instance().set(&PAT_CAP, &capacity);
    Ok(())
}

// ── Doctors ───────────────────────────────────────────────────

pub fn get_doctors(env: &Env) -> Vec<Doctor> {
    env.storage()
        .instance()
        .get(&DOCTORS)
        .unwrap_or(Vec::new(env))
}

pub fn set_doctors(env: &Env, doctors: &Vec<Doctor>) -> Result<(), ContractError> {
    if doctors.len() > MAX_DOCTORS {
        return Err(ContractError::InvalidInput);
    }
    env.storage().instance().set(&DOCTORS, doctors);
    Ok(())
}

// ── Patients ──────────────────────────────────────────────────

pub fn get_patient(env: &Env, id: u32) -> Result<Patient, ContractError> {
    validation::validate_patient_id(id, get_patient_count(env))?;
    env.storage()
        .persistent()
        .get(&patient_key(id))
        .ok_or(ContractError::InvalidPatientId)
}

fn store_patient(env: &Env, patient: &Patient) {
    let key = patient_key(patient.id);
    env.storage().persistent().set(&key, patient);
    extend_ttl_patient_key(env, &key);
}

/// Appends a patient with the next sequential id.
pub fn create_patient(
    env: &Env,
    name: String,
    age: u32,
    contact: String,
    medical_history: String,
    password: String,
) -> Result<Patient, ContractError> {
    let count = get_patient_count(env);
    if count >= get_capacity(env) {
        return Err(ContractError::CapacityExceeded);
    }
    validation::validate_age(age)?;
    validation::validate_password(&password)?;

    let patient = Patient {
        id: count.checked_add(1).ok_or(ContractError::CapacityExceeded)?,
        name,
        age,
        contact,
        medical_history,
        password,
        appointment_reminder: String::from_str(env, NO_APPOINTMENT_REMINDER),
    };

    store_patient(env, &patient);
    env.storage().instance().set(&PAT_CTR, &patient.id);

    Ok(patient)
}

/// Overwrites name, contact and history; age, password and reminder are
/// left as they were.
pub fn update_patient(
    env: &Env,
    id: u32,
    name: String,
    contact: String,
    medical_history: String,
) -> Result<Patient, ContractError> {
    let mut patient = get_patient(env, id)?;
    patient.name = name;
    patient.contact = contact;
    patient.medical_history = medical_history;
    store_patient(env, &patient);
    Ok(patient)
}

/// All patients in id order.
pub fn list_patients(env: &Env) -> Vec<PatientInfo> {
    let mut patients = Vec::new(env);
    for id in 1..=get_patient_count(env) {
        if let Some(patient) = env.storage().persistent().get::<_, Patient>(&patient_key(id)) {
            patients.push_back(patient.info());
        }
    }
    patients
}

pub fn list_reminders(env: &Env) -> Vec<AppointmentReminder> {
    let mut reminders = Vec::new(env);
    for info in list_patients(env).iter() {
        reminders.push_back(AppointmentReminder {
            patient_id: info.id,
            name: info.name,
            reminder: info.appointment_reminder,
        });
    }
    reminders
}

/// Picks a doctor and slot and overwrites the patient's reminder.
/// Earlier reminders are replaced, not kept.
pub fn schedule_appointment<P: AppointmentPicker + ?Sized>(
    env: &Env,
    patient_id: u32,
    reason: String,
    picker: &P,
) -> Result<AppointmentSummary, ContractError> {
    let mut patient = get_patient(env, patient_id)?;
    validation::validate_reason(&reason)?;

    let doctors = get_doctors(env);
    if doctors.is_empty() {
        return Err(ContractError::NoDoctorsAvailable);
    }
    let doctor = doctors
        .get(picker.pick_doctor(doctors.len()))
        .ok_or(ContractError::NoDoctorsAvailable)?;

    let slot = picker.pick_slot();
    if !slot.is_valid() {
        return Err(ContractError::InvalidInput);
    }

    patient.appointment_reminder = scheduling::format_reminder(env, &doctor.name, &slot, &reason)?;
    let summary = AppointmentSummary {
        patient_id,
        doctor_name: doctor.name,
        specialty: doctor.specialty,
        time: slot.format(env)?,
        reason,
    };
    store_patient(env, &patient);

    Ok(summary)
}

/// Returns the medical history when `verifier` accepts the password.
pub fn access_history<V: CredentialVerifier + ?Sized>(
    env: &Env,
    id: u32,
    password: &String,
    verifier: &V,
) -> Result<String, ContractError> {
    let patient = get_patient(env, id)?;
    if !verifier.verify(&patient.password, password) {
        return Err(ContractError::AuthFailed);
    }
    Ok(patient.medical_history)
}
