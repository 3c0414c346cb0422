#![no_std]

pub mod billing;
pub mod emergency;
pub mod errors;
pub mod events;
pub mod registry;
pub mod scheduling;
pub mod seed;
pub mod validation;

use hospital_common::credential::PlaintextVerifier;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol, Vec};

pub use billing::{Bill, LabTest, PaymentMethod, PaymentStatus, TestCategory};
pub use errors::{
    create_error_context, log_error, ContractError, ErrorCategory, ErrorContext, ErrorLogEntry,
    ErrorSeverity,
};
pub use registry::{
    AppointmentReminder, Doctor, Patient, PatientInfo, DEFAULT_PATIENT_CAPACITY, MAX_DOCTORS,
    NO_APPOINTMENT_REMINDER,
};
pub use scheduling::{AppointmentPicker, AppointmentSummary, LedgerPicker, TimeSlot};

/// Storage keys for the contract
const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// Records a failed operation in the error log and the event stream.
///
/// Callers return the error right after, so the host rolls both writes back
/// with the rest of the invocation. They surface in simulation and
/// diagnostic output only. The stored log keeps only entries written by
/// invocations that succeed.
fn report_failure(env: &Env, error: ContractError, operation: &str) -> ContractError {
    let resource_id = String::from_str(env, operation);
    let context = create_error_context(env, error, None, Some(resource_id.clone()));
    log_error(env, error, None, Some(resource_id));
    events::publish_error(env, error as u32, context);
    error
}

#[contract]
pub struct HospitalRecordsContract;

#[contractimpl]
impl HospitalRecordsContract {
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_admin(env: &Env) -> Result<Address, ContractError> {
        let admin = Self::get_admin(env.clone())?;
        admin.require_auth();
        Ok(admin)
    }

    /// Initialize the registry and load the seed doctors and patients.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        registry::set_capacity(&env, DEFAULT_PATIENT_CAPACITY)?;
        seed::load(&env)?;

        events::publish_initialized(
            &env,
            admin,
            registry::get_patient_count(&env),
            registry::get_doctors(&env).len(),
        );

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    // ======================== Patients ========================

    /// Add a patient with the next sequential id.
    /// Fails with `CapacityExceeded` when full and `InvalidAge` unless
    /// `0 < age < 120`; nothing is stored on failure.
    pub fn create_patient(
        env: Env,
        name: String,
        age: u32,
        contact: String,
        medical_history: String,
        password: String,
    ) -> Result<PatientInfo, ContractError> {
        Self::require_admin(&env)?;

        let patient =
            registry::create_patient(&env, name, age, contact, medical_history, password)
                .map_err(|e| report_failure(&env, e, "create_patient"))?;

        events::publish_patient_created(&env, patient.id, patient.name.clone());

        Ok(patient.info())
    }

    /// Overwrite a patient's name, contact and medical history.
    pub fn update_patient(
        env: Env,
        patient_id: u32,
        name: String,
        contact: String,
        medical_history: String,
    ) -> Result<(), ContractError> {
        Self::require_admin(&env)?;

        registry::update_patient(&env, patient_id, name, contact, medical_history)
            .map_err(|e| report_failure(&env, e, "update_patient"))?;

        events::publish_patient_updated(&env, patient_id);

        Ok(())
    }

    pub fn get_patient(env: Env, patient_id: u32) -> Result<PatientInfo, ContractError> {
        registry::get_patient(&env, patient_id).map(|patient| patient.info())
    }

    /// All patients in id order.
    pub fn list_patients(env: Env) -> Vec<PatientInfo> {
        registry::list_patients(&env)
    }

    pub fn get_patient_count(env: Env) -> u32 {
        registry::get_patient_count(&env)
    }

    pub fn get_doctors(env: Env) -> Vec<Doctor> {
        registry::get_doctors(&env)
    }

    // ======================== Appointments ========================

    /// Book a random doctor and half-hour slot between 8:00 and 16:30 and
    /// replace the patient's reminder. No double-booking check is made.
    pub fn schedule_appointment(
        env: Env,
        patient_id: u32,
        reason: String,
    ) -> Result<AppointmentSummary, ContractError> {
        Self::require_admin(&env)?;

        let summary =
            registry::schedule_appointment(&env, patient_id, reason, &LedgerPicker::new(&env))
                .map_err(|e| report_failure(&env, e, "schedule_appointment"))?;

        events::publish_appointment_scheduled(
            &env,
            patient_id,
            summary.doctor_name.clone(),
            summary.time.clone(),
        );

        Ok(summary)
    }

    pub fn list_appointment_reminders(env: Env) -> Vec<AppointmentReminder> {
        registry::list_reminders(&env)
    }

    // ======================== Medical history ========================

    /// Return a patient's medical history if `password` matches exactly.
    pub fn access_history(
        env: Env,
        patient_id: u32,
        password: String,
    ) -> Result<String, ContractError> {
        Self::require_initialized(&env)?;

        let history = registry::access_history(&env, patient_id, &password, &PlaintextVerifier)
            .map_err(|e| report_failure(&env, e, "access_history"))?;

        events::publish_history_accessed(&env, patient_id);

        Ok(history)
    }

    // ======================== Configuration ========================

    pub fn set_patient_capacity(env: Env, capacity: u32) -> Result<(), ContractError> {
        Self::require_admin(&env)?;

        registry::set_capacity(&env, capacity)
            .map_err(|e| report_failure(&env, e, "set_patient_capacity"))?;

        events::publish_capacity_updated(&env, capacity);

        Ok(())
    }

    pub fn get_patient_capacity(env: Env) -> u32 {
        registry::get_capacity(&env)
    }

    // ======================== Front desk ========================

    /// Issue a bill for a service. `amount` is in cents and the payment
    /// method must be `MasterCard`, `Visa` or `Cash`.
    pub fn generate_bill(
        env: Env,
        service: String,
        amount: i128,
        payment_method: String,
        paid: bool,
    ) -> Result<Bill, ContractError> {
        let bill = billing::generate_bill(&env, service, amount, &payment_method, paid)?;

        events::publish_bill_generated(
            &env,
            bill.service.clone(),
            bill.amount,
            bill.payment_method.clone(),
            bill.status.clone(),
        );

        Ok(bill)
    }

    pub fn list_tests(env: Env) -> Vec<LabTest> {
        billing::list_tests(&env)
    }

    pub fn report_emergency(env: Env, location: String) -> String {
        emergency::report_emergency(&env, location)
    }

    // ======================== Error log ========================

    pub fn get_error_log(env: Env) -> Vec<ErrorLogEntry> {
        errors::get_error_log(&env)
    }

    pub fn get_error_count(env: Env) -> u64 {
        errors::get_error_count(&env)
    }

    pub fn clear_error_log(env: Env) -> Result<(), ContractError> {
        Self::require_admin(&env)?;
        errors::clear_error_log(&env);
        Ok(())
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }
}

#[cfg(test)]
mod test;
