use soroban_sdk::String;

use crate::ContractError;

const MIN_AGE: u32 = 0;
const MAX_AGE: u32 = 120;

/// Reminders are built in a fixed buffer, so the reason text is bounded.
pub const MAX_REASON_LEN: u32 = 200;

/// Age is valid when strictly between 0 and 120.
pub fn is_valid_age(age: u32) -> bool {
    age > MIN_AGE && age < MAX_AGE
}

/// Patient ids are 1-based and dense, so an id is valid when it falls in
/// `1..=count`.
pub fn is_valid_patient_id(id: u32, count: u32) -> bool {
    (1..=count).contains(&id)
}

pub fn validate_age(age: u32) -> Result<(), ContractError> {
    if !is_valid_age(age) {
        return Err(ContractError::InvalidAge);
    }
    Ok(())
}

pub fn validate_patient_id(id: u32, count: u32) -> Result<(), ContractError> {
    if !is_valid_patient_id(id, count) {
        return Err(ContractError::InvalidPatientId);
    }
    Ok(())
}

/// A stored password may never be empty.
pub fn validate_password(password: &String) -> Result<(), ContractError> {
    if password.is_empty() {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}

pub fn validate_reason(reason: &String) -> Result<(), ContractError> {
    if reason.len() > MAX_REASON_LEN {
        return Err(ContractError::InvalidInput);
    }
    Ok(())
}
