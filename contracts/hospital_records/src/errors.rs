#![allow(clippy::arithmetic_side_effects)]
use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

pub const ERROR_LOG_KEY: Symbol = symbol_short!("ERR_LOG");
pub const ERROR_COUNT_KEY: Symbol = symbol_short!("ERR_CNT");
pub const MAX_ERROR_LOG_SIZE: u32 = 100;

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Instance TTL covers every instance key, including the error log.
fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Error categories for classifying different types of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Invalid input parameters: bad age, unknown payment method
    Validation = 1,
    /// Credential or admin authorization failures
    Authorization = 2,
    /// Patient id outside the registry
    NotFound = 3,
    /// Registry state forbids the operation: full, already initialized
    StateConflict = 4,
    /// Contract-level issues like missing initialization
    System = 5,
}

/// Error severity levels indicating the impact and urgency of errors
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorSeverity {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ErrorContext {
    pub category: ErrorCategory,
    pub severity: ErrorSeverity,
    pub message: String,
    pub user: Option<Address>,
    pub resource_id: Option<String>,
    pub timestamp: u64,
    pub retryable: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ErrorLogEntry {
    pub error_code: u32,
    pub context: ErrorContext,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    CapacityExceeded = 4,
    InvalidPatientId = 5,
    InvalidAge = 6,
    AuthFailed = 7,
    InvalidInput = 8,
    NoDoctorsAvailable = 9,
    InvalidPaymentMethod = 10,
    InvalidCapacity = 11,
}

impl ContractError {
    /// Returns the error category for this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::InvalidAge
            | ContractError::InvalidInput
            | ContractError::InvalidPaymentMethod
            | ContractError::InvalidCapacity => ErrorCategory::Validation,
            ContractError::Unauthorized | ContractError::AuthFailed => {
                ErrorCategory::Authorization
            }
            ContractError::InvalidPatientId => ErrorCategory::NotFound,
            ContractError::AlreadyInitialized
            | ContractError::CapacityExceeded
            | ContractError::NoDoctorsAvailable => ErrorCategory::StateConflict,
            ContractError::NotInitialized => ErrorCategory::System,
        }
    }

    /// Returns the severity level for this error.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContractError::InvalidAge
            | ContractError::InvalidInput
            | ContractError::InvalidPatientId
            | ContractError::InvalidPaymentMethod
            | ContractError::InvalidCapacity
            | ContractError::AlreadyInitialized => ErrorSeverity::Low,
            ContractError::Unauthorized
            | ContractError::AuthFailed
            | ContractError::CapacityExceeded => ErrorSeverity::Medium,
            ContractError::NoDoctorsAvailable => ErrorSeverity::High,
            ContractError::NotInitialized => ErrorSeverity::Critical,
        }
    }

    /// Retryable errors succeed once the caller corrects the input or the
    /// operator frees capacity.
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            ContractError::InvalidAge
                | ContractError::AuthFailed
                | ContractError::CapacityExceeded
                | ContractError::InvalidPaymentMethod
        )
    }

    /// Returns a human-readable error message for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Registry has not been initialized",
            ContractError::AlreadyInitialized => "Registry is already initialized",
            ContractError::Unauthorized => "Caller is not authorized for this operation",
            ContractError::CapacityExceeded => "Patient list is full",
            ContractError::InvalidPatientId => "Invalid patient ID",
            ContractError::InvalidAge => "Age must be between 1 and 119",
            ContractError::AuthFailed => "Incorrect password",
            ContractError::InvalidInput => "Invalid input parameters provided",
            ContractError::NoDoctorsAvailable => "No doctors available for scheduling",
            ContractError::InvalidPaymentMethod => {
                "Invalid payment method. Bill cannot be processed"
            }
            ContractError::InvalidCapacity => {
                "Capacity must be positive and cover existing patients"
            }
        }
    }
}

/// Appends an error to the bounded error log and bumps the error count.
/// The log keeps the most recent `MAX_ERROR_LOG_SIZE` entries.
pub fn log_error(
    env: &Env,
    error: ContractError,
    user: Option<Address>,
    resource_id: Option<String>,
) {
    let log_entry = ErrorLogEntry {
        error_code: error as u32,
        context: create_error_context(env, error, user, resource_id),
    };

    let mut error_log: Vec<ErrorLogEntry> = env
        .storage()
        .instance()
        .get(&ERROR_LOG_KEY)
        .unwrap_or(Vec::new(env));

    error_log.push_back(log_entry);

    if error_log.len() > MAX_ERROR_LOG_SIZE {
        error_log.pop_front();
    }

    env.storage().instance().set(&ERROR_LOG_KEY, &error_log);

    let error_count: u64 = env.storage().instance().get(&ERROR_COUNT_KEY).unwrap_or(0);
    env.storage()
        .instance()
        .set(&ERROR_COUNT_KEY, &(error_count + 1));

    extend_ttl_instance(env);
}

/// Returns an empty vector if no errors have been logged.
pub fn get_error_log(env: &Env) -> Vec<ErrorLogEntry> {
    env.storage()
        .instance()
        .get(&ERROR_LOG_KEY)
        .unwrap_or(Vec::new(env))
}

/// Total errors logged since the last clear, including entries already
/// evicted from the bounded log.
pub fn get_error_count(env: &Env) -> u64 {
    env.storage().instance().get(&ERROR_COUNT_KEY).unwrap_or(0)
}

pub fn clear_error_log(env: &Env) {
    env.storage().instance().remove(&ERROR_LOG_KEY);
    env.storage().instance().set(&ERROR_COUNT_KEY, &0u64);
    extend_ttl_instance(env);
}

/// Builds an ErrorContext with category, severity, message and retryable
/// flag derived from the error.
pub fn create_error_context(
    env: &Env,
    error: ContractError,
    user: Option<Address>,
    resource_id: Option<String>,
) -> ErrorContext {
    ErrorContext {
        category: error.category(),
        severity: error.severity(),
        message: String::from_str(env, error.message()),
        user,
        resource_id,
        timestamp: env.ledger().timestamp(),
        retryable: error.retryable(),
    }
}
