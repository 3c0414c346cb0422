#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::arithmetic_side_effects
)]

extern crate std;

use super::*;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Env, IntoVal, Val};

fn setup() -> (Env, HospitalRecordsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HospitalRecordsContract, ());
    let client = HospitalRecordsContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

fn s(env: &Env, value: &str) -> String {
    String::from_str(env, value)
}

#[test]
fn test_initialize() {
    let (env, client, admin) = setup();

    assert!(client.is_initialized());
    assert_eq!(client.get_admin(), admin);
    assert_eq!(client.get_patient_count(), 35);
    assert_eq!(client.get_doctors().len(), 8);
    assert_eq!(client.get_patient_capacity(), DEFAULT_PATIENT_CAPACITY);
    assert_eq!(client.version(), 1);

    let first = client.get_patient(&1);
    assert_eq!(first.name, s(&env, "John Doe"));
    assert_eq!(first.age, 45);
    assert_eq!(first.medical_history, s(&env, "Diabetes"));
    assert_eq!(first.appointment_reminder, s(&env, NO_APPOINTMENT_REMINDER));

    let last = client.get_patient(&35);
    assert_eq!(last.name, s(&env, "Oscar Knight"));

    let doctor = client.get_doctors().get(0).unwrap();
    assert_eq!(doctor.name, s(&env, "Dr. Smith"));
    assert_eq!(doctor.specialty, s(&env, "Cardiology"));
}

#[test]
fn test_initialize_twice_fails() {
    let (env, client, _admin) = setup();

    let other = Address::generate(&env);
    let result = client.try_initialize(&other);
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
    assert_eq!(client.get_patient_count(), 35);
}

#[test]
fn test_uninitialized_contract() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(HospitalRecordsContract, ());
    let client = HospitalRecordsContractClient::new(&env, &contract_id);

    assert!(!client.is_initialized());
    assert_eq!(client.try_get_admin(), Err(Ok(ContractError::NotInitialized)));
    assert!(client.list_patients().is_empty());
    assert_eq!(client.try_get_patient(&1), Err(Ok(ContractError::InvalidPatientId)));

    let result = client.try_create_patient(
        &s(&env, "Grace"),
        &40,
        &s(&env, "555-0199"),
        &s(&env, "None"),
        &s(&env, "pw"),
    );
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));

    let result = client.try_access_history(&1, &s(&env, "password1"));
    assert_eq!(result, Err(Ok(ContractError::NotInitialized)));
}

#[test]
fn test_create_patient_after_seed() {
    let (env, client, admin) = setup();

    let info = client.create_patient(
        &s(&env, "Grace Hopper"),
        &45,
        &s(&env, "555-0100"),
        &s(&env, "None"),
        &s(&env, "cobol"),
    );

    // Recorded auths only cover the most recent invocation.
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, admin);

    assert_eq!(info.id, 36);
    assert_eq!(client.get_patient_count(), 36);
    assert_eq!(client.get_patient(&36), info);
    assert_eq!(client.list_patients().len(), 36);
}

#[test]
fn test_mutations_require_admin_auth() {
    let (env, client, _admin) = setup();

    // Drop the mocked auths so require_auth is enforced.
    env.set_auths(&[]);

    let created = client.try_create_patient(
        &s(&env, "Mallory"),
        &30,
        &s(&env, "000"),
        &s(&env, "None"),
        &s(&env, "pw"),
    );
    assert!(created.is_err());

    let updated = client.try_update_patient(&1, &s(&env, "X"), &s(&env, "Y"), &s(&env, "Z"));
    assert!(updated.is_err());

    let scheduled = client.try_schedule_appointment(&1, &s(&env, "checkup"));
    assert!(scheduled.is_err());

    assert!(client.try_set_patient_capacity(&40).is_err());
    assert!(client.try_clear_error_log().is_err());

    let john = client.get_patient(&1);
    assert_eq!(client.get_patient_count(), 35);
    assert_eq!(john.name, s(&env, "John Doe"));
    assert_eq!(john.appointment_reminder, s(&env, NO_APPOINTMENT_REMINDER));
    assert_eq!(client.get_patient_capacity(), DEFAULT_PATIENT_CAPACITY);

    // Reads and the password-gated history stay open.
    assert_eq!(
        client.access_history(&1, &s(&env, "password1")),
        s(&env, "Diabetes")
    );
}

#[test]
fn test_initialize_event() {
    let (env, client, admin) = setup();

    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("INIT"),).into_val(&env),
            events::InitializedEvent {
                admin,
                patient_count: 35,
                doctor_count: 8,
                timestamp: env.ledger().timestamp(),
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);
}

#[test]
fn test_patient_created_event_omits_secrets() {
    let (env, client, _admin) = setup();

    client.create_patient(
        &s(&env, "Grace Hopper"),
        &45,
        &s(&env, "555-0100"),
        &s(&env, "Private history"),
        &s(&env, "cobol"),
    );

    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("PAT_NEW"), 36u32).into_val(&env),
            events::PatientCreatedEvent {
                patient_id: 36,
                name: s(&env, "Grace Hopper"),
                timestamp: env.ledger().timestamp(),
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);
}

#[test]
fn test_appointment_event_omits_reason() {
    let (env, client, _admin) = setup();

    let summary = client.schedule_appointment(&5, &s(&env, "checkup"));

    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("APPT"), 5u32).into_val(&env),
            events::AppointmentScheduledEvent {
                patient_id: 5,
                doctor_name: summary.doctor_name,
                time: summary.time,
                timestamp: env.ledger().timestamp(),
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);
}

#[test]
fn test_history_accessed_event() {
    let (env, client, _admin) = setup();

    client.access_history(&1, &s(&env, "password1"));

    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("HIST_OK"), 1u32).into_val(&env),
            events::HistoryAccessedEvent {
                patient_id: 1,
                timestamp: env.ledger().timestamp(),
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);
}

#[test]
fn test_emergency_event_carries_location() {
    let (env, client, _admin) = setup();

    let location = s(&env, "Ward 4, bed 12");
    client.report_emergency(&location);

    let expected: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            client.address.clone(),
            (symbol_short!("EMRG"),).into_val(&env),
            events::EmergencyReportedEvent {
                location,
                timestamp: env.ledger().timestamp(),
            }
            .into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected);
}

#[test]
fn test_create_patient_rejects_bad_age() {
    let (env, client, _admin) = setup();

    for age in [0u32, 120] {
        let result = client.try_create_patient(
            &s(&env, "Nobody"),
            &age,
            &s(&env, "000"),
            &s(&env, "None"),
            &s(&env, "pw"),
        );
        assert_eq!(result, Err(Ok(ContractError::InvalidAge)));
    }
    assert_eq!(client.get_patient_count(), 35);

    let oldest = client.create_patient(
        &s(&env, "Edge"),
        &119,
        &s(&env, "000"),
        &s(&env, "None"),
        &s(&env, "pw"),
    );
    assert_eq!(oldest.age, 119);
}

#[test]
fn test_capacity_limits_creation() {
    let (env, client, _admin) = setup();

    client.set_patient_capacity(&36);
    assert_eq!(client.get_patient_capacity(), 36);

    client.create_patient(
        &s(&env, "Last Seat"),
        &30,
        &s(&env, "1"),
        &s(&env, "None"),
        &s(&env, "pw"),
    );
    let result = client.try_create_patient(
        &s(&env, "Too Late"),
        &30,
        &s(&env, "2"),
        &s(&env, "None"),
        &s(&env, "pw"),
    );
    assert_eq!(result, Err(Ok(ContractError::CapacityExceeded)));
    assert_eq!(client.get_patient_count(), 36);

    assert_eq!(
        client.try_set_patient_capacity(&10),
        Err(Ok(ContractError::InvalidCapacity))
    );
    assert_eq!(
        client.try_set_patient_capacity(&0),
        Err(Ok(ContractError::InvalidCapacity))
    );
}

#[test]
fn test_update_patient() {
    let (env, client, _admin) = setup();

    let before = client.get_patient(&3);
    client.update_patient(
        &3,
        &s(&env, "Alice J. Smith"),
        &s(&env, "999-999-9999"),
        &s(&env, "Asthma, Allergies"),
    );

    let after = client.get_patient(&3);
    assert_eq!(after.name, s(&env, "Alice J. Smith"));
    assert_eq!(after.contact, s(&env, "999-999-9999"));
    assert_eq!(after.medical_history, s(&env, "Asthma, Allergies"));
    assert_eq!(after.age, before.age);
    assert_eq!(after.appointment_reminder, before.appointment_reminder);

    // The password is untouched by an update.
    assert_eq!(
        client.access_history(&3, &s(&env, "password3")),
        s(&env, "Asthma, Allergies")
    );
}

#[test]
fn test_update_patient_out_of_range() {
    let (env, client, _admin) = setup();

    for id in [0u32, 36] {
        let result = client.try_update_patient(&id, &s(&env, "X"), &s(&env, "Y"), &s(&env, "Z"));
        assert_eq!(result, Err(Ok(ContractError::InvalidPatientId)));
    }
    assert_eq!(client.get_patient(&35).name, s(&env, "Oscar Knight"));
}

#[test]
fn test_access_history() {
    let (env, client, _admin) = setup();

    assert_eq!(
        client.access_history(&1, &s(&env, "password1")),
        s(&env, "Diabetes")
    );
    assert_eq!(
        client.try_access_history(&1, &s(&env, "wrong")),
        Err(Ok(ContractError::AuthFailed))
    );
    assert_eq!(
        client.try_access_history(&1, &s(&env, "Password1")),
        Err(Ok(ContractError::AuthFailed))
    );
    assert_eq!(
        client.try_access_history(&99, &s(&env, "password1")),
        Err(Ok(ContractError::InvalidPatientId))
    );
}

#[test]
fn test_schedule_appointment() {
    let (env, client, _admin) = setup();

    let summary = client.schedule_appointment(&5, &s(&env, "checkup"));
    assert_eq!(summary.patient_id, 5);
    assert_eq!(summary.reason, s(&env, "checkup"));

    let doctor = client
        .get_doctors()
        .iter()
        .find(|d| d.name == summary.doctor_name)
        .expect("doctor comes from the roster");
    assert_eq!(doctor.specialty, summary.specialty);

    let mut slot = None;
    for hour in scheduling::FIRST_HOUR..=scheduling::LAST_HOUR {
        for minute in [0u32, 30] {
            let candidate = TimeSlot::new(hour, minute);
            if candidate.format(&env).unwrap() == summary.time {
                slot = Some(candidate);
            }
        }
    }
    let slot = slot.expect("time is a half-hour slot between 8:00 and 16:30");

    let expected =
        scheduling::format_reminder(&env, &doctor.name, &slot, &s(&env, "checkup")).unwrap();
    assert_eq!(client.get_patient(&5).appointment_reminder, expected);
}

#[test]
fn test_schedule_appointment_errors() {
    let (env, client, _admin) = setup();

    assert_eq!(
        client.try_schedule_appointment(&0, &s(&env, "checkup")),
        Err(Ok(ContractError::InvalidPatientId))
    );
    assert_eq!(
        client.try_schedule_appointment(&36, &s(&env, "checkup")),
        Err(Ok(ContractError::InvalidPatientId))
    );

    let long_reason = "a".repeat(validation::MAX_REASON_LEN as usize + 1);
    assert_eq!(
        client.try_schedule_appointment(&2, &s(&env, &long_reason)),
        Err(Ok(ContractError::InvalidInput))
    );
    assert_eq!(
        client.get_patient(&2).appointment_reminder,
        s(&env, NO_APPOINTMENT_REMINDER)
    );
}

#[test]
fn test_list_appointment_reminders() {
    let (env, client, _admin) = setup();

    client.schedule_appointment(&2, &s(&env, "follow-up"));

    let reminders = client.list_appointment_reminders();
    assert_eq!(reminders.len(), 35);
    assert_eq!(reminders.get(0).unwrap().reminder, s(&env, NO_APPOINTMENT_REMINDER));

    let second = reminders.get(1).unwrap();
    assert_eq!(second.patient_id, 2);
    assert_eq!(second.name, s(&env, "Jane Smith"));
    assert_eq!(second.reminder, client.get_patient(&2).appointment_reminder);
}

#[test]
fn test_generate_bill() {
    let (env, client, _admin) = setup();

    let bill = client.generate_bill(&s(&env, "MRI"), &20_000, &s(&env, "MasterCard"), &false);
    assert_eq!(bill.payment_method, PaymentMethod::MasterCard);
    assert_eq!(bill.status, PaymentStatus::Unpaid);
    assert_eq!(bill.amount, 20_000);

    assert_eq!(
        client.try_generate_bill(&s(&env, "MRI"), &20_000, &s(&env, "IOU"), &true),
        Err(Ok(ContractError::InvalidPaymentMethod))
    );
}

#[test]
fn test_list_tests_and_emergency() {
    let (env, client, _admin) = setup();

    let tests = client.list_tests();
    assert_eq!(tests.len(), 14);
    assert_eq!(tests.get(3).unwrap().name, s(&env, "X-Ray"));

    assert_eq!(
        client.report_emergency(&s(&env, "Ward 4")),
        s(&env, emergency::EMERGENCY_RESPONSE)
    );
}

#[test]
fn test_error_log_starts_empty_and_clears() {
    let (_env, client, _admin) = setup();

    assert_eq!(client.get_error_count(), 0);
    assert!(client.get_error_log().is_empty());

    client.clear_error_log();
    assert_eq!(client.get_error_count(), 0);
}
