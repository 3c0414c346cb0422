use soroban_sdk::{Env, String, Vec};

use crate::registry::{self, Doctor};
use crate::ContractError;

/// (name, specialty)
pub const SEED_DOCTORS: [(&str, &str); 8] = [
    ("Dr. Smith", "Cardiology"),
    ("Dr. Brown", "Neurology"),
    ("Dr. Lee", "Orthopedics"),
    ("Dr. Wilson", "Dermatology"),
    ("Dr. Green", "Pediatrics"),
    ("Dr. Carter", "Oncology"),
    ("Dr. Adams", "Psychiatry"),
    ("Dr. Taylor", "ENT"),
];

/// (name, age, contact, medical history, password), in id order.
pub const SEED_PATIENTS: [(&str, u32, &str, &str, &str); 35] = [
    ("John Doe", 45, "123-456-7890", "Diabetes", "password1"),
    ("Jane Smith", 30, "234-567-8901", "Hypertension", "password2"),
    ("Alice Johnson", 25, "345-678-9012", "Asthma", "password3"),
    ("Bob Brown", 60, "456-789-0123", "Arthritis", "password4"),
    ("Charlie Wilson", 50, "567-890-1234", "Heart Disease", "password5"),
    ("Diana Green", 35, "678-901-2345", "Migraines", "password6"),
    ("Ethan White", 40, "789-012-3456", "High Cholesterol", "password7"),
    ("Fiona Black", 55, "890-123-4567", "Thyroid Issues", "password8"),
    ("George Lee", 28, "901-234-5678", "Allergies", "password9"),
    ("Hannah Adams", 33, "012-345-6789", "Back Pain", "password10"),
    ("Ian Carter", 45, "123-456-7891", "Diabetes", "password11"),
    ("Jack Taylor", 65, "234-567-8902", "Hypertension", "password12"),
    ("Karen Miller", 29, "345-678-9013", "Asthma", "password13"),
    ("Laura Hall", 48, "456-789-0124", "Arthritis", "password14"),
    ("Mike Evans", 53, "567-890-1235", "Heart Disease", "password15"),
    ("Nina Brown", 26, "678-901-2346", "Migraines", "password16"),
    ("Oscar Green", 31, "789-012-3457", "High Cholesterol", "password17"),
    ("Paula White", 59, "890-123-4568", "Thyroid Issues", "password18"),
    ("Quinn Black", 44, "901-234-5679", "Allergies", "password19"),
    ("Rachel Lee", 36, "012-345-6780", "Back Pain", "password20"),
    ("Sam Adams", 52, "123-456-7892", "Diabetes", "password21"),
    ("Tina Carter", 27, "234-567-8903", "Hypertension", "password22"),
    ("Uma Taylor", 42, "345-678-9014", "Asthma", "password23"),
    ("Victor Miller", 58, "456-789-0125", "Arthritis", "password24"),
    ("Wendy Hall", 47, "567-890-1236", "Heart Disease", "password25"),
    ("Xander Evans", 39, "678-901-2347", "Migraines", "password26"),
    ("Yara Brown", 34, "789-012-3458", "High Cholesterol", "password27"),
    ("Zack Green", 49, "890-123-4569", "Thyroid Issues", "password28"),
    ("Amber Black", 41, "901-234-5670", "Allergies", "password29"),
    ("Brian Lee", 38, "012-345-6781", "Back Pain", "password30"),
    ("Julia Wood", 60, "101-202-3033", "Cancer", "password31"),
    ("Leo King", 70, "202-303-4044", "Stroke", "password32"),
    ("Mona Ray", 28, "303-404-5055", "Flu", "password33"),
    ("Nancy Hill", 45, "404-505-6066", "Diabetes", "password34"),
    ("Oscar Knight", 60, "505-606-7077", "Hypertension", "password35"),
];

/// Loads the doctor roster and the seed patients through the regular
/// create path, so seeded records obey the same invariants.
pub fn load(env: &Env) -> Result<(), ContractError> {
    let mut doctors = Vec::new(env);
    for (name, specialty) in SEED_DOCTORS.iter() {
        doctors.push_back(Doctor {
            name: String::from_str(env, name),
            specialty: String::from_str(env, specialty),
        });
    }
    registry::set_doctors(env, &doctors)?;

    for (name, age, contact, history, password) in SEED_PATIENTS.iter() {
        registry::create_patient(
            env,
            String::from_str(env, name),
            *age,
            String::from_str(env, contact),
            String::from_str(env, history),
            String::from_str(env, password),
        )?;
    }

    Ok(())
}
