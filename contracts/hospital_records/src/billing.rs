use soroban_sdk::{contracttype, Env, String, Vec};

use crate::ContractError;

/// Accepted payment methods. Names must match exactly.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentMethod {
    MasterCard,
    Visa,
    Cash,
}

impl PaymentMethod {
    pub fn parse(env: &Env, name: &String) -> Option<Self> {
        [
            ("MasterCard", PaymentMethod::MasterCard),
            ("Visa", PaymentMethod::Visa),
            ("Cash", PaymentMethod::Cash),
        ]
        .into_iter()
        .find(|(label, _)| *name == String::from_str(env, label))
        .map(|(_, method)| method)
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

/// A single-service invoice. `amount` is in cents.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bill {
    pub service: String,
    pub amount: i128,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TestCategory {
    GeneralHealth,
    Imaging,
    InfectiousDisease,
    Specialized,
    PregnancyAndGenetic,
}

/// Catalogue entry; `price` is in whole dollars.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabTest {
    pub code: u32,
    pub name: String,
    pub category: TestCategory,
    pub price: u32,
}

const TEST_CATALOG: [(&str, TestCategory, u32); 14] = [
    ("Blood Test", TestCategory::GeneralHealth, 50),
    ("Urine Test", TestCategory::GeneralHealth, 30),
    ("Stool Test", TestCategory::GeneralHealth, 25),
    ("X-Ray", TestCategory::Imaging, 100),
    ("MRI", TestCategory::Imaging, 200),
    ("CT Scan", TestCategory::Imaging, 250),
    ("Covid-19 Test", TestCategory::InfectiousDisease, 20),
    ("Malaria Test", TestCategory::InfectiousDisease, 40),
    ("Tuberculosis Test", TestCategory::InfectiousDisease, 45),
    ("ECG (Electrocardiogram)", TestCategory::Specialized, 80),
    ("Cholesterol Test", TestCategory::Specialized, 60),
    ("Thyroid Function Test", TestCategory::Specialized, 70),
    ("Pregnancy Test", TestCategory::PregnancyAndGenetic, 15),
    ("DNA Test", TestCategory::PregnancyAndGenetic, 300),
];

/// Builds a bill once the payment method is recognised.
pub fn generate_bill(
    env: &Env,
    service: String,
    amount: i128,
    payment_method: &String,
    paid: bool,
) -> Result<Bill, ContractError> {
    let payment_method =
        PaymentMethod::parse(env, payment_method).ok_or(ContractError::InvalidPaymentMethod)?;

    Ok(Bill {
        service,
        amount,
        payment_method,
        status: if paid {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Unpaid
        },
    })
}

/// The fixed test catalogue, numbered from 1 in listing order.
pub fn list_tests(env: &Env) -> Vec<LabTest> {
    let mut tests = Vec::new(env);
    for (code, (name, category, price)) in (1u32..).zip(TEST_CATALOG.iter()) {
        tests.push_back(LabTest {
            code,
            name: String::from_str(env, name),
            category: category.clone(),
            price: *price,
        });
    }
    tests
}
