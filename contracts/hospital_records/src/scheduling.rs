use soroban_sdk::{contracttype, Env, String};

use crate::validation::MAX_REASON_LEN;
use crate::ContractError;

/// First bookable hour of the day.
pub const FIRST_HOUR: u32 = 8;
/// Last bookable hour of the day; its :30 slot is the final one.
pub const LAST_HOUR: u32 = 16;

const MAX_DOCTOR_NAME_LEN: u32 = 64;
// "Appointment with " + name + " at " + "HH:MM" + " for " + reason + "."
const REMINDER_BUF_LEN: usize =
    17 + MAX_DOCTOR_NAME_LEN as usize + 4 + 5 + 5 + MAX_REASON_LEN as usize + 1;
const TIME_BUF_LEN: usize = 5;

/// A half-hour appointment slot.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeSlot {
    pub hour: u32,
    pub minute: u32,
}

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// One of the 18 slots from 8:00 to 16:30.
    pub fn is_valid(&self) -> bool {
        (FIRST_HOUR..=LAST_HOUR).contains(&self.hour) && (self.minute == 0 || self.minute == 30)
    }

    /// Renders the slot as `H:MM`, e.g. `8:00` or `16:30`.
    pub fn format(&self, env: &Env) -> Result<String, ContractError> {
        let mut buf = [0u8; TIME_BUF_LEN];
        let mut out = ByteWriter::new(&mut buf);
        self.write_to(&mut out)?;
        Ok(out.finish(env))
    }

    fn write_to(&self, out: &mut ByteWriter) -> Result<(), ContractError> {
        out.push_u32(self.hour)?;
        out.push(b":")?;
        if self.minute < 10 {
            out.push(b"0")?;
        }
        out.push_u32(self.minute)
    }
}

/// What `schedule_appointment` reports back to the caller.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppointmentSummary {
    pub patient_id: u32,
    pub doctor_name: String,
    pub specialty: String,
    pub time: String,
    pub reason: String,
}

/// Source of doctor and slot choices for scheduling.
///
/// Production uses [`LedgerPicker`]; tests plug in fixed choices.
pub trait AppointmentPicker {
    /// Index into the doctor list, in `0..doctor_count`.
    fn pick_doctor(&self, doctor_count: u32) -> u32;
    fn pick_slot(&self) -> TimeSlot;
}

/// Uniform choices drawn from the ledger PRNG.
///
/// Only usable from inside a contract invocation.
pub struct LedgerPicker<'a> {
    env: &'a Env,
}

impl<'a> LedgerPicker<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl AppointmentPicker for LedgerPicker<'_> {
    fn pick_doctor(&self, doctor_count: u32) -> u32 {
        let index: u64 = self.env.prng().gen_range(0..u64::from(doctor_count));
        index as u32
    }

    fn pick_slot(&self) -> TimeSlot {
        let hour: u64 = self
            .env
            .prng()
            .gen_range(u64::from(FIRST_HOUR)..=u64::from(LAST_HOUR));
        let half: u64 = self.env.prng().gen_range(0..=1);
        TimeSlot::new(hour as u32, if half == 0 { 0 } else { 30 })
    }
}

/// Builds `Appointment with <doctor> at <H:MM> for <reason>.`
pub fn format_reminder(
    env: &Env,
    doctor_name: &String,
    slot: &TimeSlot,
    reason: &String,
) -> Result<String, ContractError> {
    if doctor_name.len() > MAX_DOCTOR_NAME_LEN || reason.len() > MAX_REASON_LEN {
        return Err(ContractError::InvalidInput);
    }

    let mut buf = [0u8; REMINDER_BUF_LEN];
    let mut out = ByteWriter::new(&mut buf);
    out.push(b"Appointment with ")?;
    out.push_string(doctor_name)?;
    out.push(b" at ")?;
    slot.write_to(&mut out)?;
    out.push(b" for ")?;
    out.push_string(reason)?;
    out.push(b".")?;
    Ok(out.finish(env))
}

/// Appends bytes into a fixed stack buffer.
struct ByteWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl<'b> ByteWriter<'b> {
    fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    fn reserve(&mut self, n: usize) -> Result<core::ops::Range<usize>, ContractError> {
        let end = self
            .len
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or(ContractError::InvalidInput)?;
        let range = self.len..end;
        self.len = end;
        Ok(range)
    }

    fn push(&mut self, bytes: &[u8]) -> Result<(), ContractError> {
        let range = self.reserve(bytes.len())?;
        self.buf[range].copy_from_slice(bytes);
        Ok(())
    }

    fn push_string(&mut self, s: &String) -> Result<(), ContractError> {
        let range = self.reserve(s.len() as usize)?;
        s.copy_into_slice(&mut self.buf[range]);
        Ok(())
    }

    fn push_u32(&mut self, mut n: u32) -> Result<(), ContractError> {
        let mut digits = [0u8; 10];
        let mut start = digits.len();
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        self.push(&digits[start..])
    }

    fn finish(self, env: &Env) -> String {
        String::from_bytes(env, &self.buf[..self.len])
    }
}
