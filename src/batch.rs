use crate::emi::{loan_emi, EmiError};
use crate::record::{Dataset, Record, EMI_FIELD};

/// Periods per year; stored rates are annual, the installment is monthly
const MONTHS_PER_YEAR: f64 = 12.0;

/// Possible errors to occur during batch EMI computation
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Record {record} is missing the `{field}` field")]
    MissingField { record: usize, field: &'static str },
    #[error("Record {record} does not amortize")]
    Emi { record: usize, source: EmiError },
}

/// Computes the monthly installment for every record of the dataset
///
/// Every record must carry `amount`, `duration` and `rate`; `down_payment`
/// defaults to `0.0` when absent. The stored `rate` is annual and divided
/// by 12 before the per-period formula is applied. Results are written
/// back into the records under `emi`, replacing any previous value, so
/// repeated runs over unchanged inputs are idempotent.
///
/// The first record that is missing a required field or does not yield a
/// finite installment fails the whole batch; records before it may already
/// have been augmented, so on error the dataset should be discarded.
pub fn compute_emis(dataset: &mut Dataset) -> Result<(), BatchError> {
    for (index, record) in dataset.records_mut().iter_mut().enumerate() {
        let amount = required(record, index, "amount")?;
        let duration = required(record, index, "duration")?;
        let rate = required(record, index, "rate")?;
        let down_payment = record.get("down_payment").unwrap_or(0.0);

        let emi = loan_emi(amount, duration, rate / MONTHS_PER_YEAR, down_payment)
            .map_err(|source| BatchError::Emi { record: index, source })?;
        record.set(EMI_FIELD, emi as f64);
    }

    log::debug!("computed installments for {} records", dataset.len());
    Ok(())
}

fn required(record: &Record, index: usize, field: &'static str) -> Result<f64, BatchError> {
    record.get(field).ok_or(BatchError::MissingField {
        record: index,
        field,
    })
}
