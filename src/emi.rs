/// Possible errors to occur while evaluating the amortization formula
#[derive(Debug, thiserror::Error)]
pub enum EmiError {
    #[error("The installment is not a finite number (principal: {principal}, duration: {duration}, rate: {rate})")]
    NonFinite {
        principal: f64,
        duration: f64,
        rate: f64,
    },
}

/// Computes the equal periodic installment for a loan, rounded up to the
/// next whole unit
///
/// `rate` is the interest rate per period. With a zero rate the annuity
/// formula would divide by zero, so the installment falls back to the
/// principal spread evenly over the duration. A zero duration (or any
/// other input driving the formula out of its domain) surfaces as
/// [`EmiError::NonFinite`].
///
/// Negative inputs are not validated; whatever finite installment falls
/// out of the formula is returned as is.
pub fn loan_emi(amount: f64, duration: f64, rate: f64, down_payment: f64) -> Result<i64, EmiError> {
    let principal = amount - down_payment;
    let emi = match rate == 0.0 {
        true => principal / duration,
        false => {
            let growth = (1.0 + rate).powf(duration);
            principal * rate * growth / (growth - 1.0)
        }
    };

    match emi.is_finite() {
        true => Ok(emi.ceil() as i64),
        false => Err(EmiError::NonFinite {
            principal,
            duration,
            rate,
        }),
    }
}
