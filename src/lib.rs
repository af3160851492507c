pub use self::{
    batch::{compute_emis, BatchError},
    emi::{loan_emi, EmiError},
    loader::{CsvLoader, LoadError},
    parse::{parse_header, parse_values, ParseError},
    record::{Dataset, Record, RecordError, EMI_FIELD},
};

mod batch;
mod emi;
mod loader;
mod parse;
mod record;
