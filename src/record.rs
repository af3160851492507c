use std::collections::HashMap;

/// The field name under which computed installments are stored
pub const EMI_FIELD: &str = "emi";

/// Possible errors to occur while pairing values with headers in strict mode
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Expected {headers} values to match the header, got {values}")]
    LengthMismatch { headers: usize, values: usize },
}

/// One parsed CSV row, a mapping from field name to value
///
/// Duplicate header names are not rejected; the value of the last
/// occurrence wins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, f64>,
}

impl Record {
    /// Pairs values with header names positionally
    ///
    /// Pairing stops at the end of the shorter sequence; excess values or
    /// headers are silently dropped. Use [`Record::from_pairs_strict`] to
    /// reject the mismatch instead.
    pub fn from_pairs(values: Vec<f64>, headers: &[String]) -> Self {
        let fields = values
            .into_iter()
            .zip(headers)
            .map(|(value, header)| (header.clone(), value))
            .collect();

        Self { fields }
    }

    /// Pairs values with header names, requiring equal lengths
    pub fn from_pairs_strict(values: Vec<f64>, headers: &[String]) -> Result<Self, RecordError> {
        match values.len() == headers.len() {
            true => Ok(Self::from_pairs(values, headers)),
            false => Err(RecordError::LengthMismatch {
                headers: headers.len(),
                values: values.len(),
            }),
        }
    }

    /// The value stored under the given field name
    pub fn get(&self, field: &str) -> Option<f64> {
        self.fields.get(field).copied()
    }

    /// Stores a value under the given field name, replacing any previous one
    pub fn set(&mut self, field: impl Into<String>, value: f64) {
        self.fields.insert(field.into(), value);
    }

    /// The number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An ordered collection of records loaded from one CSV file
///
/// Records keep the order of the lines they were parsed from. The header
/// of the source file is kept alongside so the dataset can be written back
/// out with its original column order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Creates an empty dataset with the given header
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            records: Vec::new(),
        }
    }

    /// The field names of the source file, in column order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    /// Appends a record at the end of the dataset
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// The number of records in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the dataset as CSV
    ///
    /// Columns follow the source header order. When any record carries an
    /// `emi` field that is not already a header, it is appended as the last
    /// column. Fields a record does not have are written as empty, matching
    /// the input convention for missing values.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut writer = csv::WriterBuilder::new().from_writer(writer);

        let mut columns: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        let has_emi = self.records.iter().any(|record| record.get(EMI_FIELD).is_some());
        if has_emi && !self.headers.iter().any(|header| header == EMI_FIELD) {
            columns.push(EMI_FIELD);
        }
        writer.write_record(&columns)?;

        for record in &self.records {
            writer.write_record(columns.iter().map(|column| match record.get(column) {
                Some(value) => value.to_string(),
                None => String::new(),
            }))?;
        }

        writer.flush()?;
        Ok(())
    }
}
