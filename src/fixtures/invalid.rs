//! Deliberately malformed record lines.

/// One way a record line can be malformed.
///
/// A well-formed line has four fields: renavam, model, year, color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// Renavam contains letters.
    NonNumericId,
    /// Only two fields.
    TooFewFields,
    /// Year contains letters.
    NonNumericYear,
    /// Color field and its separator are missing.
    MissingColorField,
    /// A fifth field follows the color.
    ExtraField,
    /// Renavam is empty.
    EmptyId,
    /// Model is empty.
    EmptyModel,
    /// Year is empty.
    EmptyYear,
    /// Color is empty (trailing comma).
    EmptyColor,
    /// The whole line is empty.
    EmptyLine,
}

impl Malformation {
    /// Every malformation, in the order the fixture file lists them.
    pub const ALL: [Self; 10] = [
        Self::NonNumericId,
        Self::TooFewFields,
        Self::NonNumericYear,
        Self::MissingColorField,
        Self::ExtraField,
        Self::EmptyId,
        Self::EmptyModel,
        Self::EmptyYear,
        Self::EmptyColor,
        Self::EmptyLine,
    ];

    /// The literal fixture line for this malformation.
    #[must_use]
    pub const fn line(self) -> &'static str {
        match self {
            Self::NonNumericId => "abc123,Gol,2020,Branco",
            Self::TooFewFields => "123456789,Gol",
            Self::NonNumericYear => "123456789,Gol,ano,Branco",
            Self::MissingColorField => "123456789,Gol,2020",
            Self::ExtraField => "123456789,Gol,2020,Branco,Extra",
            Self::EmptyId => ",Gol,2020,Branco",
            Self::EmptyModel => "123456789,,2020,Branco",
            Self::EmptyYear => "123456789,Gol,,Branco",
            Self::EmptyColor => "123456789,Gol,2020,",
            Self::EmptyLine => "",
        }
    }

    /// Short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::NonNumericId => "non-numeric renavam",
            Self::TooFewFields => "incomplete record",
            Self::NonNumericYear => "non-numeric year",
            Self::MissingColorField => "missing color field",
            Self::ExtraField => "extra field",
            Self::EmptyId => "empty renavam",
            Self::EmptyModel => "empty model",
            Self::EmptyYear => "empty year",
            Self::EmptyColor => "empty color",
            Self::EmptyLine => "empty line",
        }
    }
}

/// Returns the malformed lines in fixture order.
#[must_use]
pub fn invalid_records() -> Vec<&'static str> {
    Malformation::ALL.iter().map(|m| m.line()).collect()
}

/// Renders the fixture file: every line terminated by `\n`, the last included.
#[must_use]
pub fn render_invalid_records() -> String {
    invalid_records().into_iter().map(|line| format!("{line}\n")).collect()
}
