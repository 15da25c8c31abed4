// src/stream/row.rs
use std::fmt;
use tracing::debug;

use crate::error::UnpackMismatchError;

/// Number of columns in a quiz data row.
pub const ROW_ARITY: usize = 8;

/// One data row of the quiz export, borrowed from the parsed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRow<'a> {
    pub round_num: &'a str,
    pub question_num: &'a str,
    pub point_value: &'a str,
    pub question_type: &'a str,
    pub answer_type: &'a str,
    pub location_type: &'a str,
    pub hit_point: &'a str,
    pub notes: &'a str,
}

impl<'a> QuizRow<'a> {
    /// Unpack exactly [`ROW_ARITY`] fields, in column order.
    pub fn try_from_fields<S: AsRef<str>>(fields: &'a [S]) -> Result<Self, UnpackMismatchError> {
        match fields {
            [round_num, question_num, point_value, question_type, answer_type, location_type, hit_point, notes] => {
                Ok(Self {
                    round_num: round_num.as_ref(),
                    question_num: question_num.as_ref(),
                    point_value: point_value.as_ref(),
                    question_type: question_type.as_ref(),
                    answer_type: answer_type.as_ref(),
                    location_type: location_type.as_ref(),
                    hit_point: hit_point.as_ref(),
                    notes: notes.as_ref(),
                })
            }
            _ => Err(UnpackMismatchError {
                expected: ROW_ARITY,
                found: fields.len(),
            }),
        }
    }

    /// Render `[f0, f1, ..., f7]` and encode it as UTF-8.
    pub fn to_message(&self) -> Message {
        let text = format!(
            "[{}, {}, {}, {}, {}, {}, {}, {}]",
            self.round_num,
            self.question_num,
            self.point_value,
            self.question_type,
            self.answer_type,
            self.location_type,
            self.hit_point,
            self.notes
        );
        debug!("formatted row {}", text);
        Message(text.into_bytes())
    }
}

/// Wire payload for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(Vec<u8>);

impl Message {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// Format a raw record straight into its wire payload.
pub fn format_row<S: AsRef<str>>(fields: &[S]) -> Result<Message, UnpackMismatchError> {
    QuizRow::try_from_fields(fields).map(|row| row.to_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 8] = ["1", "1", "10", "Multiple Choice", "Text", "Stage", "Y", "none"];

    #[test]
    fn renders_bracketed_template() {
        let msg = format_row(&SAMPLE).unwrap();
        assert!(!msg.is_empty());
        assert_eq!(msg.len(), 49);
        assert_eq!(
            msg.as_bytes(),
            b"[1, 1, 10, Multiple Choice, Text, Stage, Y, none]"
        );
        assert_eq!(
            msg.to_string(),
            "[1, 1, 10, Multiple Choice, Text, Stage, Y, none]"
        );
    }

    #[test]
    fn formatting_is_deterministic() {
        let owned: Vec<String> = SAMPLE.iter().map(|s| s.to_string()).collect();
        assert_eq!(format_row(&owned).unwrap(), format_row(&SAMPLE).unwrap());
        assert_eq!(format_row(&SAMPLE).unwrap(), format_row(&SAMPLE).unwrap());
    }

    #[test]
    fn embedded_separators_are_not_escaped() {
        let fields = ["2", "4", "5", "Open, ended", "Text", "[Bar]", "N", ""];
        let msg = format_row(&fields).unwrap();
        assert_eq!(msg.to_string(), "[2, 4, 5, Open, ended, Text, [Bar], N, ]");
    }

    #[test]
    fn non_ascii_fields_encode_as_utf8() {
        let fields = ["3", "7", "20", "Picture", "Text", "Café", "Y", "naïve"];
        let msg = format_row(&fields).unwrap();
        assert_eq!(
            msg.into_bytes(),
            "[3, 7, 20, Picture, Text, Café, Y, naïve]".as_bytes()
        );
    }

    #[test]
    fn wrong_arity_is_rejected() {
        assert_eq!(
            format_row(&SAMPLE[..7]).unwrap_err(),
            UnpackMismatchError { expected: 8, found: 7 }
        );

        let mut nine = SAMPLE.to_vec();
        nine.push("extra");
        assert_eq!(format_row(&nine).unwrap_err().found, 9);

        let none: [&str; 0] = [];
        assert_eq!(format_row(&none).unwrap_err().found, 0);
    }

    #[test]
    fn unpacks_named_columns() {
        let row = QuizRow::try_from_fields(&SAMPLE).unwrap();
        assert_eq!(row.point_value, "10");
        assert_eq!(row.question_type, "Multiple Choice");
        assert_eq!(row.notes, "none");
    }
}
