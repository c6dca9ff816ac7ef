mod error;
mod grammar;

use winnow::Parser;

pub use error::ParseError;

use crate::validate::{
    validate_accept_rules, validate_age, validate_hours, validate_name, validate_role,
};
use crate::{CheckinError, UserRecord};

const KEYS: [&str; 5] = ["name", "age", "role", "rules", "hours"];

/// One record line from a batch file, fields still as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub line: usize,
    pub name: String,
    pub age: String,
    pub role: String,
    pub rules: String,
    pub hours: String,
}

impl RawRecord {
    /// Run each field through its validator.
    ///
    /// # Errors
    ///
    /// Returns [`CheckinError::Record`] carrying this record's line and the
    /// first field that failed.
    pub fn validate(&self) -> Result<UserRecord, CheckinError> {
        let at_line = |source| CheckinError::Record {
            line: self.line,
            source,
        };
        Ok(UserRecord {
            full_name: validate_name(&self.name).map_err(at_line)?,
            age: validate_age(&self.age).map_err(at_line)?,
            role: validate_role(&self.role).map_err(at_line)?,
            accepted_rules: validate_accept_rules(&self.rules).map_err(at_line)?,
            available_hours: validate_hours(&self.hours).map_err(at_line)?,
        })
    }
}

/// Parse batch input into raw records.
///
/// One record per line as `key = value` pairs separated by `;`. Blank lines
/// and lines starting with `#` are skipped. Every record needs each of
/// `name`, `age`, `role`, `rules` and `hours` exactly once.
///
/// # Errors
///
/// Returns [`ParseError`] for the first line that is not valid syntax or
/// has a missing, unknown or repeated key.
pub fn parse_batch(input: &str) -> Result<Vec<RawRecord>, ParseError> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !grammar::is_skippable(line))
        .map(|(line_no, line)| parse_line(line_no, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Result<RawRecord, ParseError> {
    let pairs = grammar::record.parse(line).map_err(|e| {
        let detail = e.inner().to_string().replace('\n', "; ");
        ParseError::new(line_no, format!("column {}: {detail}", e.offset() + 1))
    })?;

    let mut fields: [Option<String>; 5] = Default::default();
    for (key, value) in pairs {
        let slot = KEYS
            .iter()
            .position(|k| *k == key)
            .ok_or_else(|| ParseError::new(line_no, format!("unknown key '{key}'")))?;
        if fields[slot].replace(value).is_some() {
            return Err(ParseError::new(line_no, format!("duplicate key '{key}'")));
        }
    }

    let [name, age, role, rules, hours] = fields;
    let require = |field: Option<String>, key: &str| {
        field.ok_or_else(|| ParseError::new(line_no, format!("missing key '{key}'")))
    };

    Ok(RawRecord {
        line: line_no,
        name: require(name, "name")?,
        age: require(age, "age")?,
        role: require(role, "role")?,
        rules: require(rules, "rules")?,
        hours: require(hours, "hours")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    const LINE: &str = "name = Ada; age = 19; role = Visitor; rules = yes; hours = 1";

    #[test]
    fn parses_full_record() {
        let records = parse_batch(LINE).unwrap();
        assert_eq!(
            records,
            vec![RawRecord {
                line: 1,
                name: "Ada".into(),
                age: "19".into(),
                role: "Visitor".into(),
                rules: "yes".into(),
                hours: "1".into(),
            }]
        );
    }

    #[test]
    fn line_numbers_count_skipped_lines() {
        let input = format!("# roster\n\n{LINE}\n   \n{LINE}\n");
        let lines: Vec<usize> = parse_batch(&input)
            .unwrap()
            .iter()
            .map(|r| r.line)
            .collect();
        assert_eq!(lines, [3, 5]);
    }

    #[test]
    fn key_order_does_not_matter() {
        let records =
            parse_batch("hours=5; rules=no; role=tutor; age=40; name=\"Bo\"").unwrap();
        assert_eq!(records[0].name, "Bo");
        assert_eq!(records[0].rules, "no");
    }

    #[test]
    fn unknown_key_reported_with_line() {
        let err = parse_batch(&format!("{LINE}\n{LINE}; colour = red")).unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(err.message(), "unknown key 'colour'");
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = parse_batch(&format!("{LINE}; age = 20")).unwrap_err();
        assert_eq!(err.message(), "duplicate key 'age'");
    }

    #[test]
    fn missing_key_rejected() {
        let err = parse_batch("name = Ada; age = 19; role = coder; rules = yes").unwrap_err();
        assert_eq!(err.message(), "missing key 'hours'");
    }

    #[test]
    fn syntax_error_reported_with_line() {
        let err = parse_batch(&format!("{LINE}\n\nname Ada")).unwrap_err();
        assert_eq!(err.line(), 3);
        assert!(err.message().starts_with("column "));
    }

    #[test]
    fn validate_normalizes_fields() {
        let user = parse_batch(LINE).unwrap()[0].validate().unwrap();
        assert_eq!(user, UserRecord::new("Ada", 19, "visitor", true, 1.0));
    }

    #[test]
    fn validate_reports_record_line() {
        let records =
            parse_batch(&format!("\n{}", LINE.replace("hours = 1", "hours = 0"))).unwrap();
        match records[0].validate() {
            Err(CheckinError::Record { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, ValidationError::HoursOutOfRange);
            }
            other => panic!("expected record error, got {other:?}"),
        }
    }
}
