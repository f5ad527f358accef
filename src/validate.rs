use crate::error::ValidationError;
use crate::models::Criterion;

pub const MAX_NOTES_CHARS: usize = 50_000;
pub const MIN_RATING: i32 = 0;
pub const MAX_RATING: i32 = 5;

pub fn id(field: &'static str, value: i64) -> Result<i32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositiveId { field, value });
    }
    i32::try_from(value).map_err(|_| ValidationError::IdOutOfRange { field, value })
}

pub fn rating(value: i64) -> Result<i32, ValidationError> {
    if value < i64::from(MIN_RATING) || value > i64::from(MAX_RATING) {
        return Err(ValidationError::RatingOutOfRange {
            value,
            min: MIN_RATING,
            max: MAX_RATING,
        });
    }
    Ok(value as i32)
}

pub fn criterion(value: &str) -> Result<Criterion, ValidationError> {
    value.trim().parse()
}

pub fn notes<'a>(field: &'static str, text: &'a str) -> Result<&'a str, ValidationError> {
    let len = text.chars().count();
    if len > MAX_NOTES_CHARS {
        return Err(ValidationError::TextTooLong {
            field,
            len,
            max: MAX_NOTES_CHARS,
        });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(id("item id", 7), Ok(7));
        assert_eq!(
            id("item id", 0),
            Err(ValidationError::NonPositiveId {
                field: "item id",
                value: 0
            })
        );
        assert!(id("weekend id", -4).is_err());
        assert_eq!(
            id("weekend id", i64::from(i32::MAX) + 1),
            Err(ValidationError::IdOutOfRange {
                field: "weekend id",
                value: i64::from(i32::MAX) + 1
            })
        );
    }

    #[test]
    fn ratings_are_zero_to_five() {
        for value in 0..=5 {
            assert_eq!(rating(value), Ok(value as i32));
        }
        assert!(rating(-1).is_err());
        assert!(rating(6).is_err());
    }

    #[test]
    fn criterion_is_trimmed_and_checked() {
        assert_eq!(criterion(" use_again "), Ok(Criterion::UseAgain));
        assert!(criterion("speed").is_err());
    }

    #[test]
    fn notes_limit_counts_characters() {
        let at_limit = "é".repeat(MAX_NOTES_CHARS);
        assert!(notes("notes", &at_limit).is_ok());

        let over = "a".repeat(MAX_NOTES_CHARS + 1);
        assert_eq!(
            notes("notes", &over),
            Err(ValidationError::TextTooLong {
                field: "notes",
                len: MAX_NOTES_CHARS + 1,
                max: MAX_NOTES_CHARS
            })
        );
        assert_eq!(notes("notes", ""), Ok(""));
    }
}
