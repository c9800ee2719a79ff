//! Request body validation for create and partial update.

use serde_json::Value;

use super::errors::{BookmarkError, BookmarkResult};
use super::model::{BookmarkChanges, Field, NewBookmark};

/// Raw request body for POST and PATCH.
///
/// Fields stay untyped until validation so that an absent field, an explicit
/// `null` and a value of the wrong type can be told apart. Unrecognized keys
/// (including `id`) are ignored.
#[derive(Debug, Default)]
pub struct BookmarkFields {
    pub title: Option<Value>,
    pub url: Option<Value>,
    pub description: Option<Value>,
    pub rating: Option<Value>,
}

impl From<Value> for BookmarkFields {
    /// Only object members are read. Arrays and scalars carry no fields.
    fn from(body: Value) -> Self {
        let Value::Object(mut map) = body else {
            return Self::default();
        };
        Self {
            title: map.remove(Field::Title.as_str()),
            url: map.remove(Field::Url.as_str()),
            description: map.remove(Field::Description.as_str()),
            rating: map.remove(Field::Rating.as_str()),
        }
    }
}

impl BookmarkFields {
    fn get(&self, field: Field) -> Option<&Value> {
        let value = match field {
            Field::Title => self.title.as_ref(),
            Field::Url => self.url.as_ref(),
            Field::Description => self.description.as_ref(),
            Field::Rating => self.rating.as_ref(),
        };
        value.filter(|v| !v.is_null())
    }
}

/// Validate a create request.
///
/// Fails on the first missing field in [`Field::ALL`] order, then on the
/// first field carrying the wrong type.
pub fn validate_new(fields: &BookmarkFields) -> BookmarkResult<NewBookmark> {
    if let Some(missing) = Field::ALL.into_iter().find(|f| fields.get(*f).is_none()) {
        return Err(BookmarkError::MissingField(missing));
    }

    Ok(NewBookmark {
        title: required_text(fields, Field::Title)?,
        url: required_text(fields, Field::Url)?,
        description: required_text(fields, Field::Description)?,
        rating: required_rating(fields)?,
    })
}

/// Validate a partial update. At least one recognized field must be present.
pub fn validate_changes(fields: &BookmarkFields) -> BookmarkResult<BookmarkChanges> {
    let changes = BookmarkChanges {
        title: optional_text(fields, Field::Title)?,
        url: optional_text(fields, Field::Url)?,
        description: optional_text(fields, Field::Description)?,
        rating: fields.get(Field::Rating).map(parse_rating).transpose()?,
    };

    if changes.is_empty() {
        return Err(BookmarkError::EmptyUpdate);
    }
    Ok(changes)
}

fn required_text(fields: &BookmarkFields, field: Field) -> BookmarkResult<String> {
    optional_text(fields, field)?.ok_or(BookmarkError::MissingField(field))
}

fn required_rating(fields: &BookmarkFields) -> BookmarkResult<f64> {
    fields
        .get(Field::Rating)
        .ok_or(BookmarkError::MissingField(Field::Rating))
        .and_then(parse_rating)
}

fn optional_text(fields: &BookmarkFields, field: Field) -> BookmarkResult<Option<String>> {
    match fields.get(field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(BookmarkError::InvalidField(field)),
    }
}

/// Ratings are JSON numbers; numeric strings (as sent by HTML forms) are
/// accepted too.
fn parse_rating(value: &Value) -> BookmarkResult<f64> {
    let rating = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    rating
        .filter(|r| r.is_finite())
        .ok_or(BookmarkError::InvalidField(Field::Rating))
}
