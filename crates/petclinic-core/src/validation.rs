//! Identifier and request-body validation shared by the resources.
//!
//! Every check here runs before any storage call.

use std::collections::BTreeSet;

use crate::domain::{OwnerRequest, PetRequest, VisitRequest};
use crate::ports::CoreError;

/// Longest accepted visit description, in characters.
pub const MAX_VISIT_DESCRIPTION_LEN: usize = 8192;

/// Reject identifiers that are not positive.
pub fn ensure_valid_id(id: i64, name: &str) -> Result<i64, CoreError> {
    if id <= 0 {
        return Err(CoreError::InvalidIdentifier(format!(
            "{name} must be a positive integer, got {id}"
        )));
    }
    Ok(id)
}

/// Parse a raw path segment into a positive identifier.
pub fn parse_identifier(raw: &str, name: &str) -> Result<i64, CoreError> {
    let id = raw.trim().parse::<i64>().map_err(|_| {
        CoreError::InvalidIdentifier(format!("{name} must be a positive integer, got '{raw}'"))
    })?;
    ensure_valid_id(id, name)
}

/// Parse a comma-separated list of pet ids into a set.
///
/// Duplicates collapse. Blank lists, unparseable entries and non-positive
/// entries are validation errors.
pub fn parse_pet_ids(raw: &str) -> Result<BTreeSet<i64>, CoreError> {
    let mut ids = BTreeSet::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let id = part
            .parse::<i64>()
            .map_err(|_| CoreError::Validation(format!("petId '{part}' is not an integer")))?;
        if id <= 0 {
            return Err(CoreError::Validation(format!(
                "petId must be positive, got {id}"
            )));
        }
        ids.insert(id);
    }

    if ids.is_empty() {
        return Err(CoreError::Validation(
            "petId must list at least one pet".to_string(),
        ));
    }
    Ok(ids)
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// All owner fields are required and must not be blank.
pub fn validate_owner_request(request: &OwnerRequest) -> Result<(), CoreError> {
    let fields = [
        ("firstName", request.first_name.as_deref()),
        ("lastName", request.last_name.as_deref()),
        ("address", request.address.as_deref()),
        ("city", request.city.as_deref()),
        ("telephone", request.telephone.as_deref()),
    ];

    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| is_blank(*value))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "must not be blank: {}",
            missing.join(", ")
        )))
    }
}

/// A pet needs a non-empty name. Type existence is checked by the resource.
pub fn validate_pet_request(request: &PetRequest) -> Result<(), CoreError> {
    if request.name.as_deref().is_none_or(str::is_empty) {
        return Err(CoreError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

/// Visit descriptions are bounded.
pub fn validate_visit_request(request: &VisitRequest) -> Result<(), CoreError> {
    if let Some(description) = &request.description {
        let len = description.chars().count();
        if len > MAX_VISIT_DESCRIPTION_LEN {
            return Err(CoreError::Validation(format!(
                "description is {len} characters, limit is {MAX_VISIT_DESCRIPTION_LEN}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_ensure_valid_id_rejects_zero_and_negative() {
        assert_ok!(ensure_valid_id(1, "ownerId"));
        assert!(matches!(
            ensure_valid_id(0, "ownerId"),
            Err(CoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            ensure_valid_id(-5, "ownerId"),
            Err(CoreError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_parse_identifier() {
        assert_eq!(parse_identifier("42", "petId").unwrap(), 42);
        assert_eq!(parse_identifier(" 7 ", "petId").unwrap(), 7);
        assert_err!(parse_identifier("abc", "petId"));
        assert_err!(parse_identifier("*", "petId"));
        assert_err!(parse_identifier("0", "petId"));
        assert_err!(parse_identifier("", "petId"));
    }

    #[test]
    fn test_parse_pet_ids_collapses_duplicates() {
        let ids = parse_pet_ids("222,111, 222").unwrap();
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec![111, 222]);
    }

    #[test]
    fn test_parse_pet_ids_rejects_bad_input() {
        assert!(matches!(parse_pet_ids(""), Err(CoreError::Validation(_))));
        assert!(matches!(parse_pet_ids(" , "), Err(CoreError::Validation(_))));
        assert!(matches!(
            parse_pet_ids("1,two"),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(parse_pet_ids("1,-2"), Err(CoreError::Validation(_))));
    }

    #[test]
    fn test_owner_request_requires_every_field() {
        assert_ok!(validate_owner_request(&OwnerRequest::new(
            "Jane",
            "Doe",
            "123 Street",
            "City",
            "1234567890"
        )));

        let mut request = OwnerRequest::new("Jane", "Doe", "123 Street", "City", "1234567890");
        request.city = Some("   ".to_string());
        request.telephone = None;

        let err = validate_owner_request(&request).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("city"));
        assert!(message.contains("telephone"));
        assert!(!message.contains("firstName"));
    }

    #[test]
    fn test_pet_request_requires_name() {
        let mut request = PetRequest {
            name: Some("Buddy".to_string()),
            type_id: 1,
            ..Default::default()
        };
        assert_ok!(validate_pet_request(&request));

        request.name = Some(String::new());
        assert_err!(validate_pet_request(&request));

        request.name = None;
        assert_err!(validate_pet_request(&request));
    }

    #[test]
    fn test_visit_description_limit() {
        let at_limit = VisitRequest {
            description: Some("a".repeat(MAX_VISIT_DESCRIPTION_LEN)),
            ..Default::default()
        };
        assert_ok!(validate_visit_request(&at_limit));

        let over = VisitRequest {
            description: Some("a".repeat(MAX_VISIT_DESCRIPTION_LEN + 1)),
            ..Default::default()
        };
        assert_err!(validate_visit_request(&over));
    }
}
