//! Owner entity mapper.

use crate::domain::{OwnerDetails, OwnerRequest};

/// Copy the owner fields of `request` onto `entity`.
///
/// Every field is overwritten, absent and empty values included. No
/// validation happens here. Works the same on a fresh `OwnerDetails`
/// (create) and on a persisted `Owner` (update).
pub fn map_owner_request<E: AsMut<OwnerDetails>>(mut entity: E, request: &OwnerRequest) -> E {
    let details = entity.as_mut();
    details.first_name.clone_from(&request.first_name);
    details.last_name.clone_from(&request.last_name);
    details.address.clone_from(&request.address);
    details.city.clone_from(&request.city);
    details.telephone.clone_from(&request.telephone);
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Owner;

    #[test]
    fn test_map_copies_every_field() {
        let request = OwnerRequest::new("First", "Last", "Addr", "City", "1234567890");
        let result = map_owner_request(OwnerDetails::default(), &request);

        assert_eq!(result.first_name.as_deref(), Some("First"));
        assert_eq!(result.last_name.as_deref(), Some("Last"));
        assert_eq!(result.address.as_deref(), Some("Addr"));
        assert_eq!(result.city.as_deref(), Some("City"));
        assert_eq!(result.telephone.as_deref(), Some("1234567890"));
    }

    #[test]
    fn test_map_with_absent_values_clears_fields() {
        let existing = OwnerDetails {
            first_name: Some("Old".to_string()),
            city: Some("Madison".to_string()),
            ..Default::default()
        };
        let result = map_owner_request(existing, &OwnerRequest::default());
        assert_eq!(result, OwnerDetails::default());
    }

    #[test]
    fn test_map_with_empty_strings() {
        let request = OwnerRequest::new("", "", "", "", "");
        let result = map_owner_request(OwnerDetails::default(), &request);
        assert_eq!(result.first_name.as_deref(), Some(""));
        assert_eq!(result.telephone.as_deref(), Some(""));
    }

    #[test]
    fn test_map_with_special_characters() {
        let request = OwnerRequest::new(
            "José",
            "O'Connor",
            "123 Main St. #4",
            "São Paulo",
            "+1-555-123-4567",
        );
        let result = map_owner_request(OwnerDetails::default(), &request);

        assert_eq!(result.first_name.as_deref(), Some("José"));
        assert_eq!(result.last_name.as_deref(), Some("O'Connor"));
        assert_eq!(result.address.as_deref(), Some("123 Main St. #4"));
        assert_eq!(result.city.as_deref(), Some("São Paulo"));
        assert_eq!(result.telephone.as_deref(), Some("+1-555-123-4567"));
    }

    #[test]
    fn test_map_with_very_long_values() {
        let long_name = "A".repeat(1000);
        let long_phone = "D".repeat(1000);
        let request = OwnerRequest::new(&*long_name, &*long_name, "B", "C", &*long_phone);
        let result = map_owner_request(OwnerDetails::default(), &request);

        assert_eq!(result.first_name.as_deref(), Some(long_name.as_str()));
        assert_eq!(result.telephone.as_deref(), Some(long_phone.as_str()));
    }

    #[test]
    fn test_map_is_idempotent() {
        let request = OwnerRequest::new("Jane", "Smith", "Addr2", "City2", "2222222222");
        let once = map_owner_request(OwnerDetails::default(), &request);
        let twice = map_owner_request(once.clone(), &request);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_map_onto_persisted_owner_keeps_id_and_pets() {
        let owner = Owner::from_storage(
            7,
            OwnerDetails {
                first_name: Some("Old".to_string()),
                ..Default::default()
            },
            Vec::new(),
        );
        let request = OwnerRequest::new("New", "Name", "New Address", "New City", "1112223333");

        let updated = map_owner_request(owner, &request);
        assert_eq!(updated.id(), 7);
        assert_eq!(updated.details.first_name.as_deref(), Some("New"));
        assert_eq!(updated.details.city.as_deref(), Some("New City"));
    }
}
