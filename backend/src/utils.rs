use tracing::debug;
use uuid::Uuid;

/// Ids are opaque to clients. One that is not a UUID cannot address any
/// record, so it is handled exactly like an id that is not in the store.
pub fn parse_record_id(id: &str) -> Option<Uuid> {
    match Uuid::parse_str(id) {
        Ok(id) => Some(id),
        Err(_) => {
            debug!("Record id {:?} is not a UUID, treating as not found", id);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_record_id(&id.to_string()), Some(id));
        assert_eq!(parse_record_id("65f1c0ffee0000000000abcd"), None);
        assert_eq!(parse_record_id(""), None);
    }
}
