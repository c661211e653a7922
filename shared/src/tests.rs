#[cfg(test)]
mod tests {
    use crate::models::{ElectionForm, ElectionRecord};

    #[test]
    fn test_new_record_copies_form() {
        let form = ElectionForm::new("Jawa Barat", 100, 200);
        let record = ElectionRecord::new(&form);

        assert!(!record.id.is_nil());
        assert_eq!(record.province_name, "Jawa Barat");
        assert_eq!(record.candidate_one_votes, 100);
        assert_eq!(record.candidate_two_votes, 200);
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut record = ElectionRecord::new(&ElectionForm::new("Aceh", 1, 2));
        let (id, created_at) = (record.id, record.created_at);

        record.apply(&ElectionForm::new("Papua", 5, 9));

        assert_eq!(record.id, id);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.province_name, "Papua");
        assert_eq!((record.candidate_one_votes, record.candidate_two_votes), (5, 9));
    }

    #[test]
    fn test_vote_counts_are_not_range_checked() {
        let record = ElectionRecord::new(&ElectionForm::new("Bali", -3, 0));
        assert_eq!((record.candidate_one_votes, record.candidate_two_votes), (-3, 0));

        let record = ElectionRecord::new(&ElectionForm::new("Bali", i64::MAX, i64::MIN));
        assert_eq!((record.candidate_one_votes, record.candidate_two_votes), (i64::MAX, i64::MIN));
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = ElectionRecord::new(&ElectionForm::new("Riau", 7, 8));
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["provinceName"], "Riau");
        assert_eq!(json["candidateOneVotes"], 7);
        assert_eq!(json["candidateTwoVotes"], 8);
        assert_eq!(json["id"], record.id.to_string());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn test_form_deserializes_camel_case() {
        let form: ElectionForm = serde_json::from_str(
            r#"{"provinceName":"Maluku","candidateOneVotes":4,"candidateTwoVotes":6}"#
        ).unwrap();
        assert_eq!(form, ElectionForm::new("Maluku", 4, 6));
    }
}
