use crewhub_test_utils::prelude::*;


fn valid_form() -> crate::model::applicant::VolunteerFormDto {
    crate::model::applicant::VolunteerFormDto {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@example.org".to_string(),
        phone: "+44 20 7946 0000".to_string(),
        city: "London".to_string(),
        availability: "Saturday mornings".to_string(),
        skills: Some("Logistics".to_string()),
        motivation: "I enjoy helping at community events.".to_string(),
        agreed_to_terms: true,
    }
}
