use crate::UserForm;

fn form(first: &str, last: &str, email: &str) -> UserForm {
    UserForm {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email: Some(email.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_blank_required_field_is_missing() {
    assert!(form("  ", "Doe", "j@example.com").missing_required());
    assert!(UserForm::default().missing_required());
    assert!(!form("John", "Doe", "j@example.com").missing_required());
}

#[test]
fn test_gender_radio_values_are_coerced() {
    let mut male = form("John", "Doe", "j@example.com");
    male.gender = Some("1".to_string());
    let mut female = male.clone();
    female.gender = Some("0".to_string());

    assert!(male.to_input().gender.as_bool());
    assert!(!female.to_input().gender.as_bool());
    assert!(!UserForm::default().to_input().gender.as_bool());
}

#[test]
fn test_patch_clears_blank_address_and_keeps_missing_gender() {
    let patch = form("John", "Doe", "j@example.com").to_patch();

    assert_eq!(patch.address.as_deref(), Some(""));
    assert!(patch.gender.is_none());
}

#[test]
fn test_id_is_parsed_from_hidden_field() {
    let mut with_id = form("John", "Doe", "j@example.com");
    with_id.id = Some("12".to_string());

    assert_eq!(with_id.id(), Some(12));
    assert_eq!(UserForm::default().id(), None);
}
