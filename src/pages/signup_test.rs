use super::*;

fn filled() -> SignupRequest {
    SignupRequest {
        email: " a@b.com ".to_owned(),
        password: "pw".to_owned(),
        fullname: " Asha Rao ".to_owned(),
        address: "12 Lake Rd".to_owned(),
        pincode: " 560001".to_owned(),
    }
}

#[test]
fn validate_signup_input_trims_text_fields() {
    let cleaned = validate_signup_input(&filled()).unwrap();
    assert_eq!(cleaned.email, "a@b.com");
    assert_eq!(cleaned.fullname, "Asha Rao");
    assert_eq!(cleaned.pincode, "560001");
    assert_eq!(cleaned.password, "pw");
}

#[test]
fn validate_signup_input_requires_every_field() {
    let mut input = filled();
    input.address = "   ".to_owned();
    assert_eq!(validate_signup_input(&input), Err("All fields are required."));

    assert_eq!(validate_signup_input(&SignupRequest::default()), Err("All fields are required."));
}
