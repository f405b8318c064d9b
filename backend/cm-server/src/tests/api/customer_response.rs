use crate::CustomerResponse;

use cm_core::{Customer, NewCustomer};

use chrono::NaiveDate;

fn sample_customer() -> Customer {
    Customer::new(NewCustomer {
        full_name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        github_username: String::from("validuser"),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
    })
}

#[test]
fn given_customer_when_converted_then_fields_are_copied_and_date_is_iso() {
    // Given
    let customer = sample_customer();
    let id = customer.id;

    // When
    let response = CustomerResponse::from(customer);

    // Then
    assert_eq!(response.id, id.to_string());
    assert_eq!(response.full_name, "Jane Doe");
    assert_eq!(response.email, "jane@example.com");
    assert_eq!(response.github_username, "validuser");
    assert_eq!(response.date_of_birth, "1990-01-01");
}

#[test]
fn given_response_when_serialized_then_uses_camel_case_keys_only() {
    // Given
    let response = CustomerResponse::from(sample_customer());

    // When
    let json = serde_json::to_value(&response).unwrap();

    // Then
    let object = json.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["dateOfBirth", "email", "fullName", "gitHubUsername", "id"]
    );
}
