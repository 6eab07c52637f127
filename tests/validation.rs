//! End-to-end validation scenario: chaining field checks over a request
//! record and dispatching on the combined outcome.

use rstest::rstest;
use two_track::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Request {
    name: String,
    email: String,
}

fn request(name: &str, email: &str) -> Request {
    Request {
        name: name.to_owned(),
        email: email.to_owned(),
    }
}

fn validate(input: Request) -> Outcome<Request, String> {
    if input.name.is_empty() {
        return Outcome::fail("Name must not be blank".to_owned());
    }
    if input.email.is_empty() {
        return Outcome::fail("Email must not be blank".to_owned());
    }
    Outcome::succeed(input)
}

#[rstest]
#[case::blank_name("", "x", Some("Name must not be blank"))]
#[case::blank_email("Steffen", "", Some("Email must not be blank"))]
#[case::valid("Steffen", "mail@support.com", None)]
fn validate_reports_the_first_failing_field(
    #[case] name: &str,
    #[case] email: &str,
    #[case] expected_failure: Option<&str>,
) {
    let input = request(name, email);
    let outcome = validate(input.clone());
    match expected_failure {
        Some(reason) => {
            assert_eq!(outcome, Outcome::fail(reason.to_owned()));
        }
        None => assert_eq!(outcome, Outcome::succeed(input)),
    }
}

#[test]
fn a_valid_request_survives_extraction() {
    let input = request("Steffen", "mail@support.com");
    assert_eq!(validate(input.clone()).succeeded_with(), input);
}

#[test]
fn match_with_sees_the_validated_value() {
    let input = request("Steffen", "mail@support.com");
    let mut matched = None;
    validate(input.clone()).match_with(
        |value, _messages| matched = Some(value),
        |_messages| panic!("wrong match arm"),
    );
    assert_eq!(matched, Some(input));
}

#[test]
fn match_with_sees_the_failure_reason() {
    let mut matched = None;
    validate(request("Steffen", "")).match_with(
        |_value, _messages| panic!("wrong match arm"),
        |messages| matched = messages.into_iter().next(),
    );
    assert_eq!(matched, Some("Email must not be blank".to_owned()));
}

#[test]
fn either_extracts_a_plain_value_from_either_arm() {
    let input = request("Steffen", "mail@support.com");
    let value = validate(input.clone()).either(|v, _| v, |_| panic!("wrong match arm"));
    assert_eq!(value, input);

    let reason = validate(request("Steffen", "")).either(
        |_, _| panic!("wrong match arm"),
        |messages| messages.into_iter().next(),
    );
    assert_eq!(reason, Some("Email must not be blank".to_owned()));
}

#[test]
fn downstream_steps_chain_with_bind() {
    let normalised = validate(request("Steffen", "MAIL@SUPPORT.COM")).bind(|mut req| {
        if req.email.chars().any(char::is_uppercase) {
            req.email = req.email.to_lowercase();
            Outcome::succeed_with(req, "email lowercased".to_owned())
        } else {
            Outcome::succeed(req)
        }
    });
    assert_eq!(
        normalised,
        Outcome::succeed_all(
            request("Steffen", "mail@support.com"),
            vec!["email lowercased".to_owned()],
        ),
    );
}
