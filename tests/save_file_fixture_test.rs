//! Fixture-driven tests of the save_file workflow
//!
//! None of these trigger an effect: the log sink and HTTP client are mocks
//! whose counters must stay at zero throughout.

use effectio::driver::{assert_completed, Fixture, HarnessError};
use effectio::effects::{Effect, Resolution};
use effectio::env::{MockHttpClient, MockLogSink};
use effectio::workflow::{FileSaver, SaveError};
use std::sync::Arc;
use url::Url;

// ============================================================================
// Test Fixtures
// ============================================================================

struct Setup {
    saver: FileSaver,
    sink: MockLogSink,
    client: MockHttpClient,
}

fn setup() -> Setup {
    let sink = MockLogSink::new();
    let client = MockHttpClient::new();
    let saver = FileSaver::new(
        Arc::new(sink.clone()),
        Arc::new(client.clone()),
        Url::parse("https://google.com").unwrap(),
    );
    Setup {
        saver,
        sink,
        client,
    }
}

fn payload() -> Vec<u8> {
    vec![0u8]
}

fn happy_path(saver: &FileSaver) -> Fixture {
    Fixture::new()
        .expect(Effect::write("Saving file moo"))
        .expect(Effect::request(saver.upload_request(payload())))
        .send(Resolution::response(200))
        .expect(Effect::write("Successfully saved file moo"))
}

// ============================================================================
// Happy and failure paths
// ============================================================================

#[test]
fn test_happy_path_fixture_passes() {
    let Setup {
        saver,
        sink,
        client,
    } = setup();

    let result = happy_path(&saver).run(saver.save_file("moo", payload()));

    assert_completed(result);
    assert_eq!(sink.write_count(), 0);
    assert_eq!(client.send_count(), 0);
}

#[test]
fn test_failure_path_logs_then_fails() {
    let Setup {
        saver,
        sink,
        client,
    } = setup();

    let result = Fixture::new()
        .expect(Effect::write("Saving file moo"))
        .expect(Effect::request(saver.upload_request(payload())))
        .send(Resolution::response(500))
        .expect(Effect::write("Failed to save file moo"))
        .expect_failure()
        .run(saver.save_file("moo", payload()));

    assert_eq!(
        result,
        Ok(Err(SaveError::Rejected {
            path: "moo".to_string(),
            status: 500,
        }))
    );
    assert_eq!(sink.write_count(), 0);
    assert_eq!(client.send_count(), 0);
}

#[test]
fn test_failure_without_expecting_it_is_reported() {
    let Setup { saver, .. } = setup();

    let error = Fixture::new()
        .expect(Effect::write("Saving file moo"))
        .send(Resolution::Written)
        .skip()
        .send(Resolution::response(404))
        .expect(Effect::write("Failed to save file moo"))
        .run(saver.save_file("moo", payload()))
        .unwrap_err();

    assert_eq!(
        error,
        HarnessError::UnexpectedFailure {
            index: 3,
            error: "Failed to save file moo (status 404)".to_string(),
        }
    );
}

#[test]
fn test_expected_failure_that_succeeds_is_reported() {
    let Setup { saver, .. } = setup();

    let error = happy_path(&saver)
        .expect_failure()
        .run(saver.save_file("moo", payload()))
        .unwrap_err();

    assert_eq!(error, HarnessError::UnexpectedSuccess { index: 3 });
}

// ============================================================================
// Harness diagnostics
// ============================================================================

#[test]
fn test_each_mutated_message_names_its_index() {
    let Setup { saver, .. } = setup();
    let messages = ["Saving file moo", "Successfully saved file moo"];

    for (mutated, index) in [(0usize, 0usize), (1, 2)] {
        let mut expected: Vec<String> = messages.iter().map(|m| m.to_string()).collect();
        expected[mutated] = format!("{} (mutated)", expected[mutated]);

        let error = Fixture::new()
            .expect(Effect::write(expected[0].clone()))
            .expect(Effect::request(saver.upload_request(payload())))
            .send(Resolution::response(200))
            .expect(Effect::write(expected[1].clone()))
            .run(saver.save_file("moo", payload()))
            .unwrap_err();

        match error {
            HarnessError::EffectMismatch {
                index: reported,
                actual,
                expected: wanted,
            } => {
                assert_eq!(reported, index);
                assert_eq!(actual, format!("write {:?}", messages[mutated]));
                assert!(wanted.contains("(mutated)"));
            }
            other => panic!("expected a mismatch, got {other:?}"),
        }
    }
}

#[test]
fn test_mutated_request_body_is_a_mismatch() {
    let Setup { saver, .. } = setup();

    let error = Fixture::new()
        .expect(Effect::write("Saving file moo"))
        .expect(Effect::request(saver.upload_request(vec![1u8])))
        .run(saver.save_file("moo", payload()))
        .unwrap_err();

    assert!(matches!(error, HarnessError::EffectMismatch { index: 1, .. }));
    assert!(error.to_string().contains("effect 1 mismatch"));
}

#[test]
fn test_under_specified_fixture_fails() {
    let Setup { saver, .. } = setup();

    let error = Fixture::new()
        .expect(Effect::write("Saving file moo"))
        .expect(Effect::request(saver.upload_request(payload())))
        .send(Resolution::response(200))
        .run(saver.save_file("moo", payload()))
        .unwrap_err();

    assert_eq!(
        error,
        HarnessError::UnexpectedEffect {
            index: 2,
            actual: "write \"Successfully saved file moo\"".to_string(),
        }
    );
}

#[test]
fn test_over_specified_fixture_fails() {
    let Setup { saver, .. } = setup();

    let error = happy_path(&saver)
        .expect(Effect::write("Goodbye"))
        .run(saver.save_file("moo", payload()))
        .unwrap_err();

    assert_eq!(
        error,
        HarnessError::UnconsumedFixture {
            index: 3,
            remaining: 1
        }
    );
}

#[test]
fn test_null_expectations_only_steer_control_flow() {
    let Setup { saver, .. } = setup();

    // Mirrors a fixture that checks nothing and only feeds the response
    let result = Fixture::new()
        .skip()
        .skip()
        .send(Resolution::response(200))
        .skip()
        .run(saver.save_file("moo", payload()));

    assert_eq!(result, Ok(Ok(())));
}
