use std::path::PathBuf;

use taskmaster::error::{exit_codes, Error};

#[test]
fn exit_codes_map_correctly() {
    let validation = Error::Validation("title must not be empty".to_string());
    assert_eq!(validation.exit_code(), exit_codes::USER_ERROR);

    let argument = Error::InvalidArgument("bad".to_string());
    assert_eq!(argument.exit_code(), exit_codes::USER_ERROR);

    let missing = Error::TaskNotFound(42);
    assert_eq!(missing.exit_code(), exit_codes::NOT_FOUND);

    let lock = Error::LockFailed(PathBuf::from("tasks.json.lock"));
    assert_eq!(lock.exit_code(), exit_codes::OPERATION_FAILED);

    let op = Error::OperationFailed("boom".to_string());
    assert_eq!(op.exit_code(), exit_codes::OPERATION_FAILED);
}

#[test]
fn not_found_details_name_the_id() {
    let err = Error::TaskNotFound(7);
    let details = err.details().expect("details");
    assert_eq!(details["id"].as_u64(), Some(7));

    let plain = Error::Validation("title must not be empty".to_string());
    assert!(plain.details().is_none());
}
