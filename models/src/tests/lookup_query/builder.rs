use crate::{LookupQueryBuilder, ModelError, Platform};

/// **VALUE**: Verifies that builder validation rejects a missing code.
///
/// **WHY THIS MATTERS**: A lookup without a code would hit the service with
/// `search=` and return an arbitrary page of records.
///
/// **BUG THIS CATCHES**: Would catch if the required-field check is removed
/// and an empty search is sent.
#[test]
fn given_missing_code_when_building_then_returns_validation_error() {
    // GIVEN: Builder without a code
    let builder = LookupQueryBuilder::default().with_platform(Platform::Ios);

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Code is required");
        }
        Ok(query) => panic!("Expected validation error, got {query:?}"),
    }
}

/// **VALUE**: Verifies that whitespace-only codes are rejected.
///
/// **BUG THIS CATCHES**: Would catch a check on `is_empty()` before trimming,
/// which lets a quoted `"  "` argument through.
#[test]
fn given_blank_code_when_building_then_returns_validation_error() {
    // GIVEN: Builder with a whitespace code
    let builder = LookupQueryBuilder::default().with_code("   ");

    // WHEN
    let result = builder.build();

    // THEN
    match result {
        Err(ModelError::Validation { message, .. }) => {
            assert_eq!(message, "Code cannot be empty");
        }
        Ok(query) => panic!("Expected validation error, got {query:?}"),
    }
}

/// **VALUE**: Verifies codes are trimmed and the platform filter is kept.
///
/// **WHY THIS MATTERS**: Quoted arguments from a debugger console often
/// carry stray spaces; `search= -50` would not match anything.
#[test]
fn given_padded_code_and_platform_when_building_then_trims_and_keeps_platform() {
    // GIVEN
    let builder = LookupQueryBuilder::default()
        .with_code(" -50 ")
        .with_platform(Platform::MacOs);

    // WHEN
    let query = builder.build().expect("valid query");

    // THEN: Code is trimmed, platform kept
    assert_eq!(query.code, "-50");
    assert_eq!(query.platform, Some(Platform::MacOs));
}

#[test]
fn given_no_platform_when_building_then_query_is_unfiltered() {
    let query = LookupQueryBuilder::default()
        .with_code("errSecItemNotFound")
        .build()
        .expect("valid query");

    assert_eq!(query.code, "errSecItemNotFound");
    assert_eq!(query.platform, None);
}
