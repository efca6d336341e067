mod builder;

use crate::{LookupQuery, Platform};

#[test]
fn given_integer_code_when_converted_then_query_holds_decimal_text() {
    // GIVEN / WHEN
    let query = LookupQuery::from(-50_i64);

    // THEN
    assert_eq!(query.code, "-50");
    assert_eq!(query.platform, None);
}

#[test]
fn given_query_when_platform_attached_then_keeps_code() {
    let query = LookupQuery::new("1009").with_platform(Some(Platform::WatchOs));

    assert_eq!(query.code, "1009");
    assert_eq!(query.platform, Some(Platform::WatchOs));
}
