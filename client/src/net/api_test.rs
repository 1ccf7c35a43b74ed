use super::*;

#[test]
fn bearer_header_has_scheme_prefix() {
    assert_eq!(bearer("abc123"), "Bearer abc123");
}

#[test]
fn course_endpoint_embeds_id() {
    assert_eq!(course_endpoint("c-1"), "/api/courses/c-1");
}

#[test]
fn module_endpoint_embeds_id() {
    assert_eq!(module_endpoint("m-1"), "/api/modules/m-1");
}
