//! Behavioural tests for the course HTTP API against a live server.
#[path = "support/course_server.rs"]
mod course_server;

use actix_web::http::Method;
use course_server::{WorldFixture, send};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

#[fixture]
fn world() -> WorldFixture {
    course_server::world()
}

/// Step placeholders capture the surrounding quotes from the feature text.
fn unquote(value: &str) -> &str {
    value.trim().trim_matches('"')
}

fn first_course_id(world: &WorldFixture) -> i64 {
    let ctx = world.world();
    let ctx = ctx.borrow();
    *ctx.created_ids.first().expect("a course was created")
}

fn last_body(world: &WorldFixture) -> Value {
    let ctx = world.world();
    let ctx = ctx.borrow();
    ctx.last_body.clone().expect("response body")
}

fn listed_courses(world: &WorldFixture) -> Vec<Value> {
    last_body(world)
        .as_array()
        .cloned()
        .expect("list response is an array")
}

fn create_course(world: &WorldFixture, name: &str) {
    let shared = world.world();
    send(
        &shared,
        Method::POST,
        "/api/v1/courses/",
        Some(json!({ "name": name })),
    );
    let mut ctx = shared.borrow_mut();
    if ctx.last_status == Some(201) {
        let id = ctx
            .last_body
            .as_ref()
            .and_then(|body| body.get("id"))
            .and_then(Value::as_i64)
            .expect("created course id");
        ctx.created_ids.push(id);
    }
}

#[given("a running course server")]
fn a_running_course_server(world: &WorldFixture) {
    let _ = world;
}

#[given("a course named {name} exists")]
fn a_course_named_exists(world: &WorldFixture, name: String) {
    create_course(world, unquote(&name));
    assert_eq!(world.world().borrow().last_status, Some(201));
}

#[when("the client creates a course named {name}")]
fn the_client_creates_a_course_named(world: &WorldFixture, name: String) {
    create_course(world, unquote(&name));
}

#[when("the client creates a course with a blank name")]
fn the_client_creates_a_course_with_a_blank_name(world: &WorldFixture) {
    create_course(world, "   ");
}

#[when("the client lists courses")]
fn the_client_lists_courses(world: &WorldFixture) {
    send(&world.world(), Method::GET, "/api/v1/courses/", None);
}

#[when("the client lists courses filtered by the first course id")]
fn the_client_lists_courses_filtered_by_the_first_course_id(world: &WorldFixture) {
    let id = first_course_id(world);
    send(
        &world.world(),
        Method::GET,
        &format!("/api/v1/courses/?id={id}"),
        None,
    );
}

#[when("the client lists courses filtered by name {name}")]
fn the_client_lists_courses_filtered_by_name(world: &WorldFixture, name: String) {
    let encoded = unquote(&name).replace(' ', "%20");
    send(
        &world.world(),
        Method::GET,
        &format!("/api/v1/courses/?name={encoded}"),
        None,
    );
}

#[when("the client retrieves the first course")]
fn the_client_retrieves_the_first_course(world: &WorldFixture) {
    let id = first_course_id(world);
    send(
        &world.world(),
        Method::GET,
        &format!("/api/v1/courses/{id}/"),
        None,
    );
}

#[when("the client retrieves course {id}")]
fn the_client_retrieves_course(world: &WorldFixture, id: i64) {
    send(
        &world.world(),
        Method::GET,
        &format!("/api/v1/courses/{id}/"),
        None,
    );
}

#[when("the client renames the first course to {name}")]
fn the_client_renames_the_first_course_to(world: &WorldFixture, name: String) {
    let id = first_course_id(world);
    send(
        &world.world(),
        Method::PUT,
        &format!("/api/v1/courses/{id}/"),
        Some(json!({ "name": unquote(&name) })),
    );
}

#[when("the client renames course {id} to {name}")]
fn the_client_renames_course_to(world: &WorldFixture, id: i64, name: String) {
    send(
        &world.world(),
        Method::PUT,
        &format!("/api/v1/courses/{id}/"),
        Some(json!({ "name": unquote(&name) })),
    );
}

#[when("the client calls {path}")]
fn the_client_calls(world: &WorldFixture, path: String) {
    send(&world.world(), Method::GET, unquote(&path), None);
}

#[when("the client deletes the first course")]
fn the_client_deletes_the_first_course(world: &WorldFixture) {
    let id = first_course_id(world);
    send(
        &world.world(),
        Method::DELETE,
        &format!("/api/v1/courses/{id}/"),
        None,
    );
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(world.world().borrow().last_status, Some(status));
}

#[then("the response has a server-assigned id")]
fn the_response_has_a_server_assigned_id(world: &WorldFixture) {
    let body = last_body(world);
    assert!(body.get("id").and_then(Value::as_i64).is_some_and(|id| id > 0));
}

#[then("the list contains a course named {name}")]
fn the_list_contains_a_course_named(world: &WorldFixture, name: String) {
    let name = unquote(&name);
    assert!(
        listed_courses(world)
            .iter()
            .any(|course| course.get("name").and_then(Value::as_str) == Some(name)),
        "no course named {name}"
    );
}

#[then("the course is the first course named {name}")]
fn the_course_is_the_first_course_named(world: &WorldFixture, name: String) {
    let id = first_course_id(world);
    assert_eq!(last_body(world), json!({ "id": id, "name": unquote(&name) }));
}

#[then("the list holds only the first course")]
fn the_list_holds_only_the_first_course(world: &WorldFixture) {
    let id = first_course_id(world);
    let courses = listed_courses(world);
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].get("id").and_then(Value::as_i64), Some(id));
}

#[then("the list holds {count} course named {name}")]
fn the_list_holds_courses_named(world: &WorldFixture, count: usize, name: String) {
    let name = unquote(&name);
    let courses = listed_courses(world);
    assert_eq!(courses.len(), count);
    assert!(
        courses
            .iter()
            .all(|course| course.get("name").and_then(Value::as_str) == Some(name))
    );
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &WorldFixture, code: String) {
    let body = last_body(world);
    assert_eq!(body.get("code").and_then(Value::as_str), Some(unquote(&code)));
}

#[then("the error echoes the trace id header")]
fn the_error_echoes_the_trace_id_header(world: &WorldFixture) {
    let header = world.world().borrow().last_trace_id.clone();
    let body = last_body(world);
    assert!(header.is_some(), "trace-id header missing");
    assert_eq!(
        body.get("traceId").and_then(Value::as_str),
        header.as_deref()
    );
}

#[then("the error details name the {field} field")]
fn the_error_details_name_the_field(world: &WorldFixture, field: String) {
    let body = last_body(world);
    assert_eq!(
        body.pointer("/details/field").and_then(Value::as_str),
        Some(unquote(&field))
    );
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Creating a course makes it visible in the list"
)]
fn creating_a_course_makes_it_visible(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Renaming a course keeps its identity"
)]
fn renaming_a_course_keeps_its_identity(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Renaming a missing course is not found even with a blank name"
)]
fn renaming_a_missing_course_is_not_found(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Deleted courses are gone"
)]
fn deleted_courses_are_gone(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Filtering by id returns exactly one course"
)]
fn filtering_by_id_returns_exactly_one_course(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Filtering by name matches exact names only"
)]
fn filtering_by_name_matches_exact_names(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Retrieving an unknown course is not found"
)]
fn retrieving_an_unknown_course_is_not_found(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Blank names are rejected"
)]
fn blank_names_are_rejected(world: WorldFixture) {
    let _ = world;
}

#[scenario(
    path = "tests/features/courses.feature",
    name = "Health checks report a ready and live server"
)]
fn health_checks_report_a_ready_and_live_server(world: WorldFixture) {
    let _ = world;
}
