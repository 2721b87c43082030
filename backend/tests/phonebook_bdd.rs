//! Behavioural walkthrough of the phonebook HTTP API over the in-memory store.

use std::cell::RefCell;
use std::sync::Arc;

use actix_web::http::Method;
use actix_web::test::{TestRequest, call_service, init_service, read_body};
use actix_web::{App, web};
use mockable::DefaultClock;
use phonebook::Trace;
use phonebook::domain::{Contact, DirectoryService};
use phonebook::inbound::http::configure;
use phonebook::inbound::http::state::HttpState;
use phonebook::outbound::memory::InMemoryContactRepository;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

struct PhonebookWorld {
    runner: actix_rt::SystemRunner,
    state: Option<web::Data<HttpState>>,
    last_status: Option<u16>,
    last_body: Option<Value>,
}

struct WorldFixture {
    world: RefCell<PhonebookWorld>,
}

impl WorldFixture {
    fn request(&self, method: Method, path: &str, payload: Option<Value>) {
        let mut world = self.world.borrow_mut();
        let state = world.state.clone().expect("phonebook initialised");
        let path = path.to_owned();
        let (status, body) = world.runner.block_on(async move {
            let app = init_service(
                App::new()
                    .app_data(state)
                    .wrap(Trace)
                    .configure(configure),
            )
            .await;
            let request = TestRequest::default().method(method).uri(&path);
            let request = match payload {
                Some(payload) => request.set_json(payload),
                None => request,
            };
            let response = call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let bytes = read_body(response).await;
            (status, serde_json::from_slice::<Value>(&bytes).ok())
        });
        world.last_status = Some(status);
        world.last_body = body;
    }

    fn status(&self) -> Option<u16> {
        self.world.borrow().last_status
    }

    fn body(&self) -> Value {
        self.world
            .borrow()
            .last_body
            .clone()
            .expect("response body")
    }
}

#[fixture]
fn world() -> WorldFixture {
    WorldFixture {
        world: RefCell::new(PhonebookWorld {
            runner: actix_rt::System::new(),
            state: None,
            last_status: None,
            last_body: None,
        }),
    }
}

#[given("a phonebook holding only Arto Hellas")]
fn a_phonebook_holding_only_arto_hellas(world: &WorldFixture) {
    let arto = Contact::try_from_parts(1, "Arto Hellas", "040-123456").expect("valid contact");
    let repo = InMemoryContactRepository::seeded([arto]).expect("unique seed");
    let service = DirectoryService::new(Arc::new(repo), Arc::new(DefaultClock));
    world.world.borrow_mut().state = Some(web::Data::new(HttpState::from_service(Arc::new(
        service,
    ))));
}

#[when("the client adds Ada Lovelace")]
fn the_client_adds_ada_lovelace(world: &WorldFixture) {
    world.request(
        Method::POST,
        "/api/persons",
        Some(json!({"name": "Ada Lovelace", "number": "39-44-5323523"})),
    );
}

#[when("the client adds Arto Hellas again with a short number")]
fn the_client_adds_arto_hellas_again(world: &WorldFixture) {
    world.request(
        Method::POST,
        "/api/persons",
        Some(json!({"name": "Arto Hellas", "number": "000"})),
    );
}

#[when("the client adds a contact with only a name")]
fn the_client_adds_a_contact_with_only_a_name(world: &WorldFixture) {
    world.request(Method::POST, "/api/persons", Some(json!({"name": "X"})));
}

#[when("the client deletes contact 1")]
fn the_client_deletes_contact_1(world: &WorldFixture) {
    world.request(Method::DELETE, "/api/persons/1", None);
}

#[when("the client fetches contact 1")]
fn the_client_fetches_contact_1(world: &WorldFixture) {
    world.request(Method::GET, "/api/persons/1", None);
}

#[then("the response is ok")]
fn the_response_is_ok(world: &WorldFixture) {
    assert_eq!(world.status(), Some(200));
}

#[then("the response is no content")]
fn the_response_is_no_content(world: &WorldFixture) {
    assert_eq!(world.status(), Some(204));
}

#[then("the response is not found")]
fn the_response_is_not_found(world: &WorldFixture) {
    assert_eq!(world.status(), Some(404));
    assert_eq!(world.body()["code"], "not_found");
}

#[then("the response contains the new contact with an id")]
fn the_response_contains_the_new_contact(world: &WorldFixture) {
    let body = world.body();
    assert_eq!(body["name"], "Ada Lovelace");
    assert_eq!(body["number"], "39-44-5323523");
    assert_eq!(body["id"].as_u64(), Some(2));
}

#[then("the phonebook lists two contacts")]
fn the_phonebook_lists_two_contacts(world: &WorldFixture) {
    world.request(Method::GET, "/api/persons", None);
    let body = world.body();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[then("the response is a bad request flagging a duplicate name")]
fn the_response_flags_a_duplicate_name(world: &WorldFixture) {
    assert_eq!(world.status(), Some(400));
    let body = world.body();
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "duplicate_name");
}

#[then("the response is a bad request flagging a missing field")]
fn the_response_flags_a_missing_field(world: &WorldFixture) {
    assert_eq!(world.status(), Some(400));
    let body = world.body();
    assert_eq!(body["details"]["code"], "missing_field");
    assert_eq!(body["details"]["field"], "number");
}

#[scenario(path = "tests/features/phonebook.feature")]
fn phonebook_walkthrough(world: WorldFixture) {
    let _ = world;
}
