use mockito::Mock;

use crate::{fixtures::OVERPASS_PATH, TestContext};

impl TestContext {
    pub fn overpass<'a>(&'a mut self) -> OverpassFixtures<'a> {
        OverpassFixtures { setup: self }
    }

    /// Full interpreter URL on the mock server
    pub fn overpass_url(&self) -> String {
        format!("{}{}", self.server.url(), OVERPASS_PATH)
    }
}

pub struct OverpassFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> OverpassFixtures<'a> {
    /// Create a mock POST endpoint at the interpreter path returning `body` as JSON.
    ///
    /// The mock verifies it was called exactly `expected_requests` times.
    pub fn create_interpreter_endpoint(
        &mut self,
        body: &serde_json::Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", OVERPASS_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
